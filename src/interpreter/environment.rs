use std::collections::HashMap;

/// Variable bindings of one evaluation session.
///
/// Maps each variable name to the last value assigned to it. An environment
/// starts empty, grows only through evaluated assignments and is emptied
/// only by [`Environment::clear`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    variables: HashMap<String, f64>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value bound to `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.variables.get(name).copied()
    }

    /// Binds `value` to `name`, replacing any previous binding.
    pub fn assign(&mut self, name: &str, value: f64) {
        if let Some(slot) = self.variables.get_mut(name) {
            *slot = value;
        } else {
            self.variables.insert(name.to_string(), value);
        }
    }

    /// Removes every binding.
    pub fn clear(&mut self) {
        self.variables.clear();
    }

    /// Returns the number of bound variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns `true` if no variable is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Returns all bindings sorted by name.
    ///
    /// ```
    /// use prattle::interpreter::environment::Environment;
    ///
    /// let mut env = Environment::new();
    /// env.assign("b", 2.0);
    /// env.assign("a", 1.0);
    ///
    /// assert_eq!(env.bindings(), vec![("a", 1.0), ("b", 2.0)]);
    /// ```
    #[must_use]
    pub fn bindings(&self) -> Vec<(&str, f64)> {
        let mut bindings = self.variables
                               .iter()
                               .map(|(name, value)| (name.as_str(), *value))
                               .collect::<Vec<_>>();
        bindings.sort_by(|a, b| a.0.cmp(b.0));
        bindings
    }
}
