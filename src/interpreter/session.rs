use tracing::{debug, trace};

use crate::{
    error::Failure,
    interpreter::{
        environment::Environment,
        evaluator::Evaluator,
        lexer::lex,
        parser::{DEFAULT_MAX_DEPTH, Parser},
    },
};

/// Tunable limits of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Deepest nesting accepted by both the parser and the evaluator.
    pub max_depth: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { max_depth: DEFAULT_MAX_DEPTH }
    }
}

/// A persistent evaluation session.
///
/// Each submission is lexed, parsed and evaluated from scratch; only the
/// variable bindings carry over from one submission to the next. Both
/// [`Session::submit`] and [`Session::reset`] take `&mut self`, so a session
/// runs at most one evaluation at a time. Callers sharing a session between
/// threads wrap it in a `Mutex`.
///
/// ```
/// use prattle::interpreter::session::Session;
///
/// let mut session = Session::new();
///
/// assert_eq!(session.submit("x = 5"), Ok(Some(5.0)));
/// assert_eq!(session.submit("x + 1"), Ok(Some(6.0)));
/// assert_eq!(session.submit("   "), Ok(None));
///
/// session.reset();
/// assert!(session.submit("x + 1").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Session {
    env:    Environment,
    config: SessionConfig,
}

impl Session {
    /// Creates a session with no bindings and default limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session with no bindings and the given limits.
    #[must_use]
    pub fn with_config(config: SessionConfig) -> Self {
        Self { env: Environment::new(),
               config }
    }

    /// Lexes, parses and evaluates `source` against this session.
    ///
    /// Returns `Ok(None)` when `source` contains no tokens.
    ///
    /// # Errors
    /// Returns a [`Failure`] naming the stage that failed. Lex and parse
    /// failures leave the bindings untouched; an assignment whose value
    /// fails to evaluate binds nothing.
    pub fn submit(&mut self, source: &str) -> Result<Option<f64>, Failure> {
        trace!(source, "submitting expression");

        let tokens = lex(source)?;
        let Some(expr) = Parser::new(tokens.iter()).with_max_depth(self.config.max_depth)
                                                   .parse()?
        else {
            return Ok(None);
        };

        let value = Evaluator::new(&mut self.env).with_max_depth(self.config.max_depth)
                                                 .eval(&expr)?;
        Ok(Some(value))
    }

    /// Discards every variable binding.
    pub fn reset(&mut self) {
        debug!(discarded = self.env.len(), "session reset");
        self.env.clear();
    }

    /// Read access to the bindings.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.env
    }

    /// The limits this session runs with.
    #[must_use]
    pub const fn config(&self) -> SessionConfig {
        self.config
    }
}

/// Evaluates `source` in `session`.
///
/// # Errors
/// See [`Session::submit`].
pub fn submit(source: &str, session: &mut Session) -> Result<Option<f64>, Failure> {
    session.submit(source)
}

/// Discards all bindings of `session`.
pub fn reset_session(session: &mut Session) {
    session.reset();
}
