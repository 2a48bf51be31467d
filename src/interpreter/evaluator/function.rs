use crate::{
    ast::Expr,
    error::EvalError,
    interpreter::evaluator::{
        core::{EvalResult, Evaluator},
        utils::ensure_finite,
    },
};

/// Type alias for builtin function handlers.
///
/// Every builtin takes one evaluated argument and returns a raw `f64`; the
/// caller decides whether the result is in the function's domain.
pub type BuiltinFn = fn(f64) -> f64;

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry maps a string name to a function pointer. The macro produces
/// `BUILTIN_TABLE` (static table for lookup) and `BUILTIN_FUNCTIONS` (public
/// list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => $func:expr
        ),* $(,)?
    ) => {
        static BUILTIN_TABLE: &[(&str, BuiltinFn)] = &[
            $(
                ($name, $func),
            )*
        ];
        /// Names of all builtin functions, in table order.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "sqrt" => f64::sqrt,
    "log"  => f64::ln,
    "sin"  => f64::sin,
    "cos"  => f64::cos,
    "exp"  => f64::exp,
}

/// Looks up a builtin function by name.
///
/// `log` is the natural logarithm; `sin` and `cos` take radians.
///
/// # Example
/// ```
/// use prattle::interpreter::evaluator::function::builtin;
///
/// let sqrt = builtin("sqrt").unwrap();
/// assert_eq!(sqrt(9.0), 3.0);
/// assert!(builtin("tan").is_none());
/// ```
#[must_use]
pub fn builtin(name: &str) -> Option<BuiltinFn> {
    BUILTIN_TABLE.iter()
                 .find(|(builtin, _)| *builtin == name)
                 .map(|(_, func)| *func)
}

impl Evaluator<'_> {
    /// Evaluates a function call.
    ///
    /// The name is resolved first, so an unknown function fails before its
    /// argument is evaluated and cannot commit an assignment nested inside
    /// the argument.
    ///
    /// # Errors
    /// - `UnsupportedFunction` if `name` is not a builtin.
    /// - `MathDomain` if the result is not a finite number, e.g. `sqrt(-1)`
    ///   or `log(0)`.
    pub(crate) fn eval_function_call(&mut self, name: &str, argument: &Expr) -> EvalResult<f64> {
        let func = builtin(name).ok_or_else(|| {
                                    EvalError::UnsupportedFunction { name: name.to_string() }
                                })?;

        let argument = self.eval(argument)?;

        ensure_finite(func(argument), || format!("{name}({argument})"))
    }
}
