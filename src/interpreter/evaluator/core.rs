use tracing::debug;

use crate::{
    ast::Expr,
    error::EvalError,
    interpreter::{environment::Environment, parser::DEFAULT_MAX_DEPTH},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Walks a syntax tree and computes its value.
///
/// An `Evaluator` borrows the [`Environment`] it reads variables from and
/// writes assignments to. The only mutation evaluation performs is the store
/// of a fully evaluated assignment; everything else is a pure function of
/// the tree and the environment.
///
/// ## Usage
///
/// ```
/// use prattle::{
///     ast::{BinaryOperator, Expr},
///     interpreter::{environment::Environment, evaluator::Evaluator},
/// };
///
/// let mut env = Environment::new();
/// let expr = Expr::assignment("x",
///                             Expr::binary(BinaryOperator::Mul,
///                                          Expr::Number(6.0),
///                                          Expr::Number(7.0)));
///
/// assert_eq!(Evaluator::new(&mut env).eval(&expr), Ok(42.0));
/// assert_eq!(env.get("x"), Some(42.0));
/// ```
pub struct Evaluator<'env> {
    env:       &'env mut Environment,
    depth:     usize,
    max_depth: usize,
}

impl<'env> Evaluator<'env> {
    /// Creates an evaluator over `env` with the default nesting limit.
    #[must_use]
    pub const fn new(env: &'env mut Environment) -> Self {
        Self { env,
               depth: 0,
               max_depth: DEFAULT_MAX_DEPTH }
    }

    /// Replaces the nesting limit.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches on the expression variant; there is no other form of
    /// lookup.
    ///
    /// # Errors
    /// Returns the first [`EvalError`] raised anywhere in the tree. On error
    /// no assignment inside the failing subtree is committed.
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<f64> {
        if self.depth >= self.max_depth {
            return Err(EvalError::ExpressionTooComplex { max_depth: self.max_depth });
        }

        self.depth += 1;
        let result = self.dispatch(expr);
        self.depth -= 1;
        result
    }

    fn dispatch(&mut self, expr: &Expr) -> EvalResult<f64> {
        match expr {
            Expr::Number(value) => Ok(*value),
            Expr::Variable(name) => self.eval_variable(name),
            Expr::UnaryOp { op, operand } => self.eval_unary_op(*op, operand),
            Expr::BinaryOp { op, left, right } => self.eval_binary_op(*op, left, right),
            Expr::Assignment { name, value } => self.eval_assignment(name, value),
            Expr::FunctionCall { name, argument } => self.eval_function_call(name, argument),
        }
    }

    fn eval_variable(&self, name: &str) -> EvalResult<f64> {
        self.env
            .get(name)
            .ok_or_else(|| EvalError::UndefinedVariable { name: name.to_string() })
    }

    /// Evaluates `value` and, only once that succeeded, binds it to `name`.
    ///
    /// The assignment is itself an expression whose value is the stored
    /// value, so `y = (x = 2) + 1` binds both variables.
    fn eval_assignment(&mut self, name: &str, value: &Expr) -> EvalResult<f64> {
        let value = self.eval(value)?;
        self.env.assign(name, value);
        debug!(name, value, "bound variable");
        Ok(value)
    }
}

/// Evaluates `expr` against `env` with the default nesting limit.
///
/// # Errors
/// Returns the first [`EvalError`] raised anywhere in the tree.
///
/// # Example
/// ```
/// use prattle::{
///     ast::Expr,
///     error::EvalError,
///     interpreter::{environment::Environment, evaluator::evaluate},
/// };
///
/// let mut env = Environment::new();
///
/// assert_eq!(evaluate(&Expr::Variable("y".to_string()), &mut env),
///            Err(EvalError::UndefinedVariable { name: "y".to_string() }));
/// ```
pub fn evaluate(expr: &Expr, env: &mut Environment) -> EvalResult<f64> {
    Evaluator::new(env).eval(expr)
}
