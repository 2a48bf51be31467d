use crate::{
    ast::{Expr, UnaryOperator},
    interpreter::evaluator::core::{EvalResult, Evaluator},
};

impl Evaluator<'_> {
    /// Evaluates a prefix operation.
    ///
    /// - `Plus`: returns the operand unchanged.
    /// - `Negate`: arithmetic negation.
    pub(crate) fn eval_unary_op(&mut self, op: UnaryOperator, operand: &Expr) -> EvalResult<f64> {
        let value = self.eval(operand)?;
        Ok(apply_unary(op, value))
    }
}

/// Applies a prefix operator to an already evaluated operand.
///
/// # Example
/// ```
/// use prattle::{ast::UnaryOperator, interpreter::evaluator::unary::apply_unary};
///
/// assert_eq!(apply_unary(UnaryOperator::Negate, 2.5), -2.5);
/// assert_eq!(apply_unary(UnaryOperator::Plus, 2.5), 2.5);
/// ```
#[must_use]
pub fn apply_unary(op: UnaryOperator, value: f64) -> f64 {
    match op {
        UnaryOperator::Plus => value,
        UnaryOperator::Negate => -value,
    }
}
