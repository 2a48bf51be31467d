use crate::{
    ast::{BinaryOperator, Expr},
    error::EvalError,
    interpreter::evaluator::{
        core::{EvalResult, Evaluator},
        utils::ensure_finite,
    },
};

impl Evaluator<'_> {
    /// Evaluates a binary operation.
    ///
    /// The left operand is evaluated before the right one, so with
    /// `(x = 1) + (x = 2)` the final binding of `x` is `2`.
    pub(crate) fn eval_binary_op(&mut self,
                                 op: BinaryOperator,
                                 left: &Expr,
                                 right: &Expr)
                                 -> EvalResult<f64> {
        let left = self.eval(left)?;
        let right = self.eval(right)?;
        apply_binary(op, left, right)
    }
}

/// Combines two evaluated operands.
///
/// `+`, `-` and `*` are plain `f64` arithmetic. `/` rejects a right operand
/// that is exactly zero. `^` uses `powf` and rejects results that are not
/// finite, such as `(-8) ^ 0.5` or `10 ^ 400`.
///
/// # Errors
/// - `DivisionByZero` for `x / 0`.
/// - `MathDomain` when exponentiation does not yield a finite number.
///
/// # Example
/// ```
/// use prattle::{ast::BinaryOperator, error::EvalError, interpreter::evaluator::binary::apply_binary};
///
/// assert_eq!(apply_binary(BinaryOperator::Pow, 2.0, 10.0), Ok(1024.0));
/// assert_eq!(apply_binary(BinaryOperator::Div, 1.0, 0.0),
///            Err(EvalError::DivisionByZero));
/// ```
#[allow(clippy::float_cmp)]
pub fn apply_binary(op: BinaryOperator, left: f64, right: f64) -> EvalResult<f64> {
    match op {
        BinaryOperator::Add => Ok(left + right),
        BinaryOperator::Sub => Ok(left - right),
        BinaryOperator::Mul => Ok(left * right),
        BinaryOperator::Div => {
            if right == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            Ok(left / right)
        },
        BinaryOperator::Pow => ensure_finite(left.powf(right), || format!("{left} ^ {right}")),
    }
}
