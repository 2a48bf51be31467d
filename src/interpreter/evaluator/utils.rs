use crate::{error::EvalError, interpreter::evaluator::core::EvalResult};

/// Passes `value` through if it is finite.
///
/// `describe` renders the operation for the error message and only runs on
/// failure.
///
/// # Errors
/// Returns `MathDomain` for `NaN` and infinities.
///
/// # Example
/// ```
/// use prattle::interpreter::evaluator::utils::ensure_finite;
///
/// assert_eq!(ensure_finite(4.0, || "unused".to_string()), Ok(4.0));
/// assert!(ensure_finite(f64::NAN, || "0 / 0".to_string()).is_err());
/// ```
pub fn ensure_finite(value: f64, describe: impl FnOnce() -> String) -> EvalResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EvalError::MathDomain { operation: describe() })
    }
}
