use thiserror::Error;

/// Errors raised at the edges of the form layer.
///
/// Validation itself never fails; a rejected value is a verdict, not an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("unknown field: {0}")]
    UnknownField(String),
}
