/// Errors raised while resolving or evaluating a `DataType`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeneratorError {
    /// The descriptor names a kind no generator exists for.
    #[error("Unsupported data type: {0}")]
    UnsupportedDataType(String),

    /// A parameter is missing, unparseable or out of range.
    #[error("Invalid parameter '{param}' for data type '{kind}': {reason}")]
    InvalidParameter {
        kind: String,
        param: String,
        reason: String,
    },
}

impl GeneratorError {
    pub(crate) fn invalid(kind: &str, param: &str, reason: impl Into<String>) -> Self {
        GeneratorError::InvalidParameter {
            kind: kind.to_string(),
            param: param.to_string(),
            reason: reason.into(),
        }
    }
}
