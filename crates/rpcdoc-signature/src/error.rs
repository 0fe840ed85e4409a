use thiserror::Error;

/// Errors raised while parsing a raw signature.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureError {
    /// The signature does not conform to the grammar.
    #[error("malformed signature `{signature}` at offset {offset}: {reason}")]
    Malformed {
        signature: String,
        offset: usize,
        reason: String,
    },
}

impl SignatureError {
    pub fn malformed(signature: &str, offset: usize, reason: impl Into<String>) -> Self {
        SignatureError::Malformed {
            signature: signature.to_string(),
            offset,
            reason: reason.into(),
        }
    }

    /// Byte offset at which parsing stopped.
    pub fn offset(&self) -> usize {
        match self {
            SignatureError::Malformed { offset, .. } => *offset,
        }
    }
}
