use crate::codes::RpcError;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("missing field `{field}`")]
    MissingField { field: &'static str },

    #[error("invalid field `{field}`: expected {expected}")]
    InvalidField {
        field: &'static str,
        expected: &'static str,
    },

    #[error("decode error: {reason}")]
    Decode { reason: String },

    #[error(transparent)]
    Rpc(#[from] RpcError),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Name of the offending JSON field for snapshot decode failures.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::MissingField { field } | Self::InvalidField { field, .. } => Some(*field),
            Self::Decode { .. } | Self::Rpc(_) | Self::Json(_) => None,
        }
    }
}
