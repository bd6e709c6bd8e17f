use crate::codes::{ErrorFamily, RpcErrorKind};

/// Display name reported for codes outside the table.
pub const UNCLASSIFIED_NAME: &str = "RPC_UNCLASSIFIED";

/// An error reported by the node, classified by its code.
///
/// The message is carried verbatim and never participates in classification:
/// its wording differs between node versions.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RpcError {
    #[error("{kind} ({}): {message}", .kind.code())]
    Known { kind: RpcErrorKind, message: String },

    #[error("unclassified RPC error ({code}): {message}")]
    Unclassified { code: i32, message: String },
}

/// Classify a `(code, message)` pair taken from a JSON-RPC error object.
///
/// Codes missing from the table produce [`RpcError::Unclassified`] rather than
/// failing, so callers can still tell a remote error from a transport error.
pub fn classify(code: i32, message: impl Into<String>) -> RpcError {
    let message = message.into();
    match RpcErrorKind::from_code(code) {
        Some(kind) => RpcError::Known { kind, message },
        None => {
            tracing::debug!(code, message = %message, "unclassified RPC error code");
            RpcError::Unclassified { code, message }
        }
    }
}

impl RpcError {
    pub fn kind(&self) -> Option<RpcErrorKind> {
        match self {
            Self::Known { kind, .. } => Some(*kind),
            Self::Unclassified { .. } => None,
        }
    }

    /// Canonical code for known kinds, the raw code otherwise.
    pub fn code(&self) -> i32 {
        match self {
            Self::Known { kind, .. } => kind.code(),
            Self::Unclassified { code, .. } => *code,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Known { message, .. } | Self::Unclassified { message, .. } => message,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Known { kind, .. } => kind.name(),
            Self::Unclassified { .. } => UNCLASSIFIED_NAME,
        }
    }

    pub fn family(&self) -> Option<ErrorFamily> {
        self.kind().map(RpcErrorKind::family)
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known { .. })
    }

    /// Flat JSON view; `family` and `description` are `null` for unclassified codes.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "code": self.code(),
            "name": self.name(),
            "family": self.family().map(|f| f.as_ref().to_string()),
            "description": self.kind().map(RpcErrorKind::description),
            "message": self.message(),
            "known": self.is_known(),
        })
    }
}
