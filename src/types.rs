use crate::codes::{RpcError, classify};
use crate::error::Error;
use crate::status::StatusSnapshot;

/// The `error` member of a JSON-RPC response.
#[derive(serde::Deserialize, Debug, Clone, PartialEq)]
pub struct ResponseError {
    /// Numeric error code assigned by the node.
    pub code: i32,
    /// Free-text explanation. Not stable across node versions.
    pub message: String,
    /// Additional error data, if the node sent any.
    pub data: Option<serde_json::Value>,
}

impl From<ResponseError> for RpcError {
    fn from(err: ResponseError) -> Self {
        classify(err.code, err.message)
    }
}

/// A JSON-RPC response envelope as handed over by the transport.
///
/// bitcoind sends both `result` and `error` on every reply, with the unused one
/// set to `null`.
#[derive(serde::Deserialize, Debug, Clone, PartialEq)]
pub struct RpcResponse {
    pub result: Option<serde_json::Value>,
    pub error: Option<ResponseError>,
    pub id: Option<serde_json::Value>,
}

impl RpcResponse {
    /// Returns the `result` value, or the classified error when `error` is set.
    /// A missing `result` comes back as JSON `null`.
    pub fn into_result(self) -> Result<serde_json::Value, Error> {
        if let Some(err) = self.error {
            return Err(Error::Rpc(err.into()));
        }
        Ok(self.result.unwrap_or(serde_json::Value::Null))
    }

    /// Decode the `result` member as one of the status snapshots.
    pub fn decode<T: StatusSnapshot>(self) -> Result<T, Error> {
        let result = self.into_result()?;
        T::decode(&result)
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, clippy::panic, reason = "test assertions")]
mod tests {
    use super::{ResponseError, RpcResponse};
    use crate::codes::{RpcError, RpcErrorKind};
    use crate::error::Error;
    use crate::status::NodeInfo;

    #[test]
    fn error_member_is_classified() {
        let resp: RpcResponse = serde_json::from_value(serde_json::json!({
            "result": null,
            "error": {"code": -28, "message": "Loading block index..."},
            "id": 1
        }))
        .unwrap();

        let err = resp.into_result().unwrap_err();
        let Error::Rpc(rpc) = err else {
            panic!("expected Rpc error");
        };
        assert_eq!(rpc.kind(), Some(RpcErrorKind::InWarmup));
        assert_eq!(rpc.message(), "Loading block index...");
    }

    #[test]
    fn response_error_converts_with_data() {
        let err: ResponseError = serde_json::from_value(serde_json::json!({
            "code": -32601,
            "message": "Method not found",
            "data": {"method": "getfoo"}
        }))
        .unwrap();
        assert!(err.data.is_some());

        let rpc: RpcError = err.into();
        assert_eq!(rpc.kind(), Some(RpcErrorKind::MethodNotFound));
        assert!(rpc.kind().unwrap().is_protocol_level());
    }

    #[test]
    fn unknown_error_code_surfaces_unclassified() {
        let resp: RpcResponse = serde_json::from_str(
            r#"{"result":null,"error":{"code":-500,"message":"custom node error"},"id":"a"}"#,
        )
        .unwrap();
        let err = resp.decode::<NodeInfo>().unwrap_err();
        assert!(matches!(
            err,
            Error::Rpc(RpcError::Unclassified { code: -500, ref message }) if message == "custom node error"
        ));
    }

    #[test]
    fn null_error_yields_result() {
        let resp: RpcResponse = serde_json::from_value(serde_json::json!({
            "result": {"blocks": 1},
            "error": null,
            "id": 7
        }))
        .unwrap();
        assert_eq!(
            resp.into_result().unwrap(),
            serde_json::json!({"blocks": 1})
        );
    }

    #[test]
    fn missing_result_is_null() {
        let resp: RpcResponse = serde_json::from_value(serde_json::json!({"id": 1})).unwrap();
        assert_eq!(resp.into_result().unwrap(), serde_json::Value::Null);
    }

    #[test]
    fn absent_members_deserialize_to_none() {
        let resp: RpcResponse = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(resp.result, None);
        assert_eq!(resp.error, None);
        assert_eq!(resp.id, None);

        let err: ResponseError =
            serde_json::from_value(serde_json::json!({"code": -1, "message": "boom"})).unwrap();
        assert_eq!(err.data, None);
    }

    #[test]
    fn decode_reports_missing_field_from_result() {
        let resp: RpcResponse = serde_json::from_value(serde_json::json!({
            "result": {"blocks": 1},
            "error": null,
            "id": 1
        }))
        .unwrap();
        let err = resp.decode::<NodeInfo>().unwrap_err();
        assert!(err.field().is_some());
    }
}
