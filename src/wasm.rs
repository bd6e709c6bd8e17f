use wasm_bindgen::prelude::*;

use crate::codes::{self, RpcErrorKind};
use crate::status::{NodeInfo, StatusSnapshot, WalletInfo};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = JSON)]
    fn parse(s: &str) -> JsValue;
}

fn to_js(value: &serde_json::Value) -> JsValue {
    match serde_json::to_string(value) {
        Ok(json_str) => parse(&json_str),
        Err(_) => JsValue::NULL,
    }
}

fn kind_to_json(kind: RpcErrorKind) -> serde_json::Value {
    serde_json::json!({
        "code": kind.code(),
        "name": kind.name(),
        "family": kind.family().as_ref(),
        "description": kind.description(),
    })
}

/// Returns every documented error code, sorted by code.
#[wasm_bindgen]
pub fn get_error_table() -> JsValue {
    let entries: Vec<serde_json::Value> = codes::error_table()
        .values()
        .map(|kind| kind_to_json(*kind))
        .collect();
    to_js(&serde_json::Value::Array(entries))
}

/// Classify a `(code, message)` pair from a JSON-RPC error object.
#[wasm_bindgen]
pub fn classify_error(code: i32, message: &str) -> JsValue {
    to_js(&codes::classify(code, message).to_json())
}

/// Decode a `getinfo` result given as JSON text.
#[wasm_bindgen]
pub fn decode_node_info(json: &str) -> JsValue {
    snapshot_to_js(NodeInfo::from_json_str(json))
}

/// Decode a `getwalletinfo` result given as JSON text.
#[wasm_bindgen]
pub fn decode_wallet_info(json: &str) -> JsValue {
    snapshot_to_js(WalletInfo::from_json_str(json))
}

fn snapshot_to_js<T: serde::Serialize>(decoded: Result<T, crate::Error>) -> JsValue {
    match decoded {
        Ok(snapshot) => serde_wasm_bindgen::to_value(&snapshot)
            .unwrap_or_else(|e| error_result(&e.to_string())),
        Err(e) => {
            let obj = serde_json::json!({
                "error": e.to_string(),
                "field": e.field(),
            });
            to_js(&obj)
        }
    }
}

fn error_result(msg: &str) -> JsValue {
    let obj = serde_json::json!({"error": msg});
    to_js(&obj)
}
