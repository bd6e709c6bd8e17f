use serde_json::Value;

use crate::error::Error;
use crate::status::{Fields, StatusSnapshot};

/// Decoded `getinfo` result.
///
/// Fields the node only reports in some configurations are `Option`s, so a
/// missing `keypoolsize` is never confused with an empty keypool.
#[derive(serde::Serialize, Debug, Clone, PartialEq)]
pub struct NodeInfo {
    /// Server version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocolversion: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub walletversion: Option<u32>,
    /// Total wallet balance in BTC.
    pub balance: f64,
    /// Number of blocks processed by the server.
    pub blocks: u32,
    /// Clock offset to peers, in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeoffset: Option<i32>,
    pub connections: u32,
    /// Proxy used by the server, only reported when one is configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy: Option<String>,
    pub difficulty: f64,
    pub testnet: bool,
    /// Timestamp (seconds since epoch) of the oldest pre-generated key in the keypool.
    pub keypoololdest: u64,
    /// Number of pre-generated keys.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keypoolsize: Option<u32>,
    /// Timestamp until which the wallet is unlocked; 0 means locked. Absent
    /// for unencrypted wallets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unlocked_until: Option<i64>,
    /// Transaction fee setting in BTC/kB.
    pub paytxfee: f64,
    /// Minimum relay fee for non-free transactions in BTC/kB.
    pub relayfee: f64,
    pub errors: String,
}

impl StatusSnapshot for NodeInfo {
    const METHOD: &'static str = "getinfo";

    fn decode(value: &Value) -> Result<Self, Error> {
        let f = Fields::new(Self::METHOD, value)?;
        Ok(Self {
            version: f.optional("version")?,
            protocolversion: f.optional("protocolversion")?,
            walletversion: f.optional("walletversion")?,
            balance: f.required("balance")?,
            blocks: f.required("blocks")?,
            timeoffset: f.optional("timeoffset")?,
            connections: f.required("connections")?,
            proxy: f.optional("proxy")?,
            difficulty: f.required("difficulty")?,
            testnet: f.required("testnet")?,
            keypoololdest: f.required("keypoololdest")?,
            keypoolsize: f.optional("keypoolsize")?,
            unlocked_until: f.optional("unlocked_until")?,
            paytxfee: f.required("paytxfee")?,
            relayfee: f.required("relayfee")?,
            errors: f.required("errors")?,
        })
    }
}
