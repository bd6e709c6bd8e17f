use serde_json::Value;

use crate::error::Error;
use crate::status::{Fields, StatusSnapshot};

/// Decoded `getwalletinfo` result.
#[derive(serde::Serialize, Debug, Clone, PartialEq)]
pub struct WalletInfo {
    #[serde(rename = "walletname")]
    pub name: String,
    #[serde(rename = "walletversion")]
    pub version: i64,
    pub balance: f64,
    pub unconfirmed_balance: f64,
    pub immature_balance: f64,
    #[serde(rename = "txcount")]
    pub tx_count: i64,
    #[serde(rename = "keypoololdest")]
    pub keypool_oldest: i64,
    #[serde(rename = "keypoolsize")]
    pub keypool_size: i64,
    /// Only reported by HD wallets with a split internal keypool.
    #[serde(
        rename = "keypoolsize_hd_internal",
        skip_serializing_if = "Option::is_none"
    )]
    pub keypool_size_hd_internal: Option<i64>,
    /// Only reported by encrypted wallets; 0 means locked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unlocked_until: Option<i64>,
    #[serde(rename = "paytxfee")]
    pub pay_tx_fee: f64,
    #[serde(rename = "hdmasterkeyid", skip_serializing_if = "Option::is_none")]
    pub hd_master_key_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<String>,
}

impl StatusSnapshot for WalletInfo {
    const METHOD: &'static str = "getwalletinfo";

    fn decode(value: &Value) -> Result<Self, Error> {
        let f = Fields::new(Self::METHOD, value)?;
        Ok(Self {
            name: f.required("walletname")?,
            version: f.required("walletversion")?,
            balance: f.required("balance")?,
            unconfirmed_balance: f.required("unconfirmed_balance")?,
            immature_balance: f.required("immature_balance")?,
            tx_count: f.required("txcount")?,
            keypool_oldest: f.required("keypoololdest")?,
            keypool_size: f.required("keypoolsize")?,
            keypool_size_hd_internal: f.optional("keypoolsize_hd_internal")?,
            unlocked_until: f.optional("unlocked_until")?,
            pay_tx_fee: f.required("paytxfee")?,
            hd_master_key_id: f.optional("hdmasterkeyid")?,
            errors: f.optional("errors")?,
        })
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "test assertions")]
mod tests {
    use super::WalletInfo;
    use crate::error::Error;
    use crate::status::StatusSnapshot;

    fn unencrypted() -> serde_json::Value {
        serde_json::json!({
            "walletname": "wallet.dat",
            "walletversion": 169_900,
            "balance": 0.5,
            "unconfirmed_balance": 0,
            "immature_balance": 12.5,
            "txcount": 4,
            "keypoololdest": 1_546_300_800,
            "keypoolsize": 1000,
            "paytxfee": 0.0
        })
    }

    #[test]
    fn decodes_unencrypted_wallet() {
        let info = WalletInfo::decode(&unencrypted()).unwrap();
        assert_eq!(info.name, "wallet.dat");
        assert_eq!(info.version, 169_900);
        assert_eq!(info.unconfirmed_balance, 0.0);
        assert_eq!(info.immature_balance, 12.5);
        assert_eq!(info.tx_count, 4);
        assert_eq!(info.keypool_size, 1000);
        assert_eq!(info.keypool_size_hd_internal, None);
        assert_eq!(info.unlocked_until, None);
        assert_eq!(info.hd_master_key_id, None);
        assert_eq!(info.errors, None);
    }

    #[test]
    fn locked_encrypted_wallet_reports_zero_not_absent() {
        let mut value = unencrypted();
        let obj = value.as_object_mut().unwrap();
        obj.insert("unlocked_until".into(), serde_json::json!(0));
        obj.insert(
            "hdmasterkeyid".into(),
            serde_json::json!("ad9a7d1b8e2c4a0f6c3b7e5d9f1a2b3c4d5e6f70"),
        );
        obj.insert("keypoolsize_hd_internal".into(), serde_json::json!(1000));

        let info = WalletInfo::decode(&value).unwrap();
        assert_eq!(info.unlocked_until, Some(0));
        assert_eq!(info.keypool_size_hd_internal, Some(1000));
        assert_eq!(
            info.hd_master_key_id.as_deref(),
            Some("ad9a7d1b8e2c4a0f6c3b7e5d9f1a2b3c4d5e6f70")
        );
    }

    #[test]
    fn missing_wallet_name_is_named() {
        let mut value = unencrypted();
        value.as_object_mut().unwrap().remove("walletname");
        assert!(matches!(
            WalletInfo::decode(&value),
            Err(Error::MissingField {
                field: "walletname"
            })
        ));
    }

    #[test]
    fn serializes_with_node_keys() {
        let info = WalletInfo::decode(&unencrypted()).unwrap();
        let out = serde_json::to_value(&info).unwrap();
        assert_eq!(out["walletname"], "wallet.dat");
        assert_eq!(out["txcount"], 4);
        assert!(out.get("unlocked_until").is_none());
        assert_eq!(WalletInfo::decode(&out).unwrap(), info);
    }
}
