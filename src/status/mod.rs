pub mod info;
pub mod wallet;

pub use info::NodeInfo;
pub use wallet::WalletInfo;

use serde_json::{Map, Value};

use crate::error::Error;

/// A typed view of an informational RPC result.
pub trait StatusSnapshot: Sized {
    /// RPC method whose `result` this type decodes.
    const METHOD: &'static str;

    fn decode(value: &Value) -> Result<Self, Error>;

    fn from_json_str(json: &str) -> Result<Self, Error> {
        let value: Value = serde_json::from_str(json)?;
        Self::decode(&value)
    }
}

/// Scalar types a snapshot field can hold.
pub(crate) trait FieldValue: Sized {
    const EXPECTED: &'static str;

    fn from_json(value: &Value) -> Option<Self>;
}

impl FieldValue for u32 {
    const EXPECTED: &'static str = "u32";

    fn from_json(value: &Value) -> Option<Self> {
        value.as_u64().and_then(|n| u32::try_from(n).ok())
    }
}

impl FieldValue for i32 {
    const EXPECTED: &'static str = "i32";

    fn from_json(value: &Value) -> Option<Self> {
        value.as_i64().and_then(|n| i32::try_from(n).ok())
    }
}

impl FieldValue for u64 {
    const EXPECTED: &'static str = "u64";

    fn from_json(value: &Value) -> Option<Self> {
        value.as_u64()
    }
}

impl FieldValue for i64 {
    const EXPECTED: &'static str = "i64";

    fn from_json(value: &Value) -> Option<Self> {
        value.as_i64()
    }
}

impl FieldValue for f64 {
    const EXPECTED: &'static str = "number";

    fn from_json(value: &Value) -> Option<Self> {
        value.as_f64()
    }
}

impl FieldValue for bool {
    const EXPECTED: &'static str = "bool";

    fn from_json(value: &Value) -> Option<Self> {
        value.as_bool()
    }
}

impl FieldValue for String {
    const EXPECTED: &'static str = "string";

    fn from_json(value: &Value) -> Option<Self> {
        value.as_str().map(String::from)
    }
}

/// Field accessor over a result object.
///
/// Missing keys and JSON `null` both read as absent. A present value of the
/// wrong type is an error for optional fields as well.
pub(crate) struct Fields<'a> {
    method: &'static str,
    obj: &'a Map<String, Value>,
}

impl<'a> Fields<'a> {
    pub(crate) fn new(method: &'static str, value: &'a Value) -> Result<Self, Error> {
        let obj = value.as_object().ok_or_else(|| Error::Decode {
            reason: format!("{method} result is not a JSON object"),
        })?;
        Ok(Self { method, obj })
    }

    pub(crate) fn required<T: FieldValue>(&self, field: &'static str) -> Result<T, Error> {
        self.optional(field)?.ok_or_else(|| {
            tracing::debug!(method = self.method, field, "missing required field");
            Error::MissingField { field }
        })
    }

    pub(crate) fn optional<T: FieldValue>(&self, field: &'static str) -> Result<Option<T>, Error> {
        match self.obj.get(field) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => T::from_json(value).map(Some).ok_or_else(|| {
                tracing::debug!(method = self.method, field, %value, "field has unexpected type");
                Error::InvalidField {
                    field,
                    expected: T::EXPECTED,
                }
            }),
        }
    }
}
