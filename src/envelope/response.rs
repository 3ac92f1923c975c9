//! The uniform response envelope.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::value::RawValue;
use serde_json::Value;

use crate::envelope::audit::AuditInfo;
use crate::envelope::meta::{null_as_default, Meta, MetaList};
use crate::error::DecodeError;

/// Structured result returned for every call, success or failure.
///
/// Fields are private: once the executor hands an envelope out it is a plain
/// value that can be cloned and shared freely.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Envelope {
    items: Option<Box<RawValue>>,
    #[serde(deserialize_with = "null_as_default")]
    audit_info: AuditInfo,
    interface_settings: Value,
}

/// Fields the executor takes from a server response body.
///
/// Identity fields, status and duration are owned locally and ignored here.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct ResponseBody {
    items: Option<Box<RawValue>>,
    #[serde(deserialize_with = "null_as_default")]
    audit_info: RemoteAudit,
    interface_settings: Value,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct RemoteAudit {
    #[serde(deserialize_with = "null_as_default")]
    errors: MetaList,
    #[serde(deserialize_with = "null_as_default")]
    info: MetaList,
    #[serde(deserialize_with = "null_as_default")]
    warning: MetaList,
    total: Option<i64>,
}

impl Envelope {
    /// Skeleton envelope carrying only audit metadata.
    pub(crate) fn new(audit_info: AuditInfo) -> Self {
        Self {
            items: None,
            audit_info,
            interface_settings: Value::Null,
        }
    }

    /// Decode a complete serialized envelope, e.g. one forwarded by another
    /// service.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, DecodeError> {
        serde_json::from_slice(bytes).map_err(|e| DecodeError::new(e, bytes))
    }

    /// Merge a server response body into this envelope.
    pub(crate) fn absorb(&mut self, body: &[u8]) -> Result<(), DecodeError> {
        let decoded: ResponseBody =
            serde_json::from_slice(body).map_err(|e| DecodeError::new(e, body))?;
        self.items = decoded.items;
        self.interface_settings = decoded.interface_settings;
        self.audit_info.errors = decoded.audit_info.errors;
        self.audit_info.info = decoded.audit_info.info;
        self.audit_info.warning = decoded.audit_info.warning;
        self.audit_info.total = decoded.audit_info.total;
        Ok(())
    }

    pub(crate) fn audit_mut(&mut self) -> &mut AuditInfo {
        &mut self.audit_info
    }

    pub(crate) fn push_error(&mut self, meta: Meta) {
        self.audit_info.errors.push(meta);
    }

    pub fn audit(&self) -> &AuditInfo {
        &self.audit_info
    }

    /// Raw, undecoded payload region.
    pub fn raw_items(&self) -> Option<&RawValue> {
        self.items.as_deref()
    }

    pub fn interface_settings(&self) -> &Value {
        &self.interface_settings
    }

    /// Business-level success verdict.
    ///
    /// Requires a 2xx status, a non-empty payload and no error items. Always
    /// recomputed from the current fields.
    pub fn is_ok(&self) -> bool {
        self.audit_info.is_success_status() && self.has_items() && self.audit_info.errors.is_empty()
    }

    /// True when the payload is present and holds at least one element.
    ///
    /// Arrays count elements, objects count keys, strings count characters.
    /// Null, numbers, booleans and undecodable payloads count as empty.
    pub fn has_items(&self) -> bool {
        let Some(raw) = self.items.as_deref() else {
            return false;
        };
        match serde_json::from_str::<Value>(raw.get()) {
            Ok(Value::Array(items)) => !items.is_empty(),
            Ok(Value::Object(fields)) => !fields.is_empty(),
            Ok(Value::String(s)) => !s.is_empty(),
            Ok(_) | Err(_) => false,
        }
    }

    /// Decode the payload into a caller-chosen shape.
    ///
    /// An absent payload is decoded as JSON `null`, so `Option<T>` targets
    /// yield `None` while collection targets fail.
    pub fn get_items<T: DeserializeOwned>(&self) -> Result<T, DecodeError> {
        let raw = self.items.as_deref().map_or("null", RawValue::get);
        serde_json::from_str(raw).map_err(|e| DecodeError::new(e, raw.as_bytes()))
    }

    pub fn errors_string(&self) -> String {
        self.audit_info.errors.to_string()
    }

    pub fn info_string(&self) -> String {
        self.audit_info.info.to_string()
    }

    pub fn warning_string(&self) -> String {
        self.audit_info.warning.to_string()
    }
}

impl Serialize for Envelope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Wire<'a> {
            items: Option<&'a RawValue>,
            audit_info: WireAudit<'a>,
            interface_settings: &'a Value,
        }

        #[derive(Serialize)]
        struct WireAudit<'a> {
            #[serde(flatten)]
            audit: &'a AuditInfo,
            ok: bool,
        }

        Wire {
            items: self.items.as_deref(),
            audit_info: WireAudit {
                audit: &self.audit_info,
                ok: self.is_ok(),
            },
            interface_settings: &self.interface_settings,
        }
        .serialize(serializer)
    }
}
