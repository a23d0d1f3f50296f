//! # Request Envelope
//!
//! Parsing and normalization of caller-supplied ceremony envelopes. An
//! envelope is a JSON object holding an identifier and a nested JSON-string
//! field with the ceremony options. Normalization unwraps both, optionally
//! rewrites the relying-party identifier, and validates shape before the
//! authenticator is ever invoked.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Error;
use crate::Result;

/// Default name of the result field in both report forms.
pub const DEFAULT_RESULT_FIELD: &str = "publicKeyCredentialJson";

/// The two ceremony kinds the bridge can drive.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub enum CeremonyKind {
    /// Credential creation: the envelope carries credential creation options
    /// and the authenticator's `create` operation is invoked.
    Registration,

    /// Credential assertion: the envelope carries assertion request options
    /// and the authenticator's `get` operation is invoked.
    Authentication,
}

impl CeremonyKind {
    /// Default name of the envelope's identifier field.
    #[must_use]
    pub const fn default_id_field(self) -> &'static str {
        match self {
            Self::Registration => "registrationId",
            Self::Authentication => "assertionId",
        }
    }

    /// Default name of the envelope's nested options field.
    #[must_use]
    pub const fn default_options_field(self) -> &'static str {
        match self {
            Self::Registration => "publicKeyCredentialCreationOptionsJson",
            Self::Authentication => "assertionRequestJson",
        }
    }

    // Path to the relying-party identifier within the parsed options. Fixed
    // by the ceremony options schema: creation options nest it under `rp`,
    // assertion requests hold it at the top level.
    const fn rp_id_path(self) -> &'static [&'static str] {
        match self {
            Self::Registration => &["rp", "id"],
            Self::Authentication => &["rpId"],
        }
    }
}

/// Caller-supplied overrides for the envelope and report field names.
///
/// Unset names fall back to the ceremony kind's fixed defaults. Custom names
/// are not validated beyond being non-empty.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct FieldNameConfig {
    /// Name of the identifier field, used in the envelope and echoed into
    /// both report forms.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_field: Option<String>,

    /// Name of the envelope field holding the JSON-encoded ceremony options.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options_field: Option<String>,

    /// Name of the result field in both report forms.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_field: Option<String>,
}

impl FieldNameConfig {
    /// Resolve the configuration against the kind's defaults.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` if a custom field name is empty.
    pub fn resolve(&self, kind: CeremonyKind) -> Result<FieldNames> {
        Ok(FieldNames {
            id: resolve_name(self.id_field.as_deref(), kind.default_id_field())?,
            options: resolve_name(self.options_field.as_deref(), kind.default_options_field())?,
            result: resolve_name(self.result_field.as_deref(), DEFAULT_RESULT_FIELD)?,
        })
    }
}

fn resolve_name(custom: Option<&str>, default: &str) -> Result<String> {
    match custom {
        Some("") => Err(Error::InvalidInput("field name must not be empty".into())),
        Some(name) => Ok(name.to_string()),
        None => Ok(default.to_string()),
    }
}

/// Field names resolved for a single request.
#[derive(Clone, Debug)]
pub struct FieldNames {
    /// Identifier field name.
    pub id: String,

    /// Nested options field name.
    pub options: String,

    /// Result field name.
    pub result: String,
}

/// A normalized ceremony request: the unwrapped identifier and parsed
/// options, ready to hand to the authenticator. Owned by the single
/// in-flight request and discarded once the ceremony returns.
#[derive(Clone, Debug)]
pub struct CeremonyRequest {
    /// Caller-supplied identifier, echoed into the report.
    pub id: String,

    /// The ceremony to perform.
    pub kind: CeremonyKind,

    /// Parsed ceremony options, with any relying-party override applied.
    pub options: Value,
}

/// Parse and validate a raw envelope into a [`CeremonyRequest`].
///
/// When `rp_id` is set, the relying-party identifier at the kind's fixed
/// path is overwritten before the options are returned. No other field of
/// the parsed options is touched.
///
/// # Errors
///
/// Returns `Error::InvalidInput` if the envelope is not a JSON object, a
/// required field is missing or not a string, or the nested options do not
/// parse as JSON.
pub fn normalize(
    raw: &str, kind: CeremonyKind, names: &FieldNames, rp_id: Option<&str>,
) -> Result<CeremonyRequest> {
    let envelope: Value = serde_json::from_str(raw)
        .map_err(|e| Error::InvalidInput(format!("malformed request envelope: {e}")))?;
    let Some(envelope) = envelope.as_object() else {
        return Err(Error::InvalidInput("request envelope must be a JSON object".into()));
    };

    let id = field_str(envelope, &names.id)?.to_string();
    let options_json = field_str(envelope, &names.options)?;

    let mut options: Value = serde_json::from_str(options_json)
        .map_err(|_| Error::InvalidInput("malformed nested options".into()))?;

    if let Some(rp_id) = rp_id {
        set_existing_leaf(&mut options, kind.rp_id_path(), rp_id);
    }

    Ok(CeremonyRequest {
        id,
        kind,
        options,
    })
}

fn field_str<'a>(envelope: &'a Map<String, Value>, name: &str) -> Result<&'a str> {
    let Some(value) = envelope.get(name) else {
        return Err(Error::InvalidInput(format!("missing field: {name}")));
    };
    value
        .as_str()
        .ok_or_else(|| Error::InvalidInput(format!("field `{name}` must be a string")))
}

// Overwrite the leaf at `path` when it already exists. An absent leaf or
// parent leaves the options untouched: requests may omit relying-party data
// altogether.
fn set_existing_leaf(options: &mut Value, path: &[&str], new_value: &str) {
    let Some((leaf, parents)) = path.split_last() else {
        return;
    };
    let mut cursor = &mut *options;
    for key in parents {
        let Some(next) = cursor.get_mut(*key) else {
            return;
        };
        cursor = next;
    }
    let Some(object) = cursor.as_object_mut() else {
        return;
    };
    if let Some(slot) = object.get_mut(*leaf) {
        *slot = Value::String(new_value.to_string());
    }
}
