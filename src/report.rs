//! # Formatted Report
//!
//! Encoding of ceremony results into the dual-format report. Downstream
//! consumers may expect the credential as a structured object or as a
//! JSON-encoded string, and the bridge does not know in advance which, so
//! both forms are always produced together.

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::envelope::FieldNames;
use crate::error::Error;
use crate::Result;

/// The dual-format ceremony report returned by both endpoints.
///
/// The ceremony result is treated as an opaque JSON tree: it is passed
/// through to the object form unchanged and independently re-serialized for
/// the string form. Decoding the string form's result field yields a value
/// equal to the object form's.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct FormattedReport {
    /// The caller-supplied identifier echoed from the request envelope.
    pub identifier: String,

    /// `{ <idField>: identifier, <resultField>: <credential> }`.
    pub object_form: Value,

    /// `{ <idField>: identifier, <resultField>: "<credential as a JSON string>" }`.
    pub string_form: Value,
}

/// Encode a ceremony result under the resolved field names.
///
/// # Errors
///
/// Returns `Error::ServerError` if the credential cannot be re-serialized.
pub fn encode(identifier: &str, credential: &Value, names: &FieldNames) -> Result<FormattedReport> {
    let mut object_form = Map::new();
    object_form.insert(names.id.clone(), Value::String(identifier.to_string()));
    object_form.insert(names.result.clone(), credential.clone());

    let stringified = serde_json::to_string(credential)
        .map_err(|e| Error::ServerError(format!("issue stringifying credential: {e}")))?;
    let mut string_form = Map::new();
    string_form.insert(names.id.clone(), Value::String(identifier.to_string()));
    string_form.insert(names.result.clone(), Value::String(stringified));

    Ok(FormattedReport {
        identifier: identifier.to_string(),
        object_form: Value::Object(object_form),
        string_form: Value::Object(string_form),
    })
}

/// Renders the two-section text report expected by presentation layers.
impl Display for FormattedReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let object = serde_json::to_string_pretty(&self.object_form).map_err(|_| fmt::Error)?;
        let string = serde_json::to_string_pretty(&self.string_form).map_err(|_| fmt::Error)?;
        write!(
            f,
            "# Header format Object version:\n{object}\n\n# Header format String version:\n{string}"
        )
    }
}
