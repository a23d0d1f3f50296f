//! # Authenticate Endpoint
//!
//! The Authenticate endpoint drives a credential assertion ceremony. The
//! caller supplies an externally produced envelope holding an assertion
//! identifier and the relying party's JSON-encoded assertion request, for
//! example:
//!
//! ```json
//! {
//!     "assertionId": "your-assertion-id",
//!     "assertionRequestJson": "your-json-string"
//! }
//! ```
//!
//! The envelope is unwrapped and validated, the authenticator's `get`
//! operation is invoked with the parsed options, and the resulting
//! assertion is returned in both report forms.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::ceremony::Ceremony;
use crate::envelope::{CeremonyKind, FieldNameConfig};
use crate::provider::Provider;
use crate::report::FormattedReport;
use crate::Result;

/// A request to run an authentication ceremony.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct AuthenticateRequest {
    /// The raw request envelope: a JSON object holding the assertion
    /// identifier and the JSON-encoded assertion request options.
    pub body: String,

    /// Field-name overrides. Unset names use the authentication defaults.
    #[serde(default)]
    pub field_names: FieldNameConfig,

    /// When set, overwrites the relying-party identifier (`rpId`) in the
    /// assertion request before the ceremony is invoked. Requests without an
    /// existing `rpId` are left untouched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rp_id: Option<String>,

    /// When set, status updates are sent to the provider's callback.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_id: Option<String>,
}

/// Authenticate request handler.
///
/// # Errors
///
/// Returns `Error::InvalidInput` if the envelope fails validation and
/// `Error::Ceremony` if the authenticator fails, rejects the ceremony, or
/// the user cancels it.
#[instrument(level = "debug", skip(provider))]
pub async fn authenticate(
    provider: impl Provider, request: &AuthenticateRequest,
) -> Result<FormattedReport> {
    let ceremony = Ceremony {
        kind: CeremonyKind::Authentication,
        body: &request.body,
        field_names: &request.field_names,
        rp_id: request.rp_id.as_deref(),
        callback_id: request.callback_id.as_deref(),
    };
    ceremony.run(&provider).await
}
