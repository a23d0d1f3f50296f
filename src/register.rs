//! # Register Endpoint
//!
//! The Register endpoint drives a credential creation ceremony. The caller
//! supplies an externally produced envelope holding a registration
//! identifier and the relying party's JSON-encoded credential creation
//! options, for example:
//!
//! ```json
//! {
//!     "registrationId": "your-registration-id",
//!     "publicKeyCredentialCreationOptionsJson": "your-json-string"
//! }
//! ```
//!
//! The envelope is unwrapped and validated, the authenticator's `create`
//! operation is invoked with the parsed options, and the resulting
//! credential is returned in both report forms.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::ceremony::Ceremony;
use crate::envelope::{CeremonyKind, FieldNameConfig};
use crate::provider::Provider;
use crate::report::FormattedReport;
use crate::Result;

/// A request to run a registration ceremony.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct RegisterRequest {
    /// The raw request envelope: a JSON object holding the registration
    /// identifier and the JSON-encoded credential creation options.
    pub body: String,

    /// Field-name overrides. Unset names use the registration defaults.
    #[serde(default)]
    pub field_names: FieldNameConfig,

    /// When set, overwrites the relying-party identifier (`rp.id`) in the
    /// creation options before the ceremony is invoked. Options without an
    /// existing `rp.id` are left untouched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rp_id: Option<String>,

    /// When set, status updates are sent to the provider's callback.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_id: Option<String>,
}

/// Register request handler.
///
/// # Errors
///
/// Returns `Error::InvalidInput` if the envelope fails validation and
/// `Error::Ceremony` if the authenticator fails, rejects the ceremony, or
/// the user cancels it.
#[instrument(level = "debug", skip(provider))]
pub async fn register(
    provider: impl Provider, request: &RegisterRequest,
) -> Result<FormattedReport> {
    let ceremony = Ceremony {
        kind: CeremonyKind::Registration,
        body: &request.body,
        field_names: &request.field_names,
        rp_id: request.rp_id.as_deref(),
        callback_id: request.callback_id.as_deref(),
    };
    ceremony.run(&provider).await
}
