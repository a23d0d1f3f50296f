//! # Provider
//!
//! The traits implemented by the host application to supply the platform
//! authenticator and to receive ceremony flow-status callbacks. The
//! authenticator is an opaque, host-provided dependency; modelling it as a
//! trait lets the endpoints run against a stub in tests.

use std::fmt::{self, Display, Formatter};

use serde_json::Value;

use crate::envelope::CeremonyKind;
use crate::error::Error;
use crate::Result;

/// Provider aggregates the capabilities the ceremony endpoints require.
pub trait Provider: Authenticator + Callback + Send + Sync {}

/// The Authenticator trait is implemented by the host to expose the platform
/// credential ceremony.
///
/// Either operation may suspend for an unbounded time while the user
/// completes (or abandons) a physical authenticator interaction. Timeouts
/// and cancellation are the implementer's concern; whatever outcome it
/// returns is propagated unchanged.
#[allow(async_fn_in_trait)]
pub trait Authenticator: Send + Sync {
    /// Create a new credential from the supplied creation options.
    async fn create(&self, options: Value) -> anyhow::Result<Value>;

    /// Request an assertion for the supplied request options.
    async fn get(&self, options: Value) -> anyhow::Result<Value>;
}

/// Callback describes behaviours required for notifying a client application
/// of ceremony flow status.
#[allow(async_fn_in_trait)]
pub trait Callback: Send + Sync {
    /// Callback method to process status updates.
    async fn callback(&self, pl: &Payload) -> anyhow::Result<()>;
}

/// Indication of the status of a ceremony flow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Status {
    /// A registration ceremony has been accepted for processing.
    RegistrationRequested,

    /// A credential has been successfully created.
    CredentialCreated,

    /// An authentication ceremony has been accepted for processing.
    AuthenticationRequested,

    /// A credential assertion has been successfully obtained.
    CredentialAsserted,

    /// An error occurred. Any in-progress indicator should be cleared.
    Error,
}

/// Display implementation for Status.
impl Display for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::RegistrationRequested => write!(f, "registration_requested"),
            Self::CredentialCreated => write!(f, "credential_created"),
            Self::AuthenticationRequested => write!(f, "authentication_requested"),
            Self::CredentialAsserted => write!(f, "credential_asserted"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Content of a status update.
#[derive(Clone, Debug)]
pub struct Payload {
    /// Callback identifier.
    pub id: String,

    /// Status of the ceremony flow.
    pub status: Status,

    /// Description to give more textual information about the status.
    pub context: String,
}

/// Invoke the ceremony matching `kind`.
///
/// Registration delegates to the authenticator's `create` operation and
/// authentication to `get`; no transformation is applied either way.
/// Ceremonies are single-shot: a failure is wrapped with its message intact
/// and never retried.
pub(crate) async fn invoke(
    authenticator: &impl Authenticator, kind: CeremonyKind, options: Value,
) -> Result<Value> {
    let outcome = match kind {
        CeremonyKind::Registration => authenticator.create(options).await,
        CeremonyKind::Authentication => authenticator.get(options).await,
    };
    outcome.map_err(|e| Error::Ceremony(e.to_string()))
}

/// Send a status update when the request has registered a callback id.
///
/// A callback failure is logged and otherwise ignored so it cannot mask the
/// ceremony outcome.
pub(crate) async fn notify(
    provider: &impl Provider, callback_id: Option<&str>, status: Status, context: &str,
) {
    let Some(id) = callback_id else {
        return;
    };
    let pl = Payload {
        id: id.to_string(),
        status,
        context: context.to_string(),
    };
    if let Err(e) = provider.callback(&pl).await {
        tracing::error!("status callback failed: {e}");
    }
}
