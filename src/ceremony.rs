//! # Ceremony Pipeline
//!
//! The single request pipeline behind both endpoints: normalize the
//! envelope, invoke the authenticator, encode the report. Both ceremony
//! kinds flow through the same path and differ only in configuration, so
//! neither the normalizer nor the encoder branches on kind.

use crate::envelope::{self, CeremonyKind, FieldNameConfig};
use crate::provider::{invoke, notify, Provider, Status};
use crate::report::{self, FormattedReport};
use crate::Result;

/// One parameterized ceremony run. Constructed by an endpoint from its
/// request and executed against the supplied provider.
#[derive(Debug)]
pub(crate) struct Ceremony<'a> {
    pub kind: CeremonyKind,
    pub body: &'a str,
    pub field_names: &'a FieldNameConfig,
    pub rp_id: Option<&'a str>,
    pub callback_id: Option<&'a str>,
}

impl Ceremony<'_> {
    /// Run the ceremony, reporting the outcome to the provider's callback.
    ///
    /// Success and error are mutually exclusive terminal states: any failure
    /// emits a `Status::Error` update so the caller can clear an in-progress
    /// indicator, then surfaces the error unchanged.
    pub(crate) async fn run(self, provider: &impl Provider) -> Result<FormattedReport> {
        match self.execute(provider).await {
            Ok(report) => Ok(report),
            Err(e) => {
                tracing::error!("ceremony failed: {e}");
                notify(provider, self.callback_id, Status::Error, &e.to_string()).await;
                Err(e)
            }
        }
    }

    async fn execute(&self, provider: &impl Provider) -> Result<FormattedReport> {
        tracing::debug!("Ceremony::execute");

        let (status, context) = requested(self.kind);
        notify(provider, self.callback_id, status, context).await;

        let names = self.field_names.resolve(self.kind)?;
        let request = envelope::normalize(self.body, self.kind, &names, self.rp_id)?;

        // may suspend indefinitely awaiting a physical user interaction
        let credential = invoke(provider, request.kind, request.options).await?;

        let (status, context) = completed(self.kind);
        notify(provider, self.callback_id, status, context).await;

        report::encode(&request.id, &credential, &names)
    }
}

const fn requested(kind: CeremonyKind) -> (Status, &'static str) {
    match kind {
        CeremonyKind::Registration => {
            (Status::RegistrationRequested, "starting registration ceremony")
        }
        CeremonyKind::Authentication => {
            (Status::AuthenticationRequested, "starting authentication ceremony")
        }
    }
}

const fn completed(kind: CeremonyKind) -> (Status, &'static str) {
    match kind {
        CeremonyKind::Registration => (Status::CredentialCreated, "credential created"),
        CeremonyKind::Authentication => (Status::CredentialAsserted, "credential asserted"),
    }
}
