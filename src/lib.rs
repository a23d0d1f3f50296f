//! An API bridging externally produced WebAuthn ceremony requests to a
//! host-provided platform authenticator.
//!
//! The library accepts a relying party's challenge and options as a JSON
//! envelope, drives the matching credential ceremony (registration or
//! authentication) through the host's authenticator, and re-emits the
//! result in the two serialization shapes downstream consumers expect: a
//! structured object and a JSON-encoded string, under caller-configurable
//! field names.
//!
//! # Design
//!
//! **Endpoints**
//!
//! The library is architected around two endpoints, `register` and
//! `authenticate`, each with its own `XxxRequest` type. Both kinds run
//! through one parameterized pipeline: normalize the envelope, invoke the
//! authenticator, encode the report.
//!
//! **Providers**
//!
//! Implementors supply [`provider`] traits for externals: the platform
//! authenticator performing the actual cryptographic ceremony, and an
//! optional status callback for surfacing flow progress to a client
//! application. The authenticator is opaque to the library: options are
//! passed through to it and its result is never inspected beyond
//! re-serialization.
//!
//! # Example
//!
//! ```rust,ignore
//! // `Provider` implements the `Authenticator` and `Callback` traits
//! let provider = Provider::new();
//!
//! let request = RegisterRequest {
//!     body: serde_json::json!({
//!         "registrationId": "r1",
//!         "publicKeyCredentialCreationOptionsJson": "{\"challenge\":\"abc\"}",
//!     })
//!     .to_string(),
//!     ..RegisterRequest::default()
//! };
//!
//! let report = webauthn_signer::register(provider, &request).await?;
//! println!("{report}");
//! ```

pub mod authenticate;
mod ceremony;
pub mod envelope;
pub mod error;
pub mod provider;
pub mod register;
pub mod report;

pub use crate::authenticate::{authenticate, AuthenticateRequest};
pub use crate::envelope::{CeremonyKind, FieldNameConfig};
pub use crate::error::Error;
pub use crate::register::{register, RegisterRequest};
pub use crate::report::FormattedReport;

/// Result type for ceremony endpoints.
pub type Result<T, E = error::Error> = core::result::Result<T, E>;
