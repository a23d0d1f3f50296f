//! Shared provider for integration tests: a scripted authenticator and a
//! recording status callback.

use std::sync::{Arc, Mutex, Once};

use serde_json::Value;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;
use webauthn_signer::provider::{Authenticator, Callback, Payload, Provider, Status};

// initalise tracing once for all tests
static INIT: Once = Once::new();

/// Initialise tracing for tests.
///
/// # Panics
///
/// Panics if the tracing subscriber cannot be set.
pub fn init_tracer() {
    INIT.call_once(|| {
        let subscriber = FmtSubscriber::builder().with_max_level(Level::ERROR).finish();
        tracing::subscriber::set_global_default(subscriber).expect("subscriber set");
    });
}

/// A scripted provider: returns a fixed credential (or a fixed failure) and
/// records every authenticator invocation and status update.
#[derive(Clone, Debug, Default)]
pub struct ProviderImpl {
    credential: Value,
    fail_with: Option<String>,
    pub created: Arc<Mutex<Vec<Value>>>,
    pub asserted: Arc<Mutex<Vec<Value>>>,
    pub statuses: Arc<Mutex<Vec<(String, Status)>>>,
}

impl ProviderImpl {
    #[must_use]
    pub fn new(credential: Value) -> Self {
        Self {
            credential,
            ..Self::default()
        }
    }

    /// A provider whose ceremonies fail with the given message.
    #[must_use]
    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Self::default()
        }
    }

    /// Total number of authenticator invocations, either kind.
    #[must_use]
    pub fn invocations(&self) -> usize {
        self.created.lock().expect("lock").len() + self.asserted.lock().expect("lock").len()
    }
}

impl Provider for ProviderImpl {}

impl Authenticator for ProviderImpl {
    async fn create(&self, options: Value) -> anyhow::Result<Value> {
        self.created.lock().expect("lock").push(options);
        match &self.fail_with {
            Some(message) => Err(anyhow::anyhow!(message.clone())),
            None => Ok(self.credential.clone()),
        }
    }

    async fn get(&self, options: Value) -> anyhow::Result<Value> {
        self.asserted.lock().expect("lock").push(options);
        match &self.fail_with {
            Some(message) => Err(anyhow::anyhow!(message.clone())),
            None => Ok(self.credential.clone()),
        }
    }
}

impl Callback for ProviderImpl {
    async fn callback(&self, pl: &Payload) -> anyhow::Result<()> {
        self.statuses.lock().expect("lock").push((pl.id.clone(), pl.status.clone()));
        Ok(())
    }
}
