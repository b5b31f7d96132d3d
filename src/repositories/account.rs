//! Account repository.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::backend::BackendError;
use crate::entities::account::{Credentials, Session};
use crate::error::classify::classify;
use crate::error::sink::DiagnosticSink;
use crate::error::Outcome;

/// Client seam for the identity provider's endpoints.
#[async_trait]
pub trait AccountApi: Send + Sync {
    async fn sign_in(&self, credentials: &Credentials) -> Result<Session, BackendError>;
    async fn sign_up(&self, credentials: &Credentials) -> Result<Session, BackendError>;
    async fn sign_out(&self) -> Result<(), BackendError>;
}

/// Account repository over an injected client seam and diagnostic sink.
pub struct AccountRepository<C> {
    client: C,
    sink: Arc<dyn DiagnosticSink>,
}

impl<C: AccountApi> AccountRepository<C> {
    pub fn new(client: C, sink: Arc<dyn DiagnosticSink>) -> Self {
        Self { client, sink }
    }

    #[instrument(skip(self, credentials))]
    pub async fn sign_in(&self, credentials: &Credentials) -> Outcome<Session> {
        debug!("Signing in");
        self.client
            .sign_in(credentials)
            .await
            .map_err(|e| classify(&e, self.sink.as_ref()))
    }

    #[instrument(skip(self, credentials))]
    pub async fn sign_up(&self, credentials: &Credentials) -> Outcome<Session> {
        debug!("Signing up");
        self.client
            .sign_up(credentials)
            .await
            .map_err(|e| classify(&e, self.sink.as_ref()))
    }

    #[instrument(skip(self))]
    pub async fn sign_out(&self) -> Outcome<()> {
        debug!("Signing out");
        self.client
            .sign_out()
            .await
            .map_err(|e| classify(&e, self.sink.as_ref()))
    }
}
