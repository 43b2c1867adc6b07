//! Application state for the comparison server

use std::sync::Arc;

use dashmap::DashMap;
use parking_lot::RwLock;
use uuid::Uuid;

use crate::audit::AuditTrail;
use crate::comparison::{ComparisonEngine, LlmProvider, OpenAiClient};
use crate::config::AppConfig;
use crate::error::{Error, Result};
use crate::notify::{Notifier, SmtpNotifier};
use crate::session::{ComparisonSession, SlotTransition};
use crate::types::document::UploadedDocument;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Configuration, read-only after startup
    config: AppConfig,
    /// LLM provider behind the comparison engine
    llm_provider: Arc<dyn LlmProvider>,
    /// Comparison engine
    engine: ComparisonEngine,
    /// Audit trail (per-upload email)
    audit: AuditTrail,
    /// Active comparison sessions
    sessions: DashMap<Uuid, ComparisonSession>,
    /// Ready state, captured from the startup health probe
    ready: RwLock<bool>,
}

impl AppState {
    /// Create state with the real providers and probe the LLM endpoint once.
    ///
    /// A failed probe marks the server not ready but does not abort startup;
    /// per-interaction failures still surface as banners.
    pub async fn new(config: AppConfig) -> Result<Self> {
        let llm_provider: Arc<dyn LlmProvider> = Arc::new(OpenAiClient::new(&config.llm)?);
        let notifier: Arc<dyn Notifier> = Arc::new(SmtpNotifier::new(config.smtp.clone()));

        let state = Self::with_providers(config, llm_provider, notifier);

        match state.llm_provider().health_check().await {
            Ok(true) => {
                tracing::info!(model = state.llm_provider().model(), "LLM provider reachable");
            }
            other => {
                tracing::warn!("LLM provider unavailable at startup: {:?}", other);
                state.set_ready(false);
            }
        }

        Ok(state)
    }

    /// Create state over explicit providers (also the test seam)
    pub fn with_providers(
        config: AppConfig,
        llm_provider: Arc<dyn LlmProvider>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let engine = ComparisonEngine::new(Arc::clone(&llm_provider));
        let audit = AuditTrail::new(notifier, config.audit.clone());

        Self {
            inner: Arc::new(AppStateInner {
                config,
                llm_provider,
                engine,
                audit,
                sessions: DashMap::new(),
                ready: RwLock::new(true),
            }),
        }
    }

    /// Get configuration
    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    /// Get the LLM provider
    pub fn llm_provider(&self) -> &Arc<dyn LlmProvider> {
        &self.inner.llm_provider
    }

    /// Get the comparison engine
    pub fn engine(&self) -> &ComparisonEngine {
        &self.inner.engine
    }

    /// Get the audit trail
    pub fn audit(&self) -> &AuditTrail {
        &self.inner.audit
    }

    /// Check if the server is ready
    pub fn is_ready(&self) -> bool {
        *self.inner.ready.read()
    }

    /// Set ready state
    pub fn set_ready(&self, ready: bool) {
        *self.inner.ready.write() = ready;
    }

    /// Create a new comparison session
    pub fn create_session(&self) -> (Uuid, chrono::DateTime<chrono::Utc>) {
        let session = ComparisonSession::new();
        let id = session.id();
        let created_at = session.created_at();
        self.inner.sessions.insert(id, session);
        (id, created_at)
    }

    /// True when the session exists
    pub fn session_exists(&self, id: &Uuid) -> bool {
        self.inner.sessions.contains_key(id)
    }

    /// Store a document in its session slot, reporting the transition
    pub fn insert_document(&self, id: &Uuid, doc: UploadedDocument) -> Result<SlotTransition> {
        let mut session = self
            .inner
            .sessions
            .get_mut(id)
            .ok_or(Error::SessionNotFound(*id))?;
        Ok(session.insert(doc))
    }

    /// Both documents of a ready session, cloned out of the registry.
    ///
    /// `Ok(None)` means the session exists but is still waiting for a slot.
    pub fn session_documents(
        &self,
        id: &Uuid,
    ) -> Result<Option<(UploadedDocument, UploadedDocument)>> {
        let session = self
            .inner
            .sessions
            .get(id)
            .ok_or(Error::SessionNotFound(*id))?;
        Ok(session
            .documents()
            .map(|(doc1, doc2)| (doc1.clone(), doc2.clone())))
    }

    /// Drop a session and its documents
    pub fn clear_session(&self, id: &Uuid) -> Result<()> {
        self.inner
            .sessions
            .remove(id)
            .map(|_| ())
            .ok_or(Error::SessionNotFound(*id))
    }

    /// Number of active sessions
    pub fn session_count(&self) -> usize {
        self.inner.sessions.len()
    }
}
