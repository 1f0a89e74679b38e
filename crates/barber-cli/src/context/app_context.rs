use std::sync::Arc;

use anyhow::Context;

use barber_access::{AdminFlagResolver, CachedResolver, GatePaths, SubjectCache};
use barber_config::BarberConfig;
use barber_core::identity::Identity;
use barber_core::role::RoleAssignment;
use barber_db::service::BarberService;
use barber_rest::RestStore;

use crate::cli::GlobalFlags;
use crate::context::Backend;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: BarberConfig,
    pub backend: Backend,
    pub identity: Option<Identity>,
    pub role_cache: Arc<SubjectCache<RoleAssignment>>,
}

impl AppContext {
    /// Open the backend selected by `--remote` and resolve the acting identity.
    pub async fn init(config: BarberConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let role_cache: Arc<SubjectCache<RoleAssignment>> = Arc::new(SubjectCache::new());

        let backend = if flags.remote {
            let backend_config = config
                .require_backend()
                .context("--remote needs BARBER_BACKEND__URL and BARBER_BACKEND__ANON_KEY")?;
            Backend::Remote(RestStore::new(backend_config).context("failed to build backend client")?)
        } else {
            let mut service = BarberService::new_local(&config.database.path)
                .await
                .with_context(|| format!("failed to open database at {}", config.database.path))?;
            if config.access.cache_roles {
                service.add_invalidator(role_cache.clone());
            }
            Backend::Local(service)
        };

        let identity = acting_identity(&config, flags.subject.as_deref());
        tracing::debug!(
            backend = backend.kind(),
            subject_id = identity.as_ref().map(Identity::subject_id),
            "application context ready"
        );

        Ok(Self {
            config,
            backend,
            identity,
            role_cache,
        })
    }

    /// Role resolver over the active backend, sharing the process-wide cache.
    pub fn roles(&self) -> CachedResolver<&Backend> {
        let cache = if self.config.access.cache_roles {
            Arc::clone(&self.role_cache)
        } else {
            Arc::new(SubjectCache::new())
        };
        CachedResolver::with_cache(&self.backend, cache)
    }

    pub fn admin(&self) -> AdminFlagResolver<&Backend> {
        AdminFlagResolver::with_privilege(&self.backend, &self.config.access.admin_privilege)
    }

    pub fn gate_paths(&self) -> GatePaths {
        GatePaths {
            sign_in: self.config.access.sign_in_path.clone(),
            home: self.config.access.home_path.clone(),
        }
    }

    /// Subject for commands that default to "me".
    pub fn require_subject(&self) -> anyhow::Result<&str> {
        self.identity
            .as_ref()
            .map(Identity::subject_id)
            .context("no signed-in subject: pass --subject or set BARBER_AUTH__SUBJECT_ID")
    }
}

/// `--subject` wins over `auth.subject_id`; the configured email only
/// belongs to the configured subject.
fn acting_identity(config: &BarberConfig, subject_override: Option<&str>) -> Option<Identity> {
    if let Some(subject) = subject_override.filter(|s| !s.is_empty()) {
        return Some(Identity::new(subject));
    }
    if !config.auth.is_signed_in() {
        return None;
    }
    let identity = Identity::new(config.auth.subject_id.clone());
    if config.auth.email.is_empty() {
        Some(identity)
    } else {
        Some(identity.with_email(config.auth.email.clone()))
    }
}
