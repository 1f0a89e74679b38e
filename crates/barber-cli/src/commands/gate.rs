use std::sync::{Mutex, PoisonError};

use serde::Serialize;

use barber_access::{AccessGate, AdminGuard, IdentityProvider, Navigator, WatchIdentityProvider};
use barber_core::enums::AccessState;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Keeps the last redirect the gate asked for.
#[derive(Default)]
struct LastRedirect(Mutex<Option<String>>);

impl LastRedirect {
    fn take(&self) -> Option<String> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner).take()
    }
}

impl Navigator for LastRedirect {
    fn redirect(&self, path: &str) {
        tracing::info!(path, "gate redirect");
        *self.0.lock().unwrap_or_else(PoisonError::into_inner) = Some(path.to_string());
    }
}

#[derive(Debug, Serialize)]
struct GateResponse {
    subject_id: Option<String>,
    state: AccessState,
    is_authorized: bool,
    is_loading: bool,
    redirect: Option<String>,
}

pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let navigator = LastRedirect::default();
    let mut guard = AdminGuard::new(
        ctx.admin(),
        AccessGate::with_paths(&navigator, ctx.gate_paths()),
    );

    let provider = WatchIdentityProvider::new();
    let updates = provider.subscribe();
    guard.on_identity(provider.snapshot()).await;

    match ctx.identity.clone() {
        Some(identity) => provider.sign_in(identity),
        None => provider.sign_out(),
    }
    drop(provider);
    let status = guard.run(updates).await;

    output(
        &GateResponse {
            subject_id: ctx.identity.as_ref().map(|i| i.subject_id.clone()),
            state: status.state,
            is_authorized: status.is_authorized,
            is_loading: status.is_loading,
            redirect: navigator.take(),
        },
        flags.format,
    )
}
