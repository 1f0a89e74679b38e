use anyhow::Context;
use serde::Serialize;

use barber_core::role::RoleAssignment;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct WhoamiResponse {
    signed_in: bool,
    subject_id: Option<String>,
    email: Option<String>,
    role: RoleAssignment,
    is_super_admin: bool,
    backend: &'static str,
}

pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let identity = ctx.identity.as_ref();

    let role = ctx
        .roles()
        .resolve(identity)
        .await
        .context("role resolution failed")?;
    let is_super_admin = ctx.admin().is_super_admin(identity).await;

    output(
        &WhoamiResponse {
            signed_in: identity.is_some(),
            subject_id: identity.map(|i| i.subject_id.clone()),
            email: identity.and_then(|i| i.email.clone()),
            role,
            is_super_admin,
            backend: ctx.backend.kind(),
        },
        flags.format,
    )
}
