use anyhow::bail;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::RoleCommands;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct RevokeResponse {
    id: String,
    revoked: bool,
}

pub async fn handle(action: &RoleCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let service = ctx.backend.local()?;
    match action {
        RoleCommands::Assign(args) => {
            if args.role.requires_organization() && args.org.is_none() {
                bail!("role '{}' requires --org", args.role);
            }
            let record = service
                .assign_role(&args.user_id, args.role, args.org.as_deref())
                .await?;
            output(&record, flags.format)
        }
        RoleCommands::Revoke { id } => {
            let revoked = service.revoke_role(id).await?;
            output(
                &RevokeResponse {
                    id: id.clone(),
                    revoked,
                },
                flags.format,
            )
        }
        RoleCommands::List { user_id } => output(&service.list_roles(user_id).await?, flags.format),
    }
}
