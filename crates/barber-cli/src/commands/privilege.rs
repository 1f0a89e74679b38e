use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::PrivilegeCommands;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct RevokeResponse<'a> {
    user_id: &'a str,
    privilege: &'a str,
    revoked: bool,
}

pub async fn handle(
    action: &PrivilegeCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let service = ctx.backend.local()?;
    let default_privilege = ctx.config.access.admin_privilege.as_str();
    match action {
        PrivilegeCommands::Grant(args) => {
            let privilege = args.privilege.as_deref().unwrap_or(default_privilege);
            let grant = service.grant_privilege(&args.user_id, privilege).await?;
            output(&grant, flags.format)
        }
        PrivilegeCommands::Revoke(args) => {
            let privilege = args.privilege.as_deref().unwrap_or(default_privilege);
            let revoked = service.revoke_privilege(&args.user_id, privilege).await?;
            output(
                &RevokeResponse {
                    user_id: &args.user_id,
                    privilege,
                    revoked,
                },
                flags.format,
            )
        }
        PrivilegeCommands::List { user_id } => {
            output(&service.list_privileges(user_id).await?, flags.format)
        }
    }
}
