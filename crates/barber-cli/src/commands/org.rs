use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::OrgCommands;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct DeleteResponse {
    id: String,
    deleted: bool,
}

pub async fn handle(action: &OrgCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let service = ctx.backend.local()?;
    match action {
        OrgCommands::Create(args) => {
            let owner = match &args.owner {
                Some(owner) => owner.as_str(),
                None => ctx.require_subject()?,
            };
            let org = service.create_organization(&args.name, owner).await?;
            output(&org, flags.format)
        }
        OrgCommands::List => output(&service.list_organizations().await?, flags.format),
        OrgCommands::Activate { id } => {
            output(&service.set_organization_active(id, true).await?, flags.format)
        }
        OrgCommands::Deactivate { id } => {
            output(&service.set_organization_active(id, false).await?, flags.format)
        }
        OrgCommands::Transfer { id, new_owner } => {
            output(&service.transfer_ownership(id, new_owner).await?, flags.format)
        }
        OrgCommands::Delete { id } => {
            service.delete_organization(id).await?;
            output(
                &DeleteResponse {
                    id: id.clone(),
                    deleted: true,
                },
                flags.format,
            )
        }
    }
}
