use crate::cli::GlobalFlags;
use crate::cli::subcommands::StaffCommands;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(
    action: &StaffCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let service = ctx.backend.local()?;
    match action {
        StaffCommands::Add(args) => {
            let staff = service
                .add_staff_member(&args.org_id, &args.name, args.user.as_deref())
                .await?;
            output(&staff, flags.format)
        }
        StaffCommands::List { org_id } => output(&service.list_staff(org_id).await?, flags.format),
        StaffCommands::Activate { id } => {
            output(&service.set_staff_active(id, true).await?, flags.format)
        }
        StaffCommands::Deactivate { id } => {
            output(&service.set_staff_active(id, false).await?, flags.format)
        }
    }
}
