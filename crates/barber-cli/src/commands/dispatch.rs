use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Whoami => commands::whoami::handle(ctx, flags).await,
        Commands::Gate => commands::gate::handle(ctx, flags).await,
        Commands::Org { action } => commands::org::handle(&action, ctx, flags).await,
        Commands::Staff { action } => commands::staff::handle(&action, ctx, flags).await,
        Commands::Role { action } => commands::role::handle(&action, ctx, flags).await,
        Commands::Privilege { action } => commands::privilege::handle(&action, ctx, flags).await,
        Commands::Config { action } => commands::config::handle(&action, &ctx.config, flags),
    }
}
