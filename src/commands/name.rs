use tracing::{info, warn};

use crate::core::command_registry::BotCommand;
use crate::core::dispatcher::CommandContext;

pub struct NameCommand;

impl BotCommand for NameCommand {
    fn name(&self) -> &'static str {
        "name"
    }

    fn description(&self) -> &'static str {
        "Sets the bot's name"
    }

    fn run(&self, ctx: &mut CommandContext<'_>, args: &[String]) {
        if !ctx.is_master() {
            ctx.authent_failed();
            return;
        }

        let Some(name) = args.first() else {
            ctx.src.reply("Error: Name required");
            return;
        };

        if let Err(e) = ctx.service.set_name(name) {
            warn!("failed to set name: {e:#}");
            return;
        }

        info!(
            "{} set name to {name}",
            ctx.service.caller_name(ctx.src.caller())
        );
    }
}
