use tracing::{info, warn};

use crate::core::command_registry::BotCommand;
use crate::core::dispatcher::CommandContext;

pub struct StatusMessageCommand;

impl BotCommand for StatusMessageCommand {
    fn name(&self) -> &'static str {
        "statusmessage"
    }

    fn description(&self) -> &'static str {
        "Sets the bot's status message"
    }

    fn run(&self, ctx: &mut CommandContext<'_>, args: &[String]) {
        if !ctx.is_master() {
            ctx.authent_failed();
            return;
        }

        let Some(msg) = args.first() else {
            ctx.src.reply("Error: message required");
            return;
        };

        if let Err(e) = ctx.service.set_status_message(msg) {
            warn!("failed to set status message: {e:#}");
            return;
        }

        info!(
            "{} set status message to \"{msg}\"",
            ctx.service.caller_name(ctx.src.caller())
        );
    }
}
