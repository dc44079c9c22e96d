use tracing::info;

use crate::core::command_registry::BotCommand;
use crate::core::dispatcher::CommandContext;
use crate::state::SECONDS_IN_DAY;

pub struct PurgeCommand;

impl BotCommand for PurgeCommand {
    fn name(&self) -> &'static str {
        "purge"
    }

    fn description(&self) -> &'static str {
        "Sets the number of days before an inactive friend is deleted"
    }

    fn run(&self, ctx: &mut CommandContext<'_>, args: &[String]) {
        if !ctx.is_master() {
            ctx.authent_failed();
            return;
        }

        let days = args.first().and_then(|a| a.parse::<u64>().ok());

        let Some(days) = days.filter(|&d| d > 0) else {
            ctx.src.reply("Error: number > 0 required");
            return;
        };

        ctx.state.inactive_limit = days * SECONDS_IN_DAY;

        ctx.src.reply(format!("Purge time set to {days} days"));
        info!(
            "Purge time set to {days} days by {}",
            ctx.service.caller_name(ctx.src.caller())
        );
    }
}
