use tracing::info;

use crate::commands::parse_group_number;
use crate::core::command_registry::BotCommand;
use crate::core::dispatcher::CommandContext;

pub struct DefaultCommand;

impl BotCommand for DefaultCommand {
    fn name(&self) -> &'static str {
        "default"
    }

    fn description(&self) -> &'static str {
        "Sets the default group chat room"
    }

    fn run(&self, ctx: &mut CommandContext<'_>, args: &[String]) {
        if !ctx.is_master() {
            ctx.authent_failed();
            return;
        }

        let Some(arg) = args.first() else {
            ctx.src.reply("Error: Room number required");
            return;
        };

        let Some(groupnum) = parse_group_number(arg) else {
            ctx.src.reply("Error: Invalid room number");
            return;
        };

        ctx.state.default_group = groupnum;
        ctx.src.reply(format!("Default room number set to {groupnum}"));

        info!(
            "Default room number set to {groupnum} by {}",
            ctx.service.caller_name(ctx.src.caller())
        );
    }
}
