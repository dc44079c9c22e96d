use tracing::info;

use crate::commands::parse_group_number;
use crate::core::command_registry::BotCommand;
use crate::core::dispatcher::CommandContext;

pub struct LeaveCommand;

impl BotCommand for LeaveCommand {
    fn name(&self) -> &'static str {
        "leave"
    }

    fn description(&self) -> &'static str {
        "Leaves a group chat"
    }

    fn run(&self, ctx: &mut CommandContext<'_>, args: &[String]) {
        if !ctx.is_master() {
            ctx.authent_failed();
            return;
        }

        let Some(arg) = args.first() else {
            ctx.src.reply("Error: Group number required");
            return;
        };

        let Some(groupnum) = parse_group_number(arg) else {
            ctx.src.reply("Error: Invalid group number");
            return;
        };

        if ctx.service.delete_group(groupnum).is_err() {
            ctx.src.reply("Error: Invalid group number");
            return;
        }

        ctx.state.remove_chat(groupnum);

        info!(
            "Left group {groupnum} ({})",
            ctx.service.caller_name(ctx.src.caller())
        );
        ctx.src.reply(format!("Left group {groupnum}"));
    }
}
