use tracing::info;

use crate::commands::parse_group_number;
use crate::core::command_registry::BotCommand;
use crate::core::dispatcher::CommandContext;

pub struct GmessageCommand;

impl BotCommand for GmessageCommand {
    fn name(&self) -> &'static str {
        "gmessage"
    }

    fn description(&self) -> &'static str {
        "Sends a message to a group chat"
    }

    fn run(&self, ctx: &mut CommandContext<'_>, args: &[String]) {
        if !ctx.is_master() {
            ctx.authent_failed();
            return;
        }

        let Some(group_arg) = args.first() else {
            ctx.src.reply("Error: Group number required");
            return;
        };

        let Some(msg) = args.get(1) else {
            ctx.src.reply("Error: Message required");
            return;
        };

        let Some(groupnum) = parse_group_number(group_arg) else {
            ctx.src.reply("Error: Invalid group number");
            return;
        };

        if ctx.state.chat(groupnum).is_none() {
            ctx.src.reply("Error: Invalid group number");
            return;
        }

        if ctx.service.group_message(groupnum, msg).is_err() {
            ctx.src.reply("Error: Failed to send message");
            return;
        }

        ctx.src.reply("Message sent");
        info!(
            "<{}> message to group {groupnum}: {msg}",
            ctx.service.caller_name(ctx.src.caller())
        );
    }
}
