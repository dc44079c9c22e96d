use tracing::info;

use crate::commands::parse_group_number;
use crate::core::command_registry::BotCommand;
use crate::core::dispatcher::CommandContext;
use crate::state::MAX_PASSWORD_SIZE;

pub struct PasswdCommand;

impl BotCommand for PasswdCommand {
    fn name(&self) -> &'static str {
        "passwd"
    }

    fn description(&self) -> &'static str {
        "Sets or clears a group chat password"
    }

    fn run(&self, ctx: &mut CommandContext<'_>, args: &[String]) {
        if !ctx.is_master() {
            ctx.authent_failed();
            return;
        }

        let Some(arg) = args.first() else {
            ctx.src.reply("Error: group number required");
            return;
        };

        let Some(groupnum) = parse_group_number(arg) else {
            ctx.src.reply("Error: Invalid group number");
            return;
        };

        if let Some(pw) = args.get(1) {
            if pw.len() >= MAX_PASSWORD_SIZE {
                ctx.src.reply("Password too long");
                return;
            }
        }

        let name = ctx.service.caller_name(ctx.src.caller());

        let Some(chat) = ctx.state.chat_mut(groupnum) else {
            ctx.src.reply("Error: Invalid group number");
            return;
        };

        match args.get(1) {
            None => {
                chat.password = None;
                ctx.src.reply("No password set");
                info!("No password set for group {groupnum} by {name}");
            }
            Some(pw) => {
                chat.password = Some(pw.clone());
                ctx.src.reply("Password set");
                info!("Password for group {groupnum} set by {name}");
            }
        }
    }
}
