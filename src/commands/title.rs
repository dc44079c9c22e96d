use tracing::{info, warn};

use crate::commands::parse_group_number;
use crate::core::command_registry::BotCommand;
use crate::core::dispatcher::CommandContext;

pub struct TitleCommand;

impl BotCommand for TitleCommand {
    fn name(&self) -> &'static str {
        "title"
    }

    fn description(&self) -> &'static str {
        "Sets a group chat title"
    }

    fn run(&self, ctx: &mut CommandContext<'_>, args: &[String]) {
        if !ctx.is_master() {
            ctx.authent_failed();
            return;
        }

        if args.len() < 2 {
            ctx.src.reply("Error: Two arguments are required");
            return;
        }

        let Some(groupnum) = parse_group_number(&args[0]) else {
            ctx.src.reply("Error: Invalid group number");
            return;
        };

        let title = &args[1];
        let name = ctx.service.caller_name(ctx.src.caller());

        if ctx.service.set_group_title(groupnum, title).is_err() {
            warn!("{name} failed to set the title '{title}' for group {groupnum}");
            ctx.src.reply(
                "Failed to set title. This may be caused by an invalid group number or an empty room",
            );
            return;
        }

        if let Some(chat) = ctx.state.chat_mut(groupnum) {
            chat.title = Some(title.clone());
        }

        info!("{name} set group {groupnum} title to {title}");
        ctx.src.reply("Group title set");
    }
}
