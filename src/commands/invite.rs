use tracing::{info, warn};

use crate::commands::parse_group_number;
use crate::core::command_registry::BotCommand;
use crate::core::dispatcher::CommandContext;

pub struct InviteCommand;

impl BotCommand for InviteCommand {
    fn name(&self) -> &'static str {
        "invite"
    }

    fn description(&self) -> &'static str {
        "Invites the caller to a group chat"
    }

    fn run(&self, ctx: &mut CommandContext<'_>, args: &[String]) {
        let groupnum = match args.first() {
            None => ctx.state.default_group,
            Some(arg) => match parse_group_number(arg) {
                Some(n) => n,
                None => {
                    ctx.src.reply("Error: Invalid group number");
                    return;
                }
            },
        };

        let Some(chat) = ctx.state.chat(groupnum) else {
            ctx.src.reply("Group doesn't exist.");
            return;
        };

        let name = ctx.service.caller_name(ctx.src.caller());

        if let Some(pw) = &chat.password {
            if args.get(1).map(String::as_str) != Some(pw.as_str()) {
                warn!("Failed to invite {name} to group {groupnum} (invalid password)");
                ctx.src.reply("Invalid password");
                return;
            }
        }

        if ctx.service.invite(ctx.src.caller(), groupnum).is_err() {
            warn!("Failed to invite {name} to group {groupnum}");
            ctx.src.reply("Invite failed.");
            return;
        }

        info!("Invited {name} to group {groupnum}");
    }
}
