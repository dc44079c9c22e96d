use tracing::info;

use crate::core::command_registry::BotCommand;
use crate::core::dispatcher::CommandContext;
use crate::service::GroupType;
use crate::state::{GroupChat, MAX_PASSWORD_SIZE};

pub struct GroupCommand;

impl BotCommand for GroupCommand {
    fn name(&self) -> &'static str {
        "group"
    }

    fn description(&self) -> &'static str {
        "Creates a new group chat (text or audio, optional password)"
    }

    fn run(&self, ctx: &mut CommandContext<'_>, args: &[String]) {
        let Some(kind_arg) = args.first() else {
            ctx.src.reply("Please specify the group type: audio or text");
            return;
        };

        // audio only for the exact keyword; everything else is a text room
        let kind = if kind_arg.eq_ignore_ascii_case("audio") {
            GroupType::Audio
        } else {
            GroupType::Text
        };

        let name = ctx.service.caller_name(ctx.src.caller());
        let password = args.get(1).cloned();

        if let Some(pw) = &password {
            if pw.len() >= MAX_PASSWORD_SIZE {
                info!("Group chat creation by {name} failed: Password too long");
                ctx.src
                    .reply("Group chat instance failed to initialize: Password too long");
                return;
            }
        }

        let groupnum = match ctx.service.create_group(kind) {
            Ok(n) => n,
            Err(e) => {
                info!("Group chat creation by {name} failed to initialize: {e:#}");
                ctx.src.reply("Group chat instance failed to initialize");
                return;
            }
        };

        let protected = if password.is_some() {
            " (Password protected)"
        } else {
            ""
        };

        ctx.state.add_chat(GroupChat::new(groupnum, kind, password));

        info!("Group chat {groupnum} created by {name}{protected}");
        ctx.src.reply(format!("Group chat {groupnum} created{protected}"));
    }
}
