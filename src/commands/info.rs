use std::fmt::Write;

use crate::core::command_registry::BotCommand;
use crate::core::dispatcher::CommandContext;
use crate::state::SECONDS_IN_DAY;

pub struct InfoCommand;

fn elapsed_time_str(secs: u64) -> String {
    let days = secs / SECONDS_IN_DAY;
    let hours = (secs % SECONDS_IN_DAY) / 3600;
    let minutes = (secs % 3600) / 60;
    format!("{days} days, {hours} hours, {minutes} minutes")
}

impl BotCommand for InfoCommand {
    fn name(&self) -> &'static str {
        "info"
    }

    fn description(&self) -> &'static str {
        "Prints bot status and lists active group chats"
    }

    fn run(&self, ctx: &mut CommandContext<'_>, _args: &[String]) {
        let mut msg = format!(
            "Uptime: {}\n",
            elapsed_time_str(ctx.state.uptime().as_secs())
        );
        let _ = writeln!(
            msg,
            "Friends: {} ({} online)",
            ctx.service.friend_count(),
            ctx.service.online_friend_count()
        );
        let _ = write!(
            msg,
            "Inactive friends are purged after {} days",
            ctx.state.inactive_limit / SECONDS_IN_DAY
        );
        ctx.src.reply(msg);

        if ctx.state.chats().is_empty() {
            ctx.src.reply("No active groupchats");
            return;
        }

        let mut msg = String::new();
        for chat in ctx.state.chats() {
            // a group the service no longer knows about is skipped
            let Some(peers) = ctx.service.peer_count(chat.number) else {
                continue;
            };
            let title = chat.title.as_deref().unwrap_or("None");
            let _ = writeln!(
                msg,
                "Group {} | {} | peers: {} | Title: {}",
                chat.number,
                chat.kind.label(),
                peers,
                title
            );
        }
        ctx.src.reply(msg.trim_end().to_string());
    }
}
