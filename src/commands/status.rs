use tracing::{info, warn};

use crate::core::command_registry::BotCommand;
use crate::core::dispatcher::CommandContext;
use crate::service::UserStatus;

pub struct StatusCommand;

impl BotCommand for StatusCommand {
    fn name(&self) -> &'static str {
        "status"
    }

    fn description(&self) -> &'static str {
        "Sets the bot's status (online, busy or away)"
    }

    fn run(&self, ctx: &mut CommandContext<'_>, args: &[String]) {
        if !ctx.is_master() {
            ctx.authent_failed();
            return;
        }

        let Some(status) = args.first() else {
            ctx.src.reply("Error: status required");
            return;
        };

        let kind = match status.to_ascii_lowercase().as_str() {
            "online" => UserStatus::Online,
            "away" => UserStatus::Away,
            "busy" => UserStatus::Busy,
            _ => {
                ctx.src
                    .reply("Invalid status. Valid statuses are: online, busy and away.");
                return;
            }
        };

        if let Err(e) = ctx.service.set_status(kind) {
            warn!("failed to set status: {e:#}");
            return;
        }

        info!(
            "{} set status to {status}",
            ctx.service.caller_name(ctx.src.caller())
        );
    }
}
