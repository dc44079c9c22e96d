use tracing::info;

use crate::core::command_registry::BotCommand;
use crate::core::dispatcher::CommandContext;

/// Full peer address length in hex characters.
const ADDRESS_HEX_LEN: usize = 76;

pub struct MasterCommand;

impl BotCommand for MasterCommand {
    fn name(&self) -> &'static str {
        "master"
    }

    fn description(&self) -> &'static str {
        "Adds an ID to the masterkeys file"
    }

    fn run(&self, ctx: &mut CommandContext<'_>, args: &[String]) {
        if !ctx.is_master() {
            ctx.authent_failed();
            return;
        }

        let Some(id) = args.first() else {
            ctx.src.reply("Error: ID required");
            return;
        };

        if id.len() != ADDRESS_HEX_LEN || !id.chars().all(|c| c.is_ascii_hexdigit()) {
            ctx.src.reply("Error: Invalid ID");
            return;
        }

        if ctx.gate.add_master(id).is_err() {
            ctx.src.reply("Error: could not find masterkeys file");
            return;
        }

        info!(
            "{} added master: {id}",
            ctx.service.caller_name(ctx.src.caller())
        );
        ctx.src.reply("ID added to masterkeys list");
    }
}
