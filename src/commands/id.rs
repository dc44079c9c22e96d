use crate::core::command_registry::BotCommand;
use crate::core::dispatcher::CommandContext;

pub struct IdCommand;

impl BotCommand for IdCommand {
    fn name(&self) -> &'static str {
        "id"
    }

    fn description(&self) -> &'static str {
        "Prints the bot's own address"
    }

    fn run(&self, ctx: &mut CommandContext<'_>, _args: &[String]) {
        ctx.src.reply(ctx.service.self_address());
    }
}
