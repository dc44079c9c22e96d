use std::sync::Arc;

use crate::commands::{
    default::DefaultCommand, gmessage::GmessageCommand, group::GroupCommand, help::HelpCommand,
    id::IdCommand, info::InfoCommand, invite::InviteCommand, leave::LeaveCommand,
    master::MasterCommand, name::NameCommand, passwd::PasswdCommand, purge::PurgeCommand,
    status::StatusCommand, statusmessage::StatusMessageCommand, title::TitleCommand,
};
use crate::core::dispatcher::CommandContext;

pub trait BotCommand: Send + Sync {
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;

    /// Runs the handler. `args` is everything after the command name. The
    /// handler owns its own error reporting through `ctx.src`; nothing
    /// propagates back to the dispatcher.
    fn run(&self, ctx: &mut CommandContext<'_>, args: &[String]);
}

/// The command table: built once at boot, immutable afterwards, looked up by
/// exact name in declared order.
pub struct CommandRegistry {
    cmds: Vec<Arc<dyn BotCommand>>,
}

impl CommandRegistry {
    pub fn build() -> Arc<Self> {
        Arc::new(Self {
            cmds: vec![
                Arc::new(DefaultCommand),
                Arc::new(GroupCommand),
                Arc::new(GmessageCommand),
                Arc::new(HelpCommand),
                Arc::new(IdCommand),
                Arc::new(InfoCommand),
                Arc::new(InviteCommand),
                Arc::new(LeaveCommand),
                Arc::new(MasterCommand),
                Arc::new(NameCommand),
                Arc::new(PasswdCommand),
                Arc::new(PurgeCommand),
                Arc::new(StatusCommand),
                Arc::new(StatusMessageCommand),
                Arc::new(TitleCommand),
            ],
        })
    }

    pub fn all(&self) -> &[Arc<dyn BotCommand>] {
        &self.cmds
    }

    pub fn list_commands(&self) -> String {
        self.cmds
            .iter()
            .map(|c| c.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
