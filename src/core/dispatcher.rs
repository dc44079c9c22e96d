use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::core::auth::MasterGate;
use crate::core::command_registry::CommandRegistry;
use crate::core::command_source::CommandSource;
use crate::core::tokenizer::{tokenize, ArgumentList, TokenizeError, MAX_COMMAND_LENGTH};
use crate::service::ChatService;
use crate::state::BotState;

/// Everything a handler may touch during one invocation. `state` is held
/// exclusively for the duration of the call; `service` and `gate` are the
/// external collaborators.
pub struct CommandContext<'a> {
    pub src: &'a CommandSource,
    pub state: &'a mut BotState,
    pub service: &'a dyn ChatService,
    pub gate: &'a dyn MasterGate,
}

impl CommandContext<'_> {
    /// Fresh membership query against the master-key list, once per call.
    pub fn is_master(&self) -> bool {
        self.gate.is_privileged(self.src.caller())
    }

    /// Uniform response for gated commands invoked without privilege.
    /// Identical to the unknown-command experience on purpose: unprivileged
    /// callers learn nothing about which commands exist.
    pub fn authent_failed(&self) {
        self.src.reply("Invalid command.");
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    Handled,
    UnknownCommand,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ExecuteError {
    #[error("input exceeds {MAX_COMMAND_LENGTH} bytes")]
    InputTooLong,
    #[error(transparent)]
    Tokenize(#[from] TokenizeError),
}

pub struct CommandDispatcher {
    registry: Arc<CommandRegistry>,
}

impl CommandDispatcher {
    pub fn new(registry: Arc<CommandRegistry>) -> Self {
        Self { registry }
    }

    /// Single entry point for one received line: length gate, tokenize,
    /// dispatch. All failures are terminal for this line; nothing is retried
    /// and no reply is emitted here (handlers do their own replying).
    pub fn execute(
        &self,
        ctx: &mut CommandContext<'_>,
        input: &str,
    ) -> Result<DispatchOutcome, ExecuteError> {
        if input.len() >= MAX_COMMAND_LENGTH {
            return Err(ExecuteError::InputTooLong);
        }

        let argv = tokenize(input)?;
        Ok(self.dispatch(ctx, &argv))
    }

    /// Exact, case-sensitive lookup of element 0 in the command table.
    pub fn dispatch(&self, ctx: &mut CommandContext<'_>, argv: &ArgumentList) -> DispatchOutcome {
        for cmd in self.registry.all() {
            if cmd.name() == argv.command() {
                debug!("dispatching '{}' (argc={})", cmd.name(), argv.len() - 1);
                cmd.run(ctx, argv.args());
                return DispatchOutcome::Handled;
            }
        }
        DispatchOutcome::UnknownCommand
    }
}
