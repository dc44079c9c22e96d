use std::sync::Arc;

use tracing::{debug, warn};

use crate::core::auth::MasterGate;
use crate::core::command_registry::CommandRegistry;
use crate::core::command_source::CommandSource;
use crate::core::dispatcher::{CommandContext, CommandDispatcher, DispatchOutcome, ExecuteError};
use crate::model::{MessageIn, MessageOut};
use crate::service::ChatService;
use crate::state::BotState;

/// Turns one inbound message into zero or more replies. Unknown commands,
/// overlong lines and malformed quoting are dropped without a reply (they
/// only show up in the logs), matching the agent's historical behavior of
/// not echoing noise back at peers.
pub struct CommandProcessor {
    dispatcher: CommandDispatcher,
    service: Arc<dyn ChatService>,
    gate: Arc<dyn MasterGate>,
}

impl CommandProcessor {
    pub fn new(
        registry: Arc<CommandRegistry>,
        service: Arc<dyn ChatService>,
        gate: Arc<dyn MasterGate>,
    ) -> Self {
        Self {
            dispatcher: CommandDispatcher::new(registry),
            service,
            gate,
        }
    }

    pub fn handle(&self, state: &mut BotState, input: MessageIn) -> Vec<MessageOut> {
        let src = CommandSource::new(input.caller.clone());
        let mut ctx = CommandContext {
            src: &src,
            state,
            service: self.service.as_ref(),
            gate: self.gate.as_ref(),
        };

        match self.dispatcher.execute(&mut ctx, &input.text) {
            Ok(DispatchOutcome::Handled) => {}
            Ok(DispatchOutcome::UnknownCommand) => {
                debug!(
                    "unknown command from peer {}: \"{}\"",
                    input.caller.number, input.text
                );
            }
            Err(ExecuteError::InputTooLong) => {
                warn!(
                    "dropping overlong line from peer {} ({} bytes)",
                    input.caller.number,
                    input.text.len()
                );
            }
            Err(ExecuteError::Tokenize(e)) => {
                debug!("dropping malformed line from peer {}: {e}", input.caller.number);
            }
        }

        src.take_outs()
    }
}
