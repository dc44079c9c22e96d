pub mod auth;
pub mod command_processor;
pub mod command_registry;
pub mod command_source;
pub mod dispatcher;
pub mod message_dispatcher;
pub mod tokenizer;

pub use command_processor::CommandProcessor;
pub use command_registry::CommandRegistry;
pub use message_dispatcher::MessageDispatcher;
