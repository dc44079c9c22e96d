pub mod receiver;
pub mod sender;
pub mod stack;

pub use receiver::ConsoleReceiver;
pub use stack::ConsoleStack;
