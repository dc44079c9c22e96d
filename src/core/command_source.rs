use std::sync::{Arc, Mutex};

use crate::model::{CallerId, MessageOut};

/// Per-invocation reply collector. Handlers push human-readable text here;
/// the message loop drains it after dispatch and hands the batch to the
/// platform sender.
#[derive(Clone)]
pub struct CommandSource {
    caller: CallerId,
    outs: Arc<Mutex<Vec<MessageOut>>>,
}

impl CommandSource {
    pub fn new(caller: CallerId) -> Self {
        Self {
            caller,
            outs: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn caller(&self) -> &CallerId {
        &self.caller
    }

    pub fn reply(&self, text: impl Into<String>) {
        self.outs
            .lock()
            .unwrap()
            .push(MessageOut::text(self.caller.clone(), text));
    }

    pub fn take_outs(&self) -> Vec<MessageOut> {
        std::mem::take(&mut *self.outs.lock().unwrap())
    }
}
