use anyhow::Result;

use crate::model::CallerId;

/// Authorization gate backed by the externally maintained master-key list.
///
/// `is_privileged` must be consulted fresh on every gated invocation: the
/// `master` command can grow the list while the bot is running, so there is
/// no caching layer in front of it.
pub trait MasterGate: Send + Sync {
    fn is_privileged(&self, caller: &CallerId) -> bool;

    /// Appends a new identity to the list.
    fn add_master(&self, id: &str) -> Result<()>;
}
