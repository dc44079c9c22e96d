use anyhow::Result;

use crate::model::CallerId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupType {
    Text,
    Audio,
}

impl GroupType {
    pub fn label(self) -> &'static str {
        match self {
            GroupType::Text => "Text",
            GroupType::Audio => "Audio",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserStatus {
    Online,
    Away,
    Busy,
}

/// Capability boundary to the messaging/group-chat service. Handlers call
/// these; the engine itself never does. Implementations are expected to be
/// shareable (`&self` receivers with interior mutability where needed).
pub trait ChatService: Send + Sync {
    /// The bot's own address as uppercase hex, as replied by `id`.
    fn self_address(&self) -> String;

    /// Display name of a peer, for log lines.
    fn caller_name(&self, caller: &CallerId) -> String;

    fn friend_count(&self) -> usize;
    fn online_friend_count(&self) -> usize;

    fn set_name(&self, name: &str) -> Result<()>;
    fn set_status(&self, status: UserStatus) -> Result<()>;
    fn set_status_message(&self, message: &str) -> Result<()>;

    /// Creates a group chat of the given type, returning its number.
    fn create_group(&self, kind: GroupType) -> Result<u32>;
    fn delete_group(&self, group: u32) -> Result<()>;
    fn invite(&self, caller: &CallerId, group: u32) -> Result<()>;
    fn group_message(&self, group: u32, text: &str) -> Result<()>;
    fn set_group_title(&self, group: u32, title: &str) -> Result<()>;

    /// Peer count for an active group, `None` if the group is gone.
    fn peer_count(&self, group: u32) -> Option<u32>;
}
