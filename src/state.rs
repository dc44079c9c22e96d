use std::time::{Duration, Instant};

use crate::service::GroupType;

pub const MAX_PASSWORD_SIZE: usize = 64;
pub const SECONDS_IN_DAY: u64 = 60 * 60 * 24;

const DEFAULT_PURGE_DAYS: u64 = 30;

/// One group chat the bot is currently in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupChat {
    pub number: u32,
    pub kind: GroupType,
    pub password: Option<String>,
    pub title: Option<String>,
}

impl GroupChat {
    pub fn new(number: u32, kind: GroupType, password: Option<String>) -> Self {
        Self {
            number,
            kind,
            password,
            title: None,
        }
    }
}

/// Mutable agent state, owned by the message loop and passed by `&mut` into
/// each command invocation. There is exactly one of these per running agent.
#[derive(Debug)]
pub struct BotState {
    pub default_group: u32,
    /// Seconds of inactivity before a friend is purged.
    pub inactive_limit: u64,
    started: Instant,
    chats: Vec<GroupChat>,
}

impl BotState {
    pub fn new() -> Self {
        Self {
            default_group: 0,
            inactive_limit: DEFAULT_PURGE_DAYS * SECONDS_IN_DAY,
            started: Instant::now(),
            chats: Vec::new(),
        }
    }

    pub fn uptime(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn chats(&self) -> &[GroupChat] {
        &self.chats
    }

    pub fn chat(&self, number: u32) -> Option<&GroupChat> {
        self.chats.iter().find(|c| c.number == number)
    }

    pub fn chat_mut(&mut self, number: u32) -> Option<&mut GroupChat> {
        self.chats.iter_mut().find(|c| c.number == number)
    }

    pub fn add_chat(&mut self, chat: GroupChat) {
        self.chats.push(chat);
    }

    /// Forgets a group after leaving it. No-op when the number is unknown.
    pub fn remove_chat(&mut self, number: u32) {
        self.chats.retain(|c| c.number != number);
    }
}

impl Default for BotState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chats_are_found_by_number() {
        let mut state = BotState::new();
        state.add_chat(GroupChat::new(3, GroupType::Text, None));
        state.add_chat(GroupChat::new(7, GroupType::Audio, Some("pw".into())));

        assert_eq!(state.chat(3).unwrap().kind, GroupType::Text);
        assert_eq!(state.chat(7).unwrap().password.as_deref(), Some("pw"));
        assert!(state.chat(1).is_none());

        state.remove_chat(3);
        assert!(state.chat(3).is_none());
        assert_eq!(state.chats().len(), 1);
    }
}
