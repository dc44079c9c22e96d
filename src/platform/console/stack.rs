use std::collections::HashMap;
use std::sync::Mutex;

use anyhow::{bail, Result};
use tracing::debug;

use crate::model::CallerId;
use crate::service::{ChatService, GroupType, UserStatus};

struct StackInner {
    next_group: u32,
    groups: HashMap<u32, GroupType>,
    name: String,
    status: UserStatus,
    status_message: String,
}

/// In-memory stand-in for the messaging/group-chat service, backing the
/// console transport. Group "membership" is just the bot itself, so peer
/// counts are always 1.
pub struct ConsoleStack {
    address: String,
    inner: Mutex<StackInner>,
}

impl ConsoleStack {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            inner: Mutex::new(StackInner {
                next_group: 0,
                groups: HashMap::new(),
                name: "wardenbot".to_string(),
                status: UserStatus::Online,
                status_message: String::new(),
            }),
        }
    }
}

impl ChatService for ConsoleStack {
    fn self_address(&self) -> String {
        self.address.clone()
    }

    fn caller_name(&self, caller: &CallerId) -> String {
        format!("console:{}", caller.number)
    }

    fn friend_count(&self) -> usize {
        1
    }

    fn online_friend_count(&self) -> usize {
        1
    }

    fn set_name(&self, name: &str) -> Result<()> {
        self.inner.lock().unwrap().name = name.to_string();
        Ok(())
    }

    fn set_status(&self, status: UserStatus) -> Result<()> {
        self.inner.lock().unwrap().status = status;
        Ok(())
    }

    fn set_status_message(&self, message: &str) -> Result<()> {
        self.inner.lock().unwrap().status_message = message.to_string();
        Ok(())
    }

    fn create_group(&self, kind: GroupType) -> Result<u32> {
        let mut inner = self.inner.lock().unwrap();
        let num = inner.next_group;
        inner.next_group += 1;
        inner.groups.insert(num, kind);
        Ok(num)
    }

    fn delete_group(&self, group: u32) -> Result<()> {
        if self.inner.lock().unwrap().groups.remove(&group).is_none() {
            bail!("no such group: {group}");
        }
        Ok(())
    }

    fn invite(&self, caller: &CallerId, group: u32) -> Result<()> {
        if !self.inner.lock().unwrap().groups.contains_key(&group) {
            bail!("no such group: {group}");
        }
        debug!("console invite: peer {} -> group {group}", caller.number);
        Ok(())
    }

    fn group_message(&self, group: u32, text: &str) -> Result<()> {
        if !self.inner.lock().unwrap().groups.contains_key(&group) {
            bail!("no such group: {group}");
        }
        println!("[group {group}] {text}");
        Ok(())
    }

    fn set_group_title(&self, group: u32, _title: &str) -> Result<()> {
        if !self.inner.lock().unwrap().groups.contains_key(&group) {
            bail!("no such group: {group}");
        }
        Ok(())
    }

    fn peer_count(&self, group: u32) -> Option<u32> {
        self.inner
            .lock()
            .unwrap()
            .groups
            .contains_key(&group)
            .then_some(1)
    }
}
