pub mod default;
pub mod gmessage;
pub mod group;
pub mod help;
pub mod id;
pub mod info;
pub mod invite;
pub mod leave;
pub mod master;
pub mod name;
pub mod passwd;
pub mod purge;
pub mod status;
pub mod statusmessage;
pub mod title;

/// Strict numeric parse for group/room numbers. Anything that is not a plain
/// non-negative integer is rejected (no atoi-style prefix parsing).
pub(crate) fn parse_group_number(arg: &str) -> Option<u32> {
    arg.parse().ok()
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use anyhow::{bail, Result};

    use crate::core::auth::MasterGate;
    use crate::core::command_registry::CommandRegistry;
    use crate::core::command_source::CommandSource;
    use crate::core::dispatcher::{CommandContext, CommandDispatcher, DispatchOutcome, ExecuteError};
    use crate::core::tokenizer::{TokenizeError, MAX_COMMAND_LENGTH};
    use crate::model::CallerId;
    use crate::service::{ChatService, GroupType, UserStatus};
    use crate::state::{BotState, GroupChat};

    struct FakeGate {
        privileged: bool,
        added: Mutex<Vec<String>>,
    }

    impl FakeGate {
        fn new(privileged: bool) -> Self {
            Self {
                privileged,
                added: Mutex::new(Vec::new()),
            }
        }
    }

    impl MasterGate for FakeGate {
        fn is_privileged(&self, _caller: &CallerId) -> bool {
            self.privileged
        }

        fn add_master(&self, id: &str) -> Result<()> {
            self.added.lock().unwrap().push(id.to_string());
            Ok(())
        }
    }

    #[derive(Default)]
    struct FakeService {
        created: Mutex<Vec<GroupType>>,
        deleted: Mutex<Vec<u32>>,
        invited: Mutex<Vec<(i64, u32)>>,
        messages: Mutex<Vec<(u32, String)>>,
        titles: Mutex<Vec<(u32, String)>>,
        names: Mutex<Vec<String>>,
        statuses: Mutex<Vec<UserStatus>>,
        status_messages: Mutex<Vec<String>>,
        fail_group_message: bool,
    }

    impl FakeService {
        fn touched(&self) -> bool {
            !self.created.lock().unwrap().is_empty()
                || !self.deleted.lock().unwrap().is_empty()
                || !self.invited.lock().unwrap().is_empty()
                || !self.messages.lock().unwrap().is_empty()
                || !self.titles.lock().unwrap().is_empty()
                || !self.names.lock().unwrap().is_empty()
                || !self.statuses.lock().unwrap().is_empty()
                || !self.status_messages.lock().unwrap().is_empty()
        }
    }

    impl ChatService for FakeService {
        fn self_address(&self) -> String {
            "AA00".repeat(19)
        }

        fn caller_name(&self, caller: &CallerId) -> String {
            format!("peer-{}", caller.number)
        }

        fn friend_count(&self) -> usize {
            1
        }

        fn online_friend_count(&self) -> usize {
            1
        }

        fn set_name(&self, name: &str) -> Result<()> {
            self.names.lock().unwrap().push(name.to_string());
            Ok(())
        }

        fn set_status(&self, status: UserStatus) -> Result<()> {
            self.statuses.lock().unwrap().push(status);
            Ok(())
        }

        fn set_status_message(&self, message: &str) -> Result<()> {
            self.status_messages.lock().unwrap().push(message.to_string());
            Ok(())
        }

        fn create_group(&self, kind: GroupType) -> Result<u32> {
            let mut created = self.created.lock().unwrap();
            created.push(kind);
            Ok(created.len() as u32 - 1)
        }

        fn delete_group(&self, group: u32) -> Result<()> {
            self.deleted.lock().unwrap().push(group);
            Ok(())
        }

        fn invite(&self, caller: &CallerId, group: u32) -> Result<()> {
            self.invited.lock().unwrap().push((caller.number, group));
            Ok(())
        }

        fn group_message(&self, group: u32, text: &str) -> Result<()> {
            if self.fail_group_message {
                bail!("send failed");
            }
            self.messages.lock().unwrap().push((group, text.to_string()));
            Ok(())
        }

        fn set_group_title(&self, group: u32, title: &str) -> Result<()> {
            self.titles.lock().unwrap().push((group, title.to_string()));
            Ok(())
        }

        fn peer_count(&self, _group: u32) -> Option<u32> {
            Some(2)
        }
    }

    struct Harness {
        dispatcher: CommandDispatcher,
        service: FakeService,
        gate: FakeGate,
        state: BotState,
        src: CommandSource,
    }

    impl Harness {
        fn new(privileged: bool) -> Self {
            Self {
                dispatcher: CommandDispatcher::new(CommandRegistry::build()),
                service: FakeService::default(),
                gate: FakeGate::new(privileged),
                state: BotState::new(),
                src: CommandSource::new(CallerId::new(7, "CAFE")),
            }
        }

        fn execute(&mut self, input: &str) -> Result<DispatchOutcome, ExecuteError> {
            let mut ctx = CommandContext {
                src: &self.src,
                state: &mut self.state,
                service: &self.service,
                gate: &self.gate,
            };
            self.dispatcher.execute(&mut ctx, input)
        }

        fn replies(&self) -> Vec<String> {
            self.src.take_outs().into_iter().map(|o| o.text).collect()
        }
    }

    #[test]
    fn overlong_input_is_rejected_before_dispatch() {
        let mut h = Harness::new(true);
        let input = "a".repeat(MAX_COMMAND_LENGTH);
        assert_eq!(h.execute(&input), Err(ExecuteError::InputTooLong));
        assert!(h.replies().is_empty());
        assert!(!h.service.touched());
    }

    #[test]
    fn unknown_command_is_silent() {
        let mut h = Harness::new(true);
        assert_eq!(
            h.execute("nosuchcommand"),
            Ok(DispatchOutcome::UnknownCommand)
        );
        assert!(h.replies().is_empty());
    }

    #[test]
    fn tokenize_failure_propagates() {
        let mut h = Harness::new(true);
        assert_eq!(
            h.execute("gmessage 3 \"unterminated"),
            Err(ExecuteError::Tokenize(TokenizeError::UnterminatedQuote))
        );
        assert!(h.replies().is_empty());
    }

    #[test]
    fn gated_command_without_privilege_replies_invalid_command() {
        let mut h = Harness::new(false);
        assert_eq!(h.execute("leave 2"), Ok(DispatchOutcome::Handled));
        assert_eq!(h.replies(), vec!["Invalid command."]);
        assert!(!h.service.touched());
        assert_eq!(h.state.default_group, 0);
    }

    #[test]
    fn default_sets_the_default_room() {
        let mut h = Harness::new(true);
        assert_eq!(h.execute("default 5"), Ok(DispatchOutcome::Handled));
        assert_eq!(h.state.default_group, 5);
        assert_eq!(h.replies(), vec!["Default room number set to 5"]);
    }

    #[test]
    fn default_rejects_garbage_numbers() {
        let mut h = Harness::new(true);
        h.execute("default x9").unwrap();
        assert_eq!(h.replies(), vec!["Error: Invalid room number"]);
        assert_eq!(h.state.default_group, 0);
    }

    #[test]
    fn group_creates_text_room_and_records_it() {
        let mut h = Harness::new(false);
        assert_eq!(h.execute("group text"), Ok(DispatchOutcome::Handled));
        assert_eq!(*h.service.created.lock().unwrap(), vec![GroupType::Text]);
        assert_eq!(h.state.chat(0).unwrap().password, None);
        assert_eq!(h.replies(), vec!["Group chat 0 created"]);
    }

    #[test]
    fn group_type_is_audio_only_for_the_audio_keyword() {
        let mut h = Harness::new(false);
        h.execute("group AUDIO secret").unwrap();
        h.execute("group voice").unwrap();
        assert_eq!(
            *h.service.created.lock().unwrap(),
            vec![GroupType::Audio, GroupType::Text]
        );
        assert_eq!(h.state.chat(0).unwrap().password.as_deref(), Some("secret"));
        assert_eq!(
            h.replies(),
            vec!["Group chat 0 created (Password protected)", "Group chat 1 created"]
        );
    }

    #[test]
    fn gmessage_sends_to_a_known_group() {
        let mut h = Harness::new(true);
        h.state.add_chat(GroupChat::new(3, GroupType::Text, None));
        h.execute("gmessage 3 \"hello world\"").unwrap();
        assert_eq!(
            *h.service.messages.lock().unwrap(),
            vec![(3, "hello world".to_string())]
        );
        assert_eq!(h.replies(), vec!["Message sent"]);
    }

    #[test]
    fn gmessage_rejects_unknown_groups() {
        let mut h = Harness::new(true);
        h.execute("gmessage 3 \"hello\"").unwrap();
        assert_eq!(h.replies(), vec!["Error: Invalid group number"]);
        assert!(h.service.messages.lock().unwrap().is_empty());
    }

    #[test]
    fn gmessage_reports_send_failure() {
        let mut h = Harness::new(true);
        h.service.fail_group_message = true;
        h.state.add_chat(GroupChat::new(1, GroupType::Text, None));
        h.execute("gmessage 1 \"x\"").unwrap();
        assert_eq!(h.replies(), vec!["Error: Failed to send message"]);
    }

    #[test]
    fn invite_checks_the_room_password() {
        let mut h = Harness::new(false);
        h.state
            .add_chat(GroupChat::new(2, GroupType::Text, Some("pw".into())));

        h.execute("invite 2 wrong").unwrap();
        assert_eq!(h.replies(), vec!["Invalid password"]);
        assert!(h.service.invited.lock().unwrap().is_empty());

        h.execute("invite 2 pw").unwrap();
        assert_eq!(*h.service.invited.lock().unwrap(), vec![(7, 2)]);
        assert!(h.replies().is_empty());
    }

    #[test]
    fn invite_without_args_targets_the_default_room() {
        let mut h = Harness::new(false);
        h.state.default_group = 4;
        h.state.add_chat(GroupChat::new(4, GroupType::Audio, None));
        h.execute("invite").unwrap();
        assert_eq!(*h.service.invited.lock().unwrap(), vec![(7, 4)]);
    }

    #[test]
    fn invite_to_missing_room_fails() {
        let mut h = Harness::new(false);
        h.execute("invite 9").unwrap();
        assert_eq!(h.replies(), vec!["Group doesn't exist."]);
    }

    #[test]
    fn leave_deletes_and_forgets_the_group() {
        let mut h = Harness::new(true);
        h.state.add_chat(GroupChat::new(2, GroupType::Text, None));
        h.execute("leave 2").unwrap();
        assert_eq!(*h.service.deleted.lock().unwrap(), vec![2]);
        assert!(h.state.chat(2).is_none());
        assert_eq!(h.replies(), vec!["Left group 2"]);
    }

    #[test]
    fn master_appends_a_well_formed_id() {
        let mut h = Harness::new(true);
        let id = "AB".repeat(38);
        h.execute(&format!("master {id}")).unwrap();
        assert_eq!(*h.gate.added.lock().unwrap(), vec![id]);
        assert_eq!(h.replies(), vec!["ID added to masterkeys list"]);
    }

    #[test]
    fn master_rejects_short_ids() {
        let mut h = Harness::new(true);
        h.execute("master ABCD").unwrap();
        assert!(h.gate.added.lock().unwrap().is_empty());
        assert_eq!(h.replies(), vec!["Error: Invalid ID"]);
    }

    #[test]
    fn passwd_sets_and_clears_the_room_password() {
        let mut h = Harness::new(true);
        h.state.add_chat(GroupChat::new(1, GroupType::Text, None));

        h.execute("passwd 1 sesame").unwrap();
        assert_eq!(h.state.chat(1).unwrap().password.as_deref(), Some("sesame"));
        assert_eq!(h.replies(), vec!["Password set"]);

        h.execute("passwd 1").unwrap();
        assert_eq!(h.state.chat(1).unwrap().password, None);
        assert_eq!(h.replies(), vec!["No password set"]);
    }

    #[test]
    fn purge_stores_the_limit_in_seconds() {
        let mut h = Harness::new(true);
        h.execute("purge 7").unwrap();
        assert_eq!(h.state.inactive_limit, 7 * 24 * 60 * 60);
        assert_eq!(h.replies(), vec!["Purge time set to 7 days"]);

        h.execute("purge 0").unwrap();
        assert_eq!(h.replies(), vec!["Error: number > 0 required"]);
    }

    #[test]
    fn status_maps_keywords_case_insensitively() {
        let mut h = Harness::new(true);
        h.execute("status BUSY").unwrap();
        assert_eq!(*h.service.statuses.lock().unwrap(), vec![UserStatus::Busy]);
        assert!(h.replies().is_empty());

        h.execute("status sleeping").unwrap();
        assert_eq!(
            h.replies(),
            vec!["Invalid status. Valid statuses are: online, busy and away."]
        );
    }

    #[test]
    fn title_updates_service_and_state() {
        let mut h = Harness::new(true);
        h.state.add_chat(GroupChat::new(2, GroupType::Text, None));
        h.execute("title 2 \"new room title\"").unwrap();
        assert_eq!(
            *h.service.titles.lock().unwrap(),
            vec![(2, "new room title".to_string())]
        );
        assert_eq!(
            h.state.chat(2).unwrap().title.as_deref(),
            Some("new room title")
        );
        assert_eq!(h.replies(), vec!["Group title set"]);
    }

    #[test]
    fn help_shows_master_section_only_to_masters() {
        let mut h = Harness::new(false);
        h.execute("help").unwrap();
        assert_eq!(h.replies().len(), 1);

        let mut h = Harness::new(true);
        h.execute("help").unwrap();
        let replies = h.replies();
        assert_eq!(replies.len(), 2);
        assert!(replies[1].contains("master <id>"));
    }

    #[test]
    fn id_replies_the_self_address() {
        let mut h = Harness::new(false);
        h.execute("id").unwrap();
        assert_eq!(h.replies(), vec![h.service.self_address()]);
    }

    #[test]
    fn info_lists_active_groups() {
        let mut h = Harness::new(false);
        h.state.add_chat(GroupChat::new(0, GroupType::Text, None));
        h.execute("info").unwrap();
        let replies = h.replies();
        assert_eq!(replies.len(), 2);
        assert!(replies[0].starts_with("Uptime: "));
        assert!(replies[1].contains("Group 0 | Text | peers: 2 | Title: None"));
    }
}
