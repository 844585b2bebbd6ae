use super::ConversationLog;
use super::Role;

#[test]
fn it_appends_in_order() {
    let mut log = ConversationLog::new();
    assert!(log.is_empty());

    log.append(Role::User, "I have a dry cough");
    log.append(Role::Assistant, "Tell me more about your symptoms.");

    assert_eq!(log.len(), 2);
    assert_eq!(log.entries()[0].role, Role::User);
    assert_eq!(log.entries()[0].text, "I have a dry cough");
    assert_eq!(log.entries()[1].role, Role::Assistant);
}

#[test]
fn it_stamps_entries() {
    let mut log = ConversationLog::new();
    log.append(Role::User, "hello");

    assert!(!log.entries()[0].sent_at.is_empty());
}

#[test]
fn it_replaces_tabs() {
    let mut log = ConversationLog::new();
    log.append(Role::Assistant, "a\tb");

    assert_eq!(log.entries()[0].text, "a  b");
}
