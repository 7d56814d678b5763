use super::*;

#[test]
fn test_append_assigns_monotonic_ids() {
    let mut convo = Conversation::new();
    let a = convo.append_message(Message::new_user("first"));
    let b = convo.append_message(Message::new_bot("second"));
    let c = convo.append_message(Message::new_user("third"));

    assert!(a < b && b < c);
    assert_eq!(convo.len(), 3);
    assert_eq!(convo.messages()[0].text(), "first");
    assert_eq!(convo.messages()[2].text(), "third");
}

#[test]
fn test_remove_message_preserves_order() {
    let mut convo = Conversation::new();
    let _a = convo.append_message(Message::new_user("one"));
    let b = convo.append_message(Message::new_bot("two"));
    let c = convo.append_message(Message::new_user("three"));

    let removed = convo.remove_message(b).expect("message must exist");
    assert_eq!(removed.text(), "two");
    assert_eq!(convo.len(), 2);
    assert_eq!(convo.messages()[0].text(), "one");
    assert_eq!(convo.messages()[1].text(), "three");

    // Survivor ids are untouched by the removal.
    assert_eq!(convo.messages()[1].id(), c);
}

#[test]
fn test_remove_unknown_id_is_noop() {
    let mut convo = Conversation::new();
    convo.append_message(Message::new_user("only"));
    assert!(convo.remove_message(42).is_none());
    assert_eq!(convo.len(), 1);
}

#[test]
fn test_ids_not_reused_after_removal() {
    let mut convo = Conversation::new();
    let a = convo.append_message(Message::new_user("one"));
    convo.remove_message(a);
    let b = convo.append_message(Message::new_user("two"));
    assert!(b > a);
}

#[test]
fn test_clear_empties_any_length() {
    let mut convo = Conversation::new();
    for i in 0..10 {
        convo.append_message(Message::new_user(format!("msg {i}")));
    }
    convo.clear();
    assert!(convo.is_empty());

    // Clearing an already empty conversation is fine too.
    convo.clear();
    assert!(convo.is_empty());
}

#[test]
fn test_last_reply_skips_user_messages() {
    let mut convo = Conversation::new();
    assert!(convo.last_reply().is_none());

    convo.append_message(Message::new_user("Hello"));
    assert!(convo.last_reply().is_none());

    convo.append_message(Message::new_bot("Hi there"));
    convo.append_message(Message::new_user("How are you?"));

    let reply = convo.last_reply().expect("reply must exist");
    assert_eq!(reply.text(), "Hi there");
    assert!(reply.is_bot());
}
