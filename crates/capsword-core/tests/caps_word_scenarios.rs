// Capsword Scenario Tests
//
// These tests walk the word engine end-to-end through the dispatcher:
// toggle commands, key notifications in arrival order, held-modifier
// tracking, and shared-event augmentation across instances.

use capsword_core::{
    usage, CapsWord, CapsWordConfig, ContinueEntry, Dispatcher, EventFlow, KeyEvent, Mods,
};

fn press(id: u16) -> KeyEvent {
    KeyEvent::press(usage::PAGE_KEYBOARD, id)
}

fn release(id: u16) -> KeyEvent {
    KeyEvent::release(usage::PAGE_KEYBOARD, id)
}

fn single_instance(config: CapsWordConfig) -> (Dispatcher, capsword_core::InstanceId) {
    let mut dispatcher = Dispatcher::new();
    let id = dispatcher.register(Box::new(CapsWord::new(config)));
    (dispatcher, id)
}

#[test]
fn test_capitalized_word_then_ctrl() {
    let (mut dispatcher, id) = single_instance(CapsWordConfig::new());
    dispatcher.toggle(id);
    dispatcher.toggle_release(id);

    // Letter: augmented with left Shift, word keeps running
    let mut ev = press(usage::KEY_A);
    assert_eq!(dispatcher.dispatch(&mut ev), EventFlow::Bubble);
    assert_eq!(ev.implicit_mods, Mods::LSFT);

    // Ctrl ends the word
    let mut ev = press(usage::KEY_LEFT_CTRL);
    assert_eq!(dispatcher.dispatch(&mut ev), EventFlow::Bubble);

    // Later letters pass through untouched
    let mut ev = press(usage::KEY_B);
    dispatcher.dispatch(&mut ev);
    assert!(ev.implicit_mods.is_empty());
}

#[test]
fn test_semicolon_is_a_letter_on_the_russian_layout() {
    let (mut dispatcher, id) = single_instance(CapsWordConfig::new());
    dispatcher.toggle(id);

    let mut ev = press(usage::KEY_SEMICOLON);
    dispatcher.dispatch(&mut ev);
    assert_eq!(ev.implicit_mods, Mods::LSFT);

    // Still running: the next letter is augmented too
    let mut ev = press(usage::KEY_K);
    dispatcher.dispatch(&mut ev);
    assert_eq!(ev.implicit_mods, Mods::LSFT);
}

#[test]
fn test_space_in_the_allow_list_continues_the_word() {
    let config = CapsWordConfig::new().continue_on(ContinueEntry::key(usage::KEY_SPACE));
    let (mut dispatcher, id) = single_instance(config);
    dispatcher.toggle(id);

    let mut ev = press(usage::KEY_SPACE);
    dispatcher.dispatch(&mut ev);
    assert!(ev.implicit_mods.is_empty());

    // The word survived the space
    let mut ev = press(usage::KEY_A);
    dispatcher.dispatch(&mut ev);
    assert_eq!(ev.implicit_mods, Mods::LSFT);
}

#[test]
fn test_digits_pass_through_inside_a_word() {
    let (mut dispatcher, id) = single_instance(CapsWordConfig::new());
    dispatcher.toggle(id);

    let mut ev = press(usage::KEY_1);
    dispatcher.dispatch(&mut ev);
    assert!(ev.implicit_mods.is_empty());

    let mut ev = press(usage::KEY_A);
    dispatcher.dispatch(&mut ev);
    assert_eq!(ev.implicit_mods, Mods::LSFT);
}

#[test]
fn test_held_ctrl_ends_the_word_on_a_letter() {
    let (mut dispatcher, id) = single_instance(CapsWordConfig::new());

    // Hold Ctrl before the word starts
    let mut ev = press(usage::KEY_LEFT_CTRL);
    dispatcher.dispatch(&mut ev);

    dispatcher.toggle(id);

    // The letter arrives with Ctrl held: no augmentation, word ends
    let mut ev = press(usage::KEY_A);
    dispatcher.dispatch(&mut ev);
    assert!(ev.implicit_mods.is_empty());

    // Release Ctrl; the word stays ended until toggled again
    let mut ev = release(usage::KEY_LEFT_CTRL);
    dispatcher.dispatch(&mut ev);
    let mut ev = press(usage::KEY_A);
    dispatcher.dispatch(&mut ev);
    assert!(ev.implicit_mods.is_empty());
}

#[test]
fn test_held_shift_does_not_end_the_word() {
    let (mut dispatcher, id) = single_instance(CapsWordConfig::new());
    dispatcher.toggle(id);

    let mut ev = press(usage::KEY_RIGHT_SHIFT);
    dispatcher.dispatch(&mut ev);
    // The shift key itself ends the word only through the continuation
    // check, which it fails; but a word started afterwards runs fine
    // under held shift.
    dispatcher.toggle(id);
    let mut ev = press(usage::KEY_A);
    dispatcher.dispatch(&mut ev);
    assert_eq!(ev.implicit_mods, Mods::LSFT);
}

#[test]
fn test_allow_list_entry_satisfied_by_held_modifier() {
    let config = CapsWordConfig::new()
        .continue_on(ContinueEntry::key(usage::KEY_BACKSPACE))
        .continue_on(ContinueEntry::key(usage::KEY_MINUS).with_mods(Mods::LSFT));
    let (mut dispatcher, id) = single_instance(config);
    dispatcher.toggle(id);

    // Backspace needs nothing
    let mut ev = press(usage::KEY_BACKSPACE);
    dispatcher.dispatch(&mut ev);

    // Minus requires left Shift; holding it supplies the bit. The shift
    // press itself ends the word (not allow-listed), so re-toggle with
    // shift held.
    let mut ev = press(usage::KEY_LEFT_SHIFT);
    dispatcher.dispatch(&mut ev);
    dispatcher.toggle(id);

    let mut ev = press(usage::KEY_MINUS);
    dispatcher.dispatch(&mut ev);
    assert!(ev.implicit_mods.is_empty());

    let mut ev = press(usage::KEY_A);
    dispatcher.dispatch(&mut ev);
    assert_eq!(ev.implicit_mods, Mods::LSFT);
}

#[test]
fn test_augmentation_is_shared_across_instances() {
    let mut dispatcher = Dispatcher::new();
    let first = dispatcher.register(Box::new(CapsWord::new(CapsWordConfig::new())));
    let second = dispatcher.register(Box::new(CapsWord::new(
        CapsWordConfig::new().with_mods(Mods::RSFT),
    )));
    dispatcher.toggle(first);
    dispatcher.toggle(second);

    // Both instances OR their bits into the one shared record
    let mut ev = press(usage::KEY_A);
    dispatcher.dispatch(&mut ev);
    assert_eq!(ev.implicit_mods, Mods::LSFT | Mods::RSFT);
}

#[test]
fn test_instances_deactivate_independently() {
    let space_config = CapsWordConfig::new().continue_on(ContinueEntry::key(usage::KEY_SPACE));
    let mut dispatcher = Dispatcher::new();
    let strict = dispatcher.register(Box::new(CapsWord::new(CapsWordConfig::new())));
    let lenient = dispatcher.register(Box::new(CapsWord::new(space_config)));
    dispatcher.toggle(strict);
    dispatcher.toggle(lenient);

    // Space ends the strict instance's word but not the lenient one's
    let mut ev = press(usage::KEY_SPACE);
    dispatcher.dispatch(&mut ev);

    let mut ev = press(usage::KEY_A);
    dispatcher.dispatch(&mut ev);
    assert_eq!(ev.implicit_mods, Mods::LSFT);

    // Only the lenient instance is still running; its word ends on a
    // key neither instance allows
    let mut ev = press(usage::KEY_ENTER);
    dispatcher.dispatch(&mut ev);
    let mut ev = press(usage::KEY_A);
    dispatcher.dispatch(&mut ev);
    assert!(ev.implicit_mods.is_empty());
}

#[test]
fn test_key_up_events_change_nothing() {
    let (mut dispatcher, id) = single_instance(CapsWordConfig::new());
    dispatcher.toggle(id);

    let mut ev = release(usage::KEY_A);
    dispatcher.dispatch(&mut ev);
    assert!(ev.implicit_mods.is_empty());

    // The run is still live
    let mut ev = press(usage::KEY_A);
    dispatcher.dispatch(&mut ev);
    assert_eq!(ev.implicit_mods, Mods::LSFT);
}

#[test]
fn test_config_file_drives_the_engine() {
    let toml = r#"
mods = ["LShift"]
continue_list = ["SPACE", { key = "MINUS", mods = ["LShift"] }]
"#;
    let config = CapsWordConfig::from_toml(toml).unwrap();
    let (mut dispatcher, id) = single_instance(config);
    dispatcher.toggle(id);

    let mut ev = press(usage::KEY_SPACE);
    dispatcher.dispatch(&mut ev);
    let mut ev = press(usage::KEY_MINUS).with_mods(Mods::LSFT);
    dispatcher.dispatch(&mut ev);
    let mut ev = press(usage::KEY_V);
    dispatcher.dispatch(&mut ev);
    assert_eq!(ev.implicit_mods, Mods::LSFT);
}
