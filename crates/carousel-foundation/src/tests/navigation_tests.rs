use std::rc::Rc;

use carousel_core::CarouselStore;

use crate::input::{KeyCode, KeyEvent, KeyEventType};
use crate::navigation::KeyboardNavigator;
use crate::tests::RecordingStore;

fn navigator(store: &Rc<RecordingStore>, total: usize, visible: usize) -> KeyboardNavigator {
    KeyboardNavigator::new(Rc::clone(store) as Rc<dyn CarouselStore>, total, visible)
}

#[test]
fn arrow_right_steps_forward_once() {
    let store = RecordingStore::with_current_slide(2);
    let nav = navigator(&store, 6, 2);

    let event = KeyEvent::key_down(KeyCode::ArrowRight);
    let outcome = nav.on_key(&event);

    assert!(event.is_consumed());
    assert!(outcome.focus_requested);
    assert_eq!(store.write_count(), 1);
    assert_eq!(store.state().current_slide, 3);
}

#[test]
fn arrow_left_steps_backward_once() {
    let store = RecordingStore::with_current_slide(2);
    let nav = navigator(&store, 6, 2);

    let event = KeyEvent::key_down(KeyCode::ArrowLeft);
    let outcome = nav.on_key(&event);

    assert!(event.is_consumed());
    assert!(outcome.focus_requested);
    assert_eq!(store.state().current_slide, 1);
}

#[test]
fn next_at_last_index_writes_nothing() {
    // total 6, visible 2: last valid index is 4.
    let store = RecordingStore::with_current_slide(4);
    let nav = navigator(&store, 6, 2);

    let event = KeyEvent::key_down(KeyCode::ArrowRight);
    let outcome = nav.on_key(&event);

    // The key is still swallowed and focus still moves.
    assert!(event.is_consumed());
    assert!(outcome.focus_requested);
    assert_eq!(store.write_count(), 0);
}

#[test]
fn previous_at_zero_writes_nothing() {
    let store = RecordingStore::with_current_slide(0);
    let nav = navigator(&store, 6, 2);

    let event = KeyEvent::key_down(KeyCode::ArrowLeft);
    nav.on_key(&event);

    assert!(event.is_consumed());
    assert_eq!(store.write_count(), 0);
}

#[test]
fn no_op_when_everything_is_visible() {
    let store = RecordingStore::with_current_slide(0);
    let nav = navigator(&store, 3, 3);

    for code in [KeyCode::ArrowLeft, KeyCode::ArrowRight] {
        let event = KeyEvent::key_down(code);
        let outcome = nav.on_key(&event);
        assert!(!event.is_consumed());
        assert!(!outcome.focus_requested);
    }
    assert_eq!(store.write_count(), 0);
}

#[test]
fn unrelated_keys_pass_through() {
    let store = RecordingStore::with_current_slide(2);
    let nav = navigator(&store, 6, 2);

    let event = KeyEvent::key_down(KeyCode::Enter);
    let outcome = nav.on_key(&event);

    assert!(!event.is_consumed());
    assert!(!outcome.focus_requested);
    assert_eq!(store.write_count(), 0);
}

#[test]
fn key_up_is_ignored() {
    let store = RecordingStore::with_current_slide(2);
    let nav = navigator(&store, 6, 2);

    let event = KeyEvent::new(KeyCode::ArrowRight, KeyEventType::KeyUp);
    nav.on_key(&event);

    assert!(!event.is_consumed());
    assert_eq!(store.write_count(), 0);
}
