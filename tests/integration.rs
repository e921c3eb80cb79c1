// SPDX-License-Identifier: MPL-2.0
use iced_toaster::config::{self, Config, ToasterConfig};
use iced_toaster::dispatch::{Notifier, Registry};
use iced_toaster::toast::{Message, Position, ToastContent, Toaster, ToasterHandle, Variant};
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;
use tempfile::tempdir;

fn mounted(toaster: Toaster) -> (Rc<Registry>, ToasterHandle, Notifier) {
    let registry = Rc::new(Registry::new());
    let handle = ToasterHandle::new(toaster);
    handle.mount(&registry);
    let notifier = Notifier::new(Rc::clone(&registry));
    (registry, handle, notifier)
}

fn titles(handle: &ToasterHandle) -> Vec<String> {
    handle
        .borrow()
        .toasts()
        .filter_map(|toast| toast.title().map(str::to_owned))
        .collect()
}

#[test]
fn top_right_keeps_the_three_most_recent() {
    let (_registry, handle, notifier) = mounted(
        Toaster::new()
            .with_position(Position::TopRight)
            .with_max_toasts(3),
    );

    for title in ["A", "B", "C", "D"] {
        notifier.info(title, None);
    }

    assert_eq!(titles(&handle), ["B", "C", "D"]);
}

#[test]
fn bottom_right_prepends_newest() {
    let (_registry, handle, notifier) = mounted(
        Toaster::new()
            .with_position(Position::BottomRight)
            .with_max_toasts(3),
    );

    for title in ["A", "B", "C", "D"] {
        notifier.info(title, None);
    }

    assert_eq!(titles(&handle), ["D", "C", "B"]);
}

#[test]
fn description_only_toast_gets_defaults() {
    let (_registry, handle, notifier) = mounted(Toaster::new());
    let id = notifier
        .notify(ToastContent::default().description("Saved"))
        .expect("toaster is mounted");

    let toaster = handle.borrow();
    let toast = toaster.get(id).expect("toast should be live");
    assert_eq!(toast.variant(), Variant::Info);
    assert_eq!(toast.duration(), Duration::from_millis(5000));
}

#[test]
fn notify_without_toaster_is_dropped() {
    let notifier = Notifier::new(Rc::new(Registry::new()));
    assert_eq!(notifier.notify("hi"), None);
}

#[tokio::test(start_paused = true)]
async fn toast_expires_after_its_duration() {
    let (_registry, handle, notifier) = mounted(Toaster::new());
    let id = notifier
        .notify(ToastContent::success().title("Saved").duration_ms(1000))
        .expect("toaster is mounted");

    tokio::time::sleep(Duration::from_millis(900)).await;
    assert!(handle.borrow_mut().collect_expired().is_empty());
    assert!(handle.borrow().contains(id));

    tokio::time::sleep(Duration::from_millis(200)).await;
    handle.handle_message(Message::Tick);
    assert!(!handle.borrow().contains(id));
}

#[tokio::test(start_paused = true)]
async fn default_duration_applies_when_unset() {
    let (_registry, handle, notifier) = mounted(Toaster::new());
    let id = notifier.notify("hello").expect("toaster is mounted");

    tokio::time::sleep(Duration::from_millis(4999)).await;
    assert!(handle.borrow_mut().collect_expired().is_empty());

    tokio::time::sleep(Duration::from_millis(2)).await;
    assert_eq!(handle.borrow_mut().collect_expired(), vec![id]);
}

#[tokio::test(start_paused = true)]
async fn action_runs_once_even_if_timer_would_fire() {
    let (_registry, handle, notifier) = mounted(Toaster::new());
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let id = notifier
        .notify(
            ToastContent::info()
                .title("Deleted")
                .duration_ms(100)
                .action("Undo", move || counter.set(counter.get() + 1)),
        )
        .expect("toaster is mounted");

    handle.handle_message(Message::Action(id));
    tokio::time::sleep(Duration::from_millis(500)).await;
    handle.handle_message(Message::Expired(id));
    handle.handle_message(Message::Action(id));

    assert_eq!(calls.get(), 1);
    assert!(handle.borrow_mut().collect_expired().is_empty());
    assert!(handle.borrow().is_empty());
}

#[tokio::test(start_paused = true)]
async fn stale_expiry_after_manual_close_is_ignored() {
    let (_registry, handle, notifier) = mounted(Toaster::new());
    let closed = notifier
        .notify(ToastContent::info().duration_ms(100))
        .expect("toaster is mounted");
    let other = notifier
        .notify(ToastContent::info().duration_ms(10_000))
        .expect("toaster is mounted");

    // Timer fires and delivers, then the user closes before the next tick.
    tokio::time::sleep(Duration::from_millis(150)).await;
    handle.handle_message(Message::Dismiss(closed));
    handle.handle_message(Message::Dismiss(closed));

    assert!(handle.borrow_mut().collect_expired().is_empty());
    assert_eq!(handle.borrow().ids(), vec![other]);
}

#[tokio::test(start_paused = true)]
async fn evicted_toast_timer_is_cancelled() {
    let (_registry, handle, notifier) = mounted(Toaster::new().with_max_toasts(1));
    notifier.notify(ToastContent::info().duration_ms(100));
    let survivor = notifier
        .notify(ToastContent::info().duration_ms(10_000))
        .expect("toaster is mounted");

    tokio::time::sleep(Duration::from_millis(500)).await;
    assert!(handle.borrow_mut().collect_expired().is_empty());
    assert_eq!(handle.borrow().ids(), vec![survivor]);
}

#[tokio::test(start_paused = true)]
async fn next_expired_waits_for_the_first_timer() {
    let registry = Registry::new();
    let handle = ToasterHandle::new(Toaster::new());
    handle.mount(&registry);
    let slow = handle.borrow_mut().add(ToastContent::info().duration_ms(3000));
    let fast = handle.borrow_mut().add(ToastContent::info().duration_ms(1000));

    let mut guard = handle.borrow_mut();
    assert_eq!(guard.next_expired().await, Some(fast));
    assert_eq!(guard.next_expired().await, Some(slow));
    assert!(guard.is_empty());
}

#[test]
fn toaster_built_from_saved_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let saved = Config {
        toaster: ToasterConfig {
            position: Position::BottomCenter,
            max_toasts: 2,
            default_duration_ms: 1500,
        },
    };
    config::save_with_override(&saved, Some(dir.path().to_path_buf()))
        .expect("Failed to write config file");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());

    let mut toaster = Toaster::from_config(&loaded.toaster);
    let id = toaster.add("x");
    toaster.add("y");
    toaster.add("z");

    assert_eq!(toaster.position(), Position::BottomCenter);
    assert_eq!(toaster.len(), 2);
    assert!(!toaster.contains(id));
    let newest = toaster.toasts().next().expect("toaster is not empty");
    assert_eq!(newest.duration(), Duration::from_millis(1500));
}
