use super::common::RecordingChannel;
use super::*;

#[test]
fn buffered_path_is_returned_by_first_fetch() {
    let mut relay = FileOpenRelay::default();

    relay.notify_file_opened(&["/tmp/a.txt".to_string()]);

    assert_eq!(relay.fetch_current_file(), Some("/tmp/a.txt".to_string()));
    assert_eq!(relay.fetch_current_file(), None);
}

#[test]
fn fetch_with_nothing_pending_returns_none() {
    let mut relay = FileOpenRelay::default();

    assert_eq!(relay.fetch_current_file(), None);
}

#[test]
fn later_notification_overwrites_unconsumed_path() {
    let mut relay = FileOpenRelay::default();

    relay.notify_file_opened(&["/tmp/first.txt".to_string()]);
    relay.notify_file_opened(&["/tmp/second.txt".to_string()]);

    assert_eq!(
        relay.fetch_current_file(),
        Some("/tmp/second.txt".to_string())
    );
}

#[test]
fn notification_before_first_fetch_buffers_even_with_channel() {
    let mut relay = FileOpenRelay::default();
    let channel = Arc::new(RecordingChannel::default());
    relay.register_channel(channel.clone());

    relay.notify_file_opened(&["/tmp/early.txt".to_string()]);

    assert!(channel.recorded().is_empty());
    assert_eq!(relay.fetch_current_file(), Some("/tmp/early.txt".to_string()));
}

#[test]
fn notification_after_fetch_dispatches_live_event() {
    let mut relay = FileOpenRelay::default();
    assert_eq!(relay.fetch_current_file(), None);

    let channel = Arc::new(RecordingChannel::default());
    relay.register_channel(channel.clone());

    relay.notify_file_opened(&["/tmp/b.txt".to_string()]);

    assert_eq!(
        channel.recorded(),
        vec![(
            EVENT_FILE_OPENED.to_string(),
            Some("/tmp/b.txt".to_string())
        )]
    );
    assert_eq!(relay.fetch_current_file(), None);
}

#[test]
fn notification_after_fetch_without_channel_buffers() {
    let mut relay = FileOpenRelay::default();
    assert_eq!(relay.fetch_current_file(), None);

    relay.notify_file_opened(&["/tmp/late.txt".to_string()]);

    assert_eq!(relay.fetch_current_file(), Some("/tmp/late.txt".to_string()));
}

#[test]
fn empty_notification_is_ignored() {
    let mut relay = FileOpenRelay::default();

    relay.notify_file_opened(&[]);
    relay.notify_file_opened(&["".to_string()]);

    assert_eq!(relay.fetch_current_file(), None);
}

#[test]
fn only_first_path_is_used() {
    let mut relay = FileOpenRelay::default();

    relay.notify_file_opened(&["/tmp/kept.txt".to_string(), "/tmp/dropped.txt".to_string()]);

    assert_eq!(relay.fetch_current_file(), Some("/tmp/kept.txt".to_string()));
}

#[test]
fn spawn_window_without_channel_is_noop() {
    let relay = FileOpenRelay::default();

    relay.spawn_window();
}

#[test]
fn spawn_window_emits_new_window_event() {
    let mut relay = FileOpenRelay::default();
    let channel = Arc::new(RecordingChannel::default());
    relay.register_channel(channel.clone());

    relay.spawn_window();

    assert_eq!(
        channel.recorded(),
        vec![(EVENT_NEW_WINDOW.to_string(), None)]
    );
}
