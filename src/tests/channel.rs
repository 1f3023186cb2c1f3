use super::common::RecordingChannel;
use super::*;
use crate::channel;

#[test]
fn get_current_file_method_drains_pending_path() {
    let mut relay = FileOpenRelay::default();
    relay.notify_file_opened(&["/tmp/doc.md".to_string()]);

    let reply = dispatch_method(&mut relay, METHOD_GET_CURRENT_FILE);

    assert_eq!(
        reply,
        MethodReply::Ok {
            value: Some("/tmp/doc.md".to_string())
        }
    );

    let reply = dispatch_method(&mut relay, METHOD_GET_CURRENT_FILE);
    assert_eq!(reply, MethodReply::Ok { value: None });
}

#[test]
fn unrecognized_method_reports_not_implemented() {
    let mut relay = FileOpenRelay::default();

    let reply = dispatch_method(&mut relay, "getSomethingElse");

    assert_eq!(reply, MethodReply::NotImplemented);
}

#[test]
fn unrecognized_method_does_not_consume_the_initial_fetch() {
    let mut relay = FileOpenRelay::default();
    relay.notify_file_opened(&["/tmp/doc.md".to_string()]);

    let _ = dispatch_method(&mut relay, "ping");

    assert_eq!(
        dispatch_method(&mut relay, METHOD_GET_CURRENT_FILE),
        MethodReply::Ok {
            value: Some("/tmp/doc.md".to_string())
        }
    );
}

#[test]
fn method_replies_serialize_with_status_tag() {
    let ok = MethodReply::Ok {
        value: Some("/tmp/a.txt".to_string()),
    };
    assert_eq!(
        serde_json::to_value(&ok).expect("serialize ok reply"),
        serde_json::json!({ "status": "ok", "value": "/tmp/a.txt" })
    );

    let not_implemented = MethodReply::NotImplemented;
    assert_eq!(
        serde_json::to_value(&not_implemented).expect("serialize not-implemented reply"),
        serde_json::json!({ "status": "notImplemented" })
    );
}

#[test]
fn channel_events_are_scoped_to_the_owning_window() {
    assert_eq!(
        channel::channel_event(EVENT_FILE_OPENED, "main"),
        "myChannel/main/onFileOpened"
    );
    assert_eq!(
        channel::channel_event(EVENT_NEW_WINDOW, "folio-window-2"),
        "myChannel/folio-window-2/newWindow"
    );
}

#[test]
fn recording_channel_preserves_event_order() {
    let mut relay = FileOpenRelay::default();
    assert_eq!(relay.fetch_current_file(), None);

    let channel = Arc::new(RecordingChannel::default());
    relay.register_channel(channel.clone());

    relay.notify_file_opened(&["/tmp/one.txt".to_string()]);
    relay.spawn_window();
    relay.notify_file_opened(&["/tmp/two.txt".to_string()]);

    assert_eq!(
        channel.recorded(),
        vec![
            (EVENT_FILE_OPENED.to_string(), Some("/tmp/one.txt".to_string())),
            (EVENT_NEW_WINDOW.to_string(), None),
            (EVENT_FILE_OPENED.to_string(), Some("/tmp/two.txt".to_string())),
        ]
    );
}
