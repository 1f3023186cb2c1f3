use serde::Serialize;
use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::atomic::{AtomicUsize, Ordering},
    sync::{Arc, Mutex},
};
use tauri::{Emitter, Manager};
use tauri_plugin_dialog::DialogExt;

mod app_runtime;
mod channel;
#[cfg(target_os = "macos")]
mod mac_delegate;
#[cfg(target_os = "macos")]
mod mac_open_events;
mod menu_events;
mod path_utils;
mod relay;
mod windows;

use channel::{dispatch_method, EventSink, MethodReply, WindowChannel};
use menu_events::handle_app_menu_event;
use path_utils::path_to_string;
use relay::{notify_main_relay, with_relay, FileOpenRelay, RelayRegistry};
use windows::{
    build_new_window, focused_window, handle_window_event, is_managed_label, next_window_label,
};

/// Logical channel the UI layer speaks over; one instance per window.
const CHANNEL_NAME: &str = "myChannel";
const METHOD_GET_CURRENT_FILE: &str = "getCurrentFile";
const EVENT_FILE_OPENED: &str = "onFileOpened";
const EVENT_NEW_WINDOW: &str = "newWindow";

const MAIN_WINDOW_LABEL: &str = "main";
const WINDOW_LABEL_PREFIX: &str = "folio-window-";
const WINDOW_TITLE: &str = "Folio";

const MENU_NEW_WINDOW: &str = "new_window";
const MENU_OPEN_FILE: &str = "open_file";
const MENU_CLOSE_WINDOW: &str = "close_window";

#[tauri::command]
fn get_window_label(window: tauri::Window) -> String {
    window.label().to_string()
}

/// Request/response half of the channel: string-named methods, with a
/// structured "not implemented" reply for anything unrecognized.
#[tauri::command]
fn channel_request(window: tauri::Window, method: String) -> MethodReply {
    with_relay(window.app_handle(), window.label(), |relay| {
        dispatch_method(relay, &method)
    })
    .unwrap_or(MethodReply::NotImplemented)
}

#[tauri::command]
fn register_channel(window: tauri::Window) {
    let app = window.app_handle();
    let sink = Arc::new(WindowChannel::new(app.clone(), window.label().to_string()));
    let _ = with_relay(app, window.label(), move |relay| relay.register_channel(sink));
}

#[tauri::command]
fn open_new_window(app: tauri::AppHandle) -> Result<(), String> {
    build_new_window(&app, next_window_label()).map(|_| ())
}

#[tauri::command]
fn close_current_window(window: tauri::Window) -> Result<(), String> {
    window
        .close()
        .map_err(|e| format!("Unable to close window: {e}"))
}

#[cfg(test)]
mod tests;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    app_runtime::run_app();
}
