use super::*;

static NEXT_WINDOW_ID: AtomicUsize = AtomicUsize::new(1);

/// Count of currently-open managed windows, kept current so the AppKit
/// delegate override can read it without touching Tauri state.
static OPEN_MANAGED_WINDOWS: AtomicUsize = AtomicUsize::new(0);

pub(crate) fn next_window_label() -> String {
    format!(
        "{WINDOW_LABEL_PREFIX}{}",
        NEXT_WINDOW_ID.fetch_add(1, Ordering::Relaxed)
    )
}

/// Managed windows are the document windows this shell owns: the main window
/// plus anything spawned through `build_new_window`. Auxiliary windows
/// (devtools, dialogs) are not managed.
pub(crate) fn is_managed_label(label: &str) -> bool {
    label == MAIN_WINDOW_LABEL || label.starts_with(WINDOW_LABEL_PREFIX)
}

pub(crate) fn reset_open_managed_windows(count: usize) {
    OPEN_MANAGED_WINDOWS.store(count, Ordering::Relaxed);
}

pub(crate) fn open_managed_windows() -> usize {
    OPEN_MANAGED_WINDOWS.load(Ordering::Relaxed)
}

fn note_managed_window_opened() {
    OPEN_MANAGED_WINDOWS.fetch_add(1, Ordering::Relaxed);
}

fn note_managed_window_closed() {
    let _ = OPEN_MANAGED_WINDOWS.fetch_update(Ordering::Relaxed, Ordering::Relaxed, |count| {
        Some(count.saturating_sub(1))
    });
}

/// Quit-on-close policy: the app terminates only when the last managed
/// window closes. Auxiliary windows never keep the app alive or kill it.
///
/// AppKit asks on a later run-loop pass than the destroy notification that
/// adjusts the count, so by query time the closing window may (count 1) or
/// may not (count 0) still be counted. Either value means the window that
/// just closed was the last managed one; anything higher means other
/// managed windows are still open.
pub(crate) fn should_terminate_after_last_window_closed(open_managed: usize) -> bool {
    open_managed <= 1
}

pub(crate) fn build_new_window(
    app: &tauri::AppHandle,
    label: String,
) -> Result<tauri::WebviewWindow, String> {
    let window = tauri::WebviewWindowBuilder::new(app, label, tauri::WebviewUrl::default())
        .title(WINDOW_TITLE)
        .inner_size(800.0, 600.0)
        .build()
        .map_err(|e| format!("Unable to create window: {e}"))?;

    if is_managed_label(window.label()) {
        note_managed_window_opened();
    }
    let _ = window.set_focus();

    Ok(window)
}

pub(crate) fn focused_window(app: &tauri::AppHandle) -> Option<tauri::Window> {
    let windows = app.webview_windows();

    windows
        .values()
        .find(|window| window.is_focused().unwrap_or(false))
        .or_else(|| {
            windows
                .values()
                .find(|window| is_managed_label(window.label()))
        })
        .or_else(|| windows.values().next())
        .map(|window| window.as_ref().window())
}

pub(crate) fn handle_window_event(window: &tauri::Window, event: &tauri::WindowEvent) {
    if let tauri::WindowEvent::Destroyed = event {
        if is_managed_label(window.label()) {
            note_managed_window_closed();
        }
        relay::clear_relay_for_label(window.app_handle(), window.label());
    }
}
