use super::*;

/// Hands an OS-supplied file path to a window's UI layer across the
/// cold-start/already-running ambiguity.
///
/// The OS may report an opened file before the webview has finished
/// initializing. Until the UI asks for the initial file once (via the
/// `getCurrentFile` channel method) every notification is buffered; after
/// that first fetch, notifications go out live over the registered channel.
/// `consumed_initial_fetch` is what distinguishes "the UI has not asked yet"
/// from "the UI asked and there was nothing pending".
#[derive(Default)]
pub(crate) struct FileOpenRelay {
    pending_path: Option<String>,
    channel: Option<Arc<dyn EventSink>>,
    consumed_initial_fetch: bool,
}

impl FileOpenRelay {
    /// Records or dispatches a file opened by the OS. Only the first
    /// non-empty path is honored; the app opens one document per
    /// notification. Never fails visibly.
    pub(crate) fn notify_file_opened(&mut self, paths: &[String]) {
        let Some(path) = paths.iter().find(|path| !path.is_empty()) else {
            return;
        };

        if !self.consumed_initial_fetch {
            log::debug!("buffering file open until first fetch: {path}");
            self.pending_path = Some(path.clone());
        } else if let Some(channel) = &self.channel {
            log::debug!("dispatching file open to live channel: {path}");
            channel.send_event(EVENT_FILE_OPENED, Some(path.clone()));
        } else {
            // UI fetched once but never registered a channel; keep the path
            // rather than dropping it.
            log::debug!("no channel registered, buffering file open: {path}");
            self.pending_path = Some(path.clone());
        }
    }

    /// Takes the pending path, if any. The UI calls this exactly once, right
    /// after it finishes initializing; later notifications are expected to
    /// arrive as `onFileOpened` events instead.
    pub(crate) fn fetch_current_file(&mut self) -> Option<String> {
        self.consumed_initial_fetch = true;
        self.pending_path.take()
    }

    pub(crate) fn register_channel(&mut self, channel: Arc<dyn EventSink>) {
        self.channel = Some(channel);
    }

    /// Signals the UI engine to create another window. Silent no-op when no
    /// channel is registered; window creation itself happens when the UI
    /// calls back into `open_new_window`.
    pub(crate) fn spawn_window(&self) {
        if let Some(channel) = &self.channel {
            channel.send_event(EVENT_NEW_WINDOW, None);
        }
    }
}

/// One relay per window, keyed by window label. Windows never share relay
/// state.
#[derive(Default)]
pub(crate) struct RelayRegistry {
    by_window: Mutex<HashMap<String, FileOpenRelay>>,
}

pub(crate) fn with_relay<T>(
    app: &tauri::AppHandle,
    label: &str,
    f: impl FnOnce(&mut FileOpenRelay) -> T,
) -> Option<T> {
    let registry = app.state::<RelayRegistry>();
    let mut relays = registry.by_window.lock().ok()?;
    Some(f(relays.entry(label.to_string()).or_default()))
}

/// OS-level open notifications always target the main window's relay.
pub(crate) fn notify_main_relay(app: &tauri::AppHandle, paths: &[String]) {
    if paths.is_empty() {
        return;
    }

    let _ = with_relay(app, MAIN_WINDOW_LABEL, |relay| {
        relay.notify_file_opened(paths);
    });
}

pub(crate) fn clear_relay_for_label(app: &tauri::AppHandle, label: &str) {
    let registry = app.state::<RelayRegistry>();
    if let Ok(mut relays) = registry.by_window.lock() {
        relays.remove(label);
    };
}
