use super::*;

pub(super) fn handle_app_menu_event(app: &tauri::AppHandle, event: tauri::menu::MenuEvent) {
    match event.id().0.as_str() {
        MENU_NEW_WINDOW => {
            // Signal intent only; the UI engine's multi-window facility
            // calls back into `open_new_window` to do the actual creation.
            let signaled = with_relay(app, MAIN_WINDOW_LABEL, |relay| relay.spawn_window());
            if signaled.is_none() {
                log::warn!("new window request dropped: relay state unavailable");
            }
        }
        MENU_OPEN_FILE => {
            let Some(window) = focused_window(app) else {
                return;
            };
            let app_handle = app.clone();
            window
                .dialog()
                .file()
                .set_parent(&window)
                .set_title("Open File")
                .pick_file(move |path| {
                    let Some(path) = path.and_then(|p| p.into_path().ok()) else {
                        return;
                    };
                    notify_main_relay(&app_handle, &[path_to_string(&path)]);
                });
        }
        MENU_CLOSE_WINDOW => {
            if let Some(window) = focused_window(app) {
                let _ = window.close();
            }
        }
        _ => {}
    }
}
