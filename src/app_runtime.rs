use super::*;
use tauri::menu::{MenuBuilder, MenuItem, PredefinedMenuItem, SubmenuBuilder};

pub(crate) fn run_app() {
    #[cfg(target_os = "macos")]
    mac_open_events::install();

    let app = tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .setup(setup_app)
        .on_window_event(handle_window_event)
        .on_menu_event(|app, event| {
            handle_app_menu_event(app, event);
        })
        .invoke_handler(tauri::generate_handler![
            channel_request,
            register_channel,
            open_new_window,
            get_window_label,
            close_current_window
        ])
        .build(tauri::generate_context!())
        .expect("error while building tauri application");

    #[allow(unused_variables)]
    app.run(|app_handle, event| {
        #[cfg(target_os = "macos")]
        {
            mac_delegate::drain_dock_requests(app_handle);

            let paths = mac_open_events::take_paths();
            if !paths.is_empty() {
                notify_main_relay(app_handle, &paths);
            }
        }

        // On macOS opens arrive via the capture queue above; only iOS
        // surfaces them as run events.
        #[cfg(target_os = "ios")]
        if let tauri::RunEvent::Opened { urls } = &event {
            let paths: Vec<String> = urls
                .iter()
                .filter_map(|url| url.to_file_path().ok())
                .map(|path| path_to_string(&path))
                .collect();
            notify_main_relay(app_handle, &paths);
        }
    });
}

fn build_app_menu(app: &tauri::AppHandle) -> tauri::Result<tauri::menu::Menu<tauri::Wry>> {
    let new_window_item = MenuItem::with_id(
        app,
        MENU_NEW_WINDOW,
        "New Window",
        true,
        Some("CmdOrCtrl+N"),
    )?;
    let open_file_item = MenuItem::with_id(
        app,
        MENU_OPEN_FILE,
        "Open File...",
        true,
        Some("CmdOrCtrl+O"),
    )?;
    let close_window_item = MenuItem::with_id(
        app,
        MENU_CLOSE_WINDOW,
        "Close Window",
        true,
        Some("CmdOrCtrl+W"),
    )?;

    let file_submenu = SubmenuBuilder::new(app, "File")
        .items(&[
            &new_window_item,
            &open_file_item,
            &PredefinedMenuItem::separator(app)?,
            &close_window_item,
            #[cfg(not(target_os = "macos"))]
            &PredefinedMenuItem::quit(app, None)?,
        ])
        .build()?;

    let edit_submenu = SubmenuBuilder::new(app, "Edit")
        .items(&[
            &PredefinedMenuItem::undo(app, None)?,
            &PredefinedMenuItem::redo(app, None)?,
            &PredefinedMenuItem::separator(app)?,
            &PredefinedMenuItem::cut(app, None)?,
            &PredefinedMenuItem::copy(app, None)?,
            &PredefinedMenuItem::paste(app, None)?,
            &PredefinedMenuItem::select_all(app, None)?,
        ])
        .build()?;

    let mut top_level_items: Vec<&dyn tauri::menu::IsMenuItem<_>> = Vec::new();

    #[cfg(target_os = "macos")]
    let app_submenu = SubmenuBuilder::new(app, app.package_info().name.clone())
        .items(&[
            &PredefinedMenuItem::about(app, None, None)?,
            &PredefinedMenuItem::separator(app)?,
            &PredefinedMenuItem::services(app, None)?,
            &PredefinedMenuItem::separator(app)?,
            &PredefinedMenuItem::hide(app, None)?,
            &PredefinedMenuItem::hide_others(app, None)?,
            &PredefinedMenuItem::separator(app)?,
            &PredefinedMenuItem::quit(app, None)?,
        ])
        .build()?;

    #[cfg(target_os = "macos")]
    top_level_items.push(&app_submenu);

    top_level_items.push(&file_submenu);
    top_level_items.push(&edit_submenu);

    MenuBuilder::new(app).items(&top_level_items).build()
}

fn setup_app(app: &mut tauri::App) -> Result<(), Box<dyn std::error::Error>> {
    let menu = build_app_menu(app.handle())?;
    app.set_menu(menu)?;

    app.manage(RelayRegistry::default());

    let initial_managed = app
        .webview_windows()
        .keys()
        .filter(|label| is_managed_label(label))
        .count();
    windows::reset_open_managed_windows(initial_managed);

    #[cfg(target_os = "macos")]
    {
        mac_delegate::install();

        // Files opened from Finder at cold start were captured before the
        // event loop existed; queue them now so the UI's first fetch sees
        // them.
        let paths = mac_open_events::take_paths();
        if !paths.is_empty() {
            notify_main_relay(app.handle(), &paths);
        }
    }

    Ok(())
}
