//! AppKit delegate overrides that tao does not expose: secure restorable
//! state, the quit-on-last-managed-window policy, and the dock menu.
//!
//! Installed during setup, after Builder::build() has created the shared
//! NSApplication and its delegate. The dock menu action fires on the AppKit
//! side with no access to the Tauri app handle, so it only records a request
//! that the run loop drains into the relay.

use super::relay::with_relay;
use super::windows::{open_managed_windows, should_terminate_after_last_window_closed};
use super::MAIN_WINDOW_LABEL;
use std::ffi::{c_char, c_void, CString};
use std::sync::atomic::{AtomicUsize, Ordering};

type Id = *mut c_void;
type Sel = *const c_void;
type Class = *const c_void;
type Method = *mut c_void;

extern "C" {
    fn objc_getClass(name: *const u8) -> Class;
    fn sel_registerName(name: *const u8) -> Sel;
    fn objc_msgSend();
    fn object_getClass(obj: Id) -> Class;
    fn class_getInstanceMethod(cls: Class, sel: Sel) -> Method;
    fn method_setImplementation(method: Method, imp: *const c_void) -> *const c_void;
    fn objc_allocateClassPair(superclass: Class, name: *const c_char, extra_bytes: usize) -> Class;
    fn objc_registerClassPair(cls: Class);
    fn class_addMethod(cls: Class, name: Sel, imp: *const c_void, types: *const c_char) -> i8;
}

unsafe fn msg0(obj: Id, sel: Sel) -> Id {
    let f: unsafe extern "C" fn(Id, Sel) -> Id = std::mem::transmute(objc_msgSend as *const c_void);
    f(obj, sel)
}

unsafe fn msg1_void(obj: Id, sel: Sel, arg: Id) {
    let f: unsafe extern "C" fn(Id, Sel, Id) = std::mem::transmute(objc_msgSend as *const c_void);
    f(obj, sel, arg);
}

unsafe fn msg1_ptr(obj: Id, sel: Sel, arg: *const c_char) -> Id {
    let f: unsafe extern "C" fn(Id, Sel, *const c_char) -> Id =
        std::mem::transmute(objc_msgSend as *const c_void);
    f(obj, sel, arg)
}

unsafe fn msg3_item_init(obj: Id, sel: Sel, title: Id, action: Sel, key: Id) -> Id {
    let f: unsafe extern "C" fn(Id, Sel, Id, Sel, Id) -> Id =
        std::mem::transmute(objc_msgSend as *const c_void);
    f(obj, sel, title, action, key)
}

unsafe fn ns_string(text: &str) -> Option<Id> {
    let cls = objc_getClass(b"NSString\0".as_ptr());
    if cls.is_null() {
        return None;
    }

    let sel = sel_registerName(b"stringWithUTF8String:\0".as_ptr());
    let c_text = CString::new(text).ok()?;
    let value = msg1_ptr(cls as Id, sel, c_text.as_ptr());
    if value.is_null() {
        None
    } else {
        Some(value)
    }
}

/// The dock-menu target instance, stored as a raw pointer once registered.
static DOCK_MENU_TARGET: AtomicUsize = AtomicUsize::new(0);
static DOCK_NEW_WINDOW_REQUESTS: AtomicUsize = AtomicUsize::new(0);

unsafe extern "C" fn supports_secure_restorable_state(_this: Id, _cmd: Sel, _app: Id) -> i8 {
    1
}

unsafe extern "C" fn terminate_after_last_window_closed(_this: Id, _cmd: Sel, _app: Id) -> i8 {
    i8::from(should_terminate_after_last_window_closed(
        open_managed_windows(),
    ))
}

unsafe extern "C" fn new_window_from_dock(_this: Id, _cmd: Sel, _sender: Id) {
    DOCK_NEW_WINDOW_REQUESTS.fetch_add(1, Ordering::Relaxed);
}

unsafe extern "C" fn dock_menu(_this: Id, _cmd: Sel, _app: Id) -> Id {
    build_dock_menu()
}

unsafe fn build_dock_menu() -> Id {
    let menu_cls = objc_getClass(b"NSMenu\0".as_ptr());
    let item_cls = objc_getClass(b"NSMenuItem\0".as_ptr());
    if menu_cls.is_null() || item_cls.is_null() {
        return std::ptr::null_mut();
    }

    let alloc_sel = sel_registerName(b"alloc\0".as_ptr());
    let init_sel = sel_registerName(b"init\0".as_ptr());
    let autorelease_sel = sel_registerName(b"autorelease\0".as_ptr());

    let menu = msg0(msg0(menu_cls as Id, alloc_sel), init_sel);
    if menu.is_null() {
        return std::ptr::null_mut();
    }

    let (Some(title), Some(key)) = (ns_string("New Window"), ns_string("n")) else {
        return std::ptr::null_mut();
    };

    let action_sel = sel_registerName(b"newWindowFromDock:\0".as_ptr());
    let init_item_sel = sel_registerName(b"initWithTitle:action:keyEquivalent:\0".as_ptr());
    let item = msg3_item_init(
        msg0(item_cls as Id, alloc_sel),
        init_item_sel,
        title,
        action_sel,
        key,
    );
    if item.is_null() {
        return std::ptr::null_mut();
    }

    let target = DOCK_MENU_TARGET.load(Ordering::Relaxed) as Id;
    if !target.is_null() {
        let set_target_sel = sel_registerName(b"setTarget:\0".as_ptr());
        msg1_void(item, set_target_sel, target);
    }

    let add_item_sel = sel_registerName(b"addItem:\0".as_ptr());
    msg1_void(menu, add_item_sel, item);
    msg0(item, autorelease_sel);
    msg0(menu, autorelease_sel)
}

unsafe fn register_dock_menu_target() {
    if DOCK_MENU_TARGET.load(Ordering::Relaxed) != 0 {
        return;
    }

    let ns_object = objc_getClass(b"NSObject\0".as_ptr());
    if ns_object.is_null() {
        return;
    }

    let target_cls = {
        let existing = objc_getClass(b"FolioDockMenuTarget\0".as_ptr());
        if !existing.is_null() {
            existing
        } else {
            let Ok(class_name) = CString::new("FolioDockMenuTarget") else {
                return;
            };
            let created = objc_allocateClassPair(ns_object, class_name.as_ptr(), 0);
            if created.is_null() {
                return;
            }

            let action_sel = sel_registerName(b"newWindowFromDock:\0".as_ptr());
            if class_addMethod(
                created,
                action_sel,
                new_window_from_dock as *const c_void,
                b"v@:@\0".as_ptr() as *const c_char,
            ) == 0
            {
                log::warn!("mac_delegate: failed to add newWindowFromDock:");
            }

            objc_registerClassPair(created);
            created
        }
    };

    let alloc_sel = sel_registerName(b"alloc\0".as_ptr());
    let init_sel = sel_registerName(b"init\0".as_ptr());
    let target = msg0(msg0(target_cls as Id, alloc_sel), init_sel);
    if !target.is_null() {
        DOCK_MENU_TARGET.store(target as usize, Ordering::Relaxed);
    }
}

unsafe fn override_or_add(cls: Class, sel_name: &[u8], imp: *const c_void, types: &[u8]) {
    let sel = sel_registerName(sel_name.as_ptr());
    let method = class_getInstanceMethod(cls, sel);
    if !method.is_null() {
        method_setImplementation(method, imp);
        return;
    }

    if class_addMethod(cls, sel, imp, types.as_ptr() as *const c_char) == 0 {
        log::warn!("mac_delegate: failed to install delegate method");
    }
}

pub(crate) fn install() {
    unsafe {
        register_dock_menu_target();

        let ns_app_cls = objc_getClass(b"NSApplication\0".as_ptr());
        if ns_app_cls.is_null() {
            return;
        }
        let shared_sel = sel_registerName(b"sharedApplication\0".as_ptr());
        let app = msg0(ns_app_cls as Id, shared_sel);
        if app.is_null() {
            return;
        }

        let delegate_sel = sel_registerName(b"delegate\0".as_ptr());
        let delegate = msg0(app, delegate_sel);
        if delegate.is_null() {
            return;
        }
        let delegate_cls = object_getClass(delegate);

        override_or_add(
            delegate_cls,
            b"applicationSupportsSecureRestorableState:\0",
            supports_secure_restorable_state as *const c_void,
            b"c@:@\0",
        );
        override_or_add(
            delegate_cls,
            b"applicationShouldTerminateAfterLastWindowClosed:\0",
            terminate_after_last_window_closed as *const c_void,
            b"c@:@\0",
        );
        override_or_add(
            delegate_cls,
            b"applicationDockMenu:\0",
            dock_menu as *const c_void,
            b"@@:@\0",
        );
    }
}

/// Replays dock "New Window" clicks into the main window's relay.
pub(crate) fn drain_dock_requests(app: &tauri::AppHandle) {
    let requests = DOCK_NEW_WINDOW_REQUESTS.swap(0, Ordering::Relaxed);
    for _ in 0..requests {
        let _ = with_relay(app, MAIN_WINDOW_LABEL, |relay| relay.spawn_window());
    }
}
