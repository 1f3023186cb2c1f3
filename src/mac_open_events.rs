/// When Finder launches the app with a document, the kAEOpenDocuments Apple
/// Event is processed inside [NSApp finishLaunching], which tao runs during
/// EventLoop::new() (inside Builder::build()). tao's application:openURLs:
/// delegate method is not ready to be called at that point and aborts the
/// process if it fires.
///
/// Before Builder::build() we therefore swizzle [NSApplication
/// finishLaunching]: the replacement patches the delegate's
/// application:openURLs: with a handler that only captures the URLs and then
/// calls the original finishLaunching. The capture handler stays installed
/// for the life of the process, so every open (cold start or while the app
/// is running) lands in the same queue, drained with `take_paths` during
/// setup and on each run-loop tick. tao's own handler never runs and no
/// RunEvent::Opened is surfaced on macOS.
use super::path_utils::file_url_to_path;
use super::path_to_string;
use std::ffi::c_void;
use std::sync::Mutex;

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
}

unsafe fn msg0(obj: Id, sel: Sel) -> Id {
    let f: unsafe extern "C" fn(Id, Sel) -> Id = std::mem::transmute(objc_msgSend as *const c_void);
    f(obj, sel)
}

unsafe fn msg0_usize(obj: Id, sel: Sel) -> usize {
    let f: unsafe extern "C" fn(Id, Sel) -> usize =
        std::mem::transmute(objc_msgSend as *const c_void);
    f(obj, sel)
}

unsafe fn msg1_usize(obj: Id, sel: Sel, arg: usize) -> Id {
    let f: unsafe extern "C" fn(Id, Sel, usize) -> Id =
        std::mem::transmute(objc_msgSend as *const c_void);
    f(obj, sel, arg)
}

static CAPTURED_URLS: Mutex<Vec<String>> = Mutex::new(Vec::new());
static ORIGINAL_FINISH_LAUNCHING: Mutex<usize> = Mutex::new(0);

unsafe extern "C" fn capture_open_urls(_this: Id, _cmd: Sel, _app: Id, urls: Id) {
    let count_sel = sel_registerName(b"count\0".as_ptr());
    let object_at_sel = sel_registerName(b"objectAtIndex:\0".as_ptr());
    let absolute_sel = sel_registerName(b"absoluteString\0".as_ptr());
    let utf8_sel = sel_registerName(b"UTF8String\0".as_ptr());

    let count = msg0_usize(urls, count_sel);
    let mut captured = Vec::new();

    for i in 0..count {
        let url = msg1_usize(urls, object_at_sel, i);
        if url.is_null() {
            continue;
        }
        let ns_string = msg0(url, absolute_sel);
        if ns_string.is_null() {
            continue;
        }
        let c_str = msg0(ns_string, utf8_sel) as *const i8;
        if c_str.is_null() {
            continue;
        }
        if let Ok(url) = std::ffi::CStr::from_ptr(c_str).to_str() {
            captured.push(url.to_string());
        }
    }

    if let Ok(mut urls) = CAPTURED_URLS.lock() {
        urls.extend(captured);
    }
}

unsafe extern "C" fn swizzled_finish_launching(this: Id, cmd: Sel) {
    let delegate_sel = sel_registerName(b"delegate\0".as_ptr());
    let open_urls_sel = sel_registerName(b"application:openURLs:\0".as_ptr());

    let delegate = msg0(this, delegate_sel);
    if !delegate.is_null() {
        let cls = object_getClass(delegate);
        let method = class_getInstanceMethod(cls, open_urls_sel);
        if !method.is_null() {
            method_setImplementation(method, capture_open_urls as *const c_void);
        }
    }

    let original = ORIGINAL_FINISH_LAUNCHING.lock().ok().map(|g| *g).unwrap_or(0);
    if original != 0 {
        let f: unsafe extern "C" fn(Id, Sel) = std::mem::transmute(original);
        f(this, cmd);
    }
}

pub(crate) fn install() {
    unsafe {
        let cls = objc_getClass(b"NSApplication\0".as_ptr());
        if cls.is_null() {
            return;
        }
        let sel = sel_registerName(b"finishLaunching\0".as_ptr());
        let method = class_getInstanceMethod(cls, sel);
        if method.is_null() {
            return;
        }

        let original = method_setImplementation(method, swizzled_finish_launching as *const c_void);
        if let Ok(mut guard) = ORIGINAL_FINISH_LAUNCHING.lock() {
            *guard = original as usize;
        }
    }
}

/// Drains URLs captured during launch, converted to local path strings.
pub(crate) fn take_paths() -> Vec<String> {
    let urls = {
        let Ok(mut captured) = CAPTURED_URLS.lock() else {
            return Vec::new();
        };
        std::mem::take(&mut *captured)
    };

    urls.iter()
        .filter_map(|url| file_url_to_path(url))
        .map(|path| path_to_string(&path))
        .collect()
}
