use super::*;

pub(super) fn path_to_string(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

/// Converts a percent-encoded `file://` URL into a local path. Returns
/// `None` for non-file schemes or malformed UTF-8.
pub(super) fn file_url_to_path(url: &str) -> Option<PathBuf> {
    let encoded = url.strip_prefix("file://")?;
    let raw = encoded.as_bytes();
    let mut bytes = Vec::with_capacity(raw.len());

    let mut i = 0;
    while i < raw.len() {
        if raw[i] == b'%' && i + 2 < raw.len() {
            let pair = std::str::from_utf8(&raw[i + 1..i + 3]).unwrap_or("");
            if let Ok(byte) = u8::from_str_radix(pair, 16) {
                bytes.push(byte);
                i += 3;
                continue;
            }
        }
        bytes.push(raw[i]);
        i += 1;
    }

    Some(PathBuf::from(String::from_utf8(bytes).ok()?))
}
