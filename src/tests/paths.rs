use super::*;

#[test]
fn file_url_decodes_to_local_path() {
    assert_eq!(
        path_utils::file_url_to_path("file:///tmp/a.txt"),
        Some(PathBuf::from("/tmp/a.txt"))
    );
}

#[test]
fn file_url_percent_sequences_are_decoded() {
    assert_eq!(
        path_utils::file_url_to_path("file:///tmp/my%20notes/r%C3%A9sum%C3%A9.md"),
        Some(PathBuf::from("/tmp/my notes/résumé.md"))
    );
}

#[test]
fn malformed_percent_sequences_pass_through() {
    assert_eq!(
        path_utils::file_url_to_path("file:///tmp/100%.txt"),
        Some(PathBuf::from("/tmp/100%.txt"))
    );
}

#[test]
fn non_file_schemes_are_rejected() {
    assert_eq!(path_utils::file_url_to_path("https://example.com/a.txt"), None);
    assert_eq!(path_utils::file_url_to_path("/tmp/a.txt"), None);
}

#[test]
fn path_to_string_round_trips_plain_paths() {
    assert_eq!(path_to_string(Path::new("/tmp/a.txt")), "/tmp/a.txt");
}
