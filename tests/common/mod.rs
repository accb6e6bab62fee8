//! Common test utilities

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A page with two target fields, one excluded field and no trailing newline
pub const HOME_PAGE: &str = r#"{
  "title": "Home",
  "video_url": "https://cdn.example.com/home.mp4",
  "external_video_url": "https://youtube.example/watch?v=1",
  "hero": {
    "hero_video": "hero.webm"
  }
}"#;

/// A page with nothing to erase
pub const ABOUT_PAGE: &str = "{\n  \"title\": \"About\",\n  \"body\": \"We make videos.\"\n}\n";

/// Create an empty content root
pub fn create_test_root() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path().to_path_buf();
    (temp_dir, root)
}

/// Write a file below the root, creating parent directories
pub fn create_file(root: &Path, path: &str, content: impl AsRef<[u8]>) -> PathBuf {
    let full_path = root.join(path);
    if let Some(parent) = full_path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent dir");
    }
    fs::write(&full_path, content).expect("Failed to write file");
    full_path
}

/// Create a small content tree with changed, unchanged and ignored files
pub fn create_content_tree(root: &Path) {
    create_file(root, "pages/home.json", HOME_PAGE);
    create_file(root, "pages/about.json", ABOUT_PAGE);
    create_file(root, "pages/notes.txt", "\"video\": \"not json\"");
}

pub fn read(path: &Path) -> String {
    fs::read_to_string(path).expect("Failed to read file")
}
