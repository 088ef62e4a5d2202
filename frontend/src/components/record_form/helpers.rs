//! Small utilities shared by the form pages: reading the hidden file
//! input into `FileRef`s and formatting byte sizes for the file lists.

use integrity_common::wizard::FileRef;
use uuid::Uuid;
use web_sys::HtmlInputElement;

/// Captures name/size references for the files picked in a file input.
/// The file contents are never read or transmitted.
pub fn selected_files(input: &HtmlInputElement) -> Vec<FileRef> {
    let mut refs = Vec::new();
    if let Some(list) = input.files() {
        for index in 0..list.length() {
            if let Some(file) = list.get(index) {
                refs.push(FileRef {
                    id: Uuid::new_v4().to_string(),
                    name: file.name(),
                    size_bytes: file.size() as u64,
                });
            }
        }
    }
    refs
}

pub fn format_size(size_bytes: u64) -> String {
    format!("{:.2} KB", size_bytes as f64 / 1024.0)
}

/// Empty values render as an em dash on the read-only screens.
pub fn or_dash(value: &str) -> String {
    if value.is_empty() {
        "\u{2014}".to_string()
    } else {
        value.to_string()
    }
}
