use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use uuid::Uuid;

use agentdeck_core::models::{Attachment, AttachmentKind};

/// The only thing that can go wrong while browsing: the directory itself
/// refuses to be read. Surfaced to the status bar, never stored.
#[derive(Debug, Error)]
pub enum PickerError {
    #[error("failed to read {}: {source}", dir.display())]
    ReadDir {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct PickerEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
    /// Byte count for files, 0 when metadata is unavailable
    pub size: u64,
}

/// List a directory for the attachment picker: directories first, then
/// files, each sorted case-insensitively. Hidden entries are skipped.
pub fn list_dir(dir: &Path) -> Result<Vec<PickerEntry>, PickerError> {
    let read = fs::read_dir(dir).map_err(|source| PickerError::ReadDir {
        dir: dir.to_path_buf(),
        source,
    })?;

    let mut entries = Vec::new();
    for entry in read.flatten() {
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }
        let metadata = entry.metadata().ok();
        let is_dir = metadata.as_ref().map(|m| m.is_dir()).unwrap_or(false);
        let size = metadata.map(|m| m.len()).unwrap_or(0);
        entries.push(PickerEntry {
            name,
            path: entry.path(),
            is_dir,
            size,
        });
    }

    entries.sort_by(|a, b| {
        b.is_dir
            .cmp(&a.is_dir)
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
    });

    Ok(entries)
}

/// Build the Attachment value handed to the store. The store trusts it
/// verbatim, so everything worth knowing is decided here: kind from the
/// extension, size from fs metadata, a file:// locator that is never
/// dereferenced again.
pub fn attachment_from_entry(entry: &PickerEntry) -> Attachment {
    let kind = entry
        .path
        .extension()
        .and_then(|e| e.to_str())
        .map(AttachmentKind::from_extension)
        .unwrap_or(AttachmentKind::Document);

    Attachment {
        id: format!("att-{}", Uuid::new_v4()),
        name: entry.name.clone(),
        kind,
        uri: format!("file://{}", entry.path.display()),
        size: entry.size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_list_dir_sorts_dirs_first_and_skips_hidden() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        File::create(dir.path().join("b.txt")).unwrap();
        File::create(dir.path().join("A.png")).unwrap();
        File::create(dir.path().join(".hidden")).unwrap();

        let entries = list_dir(dir.path()).unwrap();
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["sub", "A.png", "b.txt"]);
        assert!(entries[0].is_dir);
    }

    #[test]
    fn test_list_dir_missing_directory_errors() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = list_dir(&missing).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }

    #[test]
    fn test_attachment_from_entry_infers_kind_and_size() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("photo.png");
        File::create(&path).unwrap().write_all(b"not a real png").unwrap();

        let entries = list_dir(dir.path()).unwrap();
        let attachment = attachment_from_entry(&entries[0]);

        assert_eq!(attachment.name, "photo.png");
        assert_eq!(attachment.kind, AttachmentKind::Image);
        assert_eq!(attachment.size, 14);
        assert!(attachment.uri.starts_with("file://"));
        assert!(attachment.id.starts_with("att-"));
    }

    #[test]
    fn test_attachment_without_extension_is_document() {
        let entry = PickerEntry {
            name: "README".to_string(),
            path: PathBuf::from("/tmp/README"),
            is_dir: false,
            size: 0,
        };
        assert_eq!(attachment_from_entry(&entry).kind, AttachmentKind::Document);
    }
}
