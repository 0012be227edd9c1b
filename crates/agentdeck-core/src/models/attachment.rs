use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttachmentKind {
    Document,
    Image,
    Data,
    Video,
}

impl AttachmentKind {
    /// Classify a file by its extension (case-insensitive).
    /// Anything unrecognized is treated as a document.
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_ascii_lowercase().as_str() {
            "png" | "jpg" | "jpeg" | "gif" | "webp" | "bmp" | "svg" => AttachmentKind::Image,
            "csv" | "tsv" | "json" | "jsonl" | "parquet" | "xls" | "xlsx" | "db" | "sqlite" => {
                AttachmentKind::Data
            }
            "mp4" | "mov" | "mkv" | "avi" | "webm" => AttachmentKind::Video,
            _ => AttachmentKind::Document,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AttachmentKind::Document => "document",
            AttachmentKind::Image => "image",
            AttachmentKind::Data => "data",
            AttachmentKind::Video => "video",
        }
    }
}

/// A file or image reference carried by a message.
///
/// Built by the picker and stored verbatim: the `uri` is never dereferenced
/// and none of the fields are validated beyond being attached to a message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attachment {
    pub id: String,
    pub name: String,
    pub kind: AttachmentKind,
    pub uri: String,
    /// Byte count, 0 when unknown
    pub size: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_extension() {
        assert_eq!(AttachmentKind::from_extension("png"), AttachmentKind::Image);
        assert_eq!(AttachmentKind::from_extension("JPEG"), AttachmentKind::Image);
        assert_eq!(AttachmentKind::from_extension("csv"), AttachmentKind::Data);
        assert_eq!(AttachmentKind::from_extension("mov"), AttachmentKind::Video);
        assert_eq!(AttachmentKind::from_extension("pdf"), AttachmentKind::Document);
    }

    #[test]
    fn test_unknown_extension_is_document() {
        assert_eq!(AttachmentKind::from_extension(""), AttachmentKind::Document);
        assert_eq!(AttachmentKind::from_extension("xyz"), AttachmentKind::Document);
    }
}
