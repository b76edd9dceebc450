use serde::{Deserialize, Serialize};

use super::common::u32_from_number_or_string;

/// An entry of a server directory listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileObject {
    pub name: String,
    pub mode: String,
    /// Octal permission digits, e.g. `644`. The daemon sends them as a string.
    #[serde(deserialize_with = "u32_from_number_or_string")]
    pub mode_bits: u32,
    pub size: u64,
    pub is_file: bool,
    pub is_symlink: bool,
    pub mimetype: String,
    pub created_at: String,
    pub modified_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenameFileEntry {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChmodFileEntry {
    pub file: String,
    pub mode: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenameFilesParams {
    pub root: String,
    pub files: Vec<RenameFileEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CopyFileParams {
    pub location: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeleteFilesParams {
    pub root: String,
    pub files: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateFolderParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<String>,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArchiveExtension {
    #[serde(rename = "zip")]
    Zip,
    #[serde(rename = "tgz")]
    Tgz,
    #[serde(rename = "tar.gz")]
    TarGz,
    #[serde(rename = "txz")]
    Txz,
    #[serde(rename = "tar.xz")]
    TarXz,
    #[serde(rename = "tbz2")]
    Tbz2,
    #[serde(rename = "tar.bz2")]
    TarBz2,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompressFilesParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<String>,
    pub files: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<ArchiveExtension>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DecompressFileParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<String>,
    pub file: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChmodFilesParams {
    pub root: String,
    pub files: Vec<ChmodFileEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PullFileParams {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_header: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground: Option<bool>,
}
