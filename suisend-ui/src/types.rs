//! View-model types shared across the Sui Send screens.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Broad media category of an uploaded file, used for list glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Image,
    Audio,
    Video,
    Other,
}

impl FileKind {
    /// Classify a file by its extension.
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "png" | "jpg" | "jpeg" | "gif" | "webp" | "svg" | "bmp" => FileKind::Image,
            "mp3" | "wav" | "ogg" | "flac" | "m4a" | "aac" => FileKind::Audio,
            "mp4" | "mov" | "mkv" | "avi" | "webm" => FileKind::Video,
            _ => FileKind::Other,
        }
    }

    /// Glyph shown next to file names in list rows.
    pub fn glyph(&self) -> &'static str {
        match self {
            FileKind::Image => "🖼️",
            FileKind::Audio => "🎵",
            FileKind::Video => "🎬",
            FileKind::Other => "📄",
        }
    }
}

/// A file already accepted by the upload pipeline.
///
/// Immutable from the screens' perspective; the shell assigns ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferFile {
    pub id: String,
    pub name: String,
    pub kind: FileKind,
}

/// Access-control mode for a transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransferType {
    Email,
    Wallet,
    Nft,
    Sbt,
}

impl TransferType {
    /// All modes, in pick-list order.
    pub const ALL: [TransferType; 4] = [
        TransferType::Email,
        TransferType::Wallet,
        TransferType::Nft,
        TransferType::Sbt,
    ];
}

impl std::fmt::Display for TransferType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransferType::Email => write!(f, "Email"),
            TransferType::Wallet => write!(f, "Wallet"),
            TransferType::Nft => write!(f, "NFT"),
            TransferType::Sbt => write!(f, "SBT"),
        }
    }
}

/// How long a transfer stays available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpiryDuration {
    OneDay,
    ThreeDays,
    SevenDays,
    ThirtyDays,
}

impl ExpiryDuration {
    /// All durations, in pick-list order.
    pub const ALL: [ExpiryDuration; 4] = [
        ExpiryDuration::OneDay,
        ExpiryDuration::ThreeDays,
        ExpiryDuration::SevenDays,
        ExpiryDuration::ThirtyDays,
    ];
}

impl std::fmt::Display for ExpiryDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExpiryDuration::OneDay => write!(f, "1 Day"),
            ExpiryDuration::ThreeDays => write!(f, "3 Days"),
            ExpiryDuration::SevenDays => write!(f, "7 Days"),
            ExpiryDuration::ThirtyDays => write!(f, "30 Days"),
        }
    }
}

/// Draft configuration for a transfer, accumulated field-by-field on the
/// transfer screen and read once on submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferConfig {
    pub transfer_type: TransferType,
    pub encryption_enabled: bool,
    pub recipient: String,
    pub title: String,
    pub message: String,
    pub duration: ExpiryDuration,
}

impl Default for TransferConfig {
    fn default() -> Self {
        Self {
            transfer_type: TransferType::Email,
            encryption_enabled: false,
            recipient: String::new(),
            title: String::new(),
            message: String::new(),
            duration: ExpiryDuration::ThreeDays,
        }
    }
}
