use super::modality::Modality;
use super::temporal::CaptureTime;
use serde::{Deserialize, Serialize};

/// Everything recoverable from one file path.
///
/// The raw strings are always present; each derived field is `None` when the
/// path does not carry it. `capture_time` is either complete or absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMetadata {
    pub raw_path: String,
    pub raw_filename: String,
    /// Text after the last `.` of the filename, empty when there is none.
    pub extension: String,
    pub modality: Option<Modality>,
    pub ordinal: Option<i64>,
    pub chamber_id: Option<i64>,
    pub capture_time: Option<CaptureTime>,
    pub height: Option<i64>,
    pub width: Option<i64>,
    /// Spectral band count, hyperspectral files only.
    pub bands: Option<i64>,
}
