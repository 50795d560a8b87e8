//! # Enviratron Core
//!
//! Recovers the experiment metadata that the Enviratron acquisition pipeline
//! only ever wrote into file and directory names.
//!
//! ## Overview
//!
//! Every capture produced by the imaging robots lands on disk under a name
//! such as `thermo_pose_12_2018_8_10_9_3_23_608.yml` inside a
//! `chamber_5/c1_2018_8_10_8_56_49_389/` directory. `enviratron-core` turns
//! such a path into a [`FileMetadata`] record:
//!
//! - **Modality**: the sensor that produced the file (thermal, hyperspectral, ...)
//! - **Ordinal**: the index of the imaged subject within a session
//! - **Capture time**: calendar instant encoded in the integer tokens
//! - **Chamber**: growth chamber taken from an ancestor directory
//! - **Dimensions**: pixel height/width and spectral band count
//!
//! Every field is recovered independently. A path that only partially follows
//! the naming conventions still yields a record, with the fields that could
//! not be recovered left as `None`.
//!
//! ## Examples
//!
//! ```
//! use enviratron_core::{Modality, parse_path};
//!
//! let meta = parse_path(
//!     "/data/35_clean/chamber_5/c1_2018_8_10_8_56_49_389/thermo_pose_12_2018_8_10_9_3_23_608.yml",
//! )?;
//!
//! assert_eq!(meta.modality, Some(Modality::ThermalPose));
//! assert_eq!(meta.ordinal, Some(12));
//! assert_eq!(meta.chamber_id, Some(5));
//! assert_eq!(
//!     meta.capture_time.map(|t| t.isoformat()).as_deref(),
//!     Some("2018-08-10T09:03:23")
//! );
//! # Ok::<(), enviratron_core::ParseError>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

/// Error types and error handling utilities
pub mod error;

/// Filename/path metadata extraction
pub mod metadata;

/// Tunable constants used by the dimension fallbacks
pub mod settings;

pub use error::{ParseError, Result};
pub use metadata::{
    CaptureTime, FieldGap, FileMetadata, FilenameParser, Modality, ModalityRule, parse_path,
};
pub use settings::{DimensionFallback, ParserSettings};
