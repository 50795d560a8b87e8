use super::chamber::resolve_chamber_id;
use super::dimensions::DimensionResolver;
use super::modality::classify;
use super::record::FileMetadata;
use super::resolution::Resolution;
use super::temporal::{resolve_capture_time, resolve_ordinal};
use super::tokenizer::tokenize;
use crate::{ParseError, ParserSettings, Result};
use once_cell::sync::Lazy;
use rayon::prelude::*;
use tracing::trace;

static DEFAULT_PARSER: Lazy<FilenameParser> = Lazy::new(|| FilenameParser {
    dimensions: DimensionResolver::from_settings(&ParserSettings::default())
        .expect("default dimension fallbacks should compile"),
});

/// Builds [`FileMetadata`] records from file paths.
///
/// Parsing is a pure function of the path string: the file is never opened
/// and no state is kept between calls, so one parser can be shared freely
/// across threads.
#[derive(Debug, Clone)]
pub struct FilenameParser {
    dimensions: DimensionResolver,
}

impl Default for FilenameParser {
    fn default() -> Self {
        Self::new()
    }
}

impl FilenameParser {
    pub fn new() -> Self {
        DEFAULT_PARSER.clone()
    }

    /// Parser using custom dimension fallbacks and band default.
    pub fn with_settings(settings: &ParserSettings) -> Result<Self> {
        Ok(Self {
            dimensions: DimensionResolver::from_settings(settings)?,
        })
    }

    /// Parse a `/`-separated path. Only an empty path is an error; every
    /// other input yields a record, possibly with all derived fields unset.
    pub fn parse(&self, path: impl AsRef<str>) -> Result<FileMetadata> {
        let path = path.as_ref();
        if path.is_empty() {
            return Err(ParseError::EmptyPath);
        }

        let tokenized = tokenize(path);
        let filename = tokenized.filename;
        let tokens = tokenized.tokens.as_slice();
        let ints = tokenized.ints.as_slice();

        Ok(FileMetadata {
            raw_path: path.to_string(),
            raw_filename: filename.to_string(),
            extension: settle(path, "extension", tokenized.extension)
                .unwrap_or_default()
                .to_string(),
            modality: settle(path, "modality", classify(filename)),
            ordinal: settle(path, "ordinal", resolve_ordinal(filename, ints)),
            chamber_id: settle(path, "chamber_id", resolve_chamber_id(tokenized.ancestors())),
            capture_time: settle(path, "capture_time", resolve_capture_time(filename, ints)),
            height: settle(path, "height", self.dimensions.height(filename, tokens)),
            width: settle(path, "width", self.dimensions.width(filename, tokens)),
            bands: settle(path, "bands", self.dimensions.bands(filename, tokens)),
        })
    }

    /// Parse many paths in parallel. Results come back in input order.
    pub fn parse_many<S>(&self, paths: &[S]) -> Vec<Result<FileMetadata>>
    where
        S: AsRef<str> + Sync,
    {
        paths.par_iter().map(|path| self.parse(path)).collect()
    }
}

/// Parse a path with the default settings.
pub fn parse_path(path: impl AsRef<str>) -> Result<FileMetadata> {
    DEFAULT_PARSER.parse(path)
}

fn settle<T>(path: &str, field: &'static str, resolution: Resolution<T>) -> Option<T> {
    if let Some(gap) = resolution.gap() {
        trace!(path, field, %gap, "field left unset");
    }
    resolution.value()
}
