use thiserror::Error;

/// Why a field of [`FileMetadata`](super::FileMetadata) could not be
/// recovered. Never returned to callers as an error; parsing carries on and
/// the field stays `None`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldGap {
    #[error("filename has no extension")]
    MissingExtension,

    #[error("not enough integer tokens")]
    InsufficientTokens,

    #[error("integer token is too large")]
    OversizedInteger,

    #[error("integer tokens do not form a valid calendar instant")]
    InvalidCalendarValue,

    #[error("no dimension token and no fallback pattern applies")]
    NoDimensionMarker,

    #[error("no path segment names a chamber")]
    NoChamberSegment,

    #[error("chamber segment does not end in an integer")]
    MalformedChamberSegment,

    #[error("no modality pattern matches")]
    NoPatternMatch,
}

/// Outcome of a single field resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<T> {
    Found(T),
    Missing(FieldGap),
}

impl<T> Resolution<T> {
    pub fn from_option(value: Option<T>, gap: FieldGap) -> Self {
        match value {
            Some(value) => Resolution::Found(value),
            None => Resolution::Missing(gap),
        }
    }

    pub fn value(self) -> Option<T> {
        match self {
            Resolution::Found(value) => Some(value),
            Resolution::Missing(_) => None,
        }
    }

    pub fn gap(&self) -> Option<FieldGap> {
        match self {
            Resolution::Found(_) => None,
            Resolution::Missing(gap) => Some(*gap),
        }
    }
}
