use serde::{Deserialize, Serialize};

/// Band count assumed for hyperspectral captures whose name does not carry one.
pub const DEFAULT_BAND_COUNT: i64 = 56;

/// Pixel dimensions assumed for a family of files whose names never carry
/// `f`/`w` tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionFallback {
    /// Shell glob (`*`, `?`) matched against the bare filename.
    pub pattern: String,
    pub height: i64,
    pub width: i64,
}

impl DimensionFallback {
    pub fn new(pattern: impl Into<String>, height: i64, width: i64) -> Self {
        Self {
            pattern: pattern.into(),
            height,
            width,
        }
    }
}

/// Constants consulted when a filename does not spell out its own
/// dimensions. The defaults are the values the acquisition rigs are known to
/// produce; embedders normally never change them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserSettings {
    /// Band count used when a hyperspectral filename has no usable `h` token.
    pub default_band_count: i64,
    /// Evaluated in order, first matching pattern wins.
    pub dimension_fallbacks: Vec<DimensionFallback>,
}

impl Default for ParserSettings {
    fn default() -> Self {
        Self {
            default_band_count: DEFAULT_BAND_COUNT,
            // rgb height/width are as recorded, not swapped.
            dimension_fallbacks: vec![
                DimensionFallback::new("thermo_*.jpg", 480, 640),
                DimensionFallback::new("thermo_*.bin", 480, 640),
                DimensionFallback::new("rgb_*.jpg", 1303, 156),
            ],
        }
    }
}
