use super::glob::Glob;
use super::resolution::{FieldGap, Resolution};
use super::tokenizer::parse_integer;
use crate::{ParseError, ParserSettings, Result};
use once_cell::sync::Lazy;
use tracing::{debug, trace};

const HEIGHT_MARKER: &str = "f";
const WIDTH_MARKER: &str = "w";
const BANDS_MARKER: &str = "h";

/// Hyperspectral captures whose band count follows the first `h` token.
static BANDS_FIRST_MARKER: Lazy<[Glob; 2]> =
    Lazy::new(|| [Glob::builtin("hs*.bin"), Glob::builtin("hs_*.npy")]);

/// Reference captures whose band count follows the last `h` token.
static BANDS_LAST_MARKER: Lazy<Glob> = Lazy::new(|| Glob::builtin("*_hs_r*.bin"));

/// What sits after a marker token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MarkerValue {
    Parsed(i64),
    Unparsable,
    NoFollowingToken,
    Absent,
}

impl MarkerValue {
    fn read(tokens: &[&str], marker_index: Option<usize>) -> Self {
        let Some(index) = marker_index else {
            return MarkerValue::Absent;
        };
        match tokens.get(index + 1) {
            Some(token) => parse_integer(token).map_or(MarkerValue::Unparsable, MarkerValue::Parsed),
            None => MarkerValue::NoFollowingToken,
        }
    }

    fn after_first(tokens: &[&str], marker: &str) -> Self {
        Self::read(tokens, tokens.iter().position(|token| *token == marker))
    }

    fn after_last(tokens: &[&str], marker: &str) -> Self {
        Self::read(tokens, tokens.iter().rposition(|token| *token == marker))
    }
}

#[derive(Debug, Clone)]
struct CompiledFallback {
    glob: Glob,
    height: i64,
    width: i64,
}

/// Recovers pixel height/width and spectral band count from filename tokens.
///
/// Given `hsr_m_0_w_rp_0_2018_8_17_9_45_26_509_f_30_w_1024_h_56.bin`, `f_30`
/// is a height of 30 pixels, `w_1024` a width of 1024 and `h_56` 56 bands.
#[derive(Debug, Clone)]
pub struct DimensionResolver {
    fallbacks: Vec<CompiledFallback>,
    default_band_count: i64,
}

impl DimensionResolver {
    pub fn from_settings(settings: &ParserSettings) -> Result<Self> {
        let fallbacks = settings
            .dimension_fallbacks
            .iter()
            .map(|fallback| {
                let glob = Glob::new(&fallback.pattern).map_err(|source| {
                    ParseError::InvalidPattern {
                        pattern: fallback.pattern.clone(),
                        source,
                    }
                })?;
                Ok(CompiledFallback {
                    glob,
                    height: fallback.height,
                    width: fallback.width,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            fallbacks,
            default_band_count: settings.default_band_count,
        })
    }

    pub fn height(&self, filename: &str, tokens: &[&str]) -> Resolution<i64> {
        self.axis(filename, tokens, HEIGHT_MARKER, |fallback| fallback.height)
    }

    pub fn width(&self, filename: &str, tokens: &[&str]) -> Resolution<i64> {
        self.axis(filename, tokens, WIDTH_MARKER, |fallback| fallback.width)
    }

    fn axis(
        &self,
        filename: &str,
        tokens: &[&str],
        marker: &str,
        pick: impl Fn(&CompiledFallback) -> i64,
    ) -> Resolution<i64> {
        let marker_value = MarkerValue::after_last(tokens, marker);
        if let MarkerValue::Parsed(value) = marker_value {
            return Resolution::Found(value);
        }

        match self.fallbacks.iter().find(|fallback| fallback.glob.matches(filename)) {
            Some(fallback) => {
                trace!(
                    filename,
                    marker,
                    pattern = fallback.glob.as_str(),
                    ?marker_value,
                    "using hardcoded dimension"
                );
                Resolution::Found(pick(fallback))
            }
            None => Resolution::Missing(FieldGap::NoDimensionMarker),
        }
    }

    /// Band count for hyperspectral captures.
    ///
    /// The two naming families fall back to the default count under different
    /// conditions. For `hs*.bin`/`hs_*.npy` any unusable `h` token yields the
    /// default. For `*_hs_r*.bin` only a missing band token does; an
    /// unparsable one leaves whatever the first rule produced.
    pub fn bands(&self, filename: &str, tokens: &[&str]) -> Resolution<i64> {
        let mut bands = None;

        if BANDS_FIRST_MARKER.iter().any(|glob| glob.matches(filename)) {
            bands = Some(match MarkerValue::after_first(tokens, BANDS_MARKER) {
                MarkerValue::Parsed(value) => value,
                _ => self.default_band_count,
            });
        }

        if BANDS_LAST_MARKER.matches(filename) {
            match MarkerValue::after_last(tokens, BANDS_MARKER) {
                MarkerValue::Parsed(value) => bands = Some(value),
                MarkerValue::Absent | MarkerValue::NoFollowingToken => {
                    bands = Some(self.default_band_count)
                }
                MarkerValue::Unparsable => {
                    debug!(filename, ?bands, "unparsable band token in reference capture")
                }
            }
        }

        Resolution::from_option(bands, FieldGap::NoDimensionMarker)
    }
}
