use super::resolution::{FieldGap, Resolution};
use super::tokenizer::parse_integer;
use tracing::debug;

const CHAMBER_MARKER: &str = "chamber_";

/// Chamber id from the first ancestor directory naming one, e.g. `5` from
/// `/Volumes/Data/enviratron_imaging/35_clean/chamber_5/c1_2018_8_10_8_56_49_389/`.
/// The filename itself is never consulted.
pub fn resolve_chamber_id(ancestors: &[&str]) -> Resolution<i64> {
    let Some(segment) = ancestors
        .iter()
        .find(|segment| segment.contains(CHAMBER_MARKER))
    else {
        return Resolution::Missing(FieldGap::NoChamberSegment);
    };

    let suffix = segment.rsplit('_').next().unwrap_or(segment);
    match parse_integer(suffix) {
        Some(chamber_id) => Resolution::Found(chamber_id),
        None => {
            debug!(segment, "chamber segment does not end in an integer");
            Resolution::Missing(FieldGap::MalformedChamberSegment)
        }
    }
}
