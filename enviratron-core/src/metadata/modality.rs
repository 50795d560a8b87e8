use super::glob::Glob;
use super::resolution::{FieldGap, Resolution};
use crate::ParseError;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sensor or data product a file represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modality {
    #[serde(rename = "point cloud")]
    PointCloud,
    #[serde(rename = "rgb pose")]
    RgbPose,
    #[serde(rename = "rgb image")]
    RgbImage,
    #[serde(rename = "fluorometer pam")]
    FluorometerPam,
    #[serde(rename = "infrared")]
    Infrared,
    #[serde(rename = "depth")]
    Depth,
    #[serde(rename = "depth pose")]
    DepthPose,
    #[serde(rename = "hyperspectral reference dark")]
    HyperspectralReferenceDark,
    #[serde(rename = "hyperspectral reference white")]
    HyperspectralReferenceWhite,
    #[serde(rename = "hyperspectral")]
    Hyperspectral,
    #[serde(rename = "hyperspectral pose")]
    HyperspectralPose,
    #[serde(rename = "hyperspectral reference pose")]
    HyperspectralReferencePose,
    #[serde(rename = "hyperspectral csv")]
    HyperspectralCsv,
    #[serde(rename = "thermal pose")]
    ThermalPose,
    #[serde(rename = "thermal")]
    Thermal,
    #[serde(rename = "thermal image")]
    ThermalImage,
}

impl Modality {
    pub const ALL: [Modality; 16] = [
        Modality::PointCloud,
        Modality::RgbPose,
        Modality::RgbImage,
        Modality::FluorometerPam,
        Modality::Infrared,
        Modality::Depth,
        Modality::DepthPose,
        Modality::HyperspectralReferenceDark,
        Modality::HyperspectralReferenceWhite,
        Modality::Hyperspectral,
        Modality::HyperspectralPose,
        Modality::HyperspectralReferencePose,
        Modality::HyperspectralCsv,
        Modality::ThermalPose,
        Modality::Thermal,
        Modality::ThermalImage,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Modality::PointCloud => "point cloud",
            Modality::RgbPose => "rgb pose",
            Modality::RgbImage => "rgb image",
            Modality::FluorometerPam => "fluorometer pam",
            Modality::Infrared => "infrared",
            Modality::Depth => "depth",
            Modality::DepthPose => "depth pose",
            Modality::HyperspectralReferenceDark => "hyperspectral reference dark",
            Modality::HyperspectralReferenceWhite => "hyperspectral reference white",
            Modality::Hyperspectral => "hyperspectral",
            Modality::HyperspectralPose => "hyperspectral pose",
            Modality::HyperspectralReferencePose => "hyperspectral reference pose",
            Modality::HyperspectralCsv => "hyperspectral csv",
            Modality::ThermalPose => "thermal pose",
            Modality::Thermal => "thermal",
            Modality::ThermalImage => "thermal image",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|modality| modality.label() == label)
    }
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Modality {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| ParseError::UnknownModality(s.to_string()))
    }
}

/// Filename patterns in priority order. Several names match more than one
/// entry, so the order is part of the contract.
const RULE_PATTERNS: [(&str, Modality); 19] = [
    ("*.pcd", Modality::PointCloud),
    ("rgb_pose*.yml", Modality::RgbPose),
    ("rgb*.jpg", Modality::RgbImage),
    ("PAM*.yml", Modality::FluorometerPam),
    ("ir_*.bin", Modality::Infrared),
    ("depth_*.bin", Modality::Depth),
    ("depth_pose_*.yml", Modality::DepthPose),
    // Reference captures were renamed partway through the experiment.
    ("?_hs_rd_*.bin", Modality::HyperspectralReferenceDark),
    ("hsr_*_d_rp_*.bin", Modality::HyperspectralReferenceDark),
    ("?_hs_rw_*.bin", Modality::HyperspectralReferenceWhite),
    ("hsr_*_w_rp_*.bin", Modality::HyperspectralReferenceWhite),
    ("hs_*.bin", Modality::Hyperspectral),
    ("?_hs_*_pose.csv", Modality::HyperspectralPose),
    ("hsr_*_pose.csv", Modality::HyperspectralReferencePose),
    ("hsr_*.csv", Modality::HyperspectralCsv),
    ("?_hs_*.csv", Modality::HyperspectralCsv),
    ("thermo_pose_*.yml", Modality::ThermalPose),
    ("thermo_*.bin", Modality::Thermal),
    ("thermo_*.jpg", Modality::ThermalImage),
];

static MODALITY_RULES: Lazy<Vec<ModalityRule>> = Lazy::new(|| {
    RULE_PATTERNS
        .iter()
        .map(|&(pattern, modality)| ModalityRule {
            glob: Glob::builtin(pattern),
            modality,
        })
        .collect()
});

/// One entry of the modality table.
#[derive(Debug, Clone)]
pub struct ModalityRule {
    glob: Glob,
    modality: Modality,
}

impl ModalityRule {
    pub fn pattern(&self) -> &str {
        self.glob.as_str()
    }

    pub fn modality(&self) -> Modality {
        self.modality
    }

    pub fn matches(&self, filename: &str) -> bool {
        self.glob.matches(filename)
    }
}

/// The modality table, highest priority first.
pub fn modality_rules() -> &'static [ModalityRule] {
    &MODALITY_RULES
}

/// First rule whose pattern matches the whole filename wins.
pub fn classify(filename: &str) -> Resolution<Modality> {
    let modality = MODALITY_RULES
        .iter()
        .find(|rule| rule.matches(filename))
        .map(ModalityRule::modality);

    Resolution::from_option(modality, FieldGap::NoPatternMatch)
}
