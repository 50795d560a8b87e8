use anyhow::{Context, anyhow};
use enviratron_core::{FilenameParser, ParserSettings};
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use tracing::info;

pub const CONFIG_PATH_ENV: &str = "ENVIRATRON_PARSER_CONFIG_PATH";
pub const CONFIG_JSON_ENV: &str = "ENVIRATRON_PARSER_CONFIG_JSON";

/// Source that produced the parser settings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SettingsSource {
    #[default]
    Default,
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

/// Document format of a settings file or string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsFormat {
    Toml,
    Json,
}

impl SettingsFormat {
    /// `None` for extensions that say nothing about the format.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "toml" | "tml" => Some(SettingsFormat::Toml),
            "json" => Some(SettingsFormat::Json),
            _ => None,
        }
    }

    fn parse(self, contents: &str) -> anyhow::Result<ParserSettings> {
        Ok(match self {
            SettingsFormat::Toml => toml::from_str(contents)?,
            SettingsFormat::Json => serde_json::from_str(contents)?,
        })
    }
}

/// Resolves [`ParserSettings`] overrides.
#[derive(Debug, Clone, Default)]
pub struct ParserSettingsLoader {
    search_root: Option<PathBuf>,
}

impl ParserSettingsLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look for the default config files under `root` instead of the
    /// working directory.
    pub fn with_search_root(root: impl Into<PathBuf>) -> Self {
        Self {
            search_root: Some(root.into()),
        }
    }

    /// First hit wins: the file named by `ENVIRATRON_PARSER_CONFIG_PATH`,
    /// JSON in `ENVIRATRON_PARSER_CONFIG_JSON`, a default file under the
    /// search root, built-in defaults.
    pub fn load_from_env(&self) -> anyhow::Result<(ParserSettings, SettingsSource)> {
        if let Some(path) = non_empty_var(CONFIG_PATH_ENV) {
            let path = PathBuf::from(path);
            return Ok((Self::load_from_file(&path)?, SettingsSource::EnvPath(path)));
        }

        if let Some(raw) = non_empty_var(CONFIG_JSON_ENV) {
            let settings = Self::parse_str(&raw, Some(SettingsFormat::Json))
                .with_context(|| format!("${CONFIG_JSON_ENV} holds invalid settings"))?;
            return Ok((settings, SettingsSource::EnvInline));
        }

        match self.find_default_file() {
            Some(path) => Ok((Self::load_from_file(&path)?, SettingsSource::File(path))),
            None => Ok((ParserSettings::default(), SettingsSource::Default)),
        }
    }

    /// Loads settings and builds a parser from them in one go.
    pub fn build_parser(&self) -> anyhow::Result<(FilenameParser, SettingsSource)> {
        let (settings, source) = self.load_from_env()?;
        let parser = FilenameParser::with_settings(&settings)
            .with_context(|| format!("settings from {source:?} do not compile"))?;
        info!(?source, "filename parser configured");
        Ok((parser, source))
    }

    pub fn load_from_file(path: &Path) -> anyhow::Result<ParserSettings> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        Self::parse_str(&contents, SettingsFormat::from_path(path))
            .with_context(|| format!("{} holds invalid settings", path.display()))
    }

    /// Parse a settings document. Without a known format, TOML is tried
    /// before JSON.
    pub fn parse_str(
        contents: &str,
        format: Option<SettingsFormat>,
    ) -> anyhow::Result<ParserSettings> {
        if let Some(format) = format {
            return format.parse(contents);
        }

        SettingsFormat::Toml.parse(contents).or_else(|toml_err| {
            SettingsFormat::Json.parse(contents).map_err(|json_err| {
                anyhow!("neither TOML ({toml_err}) nor JSON ({json_err})")
            })
        })
    }

    fn find_default_file(&self) -> Option<PathBuf> {
        const CANDIDATES: &[&str] = &[
            "enviratron.toml",
            "enviratron.json",
            "config/enviratron.toml",
            "config/enviratron.json",
        ];

        let root = self.search_root.as_deref().unwrap_or(Path::new(""));
        CANDIDATES
            .iter()
            .map(|candidate| root.join(candidate))
            .find(|path| path.exists())
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_toml_overrides() {
        let settings = ParserSettingsLoader::parse_str(
            r#"
default_band_count = 224

[[dimension_fallbacks]]
pattern = "ir_*.bin"
height = 512
width = 640
"#,
            Some(SettingsFormat::Toml),
        )
        .unwrap();

        assert_eq!(settings.default_band_count, 224);
        assert_eq!(settings.dimension_fallbacks.len(), 1);
        assert_eq!(settings.dimension_fallbacks[0].pattern, "ir_*.bin");
    }

    #[test]
    fn test_parse_json_fallback() {
        let settings =
            ParserSettingsLoader::parse_str(r#"{"default_band_count": 60}"#, None).unwrap();
        assert_eq!(settings.default_band_count, 60);
        assert_eq!(
            settings.dimension_fallbacks,
            ParserSettings::default().dimension_fallbacks
        );
    }

    #[test]
    fn test_empty_document_is_default() {
        let settings = ParserSettingsLoader::parse_str("", None).unwrap();
        assert_eq!(settings, ParserSettings::default());
    }

    #[test]
    fn test_garbage_reports_both_errors() {
        let err = ParserSettingsLoader::parse_str("{{ nope", None).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("neither TOML"), "{message}");
        assert!(message.contains("nor JSON"), "{message}");
    }

    #[test]
    fn test_known_format_is_not_retried() {
        let toml_doc = "default_band_count = 70";
        assert!(ParserSettingsLoader::parse_str(toml_doc, Some(SettingsFormat::Json)).is_err());
        assert_eq!(
            ParserSettingsLoader::parse_str(toml_doc, Some(SettingsFormat::Toml))
                .unwrap()
                .default_band_count,
            70
        );
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            SettingsFormat::from_path(Path::new("a/enviratron.tml")),
            Some(SettingsFormat::Toml)
        );
        assert_eq!(
            SettingsFormat::from_path(Path::new("enviratron.json")),
            Some(SettingsFormat::Json)
        );
        assert_eq!(SettingsFormat::from_path(Path::new("enviratron.conf")), None);
        assert_eq!(SettingsFormat::from_path(Path::new("enviratron")), None);
    }
}
