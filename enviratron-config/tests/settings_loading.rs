use enviratron_config::{ParserSettingsLoader, SettingsSource};
use enviratron_core::ParserSettings;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_load_toml_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("parser.toml");
    fs::write(&path, "default_band_count = 112\n").unwrap();

    let settings = ParserSettingsLoader::load_from_file(&path).unwrap();
    assert_eq!(settings.default_band_count, 112);
    assert_eq!(
        settings.dimension_fallbacks,
        ParserSettings::default().dimension_fallbacks
    );
}

#[test]
fn test_load_json_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("parser.json");
    fs::write(
        &path,
        r#"{"dimension_fallbacks": [{"pattern": "depth_*.bin", "height": 424, "width": 512}]}"#,
    )
    .unwrap();

    let settings = ParserSettingsLoader::load_from_file(&path).unwrap();
    assert_eq!(settings.default_band_count, 56);
    assert_eq!(settings.dimension_fallbacks[0].height, 424);
}

#[test]
fn test_invalid_file_names_the_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("parser.json");
    fs::write(&path, "not json").unwrap();

    let err = ParserSettingsLoader::load_from_file(&path).unwrap_err();
    assert!(format!("{err:#}").contains("parser.json"));
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempdir().unwrap();
    assert!(ParserSettingsLoader::load_from_file(&dir.path().join("absent.toml")).is_err());
}

#[test]
fn test_default_file_under_search_root() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("config")).unwrap();
    let path = dir.path().join("config/enviratron.toml");
    fs::write(&path, "default_band_count = 99\n").unwrap();

    let loader = ParserSettingsLoader::with_search_root(dir.path());
    let (settings, source) = loader.load_from_env().unwrap();

    // The env overrides are not set in the test environment.
    assert_eq!(source, SettingsSource::File(path));
    assert_eq!(settings.default_band_count, 99);

    let (parser, _) = loader.build_parser().unwrap();
    let meta = parser.parse("hs_1_2018.bin").unwrap();
    assert_eq!(meta.bands, Some(99));
}

#[test]
fn test_defaults_when_nothing_configured() {
    let dir = tempdir().unwrap();
    let (settings, source) = ParserSettingsLoader::with_search_root(dir.path())
        .load_from_env()
        .unwrap();

    assert_eq!(source, SettingsSource::Default);
    assert_eq!(settings, ParserSettings::default());
}
