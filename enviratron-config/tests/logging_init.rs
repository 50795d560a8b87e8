use enviratron_config::init_tracing;

#[test]
fn test_init_tracing_installs_once() {
    init_tracing("enviratron_core=trace").unwrap();
    assert!(init_tracing("info").is_err());

    // Gaps are traced, not returned.
    let meta = enviratron_core::parse_path("notes/README").unwrap();
    assert_eq!(meta.modality, None);
}
