use super::*;

#[test]
fn test_parse_names_defaults_to_bundled_dataset() {
    let config = parse_args(["otu-dashboard", "names"]).unwrap();
    assert_eq!(config.mode, RunMode::Names);
    assert_eq!(
        config.source,
        DataSource::File(PathBuf::from("data/samples.json"))
    );
    assert!(!config.verbose);
}

#[test]
fn test_parse_render_with_subject() {
    let config = parse_args([
        "otu-dashboard",
        "render",
        "--data",
        "https://example.org/samples.json",
        "--out",
        "out",
        "--subject",
        "941",
        "--seed",
        "42",
        "-v",
    ])
    .unwrap();
    assert_eq!(
        config.mode,
        RunMode::Render {
            out_dir: PathBuf::from("out"),
            subject: Some("941".to_string())
        }
    );
    assert_eq!(
        config.source,
        DataSource::Url("https://example.org/samples.json".to_string())
    );
    assert_eq!(config.seed, Some(42));
    assert_eq!(config.settings, RenderSettings::default());
    assert!(config.verbose);
}

#[test]
fn test_parse_session_top_n() {
    let config = parse_args(["otu-dashboard", "session", "--out", "o", "--top-n", "5"]).unwrap();
    assert_eq!(
        config.mode,
        RunMode::Session {
            out_dir: PathBuf::from("o")
        }
    );
    assert_eq!(config.settings.top_n, 5);
    assert_eq!(config.seed, None);
}

#[test]
fn test_render_requires_out() {
    assert!(parse_args(["otu-dashboard", "render"]).is_err());
}

#[test]
fn test_missing_command() {
    assert!(parse_args(["otu-dashboard"]).is_err());
}
