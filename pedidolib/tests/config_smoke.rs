use pedidolib::config::Config;

#[test]
fn defaults() {
    let cfg = Config::default();
    assert_eq!(cfg.similarity.threshold, 2);
    assert_eq!(cfg.similarity.min_len, 4);
    assert_eq!(cfg.history.limit, 50);
    assert_eq!(cfg.capture.silence_ms, 2000);
}

#[test]
fn partial_toml_keeps_other_defaults() {
    let cfg = Config::from_toml("[similarity]\nthreshold = 1\n").expect("toml");
    assert_eq!(cfg.similarity.threshold, 1);
    assert_eq!(cfg.similarity.min_len, 4);
    assert_eq!(cfg.history.limit, 50);

    let empty = Config::from_toml("").expect("empty toml");
    assert_eq!(empty, Config::default());
}

#[test]
fn bad_toml_is_an_error() {
    assert!(Config::from_toml("[similarity]\nthreshold = \"two\"\n").is_err());
}
