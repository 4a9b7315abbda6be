//! Integration tests for the `init` and `validate` commands.

use camino::Utf8PathBuf;
use rdstats_lib::Host;
use std::fs;

/// Test host that captures output to in-memory buffers.
struct TestHost {
    output_buf: Vec<u8>,
    error_buf: Vec<u8>,
    exit_code: Option<i32>,
}

impl TestHost {
    const fn new() -> Self {
        Self {
            output_buf: Vec::new(),
            error_buf: Vec::new(),
            exit_code: None,
        }
    }

    fn output_str(&self) -> String {
        String::from_utf8_lossy(&self.output_buf).into_owned()
    }
}

impl Host for TestHost {
    fn output(&mut self) -> impl std::io::Write {
        &mut self.output_buf
    }

    fn error(&mut self) -> impl std::io::Write {
        &mut self.error_buf
    }

    fn exit(&mut self, code: i32) {
        self.exit_code = Some(code);
    }
}

#[test]
#[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
fn test_init_then_validate() {
    let dir = tempfile::tempdir().unwrap();
    let config = Utf8PathBuf::from_path_buf(dir.path().join("custom.toml")).unwrap();

    let mut host = TestHost::new();
    rdstats_lib::run(&mut host, ["rdstats", "init", config.as_str()]).unwrap();
    assert!(host.output_str().contains(&format!("Generated default configuration file: {config}")));
    assert!(fs::read_to_string(&config).unwrap().contains("[statistics_limits]"));

    let mut host = TestHost::new();
    rdstats_lib::run(&mut host, ["rdstats", "validate", "-c", config.as_str()]).unwrap();
    let output = host.output_str();
    assert!(output.contains("Configuration file is valid"), "got: {output}");
    assert!(output.contains(&format!("Config file: {config}")), "got: {output}");
}

#[test]
fn test_validate_without_explicit_config() {
    let mut host = TestHost::new();
    rdstats_lib::run(&mut host, ["rdstats", "validate"]).unwrap();
    assert!(host.output_str().contains("Configuration file is valid"));
    assert_eq!(host.exit_code, None);
}

#[test]
#[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
fn test_custom_limits_feed_the_stats_command() {
    let dir = tempfile::tempdir().unwrap();
    let config = Utf8PathBuf::from_path_buf(dir.path().join("rdstats.toml")).unwrap();
    fs::write(&config, "[statistics_limits]\nsmallest_stdev = 60\nupper_bound_multiple = 2.0\n").unwrap();
    let output = Utf8PathBuf::from_path_buf(dir.path().join("stats.csv")).unwrap();

    let mut host = TestHost::new();
    rdstats_lib::run(
        &mut host,
        [
            "rdstats",
            "stats",
            "tests/fixtures/cart_dump.csv",
            output.as_str(),
            "--write-limits",
            "-c",
            config.as_str(),
        ],
    )
    .unwrap();

    let report = fs::read_to_string(&output).unwrap();
    assert!(report.contains("Statistics Limits,0:01:00,4,1.5,2.0\n"), "got: {report}");
    assert!(report.contains("ROCK,6,0:00:00,23:59:59\n"), "got: {report}");
}

#[test]
#[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
fn test_validate_rejects_bad_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = Utf8PathBuf::from_path_buf(dir.path().join("bad.toml")).unwrap();
    fs::write(&config, "[statistics_limits]\nminimum_population_for_outliers = \"four\"\n").unwrap();

    let mut host = TestHost::new();
    let _ = rdstats_lib::run(&mut host, ["rdstats", "validate", "--config", config.as_str()]).unwrap_err();
    assert_eq!(host.exit_code, Some(1));
}
