//! Pipeline tests for gendiff
//!
//! Exercise the parse → diff → report stages and the `diff` command handler
//! against files on disk.

use gendiff::{
    cli::run_diff,
    config::{AppConfig, DiffConfig, DiffConfigBuilder},
    pipeline::{
        compute_diff, exit_codes, output_report, parse_document_with_context, render_report,
        PipelineError,
    },
    ReportFormat,
};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture_path(name: &str) -> PathBuf {
    Path::new(FIXTURES_DIR).join(name)
}

fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("write temp file");
    path
}

fn base_config(left: PathBuf, right: PathBuf) -> DiffConfigBuilder {
    DiffConfigBuilder::new()
        .left_path(left)
        .right_path(right)
        .no_color(true)
        .quiet(true)
}

// ============================================================================
// Stage Tests
// ============================================================================

mod stage_tests {
    use super::*;

    #[test]
    fn test_stages_compose() {
        let config = base_config(
            fixture_path("json/flat1.json"),
            fixture_path("yaml/flat2.yml"),
        )
        .output_format(ReportFormat::Plain)
        .build()
        .expect("config");

        let left = parse_document_with_context(&config.paths.left, true).expect("left");
        let right = parse_document_with_context(&config.paths.right, true).expect("right");
        let diff = compute_diff(&config, left.document(), right.document()).expect("diff");
        let report = render_report(&config, &diff, false).expect("report");

        assert_eq!(
            report,
            "Property 'follow' was removed\n\
             Property 'proxy' was removed\n\
             Property 'timeout' was updated. From 50 to 20\n\
             Property 'verbose' was added with value: true"
        );
    }

    #[test]
    fn test_non_mapping_root_is_diff_failure() {
        let config = base_config(
            fixture_path("json/list_root.json"),
            fixture_path("json/flat2.json"),
        )
        .build()
        .expect("config");

        let left = parse_document_with_context(&config.paths.left, true).expect("left");
        let right = parse_document_with_context(&config.paths.right, true).expect("right");
        let err = compute_diff(&config, left.document(), right.document()).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<PipelineError>(),
            Some(PipelineError::DiffFailed { .. })
        ));
        assert!(format!("{err:#}").contains("left document must be a mapping"));
    }

    #[test]
    fn test_output_report_writes_file() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("report.txt");
        let config = base_config(
            fixture_path("json/file1.json"),
            fixture_path("json/file2.json"),
        )
        .output_file(Some(out.clone()))
        .build()
        .expect("config");

        let left = parse_document_with_context(&config.paths.left, true).expect("left");
        let right = parse_document_with_context(&config.paths.right, true).expect("right");
        let diff = compute_diff(&config, left.document(), right.document()).expect("diff");
        output_report(&config, &diff).expect("output");

        let written = std::fs::read_to_string(&out).unwrap();
        assert!(written.starts_with("{\n    common: {\n"));
        assert!(!written.contains('\x1b'), "file output must not be colored");
    }
}

// ============================================================================
// Command Handler Tests
// ============================================================================

mod run_diff_tests {
    use super::*;

    fn run_to_file(config: DiffConfig) -> (i32, String) {
        let out = config.output.file.clone().expect("test writes to a file");
        let code = run_diff(config).expect("run_diff should succeed");
        (code, std::fs::read_to_string(out).expect("report written"))
    }

    #[test]
    fn test_changes_without_flag_succeed() {
        let tmp = TempDir::new().unwrap();
        let config = base_config(
            fixture_path("json/flat1.json"),
            fixture_path("json/flat2.json"),
        )
        .output_file(Some(tmp.path().join("out.txt")))
        .build()
        .unwrap();

        let (code, report) = run_to_file(config);
        assert_eq!(code, exit_codes::SUCCESS);
        assert!(report.contains("  + verbose: true"));
    }

    #[test]
    fn test_fail_on_change() {
        let tmp = TempDir::new().unwrap();
        let config = base_config(
            fixture_path("json/flat1.json"),
            fixture_path("json/flat2.json"),
        )
        .output_format(ReportFormat::Summary)
        .output_file(Some(tmp.path().join("out.txt")))
        .fail_on_change(true)
        .build()
        .unwrap();

        let (code, report) = run_to_file(config);
        assert_eq!(code, exit_codes::CHANGES_DETECTED);
        assert!(report.contains("4 change(s)"));
    }

    #[test]
    fn test_fail_on_change_with_identical_documents() {
        let tmp = TempDir::new().unwrap();
        let config = base_config(fixture_path("json/file1.json"), fixture_path("yaml/file1.yml"))
            .output_file(Some(tmp.path().join("out.txt")))
            .fail_on_change(true)
            .build()
            .unwrap();

        let (code, _) = run_to_file(config);
        assert_eq!(code, exit_codes::SUCCESS);
    }

    #[test]
    fn test_depth_ceiling_surfaces_as_error() {
        let tmp = TempDir::new().unwrap();
        let left = write_file(&tmp, "l.yaml", "a:\n  b:\n    c: 1\n");
        let right = write_file(&tmp, "r.yaml", "a:\n  b:\n    c: 2\n");
        let config = base_config(left, right)
            .max_depth(1)
            .output_file(Some(tmp.path().join("out.txt")))
            .build()
            .unwrap();

        let err = run_diff(config).unwrap_err();
        assert!(format!("{err:#}").contains("limit of 1 levels"));
        assert!(!tmp.path().join("out.txt").exists());
    }

    #[test]
    fn test_empty_document_is_parse_failure() {
        let tmp = TempDir::new().unwrap();
        let left = write_file(&tmp, "empty.json", "");
        let config = base_config(left, fixture_path("json/flat2.json"))
            .build()
            .unwrap();

        let err = run_diff(config).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PipelineError>(),
            Some(PipelineError::ParseFailed { path, .. }) if path.ends_with("empty.json")
        ));
    }
}

// ============================================================================
// Config Layering Tests
// ============================================================================

mod config_tests {
    use super::*;

    #[test]
    fn test_file_config_with_cli_overrides() {
        let tmp = TempDir::new().unwrap();
        let config_path = write_file(
            &tmp,
            ".gendiff.yaml",
            "output:\n  format: plain\ndiff:\n  max_depth: 4\n",
        );

        let overrides = AppConfig::builder().fail_on_change(true).build();
        let (app, loaded_from) = AppConfig::from_file_with_overrides(Some(&config_path), &overrides);

        assert_eq!(loaded_from, Some(config_path));
        assert_eq!(app.output.format, ReportFormat::Plain);
        assert_eq!(app.diff.max_depth, 4);
        assert!(app.behavior.fail_on_change);

        let config = DiffConfig::from_app(
            app,
            fixture_path("json/flat1.json"),
            fixture_path("json/flat2.json"),
        );
        assert_eq!(config.output.format, ReportFormat::Plain);
    }
}
