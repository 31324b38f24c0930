//! End-to-end behavior of the target-browser check against real directories.

use fob_browserslist::{
    check_browsers, check_browsers_with_report, BrowsersError, BrowserslistDiscovery,
    DefaultsWrite, ManifestError, ScriptedPrompter, DEFAULT_BROWSERS,
};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const MANIFEST: &str = r#"{
  "name": "web",
  "version": "0.1.0",
  "scripts": {
    "build": "fob build src/index.ts"
  },
  "dependencies": {
    "react": "^19.0.0"
  }
}
"#;

fn read_manifest(dir: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(dir.join("package.json")).unwrap()).unwrap()
}

#[tokio::test]
async fn existing_config_is_returned_untouched() {
    for interactive in [true, false] {
        let dir = TempDir::new().unwrap();
        let manifest = r#"{ "name": "web", "browserslist": ["last 2 versions"] }"#;
        fs::write(dir.path().join("package.json"), manifest).unwrap();
        let prompter = ScriptedPrompter::new([]);

        let (result, report) = check_browsers_with_report(
            dir.path(),
            interactive,
            &BrowserslistDiscovery::new(),
            &prompter,
        )
        .await;

        assert_eq!(result.unwrap().defaults(), ["last 2 versions"]);
        assert!(prompter.asked().is_empty());
        assert!(report.write.is_none());
        assert_eq!(
            fs::read_to_string(dir.path().join("package.json")).unwrap(),
            manifest
        );
    }
}

#[tokio::test]
async fn non_interactive_writes_defaults() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("package.json"), MANIFEST).unwrap();
    let prompter = ScriptedPrompter::new([]);

    let config = check_browsers(dir.path(), false, &BrowserslistDiscovery::new(), &prompter)
        .await
        .unwrap();

    assert_eq!(config.defaults(), DEFAULT_BROWSERS);
    assert_eq!(config.source(), dir.path().join("package.json"));
    assert!(prompter.asked().is_empty());
    assert_eq!(
        read_manifest(dir.path())["browserslist"],
        serde_json::json!([">0.2%", "not dead", "not ie <= 11", "not op_mini all"])
    );
}

#[tokio::test]
async fn interactive_decline_leaves_manifest_alone() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("package.json"), MANIFEST).unwrap();
    let prompter = ScriptedPrompter::new([false]);

    let err = check_browsers(dir.path(), true, &BrowserslistDiscovery::new(), &prompter)
        .await
        .unwrap_err();

    assert!(matches!(err, BrowsersError::NotConfigured));
    assert_eq!(prompter.asked().len(), 1);
    assert_eq!(
        fs::read_to_string(dir.path().join("package.json")).unwrap(),
        MANIFEST
    );
}

#[tokio::test]
async fn interactive_accept_preserves_other_fields() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("package.json"), MANIFEST).unwrap();
    let before = read_manifest(dir.path());
    let prompter = ScriptedPrompter::new([true]);

    let config = check_browsers(dir.path(), true, &BrowserslistDiscovery::new(), &prompter)
        .await
        .unwrap();
    assert!(config.is_default());

    let after = read_manifest(dir.path());
    let before = before.as_object().unwrap();
    let after = after.as_object().unwrap();
    for (key, value) in before {
        assert_eq!(after.get(key), Some(value), "field `{key}` changed");
    }
    assert_eq!(after.len(), before.len() + 1);
}

#[tokio::test]
async fn accept_in_nested_directory_writes_nearest_manifest() {
    let dir = TempDir::new().unwrap();
    let nested = dir.path().join("src/components");
    fs::create_dir_all(&nested).unwrap();
    fs::write(dir.path().join("package.json"), MANIFEST).unwrap();

    let config = check_browsers(
        &nested,
        true,
        &BrowserslistDiscovery::new(),
        &ScriptedPrompter::new([true]),
    )
    .await
    .unwrap();

    assert_eq!(config.source(), dir.path().join("package.json"));
    assert!(!nested.join("package.json").exists());
}

#[tokio::test]
async fn accept_without_manifest_fails() {
    let dir = TempDir::new().unwrap();
    let prompter = ScriptedPrompter::new([true]);

    let (result, report) = check_browsers_with_report(
        dir.path(),
        true,
        &BrowserslistDiscovery::new(),
        &prompter,
    )
    .await;

    assert!(matches!(result, Err(BrowsersError::NotConfigured)));
    assert!(matches!(
        report.write,
        Some(DefaultsWrite::Skipped(ManifestError::NotFound(_)))
    ));
    assert!(!dir.path().join("package.json").exists());
}

#[tokio::test]
async fn malformed_manifest_is_not_rewritten() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("package.json"), "{ \"name\": ").unwrap();

    let (result, report) = check_browsers_with_report(
        dir.path(),
        false,
        &BrowserslistDiscovery::new(),
        &ScriptedPrompter::new([]),
    )
    .await;

    assert!(matches!(result, Err(BrowsersError::NotConfigured)));
    assert!(matches!(
        report.write,
        Some(DefaultsWrite::Skipped(ManifestError::InvalidJson { .. }))
    ));
    assert_eq!(
        fs::read_to_string(dir.path().join("package.json")).unwrap(),
        "{ \"name\": "
    );
}

#[tokio::test]
async fn check_is_bounded() {
    let cases: [(bool, &[bool], bool); 4] = [
        (false, &[], true),
        (false, &[], false),
        (true, &[true], true),
        (true, &[false], true),
    ];

    for (interactive, answers, with_manifest) in cases {
        let dir = TempDir::new().unwrap();
        if with_manifest {
            fs::write(dir.path().join("package.json"), MANIFEST).unwrap();
        }
        let prompter = ScriptedPrompter::new(answers.iter().copied());

        let (_, report) = check_browsers_with_report(
            dir.path(),
            interactive,
            &BrowserslistDiscovery::new(),
            &prompter,
        )
        .await;

        assert!(report.resolutions <= 2);
        assert!(prompter.asked().len() <= 1);
        assert!(report.consent.is_some());
    }
}

#[tokio::test]
async fn stale_cache_is_cleared_after_write() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("package.json"), MANIFEST).unwrap();
    let discovery = BrowserslistDiscovery::new();

    assert!(discovery.find_config(dir.path()).unwrap().is_none());

    let config = check_browsers(dir.path(), false, &discovery, &ScriptedPrompter::new([]))
        .await
        .unwrap();
    assert!(config.is_default());
}
