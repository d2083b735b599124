//! Integration tests for a plain `restage` run on an empty base path

use std::fs;
use std::process::Command;

use serde_json::Value;
use tempfile::tempdir;

fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_restage")
}

#[test]
fn run_creates_directory_plan_on_empty_base() {
    let dir = tempdir().unwrap();

    let output = Command::new(bin())
        .args(["--path", dir.path().to_str().unwrap()])
        .output()
        .unwrap();

    assert!(
        output.status.success(),
        "restage failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    for sub in [
        "public/assets",
        "public/models",
        "public/textures",
        "public/audio",
        "src/components",
        "src/utils",
        "src/styles",
        "docs",
    ] {
        assert!(dir.path().join(sub).is_dir(), "expected directory {sub}");
    }
}

#[test]
fn run_writes_descriptors_and_docs() {
    let dir = tempdir().unwrap();

    let output = Command::new(bin())
        .args(["--path", dir.path().to_str().unwrap()])
        .output()
        .unwrap();
    assert!(output.status.success());

    let package: Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("package.json")).unwrap())
            .unwrap();
    assert_eq!(package["name"], "aimlab-xr-wireless");
    assert_eq!(package["version"], "1.0.0");
    assert_eq!(package["license"], "MIT");
    assert_eq!(package["scripts"]["dev"], "npx serve .");
    assert_eq!(package["repository"]["type"], "git");
    assert!(package["keywords"]
        .as_array()
        .unwrap()
        .contains(&Value::from("webxr")));

    let deploy: Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("vercel.json")).unwrap())
            .unwrap();
    assert_eq!(deploy["version"], 2);
    assert_eq!(deploy["builds"][0]["use"], "@vercel/static");

    assert!(dir.path().join("README.md").is_file());
    assert!(dir.path().join(".gitignore").is_file());
    assert!(dir.path().join("docs/TECHNICAL.md").is_file());
}

#[test]
fn run_reports_progress_on_stdout() {
    let dir = tempdir().unwrap();

    let output = Command::new(bin())
        .args(["--path", dir.path().to_str().unwrap()])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Creating directory layout"));
    assert!(stdout.contains("Writing descriptors"));
    assert!(stdout.contains("package.json"));
    assert!(stdout.contains("restructuring complete"));
}

#[test]
fn run_json_emits_machine_readable_report() {
    let dir = tempdir().unwrap();

    let output = Command::new(bin())
        .args(["--path", dir.path().to_str().unwrap(), "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let value: Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(value["event"], "restructure");
    assert_eq!(value["status"], "success");
    // public + 4 subdirs, src + 3 subdirs, docs
    assert_eq!(value["report"]["directories"].as_array().unwrap().len(), 10);
    assert!(value["report"]["descriptors"]
        .as_array()
        .unwrap()
        .contains(&Value::from("package.json")));
}
