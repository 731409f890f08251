//! Integration tests for the camkit binary
//!
//! Spawns the compiled binary for the commands that are safe without
//! the external build and fetch tools.

mod common;

use std::process::Command;

use common::TestProject;

fn run_camkit(dir: &std::path::Path, args: &[&str]) -> std::process::Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_camkit"));
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd.output().expect("Failed to execute camkit")
}

#[test]
fn test_config_list_outside_project_succeeds_empty() {
    let outside = TestProject::new();
    let output = run_camkit(&outside.path(), &["config", "list"]);

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(output.stdout.is_empty());
}

#[test]
fn test_config_list_inside_project_prints_names() {
    let project = TestProject::new();
    project.init_project("demo");
    project.create_file("configs/ia32", "");
    project.create_file("configs/arm", "");

    let output = run_camkit(&project.path(), &["config", "list"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "arm\nia32\n");
}

#[test]
fn test_config_load_unknown_name_reports_error() {
    let project = TestProject::new();
    project.init_project("demo");

    let output = run_camkit(&project.path(), &["config", "load", "nonexistent"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("nonexistent"));
}

#[test]
fn test_init_offline_sets_up_build_tree() {
    let templates = TestProject::new();
    templates.create_file("build/Makefile.project", "PROJECT := {{name}}\n");

    let project = TestProject::new();
    project.init_project("demo");

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_camkit"));
    cmd.current_dir(project.path());
    cmd.env("CAMKIT_TEMPLATES_DIR", templates.path());
    cmd.args(["init", "--offline"]);
    let output = cmd.output().expect("Failed to execute camkit");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(project.read_file("Makefile.project"), "PROJECT := demo\n");
    assert!(project.path().join("sel4/apps/demo").is_symlink());
}

#[test]
fn test_init_outside_project_reports_error() {
    let outside = TestProject::new();
    let output = run_camkit(&outside.path(), &["init", "--offline"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("camkes.toml"));
}

#[test]
fn test_info_list_templates_respects_env_override() {
    let templates = TestProject::new();
    templates.create_file("apps/hello-world/app.camkes", "");
    templates.create_file("apps/vm-minimal/app.camkes", "");
    let outside = TestProject::new();

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_camkit"));
    cmd.current_dir(outside.path());
    cmd.env("CAMKIT_TEMPLATES_DIR", templates.path());
    cmd.args(["info", "--list-templates"]);
    let output = cmd.output().expect("Failed to execute camkit");

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "hello-world\nvm-minimal\n"
    );
}
