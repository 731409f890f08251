//! Integration tests for project scaffolding
//!
//! Scaffold runs here are offline; the source-fetch step is exercised
//! against the real external tool only in manual testing.

mod common;

use std::path::PathBuf;

use camkit::core::project::Project;
use camkit::core::scaffold::{self, InitOptions, ScaffoldOptions};
use camkit::error::{ScaffoldError, TemplateError};
use camkit::infra::dirs::TemplateDirs;
use common::TestProject;

/// Install a minimal template tree and return its provider
fn install_templates(root: &TestProject) -> TemplateDirs {
    root.create_file("base/gitignore", "images/\nconfigs/\n");
    root.create_file("base/Makefile", "TARGETS := {{name}}.camkes\n");
    root.create_file("base/Kbuild", "libs-y += {{name}}\n");
    root.create_file("base/Kconfig", "config APP_{{name}}\n");
    root.create_file("base/app.camkes", "assembly {{name}} {}\n");
    root.create_file("build/Makefile.project", "PROJECT := {{name}}\n");
    root.create_file("build/sel4/easy-settings.mk", "MANIFEST := {{manifest_name}}\n");
    TemplateDirs::with_root(root.path())
}

fn options(name: &str, directory: PathBuf, template: Option<&str>) -> ScaffoldOptions {
    ScaffoldOptions {
        name: name.to_string(),
        directory,
        template: template.map(String::from),
        manifest_url: "https://example.com/manifest.git".to_string(),
        manifest_name: "default.xml".to_string(),
        jobs: 1,
        offline: true,
    }
}

#[test]
fn test_existing_directory_fails_before_any_mutation() {
    let templates_root = TestProject::new();
    let templates = install_templates(&templates_root);

    let workspace = TestProject::new();
    workspace.create_file("taken/keep.txt", "untouched");

    let err = scaffold::scaffold(
        &options("pinger", workspace.path().join("taken"), None),
        &templates,
    )
    .unwrap_err();

    assert!(matches!(err, ScaffoldError::DirectoryExists { .. }));
    // Nothing was written into or next to the existing directory
    assert_eq!(workspace.read_file("taken/keep.txt"), "untouched");
    assert_eq!(
        std::fs::read_dir(workspace.path().join("taken"))
            .unwrap()
            .count(),
        1
    );
}

#[test]
fn test_offline_scaffold_creates_complete_skeleton() {
    let templates_root = TestProject::new();
    let templates = install_templates(&templates_root);

    let workspace = TestProject::new();
    let dir = workspace.path().join("pinger");
    let report = scaffold::scaffold(&options("pinger", dir.clone(), None), &templates).unwrap();

    assert_eq!(report.root, dir);
    assert!(!report.fetched);

    // The manifest marks the new directory as a project root
    let project = Project::locate_from(&dir).unwrap();
    assert_eq!(project.manifest().unwrap().project.name, "pinger");

    // Base templates rendered through the fixed mapping
    assert_eq!(
        std::fs::read_to_string(dir.join(".gitignore")).unwrap(),
        "images/\nconfigs/\n"
    );
    assert_eq!(
        std::fs::read_to_string(dir.join("src/Makefile")).unwrap(),
        "TARGETS := pinger.camkes\n"
    );
    assert_eq!(
        std::fs::read_to_string(dir.join("src/pinger.camkes")).unwrap(),
        "assembly pinger {}\n"
    );

    // Build templates rendered with paths preserved
    assert_eq!(
        std::fs::read_to_string(dir.join("Makefile.project")).unwrap(),
        "PROJECT := pinger\n"
    );
    assert_eq!(
        std::fs::read_to_string(dir.join("sel4/easy-settings.mk")).unwrap(),
        "MANIFEST := default.xml\n"
    );

    // The build tree sees the project sources through the symlink
    let link = dir.join("sel4/apps/pinger");
    assert_eq!(
        std::fs::read_link(&link).unwrap(),
        PathBuf::from("../../src")
    );
    assert!(link.join("Makefile").exists());
}

#[test]
fn test_init_build_system_in_existing_project() {
    let templates_root = TestProject::new();
    let templates = install_templates(&templates_root);

    // An existing project with sources but no build system yet
    let workspace = TestProject::new();
    workspace.init_project("demo");
    workspace.create_file("src/Makefile", "TARGETS := demo.camkes\n");

    let project = Project::locate_from(&workspace.path()).unwrap();
    let manifest = project.manifest().unwrap();
    let report = scaffold::init_build_system(
        &project,
        &manifest,
        &templates,
        &InitOptions {
            jobs: 1,
            offline: true,
        },
    )
    .unwrap();

    assert_eq!(report.root, workspace.path());
    assert!(!report.fetched);

    // Build templates rendered into the project root
    assert_eq!(
        workspace.read_file("Makefile.project"),
        "PROJECT := demo\n"
    );
    assert_eq!(
        workspace.read_file("sel4/easy-settings.mk"),
        "MANIFEST := default.xml\n"
    );

    // The build tree sees the project sources through the symlink
    let link = workspace.path().join("sel4/apps/demo");
    assert_eq!(
        std::fs::read_link(&link).unwrap(),
        PathBuf::from("../../src")
    );
    assert!(link.join("Makefile").exists());
}

#[test]
fn test_init_build_system_reruns_cleanly() {
    let templates_root = TestProject::new();
    let templates = install_templates(&templates_root);

    let workspace = TestProject::new();
    workspace.init_project("demo");
    workspace.create_file("src/Makefile", "TARGETS := demo.camkes\n");

    let project = Project::locate_from(&workspace.path()).unwrap();
    let manifest = project.manifest().unwrap();
    let options = InitOptions {
        jobs: 1,
        offline: true,
    };

    scaffold::init_build_system(&project, &manifest, &templates, &options).unwrap();
    scaffold::init_build_system(&project, &manifest, &templates, &options).unwrap();

    let link = workspace.path().join("sel4/apps/demo");
    assert_eq!(
        std::fs::read_link(&link).unwrap(),
        PathBuf::from("../../src")
    );
    assert_eq!(workspace.read_file("Makefile.project"), "PROJECT := demo\n");
}

#[test]
fn test_scaffold_with_app_template() {
    let templates_root = TestProject::new();
    let templates = install_templates(&templates_root);
    templates_root.create_file("apps/hello/app.camkes", "assembly hello for {{name}}\n");
    templates_root.create_file("apps/hello/src/main.c", "/* {{name}} */\n");
    templates_root.create_file("apps/hello/src/components/Echo/Echo.c", "// echo\n");

    let workspace = TestProject::new();
    let dir = workspace.path().join("pinger");
    scaffold::scaffold(&options("pinger", dir.clone(), Some("hello")), &templates).unwrap();

    // The app template supplies the descriptor, not the base tree
    assert_eq!(
        std::fs::read_to_string(dir.join("src/pinger.camkes")).unwrap(),
        "assembly hello for pinger\n"
    );
    assert_eq!(
        std::fs::read_to_string(dir.join("src/main.c")).unwrap(),
        "/* pinger */\n"
    );
    assert!(dir.join("src/components/Echo/Echo.c").exists());
}

#[test]
fn test_missing_app_template_fails() {
    let templates_root = TestProject::new();
    let templates = install_templates(&templates_root);

    let workspace = TestProject::new();
    let err = scaffold::scaffold(
        &options("pinger", workspace.path().join("pinger"), Some("nope")),
        &templates,
    )
    .unwrap_err();

    assert!(matches!(
        err,
        ScaffoldError::Template(TemplateError::Missing { name }) if name == "nope"
    ));
}

#[test]
fn test_list_app_templates_sorted() {
    let templates_root = TestProject::new();
    let templates = install_templates(&templates_root);
    templates_root.create_file("apps/zeta/app.camkes", "");
    templates_root.create_file("apps/alpha/app.camkes", "");

    assert_eq!(scaffold::list_app_templates(&templates), vec!["alpha", "zeta"]);
}

#[test]
fn test_list_app_templates_without_directory_is_empty() {
    let empty = TestProject::new();
    let templates = TemplateDirs::with_root(empty.path());
    assert!(scaffold::list_app_templates(&templates).is_empty());
}
