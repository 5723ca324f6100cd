use crate::harness::TestContext;
use predicates::prelude::*;
use std::fs;

#[test]
fn generate_warns_about_missing_additional_directory() {
    let ctx = TestContext::new();
    ctx.write_jar();
    ctx.write_config("additional_directories = [\"lib\", \"resources\"]");
    fs::create_dir_all(ctx.project_dir().join("lib/drivers")).unwrap();
    fs::write(ctx.project_dir().join("lib/drivers/db.jar"), "driver").unwrap();

    ctx.cli()
        .arg("generate")
        .assert()
        .success()
        .stdout(predicate::str::contains("⚠️  Warnings:"))
        .stdout(predicate::str::contains("'resources' not found"));

    assert_eq!(
        fs::read_to_string(ctx.project_dir().join("target/lib/drivers/db.jar")).unwrap(),
        "driver"
    );
    assert!(!ctx.project_dir().join("target/resources").exists());
}

#[test]
fn generate_rejects_additional_directory_outside_project() {
    let ctx = TestContext::new();
    ctx.write_jar();
    ctx.write_config("additional_directories = [\"../shared\"]");

    ctx.cli().arg("generate").assert().failure().stderr(predicate::str::contains("../shared"));
}
