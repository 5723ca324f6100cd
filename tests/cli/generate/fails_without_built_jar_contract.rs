use crate::harness::TestContext;
use predicates::prelude::*;
use std::fs;

#[test]
fn generate_fails_before_touching_output_when_jar_is_missing() {
    let ctx = TestContext::new();
    ctx.write_config("");
    fs::create_dir_all(ctx.bin_dir()).unwrap();
    fs::write(ctx.bin_file("Previous.xml"), "<service/>").unwrap();

    ctx.cli()
        .arg("generate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Failed to generate service bundle"))
        .stderr(predicate::str::contains("Source JAR file not found"))
        .stderr(predicate::str::contains("mvn package"));

    assert!(ctx.bin_file("Previous.xml").exists());
    assert!(!ctx.bin_file("MyApp.xml").exists());
    assert!(!ctx.bin_file("install.bat").exists());
}

#[test]
fn generate_reports_missing_explicit_config() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["generate", "--config", "nowhere.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Bundle config not found"));
}
