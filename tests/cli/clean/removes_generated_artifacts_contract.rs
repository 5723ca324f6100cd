use crate::harness::TestContext;
use predicates::prelude::*;
use std::fs;

#[test]
fn clean_removes_generated_files_and_keeps_unrelated_ones() {
    let ctx = TestContext::with_project();
    ctx.generate();
    fs::write(ctx.bin_file("notes.txt"), "keep me").unwrap();

    ctx.cli()
        .arg("clean")
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Removed 7 previous artifact(s)"));

    assert_eq!(fs::read_to_string(ctx.bin_file("notes.txt")).unwrap(), "keep me");
    assert!(!ctx.bin_file("MyApp.exe").exists());
    assert!(!ctx.bin_file("MyApp.xml").exists());
    assert!(!ctx.bin_file("restart.bat").exists());
    assert!(ctx.project_dir().join("target/MyApp.jar").exists(), "source jar must survive");
}

#[test]
fn clean_without_bin_directory_is_a_noop() {
    let ctx = TestContext::with_project();

    ctx.cli().arg("clean").assert().success().stdout(predicate::str::contains("Nothing to clean"));
}
