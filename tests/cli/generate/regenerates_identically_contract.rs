use crate::harness::TestContext;
use std::fs;

#[test]
fn generate_twice_yields_identical_descriptor_and_scripts() {
    let ctx = TestContext::with_project();
    ctx.generate();
    let xml = ctx.read_bin("MyApp.xml");
    let uninstall = ctx.read_bin("uninstall.bat");

    ctx.generate();

    assert_eq!(ctx.read_bin("MyApp.xml"), xml);
    assert_eq!(ctx.read_bin("uninstall.bat"), uninstall);
}

#[test]
fn generate_replaces_stale_artifacts_from_an_earlier_service_id() {
    let ctx = TestContext::with_project();
    ctx.cli().args(["generate", "--service-id", "OldName"]).assert().success();

    ctx.generate();

    assert!(!ctx.bin_file("OldName.exe").exists());
    assert!(!ctx.bin_file("OldName.xml").exists());
    let exes: Vec<_> = fs::read_dir(ctx.bin_dir())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "exe"))
        .collect();
    assert_eq!(exes.len(), 1);
}
