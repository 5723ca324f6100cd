use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn url_prints_default_release_asset() {
    let ctx = TestContext::new();

    ctx.cli().arg("url").assert().success().stdout(predicate::str::diff(
        "https://github.com/winsw/winsw/releases/download/v2.12.0/WinSW.NET4.exe\n",
    ));
}

#[test]
fn url_accepts_a_v_prefixed_version() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["url", "--wrapper-version", "v3.0.0-alpha.11"])
        .assert()
        .success()
        .stdout(predicate::str::contains("/download/v3.0.0-alpha.11/WinSW.NET4.exe"));
}

#[test]
fn url_rejects_a_version_with_path_separators() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["url", "--wrapper-version", "2.12.0/../evil"])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error: "));
}
