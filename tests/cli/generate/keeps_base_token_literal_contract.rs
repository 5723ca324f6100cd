use crate::harness::TestContext;

#[test]
fn generate_embeds_base_token_but_creates_substituted_directory() {
    let ctx = TestContext::with_project();

    ctx.cli()
        .args(["generate", "--log-path", "%BASE%\\..\\logs\\service"])
        .assert()
        .success();

    let xml = ctx.read_bin("MyApp.xml");
    assert!(xml.contains("<logpath>%BASE%\\..\\logs\\service</logpath>"));
    assert!(xml.contains("<pidfile>%BASE%\\..\\logs\\service\\MyApp.pid</pidfile>"));
    assert!(ctx.project_dir().join("target/logs/service").is_dir());
}

#[test]
fn generate_defaults_log_path_to_logs_out_next_to_bin() {
    let ctx = TestContext::with_project();

    ctx.generate();

    assert!(ctx.read_bin("MyApp.xml").contains("<logpath>%BASE%\\..\\logs\\out</logpath>"));
    assert!(ctx.project_dir().join("target/logs/out").is_dir());
}
