use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn generate_writes_wrapper_descriptor_and_scripts() {
    let ctx = TestContext::with_project();

    ctx.cli()
        .arg("generate")
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Generated Windows service bundle for MyApp"))
        .stdout(predicate::str::contains("install.bat as Administrator"));

    assert!(ctx.bin_file("MyApp.exe").is_file());
    for script in ["install.bat", "uninstall.bat", "start.bat", "stop.bat", "restart.bat"] {
        assert!(ctx.bin_file(script).is_file(), "{} should be generated", script);
    }

    let xml = ctx.read_bin("MyApp.xml");
    assert!(xml.contains("<id>MyApp</id>"));
    assert!(xml.contains("<name>My App</name>"));
    assert!(xml.contains("<executable>java</executable>"));
    assert!(xml.contains(
        "<arguments>-Xrs -Xmx2048m -Dhudson.lifecycle=hudson.lifecycle.WindowsServiceLifecycle -jar"
    ));
    assert!(xml.contains("%BASE%\\..\\MyApp.jar</arguments>"));
    assert!(xml.contains("<onfailure action=\"restart\" delay=\"10 sec\"/>"));
}

#[test]
fn generate_orders_jvm_options_before_jar_and_app_args_after() {
    let ctx = TestContext::with_project();
    std::fs::write(
        ctx.project_dir().join("winsw-bundle.toml"),
        format!(
            "[layout]\njar_path = \"target/MyApp.jar\"\n\n[java]\njvm_options = \"-Dspring.profiles.active=prod\"\napp_args = \"--port=8080\"\n\n[wrapper]\ndownload_url = \"{}\"\n",
            ctx.wrapper_url()
        ),
    )
    .unwrap();

    ctx.generate();

    let xml = ctx.read_bin("MyApp.xml");
    assert!(xml.contains("<arguments>-Dspring.profiles.active=prod -Xrs -Xmx2048m"));
    assert!(xml.contains("%BASE%\\..\\MyApp.jar --port=8080</arguments>"));
}

#[test]
fn generate_uses_service_id_flag_for_file_names() {
    let ctx = TestContext::with_project();

    ctx.cli().args(["generate", "--service-id", "Billing"]).assert().success();

    assert!(ctx.bin_file("Billing.exe").is_file());
    assert!(ctx.read_bin("Billing.xml").contains("<pidfile>%BASE%\\..\\logs\\out\\Billing.pid</pidfile>"));
    assert!(ctx.read_bin("start.bat").contains(".\\Billing.exe start"));
}
