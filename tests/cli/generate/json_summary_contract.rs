use crate::harness::TestContext;

#[test]
fn generate_json_prints_a_single_summary_line() {
    let ctx = TestContext::with_project();

    let output = ctx.cli().args(["generate", "--json"]).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 1);

    let summary: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(summary["service_id"], "MyApp");
    assert_eq!(summary["scripts"].as_array().unwrap().len(), 5);
    assert!(summary["wrapper"]["sha256"].as_str().unwrap().len() == 64);
    assert!(summary["warnings"].as_array().unwrap().is_empty());
}
