//! Shared testing harness for `winsw-bundle` integration tests.

use assert_cmd::Command;
use mockito::{Mock, Server, ServerGuard};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Body served as the wrapper executable by the local release server.
pub(crate) const FAKE_WRAPPER: &[u8] = b"MZ fake winsw wrapper";

/// Isolated project directory plus a local server standing in for GitHub releases.
pub(crate) struct TestContext {
    root: TempDir,
    project_dir: PathBuf,
    server: ServerGuard,
    _wrapper_mock: Mock,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let project_dir = root.path().join("project");
        fs::create_dir_all(&project_dir).expect("Failed to create project directory");

        let mut server = Server::new();
        let wrapper_mock = server
            .mock("GET", "/WinSW.NET4.exe")
            .with_status(200)
            .with_body(FAKE_WRAPPER)
            .create();

        Self { root, project_dir, server, _wrapper_mock: wrapper_mock }
    }

    /// Create an environment with a built jar and a default config.
    pub(crate) fn with_project() -> Self {
        let ctx = Self::new();
        ctx.write_jar();
        ctx.write_config("");
        ctx
    }

    pub(crate) fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    pub(crate) fn bin_dir(&self) -> PathBuf {
        self.project_dir.join("target/bin")
    }

    pub(crate) fn bin_file(&self, name: &str) -> PathBuf {
        self.bin_dir().join(name)
    }

    /// URL the generated config downloads the wrapper from.
    pub(crate) fn wrapper_url(&self) -> String {
        format!("{}/WinSW.NET4.exe", self.server.url())
    }

    /// Write `target/MyApp.jar` as if the project had been built.
    pub(crate) fn write_jar(&self) {
        let target = self.project_dir.join("target");
        fs::create_dir_all(&target).expect("Failed to create target directory");
        fs::write(target.join("MyApp.jar"), b"PK fake jar").expect("Failed to write jar");
    }

    /// Write `winsw-bundle.toml`; `layout_extra` is appended to the `[layout]` table.
    pub(crate) fn write_config(&self, layout_extra: &str) {
        let content = format!(
            r#"[service]
name = "My App"
description = "Integration test service"

[layout]
jar_path = "target/MyApp.jar"
{}

[wrapper]
download_url = "{}"
timeout_secs = 10
"#,
            layout_extra,
            self.wrapper_url()
        );
        fs::write(self.project_dir.join("winsw-bundle.toml"), content)
            .expect("Failed to write winsw-bundle.toml");
    }

    /// Build a command for invoking the compiled binary within the project directory.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("winsw-bundle").expect("Failed to locate binary");
        cmd.current_dir(&self.project_dir).env("RUST_LOG", "warn");
        cmd
    }

    /// Run `winsw-bundle generate` and assert success.
    pub(crate) fn generate(&self) {
        self.cli().arg("generate").assert().success();
    }

    pub(crate) fn read_bin(&self, name: &str) -> String {
        fs::read_to_string(self.bin_file(name))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", name, e))
    }
}
