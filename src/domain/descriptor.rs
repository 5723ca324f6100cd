//! Logical content of the WinSW XML service descriptor.

use serde::Serialize;

use crate::domain::layout::ResolvedLayout;
use crate::domain::paths::BASE_TOKEN;
use crate::domain::request::GenerationRequest;

/// Flags every service JVM starts with, between user JVM options and `-jar`.
pub const BASELINE_JVM_FLAGS: &str =
    "-Xrs -Xmx2048m -Dhudson.lifecycle=hudson.lifecycle.WindowsServiceLifecycle";

/// Loader path pointing at the `lib` and `resources` siblings of the bin directory.
pub const LOADER_PATH_PROPERTY: &str =
    r#"-Dloader.path="%BASE%\..\lib","%BASE%\..\resources""#;

const RUNAWAY_KILLER_CLASS: &str =
    "winsw.Plugins.RunawayProcessKiller.RunawayProcessKillerExtension";

/// Build the `<arguments>` value.
///
/// Order: extra JVM options, baseline flags, `-jar` with loader path, the jar
/// relative to `%BASE%`, extra application arguments.
pub fn compose_arguments(
    jvm_options: Option<&str>,
    jar_file_name: &str,
    app_args: Option<&str>,
) -> String {
    let mut arguments = String::new();
    if let Some(options) = jvm_options.map(str::trim).filter(|o| !o.is_empty()) {
        arguments.push_str(options);
        arguments.push(' ');
    }
    arguments.push_str(BASELINE_JVM_FLAGS);
    arguments.push_str(" -jar ");
    arguments.push_str(LOADER_PATH_PROPERTY);
    arguments.push(' ');
    arguments.push_str(BASE_TOKEN);
    arguments.push_str("\\..\\");
    arguments.push_str(jar_file_name);
    if let Some(args) = app_args.map(str::trim).filter(|a| !a.is_empty()) {
        arguments.push(' ');
        arguments.push_str(args);
    }
    arguments
}

/// Join a descriptor path literal and a file name with `\`.
fn join_literal(dir: &str, file: &str) -> String {
    if dir.ends_with('\\') || dir.ends_with('/') {
        format!("{}{}", dir, file)
    } else {
        format!("{}\\{}", dir, file)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogPolicy {
    pub path: String,
    pub mode: &'static str,
    pub size: &'static str,
    pub keep_files: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunawayProcessKiller {
    pub class_name: &'static str,
    pub id: &'static str,
    pub pid_file: String,
    pub stop_timeout_ms: u64,
    pub stop_parent_first: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OnFailure {
    pub action: &'static str,
    pub delay: &'static str,
}

/// Everything rendered into `<serviceId>.xml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceDescriptor {
    pub id: String,
    pub name: String,
    pub description: String,
    pub executable: String,
    pub arguments: String,
    pub log: LogPolicy,
    pub runaway_killer: RunawayProcessKiller,
    pub on_failure: OnFailure,
}

impl ServiceDescriptor {
    pub fn new(request: &GenerationRequest, layout: &ResolvedLayout) -> Self {
        let log_path = layout.log.literal.clone();
        let pid_file = join_literal(&log_path, &format!("{}.pid", request.service_id));

        Self {
            id: request.service_id.to_string(),
            name: request.service_name.clone(),
            description: request.service_description.clone(),
            executable: request.java_path.clone(),
            arguments: compose_arguments(
                request.jvm_options.as_deref(),
                &layout.jar_file_name,
                request.app_args.as_deref(),
            ),
            log: LogPolicy { path: log_path, mode: "rotate", size: "100MB", keep_files: 100 },
            runaway_killer: RunawayProcessKiller {
                class_name: RUNAWAY_KILLER_CLASS,
                id: "killOnStartup",
                pid_file,
                stop_timeout_ms: 10_000,
                stop_parent_first: false,
            },
            on_failure: OnFailure { action: "restart", delay: "10 sec" },
        }
    }
}
