//! Lifecycle batch scripts shipped next to the wrapper.

use serde::Serialize;

use crate::domain::identifiers::ServiceId;

/// One of the five operator scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleScript {
    Install,
    Uninstall,
    Start,
    Stop,
    Restart,
}

impl LifecycleScript {
    pub const ALL: [LifecycleScript; 5] = [
        LifecycleScript::Install,
        LifecycleScript::Uninstall,
        LifecycleScript::Start,
        LifecycleScript::Stop,
        LifecycleScript::Restart,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            LifecycleScript::Install => "install.bat",
            LifecycleScript::Uninstall => "uninstall.bat",
            LifecycleScript::Start => "start.bat",
            LifecycleScript::Stop => "stop.bat",
            LifecycleScript::Restart => "restart.bat",
        }
    }

    /// Wrapper verbs invoked, in order.
    pub fn verbs(self) -> &'static [&'static str] {
        match self {
            LifecycleScript::Install => &["install"],
            LifecycleScript::Uninstall => &["stop", "uninstall"],
            LifecycleScript::Start => &["start"],
            LifecycleScript::Stop => &["stop"],
            LifecycleScript::Restart => &["restart"],
        }
    }

    fn banner_action(self) -> &'static str {
        match self {
            LifecycleScript::Install => "Installing",
            LifecycleScript::Uninstall => "Uninstalling",
            LifecycleScript::Start => "Starting",
            LifecycleScript::Stop => "Stopping",
            LifecycleScript::Restart => "Restarting",
        }
    }

    fn completion_message(self) -> &'static str {
        match self {
            LifecycleScript::Install => "Installation completed.",
            LifecycleScript::Uninstall => "Uninstallation completed.",
            LifecycleScript::Start => "Service start command sent.",
            LifecycleScript::Stop => "Service stop command sent.",
            LifecycleScript::Restart => "Service restart command sent.",
        }
    }
}

/// Template context for a single lifecycle script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScriptContext {
    pub service_id: String,
    pub executable: String,
    pub action: &'static str,
    pub verbs: &'static [&'static str],
    pub completion: &'static str,
}

/// The five script contexts for a service, in `LifecycleScript::ALL` order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifecycleScriptSet {
    scripts: Vec<(LifecycleScript, ScriptContext)>,
}

impl LifecycleScriptSet {
    pub fn for_service(service_id: &ServiceId) -> Self {
        let executable = service_id.executable_name();
        let scripts = LifecycleScript::ALL
            .iter()
            .map(|&script| {
                let context = ScriptContext {
                    service_id: service_id.to_string(),
                    executable: executable.clone(),
                    action: script.banner_action(),
                    verbs: script.verbs(),
                    completion: script.completion_message(),
                };
                (script, context)
            })
            .collect();
        Self { scripts }
    }

    pub fn iter(&self) -> impl Iterator<Item = &(LifecycleScript, ScriptContext)> {
        self.scripts.iter()
    }
}
