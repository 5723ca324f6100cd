use crate::domain::BundleConfig;

/// Command-line values that replace file configuration.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub service_id: Option<String>,
    pub jar: Option<String>,
    pub output_dir: Option<String>,
    pub jar_output_dir: Option<String>,
    pub log_path: Option<String>,
}

impl ConfigOverrides {
    pub fn apply(&self, config: &mut BundleConfig) {
        if let Some(id) = &self.service_id {
            config.service.id = Some(id.clone());
            config.service.project_name = None;
        }
        if let Some(jar) = &self.jar {
            config.layout.jar_path = Some(jar.clone());
        }
        if let Some(dir) = &self.output_dir {
            config.layout.output_dir = dir.clone();
        }
        if let Some(dir) = &self.jar_output_dir {
            config.layout.jar_output_dir = dir.clone();
        }
        if let Some(path) = &self.log_path {
            config.layout.log_path = path.clone();
        }
    }
}
