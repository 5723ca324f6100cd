use std::path::Path;

use crate::domain::{BundleConfig, GenerationRequest, ResolvedLayout};

/// Request for `target/MyApp.jar` under `project_dir`, adjusted by `configure`.
pub fn request_in(
    project_dir: &Path,
    configure: impl FnOnce(&mut BundleConfig),
) -> GenerationRequest {
    let mut config = BundleConfig::default();
    config.layout.jar_path = Some("target/MyApp.jar".into());
    configure(&mut config);
    GenerationRequest::from_config(&config, project_dir).unwrap()
}

pub fn layout_in(project_dir: &Path, configure: impl FnOnce(&mut BundleConfig)) -> ResolvedLayout {
    ResolvedLayout::resolve(&request_in(project_dir, configure)).unwrap()
}
