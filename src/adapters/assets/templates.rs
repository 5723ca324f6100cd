use include_dir::{Dir, include_dir};

use crate::domain::AppError;

static TEMPLATES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

/// Source text of an embedded template.
pub(crate) fn template_source(name: &str) -> Result<&'static str, AppError> {
    TEMPLATES_DIR.get_file(name).and_then(|file| file.contents_utf8()).ok_or_else(|| {
        AppError::TemplateRenderError {
            template: name.to_string(),
            reason: "embedded template missing or not UTF-8".to_string(),
        }
    })
}
