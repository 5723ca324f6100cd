//! Renders the service descriptor and lifecycle scripts with minijinja.

use minijinja::{AutoEscape, Environment, UndefinedBehavior, Value};

use crate::adapters::assets::template_source;
use crate::domain::AppError;
use crate::domain::descriptor::ServiceDescriptor;
use crate::domain::lifecycle::ScriptContext;

const DESCRIPTOR_TEMPLATE: &str = "service.xml";
const SCRIPT_TEMPLATE: &str = "lifecycle.bat";

/// Escape text for an XML element body.
fn xml_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            other => out.push(other),
        }
    }
    out
}

/// Renderer for every generated text artifact.
pub struct ArtifactRenderer {
    env: Environment<'static>,
}

impl ArtifactRenderer {
    pub fn new() -> Result<Self, AppError> {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.add_filter("xml_text", xml_text);

        for name in [DESCRIPTOR_TEMPLATE, SCRIPT_TEMPLATE] {
            env.add_template(name, template_source(name)?).map_err(|e| {
                AppError::TemplateRenderError {
                    template: name.to_string(),
                    reason: format!("failed to register: {}", e),
                }
            })?;
        }

        Ok(Self { env })
    }

    pub fn render_descriptor(&self, descriptor: &ServiceDescriptor) -> Result<String, AppError> {
        self.render(DESCRIPTOR_TEMPLATE, Value::from_serialize(descriptor))
    }

    pub fn render_script(&self, context: &ScriptContext) -> Result<String, AppError> {
        self.render(SCRIPT_TEMPLATE, Value::from_serialize(context))
    }

    fn render(&self, name: &str, ctx: Value) -> Result<String, AppError> {
        let template = self.env.get_template(name).map_err(|e| template_render_error(name, e))?;
        template.render(ctx).map_err(|e| template_render_error(name, e))
    }
}

fn template_render_error(template_name: &str, err: impl std::fmt::Display) -> AppError {
    AppError::TemplateRenderError { template: template_name.to_string(), reason: err.to_string() }
}
