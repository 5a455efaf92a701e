//! MiniJinja-backed renderer.
//!
//! Generated files are source code, so auto-escaping is off. Undefined
//! values are strict: a template that names a field the parameter record
//! does not carry fails instead of rendering an empty string.

use helix_core::{
    application::{ApplicationError, ports::TemplateRenderer},
    domain::{LogicalPath, ParameterRecord},
    error::HelixResult,
};
use minijinja::{AutoEscape, Environment, UndefinedBehavior, Value};
use tracing::instrument;

/// Renders `{{ field }}` / `{% if %}` / `{% for %}` templates.
pub struct JinjaRenderer {
    env: Environment<'static>,
}

impl JinjaRenderer {
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        Self { env }
    }
}

impl Default for JinjaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for JinjaRenderer {
    #[instrument(skip_all, fields(template = %template_path))]
    fn execute(
        &self,
        template_path: &LogicalPath,
        body: &[u8],
        params: &ParameterRecord,
    ) -> HelixResult<Vec<u8>> {
        let parse_error = |cause: String| ApplicationError::TemplateParse {
            template_path: template_path.to_string(),
            cause,
        };

        let source = std::str::from_utf8(body)
            .map_err(|e| parse_error(format!("template is not valid UTF-8: {e}")))?;

        let template = self
            .env
            .template_from_named_str(template_path.as_str(), source)
            .map_err(|e| parse_error(e.to_string()))?;

        let rendered = template
            .render(Value::from_serialize(params))
            .map_err(|e| ApplicationError::TemplateExecution {
                template_path: template_path.to_string(),
                cause: e.to_string(),
            })?;

        Ok(rendered.into_bytes())
    }
}
