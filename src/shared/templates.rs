//! HTML page templates rendered with Jinja2 syntax.
//!
//! Templates are compiled into the binary and registered once, on first use.

use minijinja::{Environment, Value};
use std::sync::OnceLock;
use thiserror::Error;

/// Global template environment
static TEMPLATE_ENV: OnceLock<Environment<'static>> = OnceLock::new();

/// Landing page with the location capture UI
pub const INDEX_TEMPLATE: &str = "index.html";

const TEMPLATES: &[(&str, &str)] = &[(
    INDEX_TEMPLATE,
    include_str!("../../templates/index.html"),
)];

/// Errors that can occur during template operations
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template '{0}' not found")]
    NotFound(String),

    #[error("Failed to render template: {0}")]
    RenderError(String),
}

fn init_environment() -> Environment<'static> {
    let mut env = Environment::new();
    for &(name, source) in TEMPLATES {
        if let Err(e) = env.add_template(name, source) {
            tracing::warn!("Failed to load template {}: {}", name, e);
        } else {
            tracing::debug!("Loaded template: {}", name);
        }
    }
    env
}

/// Render a registered template with the given context
pub fn render_template(name: &str, context: Value) -> Result<String, TemplateError> {
    let env = TEMPLATE_ENV.get_or_init(init_environment);

    let template = env
        .get_template(name)
        .map_err(|_| TemplateError::NotFound(name.to_string()))?;

    template
        .render(context)
        .map_err(|e| TemplateError::RenderError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::context;

    #[test]
    fn test_index_renders_title() {
        let html = render_template(INDEX_TEMPLATE, context! { title => "Tracker" }).unwrap();
        assert!(html.contains("<title>Tracker</title>"));
        assert!(html.contains("/save_location"));
    }

    #[test]
    fn test_unknown_template_is_not_found() {
        let err = render_template("missing.html", context! {}).unwrap_err();
        assert!(matches!(err, TemplateError::NotFound(name) if name == "missing.html"));
    }
}
