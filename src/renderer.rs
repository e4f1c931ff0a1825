//! Template rendering for modulegen.
//! Renders the example templates with MiniJinja, exposing the example's
//! derived names both as context variables and as case conversion filters.
use crate::error::{Error, Result};
use cruet::Inflector;
use minijinja::Environment;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

fn camel_case(value: String) -> String {
    value.to_camel_case()
}

fn pascal_case(value: String) -> String {
    value.to_pascal_case()
}

fn snake_case(value: String) -> String {
    value.to_snake_case()
}

fn kebab_case(value: String) -> String {
    value.to_kebab_case()
}

fn title_case(value: String) -> String {
    value.to_title_case()
}

impl MiniJinjaRenderer {
    /// Creates a new renderer with the case conversion filters registered.
    /// Trailing newlines are kept.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.add_filter("camel_case", camel_case);
        env.add_filter("pascal_case", pascal_case);
        env.add_filter("snake_case", snake_case);
        env.add_filter("kebab_case", kebab_case);
        env.add_filter("title_case", title_case);
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// Renders a template string using MiniJinja.
    ///
    /// # Errors
    /// * `Error::MinijinjaError` if the template fails to parse or render
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        let mut env = self.env.clone();
        env.add_template_owned("temp", template.to_string())
            .map_err(Error::MinijinjaError)?;

        let tmpl = env.get_template("temp").map_err(Error::MinijinjaError)?;

        tmpl.render(context).map_err(Error::MinijinjaError)
    }
}
