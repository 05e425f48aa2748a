// sitepatch-core/src/infrastructure/template/jinja.rs

// Renders the patched index template (`index.html.j2`) back into a live page.
// Interpolated values are HTML-escaped unless marked safe in the template.

use crate::infrastructure::error::InfrastructureError;
use minijinja::{AutoEscape, Environment};

pub struct JinjaRenderer<'a> {
    env: Environment<'a>,
}

impl<'a> JinjaRenderer<'a> {
    pub fn new() -> Self {
        let mut env = Environment::new();

        // Every template we render is HTML, whatever its file name.
        env.set_auto_escape_callback(|_name| AutoEscape::Html);

        // Profiling report naming helper: {{ report_name(current_date_str, table) }}
        env.add_function("report_name", |date_stamp: String, table: String| -> String {
            format!("{}_{}", date_stamp, table)
        });

        Self { env }
    }
}

impl<'a> Default for JinjaRenderer<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> JinjaRenderer<'a> {
    pub fn render_named(
        &self,
        name: &str,
        template_str: &str,
        context: &serde_json::Value,
    ) -> Result<String, InfrastructureError> {
        self.env
            .render_named_str(name, template_str, context)
            .map_err(InfrastructureError::TemplateError)
    }
}

use crate::application::ports::TemplateEngine;
use crate::error::SitePatchError;

impl<'a> TemplateEngine for JinjaRenderer<'a> {
    fn render(
        &self,
        name: &str,
        template: &str,
        context: &serde_json::Value,
    ) -> Result<String, SitePatchError> {
        self.render_named(name, template, context)
            .map_err(SitePatchError::Infrastructure)
    }
}
