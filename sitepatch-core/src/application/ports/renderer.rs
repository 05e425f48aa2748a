use crate::error::SitePatchError;

pub trait TemplateEngine: Send + Sync {
    /// Render `template`; `name` identifies it in error messages.
    fn render(
        &self,
        name: &str,
        template: &str,
        context: &serde_json::Value,
    ) -> Result<String, SitePatchError>;
}
