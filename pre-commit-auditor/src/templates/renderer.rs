//! Template renderer.

use super::{TemplateContext, TemplateError};
use handlebars::{no_escape, Context, Handlebars, Helper, HelperResult, Output, RenderContext};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Creates a configured Handlebars registry with custom helpers.
///
/// The registry is configured with:
/// - No HTML escaping (for markdown output)
/// - Strict mode (catches missing variables)
/// - `eq` helper for equality comparisons
#[must_use]
pub fn create_handlebars_registry() -> Handlebars<'static> {
    let mut hbs = Handlebars::new();
    hbs.register_escape_fn(no_escape);
    hbs.set_strict_mode(true);
    hbs.register_helper("eq", Box::new(eq_helper));
    hbs
}

/// Helper function for equality comparison in templates.
///
/// Usage: `{{#if (eq compliance "invalid")}}...{{/if}}`
fn eq_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let param1 = h.param(0).and_then(|v| v.value().as_str());
    let param2 = h.param(1).and_then(|v| v.value().as_str());

    let result = match (param1, param2) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    };

    out.write(if result { "true" } else { "" })?;
    Ok(())
}

/// Renders templates from a directory.
pub struct TemplateRenderer {
    handlebars: Handlebars<'static>,
    templates_dir: PathBuf,
}

impl TemplateRenderer {
    /// Creates a renderer that looks templates up in `templates_dir`.
    #[must_use]
    pub fn new(templates_dir: impl Into<PathBuf>) -> Self {
        Self {
            handlebars: create_handlebars_registry(),
            templates_dir: templates_dir.into(),
        }
    }

    /// Returns the template directory.
    pub fn templates_dir(&self) -> &Path {
        &self.templates_dir
    }

    /// Reads `template_name` from the template directory and renders it.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::NotFound`] if the file cannot be read and
    /// [`TemplateError::RenderError`] if it references unknown variables or
    /// is malformed.
    pub fn render(
        &self,
        template_name: &str,
        context: &TemplateContext,
    ) -> Result<String, TemplateError> {
        let path = self.templates_dir.join(template_name);
        debug!(path = %path.display(), "Rendering template");

        let template = std::fs::read_to_string(&path).map_err(|source| TemplateError::NotFound {
            path: path.display().to_string(),
            source,
        })?;

        self.render_str(&template, context)
    }

    /// Renders template text directly.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::RenderError`] if rendering fails.
    pub fn render_str(
        &self,
        template: &str,
        context: &TemplateContext,
    ) -> Result<String, TemplateError> {
        Ok(self.handlebars.render_template(template, context)?)
    }
}
