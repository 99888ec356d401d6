//! Template rendering error types.

/// Template rendering error.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    /// The template file could not be read.
    #[error("Template '{path}' could not be read: {source}")]
    NotFound {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Handlebars rendering error, including unknown variables in strict mode.
    #[error("Template rendering error: {0}")]
    RenderError(#[from] handlebars::RenderError),
}
