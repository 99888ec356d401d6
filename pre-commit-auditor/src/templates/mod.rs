//! Template rendering using Handlebars.
//!
//! Issue bodies and close comments are rendered from Markdown templates on
//! disk. Templates are read on every render.

mod context;
mod error;
mod renderer;

pub use context::TemplateContext;
pub use error::TemplateError;
pub use renderer::{create_handlebars_registry, TemplateRenderer};
