//! CriticMarkup-aware markdown preview rendering.
//!
//! Annotations cannot be grafted into `pulldown-cmark`'s parser directly
//! (it exposes no tokenizer rule hooks), so this crate follows the
//! preprocessing model: [`AnnotationProcessor`] rewrites recognized
//! annotation spans into inline HTML wrapper tags before the host parser
//! runs. Markdown syntax inside an annotation stays in place, so the host
//! still parses and escapes it exactly like the surrounding text.
//!
//! [`Renderer`] bundles the preprocessor with the `pulldown-cmark` parse
//! and HTML serialization into a single markdown-to-HTML call:
//!
//! ```
//! use redline_renderer::Renderer;
//!
//! let html = Renderer::new().render("meant {~~well~>good~~}");
//! assert!(html.contains(r#"<del class="criticmarkup-deletion">well</del>"#));
//! ```

mod fence;
mod preprocess;
mod render;
mod wrapper;

pub use preprocess::AnnotationProcessor;
pub use render::{DEFAULT_CLASS_PREFIX, Renderer};
