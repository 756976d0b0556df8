//! Markdown-to-HTML preview pipeline.

use pulldown_cmark::{Options, Parser};

use crate::preprocess::AnnotationProcessor;

/// Class prefix used when none is configured.
pub const DEFAULT_CLASS_PREFIX: &str = "criticmarkup";

/// Renders annotated markdown to HTML.
///
/// Runs the annotation preprocessor and hands the result to
/// `pulldown-cmark` for parsing and HTML serialization. Rendering is
/// deterministic: the same input and configuration always produce the
/// same HTML.
///
/// # Example
///
/// ```
/// use redline_renderer::Renderer;
///
/// let html = Renderer::new().render("{++added++}");
/// assert!(html.contains(r#"<ins class="criticmarkup-addition">added</ins>"#));
/// ```
#[derive(Debug, Clone)]
pub struct Renderer {
    prefix: String,
    gfm: bool,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    /// Create a renderer with the default class prefix and GFM enabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            prefix: DEFAULT_CLASS_PREFIX.to_owned(),
            gfm: true,
        }
    }

    /// Set the CSS class prefix (`{prefix}-addition` etc.).
    #[must_use]
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Enable or disable GitHub Flavored Markdown extensions
    /// (tables, strikethrough, task lists).
    #[must_use]
    pub fn with_gfm(mut self, enabled: bool) -> Self {
        self.gfm = enabled;
        self
    }

    /// Parser options for the host markdown engine.
    #[must_use]
    pub fn parser_options(&self) -> Options {
        if self.gfm {
            Options::ENABLE_TABLES
                | Options::ENABLE_STRIKETHROUGH
                | Options::ENABLE_TASKLISTS
                | Options::ENABLE_GFM
        } else {
            Options::empty()
        }
    }

    /// Render markdown to an HTML fragment.
    #[must_use]
    pub fn render(&self, markdown: &str) -> String {
        let processed = AnnotationProcessor::new(&self.prefix).process(markdown);
        let parser = Parser::new_ext(&processed, self.parser_options());
        let mut html = String::with_capacity(processed.len() * 2);
        pulldown_cmark::html::push_html(&mut html, parser);
        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_is_deterministic() {
        let renderer = Renderer::new();
        let input = "# Title\n\n{++a++} and {==b==}\n";
        assert_eq!(renderer.render(input), renderer.render(input));
    }

    #[test]
    fn test_gfm_options_toggle() {
        assert!(Renderer::new().parser_options().contains(Options::ENABLE_TABLES));
        assert_eq!(
            Renderer::new().with_gfm(false).parser_options(),
            Options::empty()
        );
    }

    #[test]
    fn test_custom_prefix_flows_through() {
        let html = Renderer::new()
            .with_class_prefix("mdmarkup")
            .render("{--gone--}");
        assert!(html.contains(r#"<del class="mdmarkup-deletion">gone</del>"#));
        assert!(!html.contains("criticmarkup"));
    }
}
