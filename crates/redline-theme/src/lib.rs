//! Companion stylesheet generation for annotation previews.
//!
//! The preview wraps annotations in tags carrying `{prefix}-{kind}`
//! classes; this crate produces the stylesheet that styles them. Colors
//! are CSS custom properties with a light default set and a
//! `prefers-color-scheme: dark` override set, where every dark color is
//! strictly brighter (by weighted luma) than its light counterpart.
//!
//! Theme state is an explicit [`Theme`] value the caller constructs and
//! passes in, recomputing it on theme-change events as needed. There is
//! no global theme state.

mod color;

use std::fmt::Write;

use redline_core::AnnotationKind;

pub use color::{ParseColorError, Rgb};

/// Background tint opacity in the light scheme.
const LIGHT_BG_ALPHA: &str = "0.10";
/// Background tint opacity in the dark scheme.
const DARK_BG_ALPHA: &str = "0.16";

/// Per-kind foreground colors for one color scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    addition: Rgb,
    deletion: Rgb,
    substitution: Rgb,
    comment: Rgb,
    highlight: Rgb,
}

impl Palette {
    /// Default light-scheme colors.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            addition: Rgb::new(0x00, 0x88, 0x00),
            deletion: Rgb::new(0xcc, 0x00, 0x00),
            substitution: Rgb::new(0xdd, 0x66, 0x00),
            comment: Rgb::new(0x00, 0x66, 0xcc),
            highlight: Rgb::new(0x99, 0x33, 0xaa),
        }
    }

    /// Default dark-scheme colors, brighter than their light counterparts.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            addition: Rgb::new(0x00, 0xdd, 0x00),
            deletion: Rgb::new(0xff, 0x44, 0x44),
            substitution: Rgb::new(0xff, 0x99, 0x44),
            comment: Rgb::new(0x55, 0x99, 0xff),
            highlight: Rgb::new(0xcc, 0x66, 0xdd),
        }
    }

    /// Color for one annotation kind.
    #[must_use]
    pub const fn color(&self, kind: AnnotationKind) -> Rgb {
        match kind {
            AnnotationKind::Addition => self.addition,
            AnnotationKind::Deletion => self.deletion,
            AnnotationKind::Substitution => self.substitution,
            AnnotationKind::Comment => self.comment,
            AnnotationKind::Highlight => self.highlight,
        }
    }

    /// Override the color for one kind.
    pub fn set_color(&mut self, kind: AnnotationKind, color: Rgb) {
        match kind {
            AnnotationKind::Addition => self.addition = color,
            AnnotationKind::Deletion => self.deletion = color,
            AnnotationKind::Substitution => self.substitution = color,
            AnnotationKind::Comment => self.comment = color,
            AnnotationKind::Highlight => self.highlight = color,
        }
    }
}

/// Light and dark palettes handed to the stylesheet writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub light: Palette,
    pub dark: Palette,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            light: Palette::light(),
            dark: Palette::dark(),
        }
    }
}

impl Theme {
    /// Whether every dark color is strictly brighter than its light
    /// counterpart, by weighted luma.
    #[must_use]
    pub fn has_dark_contrast(&self) -> bool {
        AnnotationKind::ALL
            .iter()
            .all(|&kind| self.dark.color(kind).luma() > self.light.color(kind).luma())
    }

    /// Render the companion stylesheet for the given class prefix.
    ///
    /// Emits `--{prefix}-{kind}-color` and `--{prefix}-{kind}-bg` custom
    /// properties in `:root`, a `prefers-color-scheme: dark` override
    /// block, and one rule per kind referencing the variables.
    #[must_use]
    pub fn stylesheet(&self, prefix: &str) -> String {
        let mut css = String::with_capacity(2048);

        css.push_str(":root {\n");
        push_properties(&mut css, prefix, &self.light, LIGHT_BG_ALPHA, "  ");
        css.push_str("}\n\n");

        css.push_str("@media (prefers-color-scheme: dark) {\n  :root {\n");
        push_properties(&mut css, prefix, &self.dark, DARK_BG_ALPHA, "    ");
        css.push_str("  }\n}\n");

        for kind in AnnotationKind::ALL {
            let suffix = kind.css_suffix();
            write!(
                css,
                "\n{tag}.{prefix}-{suffix} {{\n  \
                 color: var(--{prefix}-{suffix}-color);\n  \
                 background-color: var(--{prefix}-{suffix}-bg);\n",
                tag = kind.html_tag(),
            )
            .unwrap();
            match kind {
                AnnotationKind::Addition => css.push_str("  text-decoration: none;\n"),
                AnnotationKind::Deletion => css.push_str("  text-decoration: line-through;\n"),
                AnnotationKind::Comment => css.push_str("  font-style: italic;\n"),
                AnnotationKind::Substitution | AnnotationKind::Highlight => {}
            }
            css.push_str("}\n");
        }
        css
    }
}

fn push_properties(css: &mut String, prefix: &str, palette: &Palette, alpha: &str, indent: &str) {
    for kind in AnnotationKind::ALL {
        let color = palette.color(kind);
        let suffix = kind.css_suffix();
        writeln!(css, "{indent}--{prefix}-{suffix}-color: {color};").unwrap();
        writeln!(
            css,
            "{indent}--{prefix}-{suffix}-bg: rgba({}, {}, {}, {alpha});",
            color.r, color.g, color.b
        )
        .unwrap();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_has_dark_contrast() {
        assert!(Theme::default().has_dark_contrast());
    }

    #[test]
    fn test_dark_strictly_brighter_per_kind() {
        let theme = Theme::default();
        for kind in AnnotationKind::ALL {
            let light = theme.light.color(kind).luma();
            let dark = theme.dark.color(kind).luma();
            assert!(dark > light, "{kind:?}: dark {dark} !> light {light}");
        }
    }

    #[test]
    fn test_stylesheet_defines_all_custom_properties() {
        let css = Theme::default().stylesheet("criticmarkup");
        assert!(css.starts_with(":root {"));
        for kind in AnnotationKind::ALL {
            let suffix = kind.css_suffix();
            assert!(css.contains(&format!("--criticmarkup-{suffix}-color:")));
            assert!(css.contains(&format!("--criticmarkup-{suffix}-bg:")));
        }
    }

    #[test]
    fn test_stylesheet_has_dark_override_block() {
        let css = Theme::default().stylesheet("criticmarkup");
        assert!(css.contains("@media (prefers-color-scheme: dark)"));
        assert!(css.contains("--criticmarkup-addition-color: #008800;"));
        assert!(css.contains("--criticmarkup-addition-color: #00dd00;"));
    }

    #[test]
    fn test_stylesheet_rules_reference_variables() {
        let css = Theme::default().stylesheet("mdmarkup");
        assert!(css.contains("ins.mdmarkup-addition {"));
        assert!(css.contains("color: var(--mdmarkup-addition-color);"));
        assert!(css.contains("background-color: var(--mdmarkup-deletion-bg);"));
        assert!(css.contains("del.mdmarkup-deletion"));
        assert!(css.contains("text-decoration: line-through;"));
        assert!(css.contains("span.mdmarkup-comment"));
        assert!(css.contains("font-style: italic;"));
        assert!(css.contains("mark.mdmarkup-highlight"));
    }

    #[test]
    fn test_overridden_palette_flows_into_stylesheet() {
        let mut theme = Theme::default();
        theme
            .light
            .set_color(AnnotationKind::Addition, Rgb::new(1, 2, 3));
        let css = theme.stylesheet("criticmarkup");
        assert!(css.contains("--criticmarkup-addition-color: #010203;"));
    }
}
