//! Line classifier and text renderer for bridge output.
//!
//! The bridge formats its answer as plain lines whose first few characters act
//! as markup: a compass glyph opens the orientation layer, a leaf glyph opens
//! the texture layer, indented bullets and arrows carry items and previews,
//! and a check mark closes the run. Classification is prefix-only; no line is
//! parsed further.
//!
//! Rules live in [`RULES`] and are evaluated in order, first match wins.

use crate::color::Rgba;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineCategory {
    OrientationHeader,
    TextureHeader,
    ListItem,
    PreviewLine,
    CompletionMarker,
    Plain,
}

/// One classified, non-empty line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualFragment {
    pub text: String,
    pub category: LineCategory,
}

/// A single classification rule: a literal prefix and the category it selects.
#[derive(Debug, Clone, Copy)]
pub struct LineRule {
    pub prefix: &'static str,
    pub category: LineCategory,
}

impl LineRule {
    pub fn matches(&self, line: &str) -> bool {
        line.starts_with(self.prefix)
    }
}

/// Classification rules in priority order.
pub const RULES: &[LineRule] = &[
    LineRule {
        prefix: "🧭",
        category: LineCategory::OrientationHeader,
    },
    LineRule {
        prefix: "🌿",
        category: LineCategory::TextureHeader,
    },
    LineRule {
        prefix: "  •",
        category: LineCategory::ListItem,
    },
    LineRule {
        prefix: "    →",
        category: LineCategory::PreviewLine,
    },
    LineRule {
        prefix: "✅",
        category: LineCategory::CompletionMarker,
    },
];

/// Classify one line against [`RULES`]; unmatched lines are plain.
pub fn classify_line(line: &str) -> LineCategory {
    classify_with(RULES, line)
}

/// Classify against an arbitrary ordered rule set.
pub fn classify_with(rules: &[LineRule], line: &str) -> LineCategory {
    rules
        .iter()
        .find(|rule| rule.matches(line))
        .map(|rule| rule.category)
        .unwrap_or(LineCategory::Plain)
}

/// Split `text` on `\n`, drop blank lines and classify the rest in order.
pub fn render_text(text: &str) -> Vec<VisualFragment> {
    text.split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(|line| VisualFragment {
            text: line.to_string(),
            category: classify_line(line),
        })
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Materialization
// ────────────────────────────────────────────────────────────────────────────

/// Visual treatment of a category in the egui output panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FragmentStyle {
    pub color: Rgba,
    pub header: bool,
    pub monospace: bool,
    pub italic: bool,
    /// Whether a line break follows the fragment.
    pub trailing_break: bool,
}

impl LineCategory {
    pub fn style(self) -> FragmentStyle {
        let base = FragmentStyle {
            color: Rgba::rgb(220, 220, 220),
            header: false,
            monospace: true,
            italic: false,
            trailing_break: false,
        };
        match self {
            LineCategory::OrientationHeader => FragmentStyle {
                color: Rgba::GOLD,
                header: true,
                ..base
            },
            LineCategory::TextureHeader => FragmentStyle {
                color: Rgba::CYAN,
                header: true,
                ..base
            },
            LineCategory::ListItem => FragmentStyle {
                color: Rgba::rgb(235, 235, 235),
                ..base
            },
            LineCategory::PreviewLine => FragmentStyle {
                color: Rgba::rgb(160, 160, 160),
                italic: true,
                ..base
            },
            LineCategory::CompletionMarker => FragmentStyle {
                color: Rgba::LIMEGREEN,
                trailing_break: true,
                ..base
            },
            LineCategory::Plain => FragmentStyle {
                trailing_break: true,
                ..base
            },
        }
    }

    /// Opening and closing markup wrapped around the line in the output region.
    fn html_wrap(self) -> (&'static str, &'static str) {
        match self {
            LineCategory::OrientationHeader => {
                ("<span class=\"layer-title orientation\">", "</span>")
            }
            LineCategory::TextureHeader => ("<span class=\"layer-title texture\">", "</span>"),
            LineCategory::ListItem => ("<span class=\"list-item\">", "</span>"),
            LineCategory::PreviewLine => ("<span class=\"text-preview\">", "</span>"),
            LineCategory::CompletionMarker => ("<span style=\"color: limegreen;\">", "</span>"),
            LineCategory::Plain => ("", ""),
        }
    }
}

/// Markup for the output region. Headers, list items and previews are inline
/// spans without a break; plain and completion lines end with `\n`.
pub fn to_html(fragments: &[VisualFragment]) -> String {
    let mut html = String::new();
    for fragment in fragments {
        let (open, close) = fragment.category.html_wrap();
        html.push_str(open);
        html.push_str(&html_escape::encode_text(&fragment.text));
        html.push_str(close);
        if fragment.category.style().trailing_break {
            html.push('\n');
        }
    }
    html
}
