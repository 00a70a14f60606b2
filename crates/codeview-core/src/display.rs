//! Input of the code view and the line model it renders.
//!
//! The code view is a sink: it receives a [`DisplayRequest`] for the active
//! file and draws it. Everything it needs to know about presentation lives in
//! [`DisplayOptions`]; [`render_lines`] turns a request into styled segments.

use std::sync::Arc;

use serde::Deserialize;

use crate::layout::Theme;
use crate::tabs::TabState;
use crate::tree::Language;

/// Number of colours cycled through by bracket pair highlighting.
pub const BRACKET_COLORS: usize = 3;

/// How whitespace is drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WhitespaceMode {
    None,
    /// Only visible through the browser's text selection.
    #[default]
    Selection,
    /// Spaces as `·`, tabs as `→`.
    All,
}

/// Fixed presentation settings for the code view.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DisplayOptions {
    pub font_size: u32,
    pub font_family: String,
    pub tab_size: u32,
    pub line_numbers: bool,
    pub word_wrap: bool,
    pub render_whitespace: WhitespaceMode,
    pub minimap: bool,
    pub bracket_pair_colorization: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            font_size: 14,
            font_family: "Fira Code, Monaco, Consolas, monospace".to_string(),
            tab_size: 2,
            line_numbers: true,
            word_wrap: true,
            render_whitespace: WhitespaceMode::Selection,
            minimap: true,
            bracket_pair_colorization: true,
        }
    }
}

/// Everything the code view receives for one render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayRequest {
    pub content: Arc<str>,
    pub language: Option<Language>,
    pub theme: Theme,
    pub read_only: bool,
    pub options: DisplayOptions,
}

impl DisplayRequest {
    /// Request for the active tab, or `None` when the placeholder is due.
    pub fn for_active(
        tabs: &TabState,
        theme: Theme,
        read_only: bool,
        options: &DisplayOptions,
    ) -> Option<Self> {
        tabs.active_file().map(|file| Self {
            content: Arc::clone(&file.content),
            language: file.language,
            theme,
            read_only,
            options: options.clone(),
        })
    }

    /// Language tag, empty for plain text.
    pub fn language_tag(&self) -> &'static str {
        self.language.map(|l| l.tag()).unwrap_or("")
    }
}

/// A run of text inside one line. `bracket` carries the colour slot of a
/// bracket character.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub bracket: Option<usize>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedLine {
    /// 1-based line number.
    pub number: usize,
    pub segments: Vec<Segment>,
}

/// Number of lines as the gutter counts them. Empty content is one line.
pub fn line_count(content: &str) -> usize {
    content.split('\n').count()
}

/// Split the request's content into numbered, styled lines.
pub fn render_lines(request: &DisplayRequest) -> Vec<RenderedLine> {
    let options = &request.options;
    let mut depth = 0usize;

    request
        .content
        .split('\n')
        .enumerate()
        .map(|(index, raw)| {
            let line = raw.strip_suffix('\r').unwrap_or(raw);
            let segments = if options.bracket_pair_colorization {
                bracket_segments(line, &mut depth)
            } else {
                vec![Segment {
                    text: line.to_string(),
                    bracket: None,
                }]
            };
            let segments = match options.render_whitespace {
                WhitespaceMode::All => segments
                    .into_iter()
                    .map(|s| Segment {
                        text: visible_whitespace(&s.text, options.tab_size),
                        bracket: s.bracket,
                    })
                    .collect(),
                WhitespaceMode::None | WhitespaceMode::Selection => segments,
            };
            RenderedLine {
                number: index + 1,
                segments,
            }
        })
        .collect()
}

/// Split a line at brackets; `depth` carries nesting across lines.
fn bracket_segments(line: &str, depth: &mut usize) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut plain = String::new();

    for ch in line.chars() {
        let slot = match ch {
            '(' | '[' | '{' => {
                let slot = *depth % BRACKET_COLORS;
                *depth += 1;
                Some(slot)
            }
            ')' | ']' | '}' => {
                *depth = depth.saturating_sub(1);
                Some(*depth % BRACKET_COLORS)
            }
            _ => None,
        };
        match slot {
            Some(slot) => {
                if !plain.is_empty() {
                    segments.push(Segment {
                        text: std::mem::take(&mut plain),
                        bracket: None,
                    });
                }
                segments.push(Segment {
                    text: ch.to_string(),
                    bracket: Some(slot),
                });
            }
            None => plain.push(ch),
        }
    }

    if !plain.is_empty() || segments.is_empty() {
        segments.push(Segment {
            text: plain,
            bracket: None,
        });
    }
    segments
}

/// Replace spaces with `·` and tabs with `→` padded to `tab_size` columns.
fn visible_whitespace(text: &str, tab_size: u32) -> String {
    let pad = " ".repeat((tab_size as usize).saturating_sub(1));
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            ' ' => out.push('·'),
            '\t' => {
                out.push('→');
                out.push_str(&pad);
            }
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{FileNode, NodeId};

    fn request(content: &str, options: DisplayOptions) -> DisplayRequest {
        DisplayRequest {
            content: content.into(),
            language: None,
            theme: Theme::Light,
            read_only: true,
            options,
        }
    }

    fn texts(line: &RenderedLine) -> Vec<(&str, Option<usize>)> {
        line.segments
            .iter()
            .map(|s| (s.text.as_str(), s.bracket))
            .collect()
    }

    #[test]
    fn test_request_for_active_tab() {
        let mut tabs = TabState::new();
        let options = DisplayOptions::default();
        assert_eq!(DisplayRequest::for_active(&tabs, Theme::Dark, true, &options), None);

        tabs.select_file(FileNode {
            id: NodeId(4),
            name: "index.tsx".to_string(),
            content: "export {}".into(),
            language: Language::from_name("index.tsx"),
        });
        let req = DisplayRequest::for_active(&tabs, Theme::Dark, false, &options)
            .expect("active tab should produce a request");
        assert_eq!(&*req.content, "export {}");
        assert_eq!(req.language_tag(), "typescript");
        assert_eq!(req.theme, Theme::Dark);
        assert!(!req.read_only);
    }

    #[test]
    fn test_line_count() {
        assert_eq!(line_count(""), 1);
        assert_eq!(line_count("a\nb"), 2);
        assert_eq!(line_count("a\n"), 2);
    }

    #[test]
    fn test_bracket_depth_across_lines() {
        let lines = render_lines(&request("f(a) {\n  [x]\n}", DisplayOptions::default()));

        assert_eq!(
            texts(&lines[0]),
            vec![
                ("f", None),
                ("(", Some(0)),
                ("a", None),
                (")", Some(0)),
                (" ", None),
                ("{", Some(0)),
            ]
        );
        assert_eq!(
            texts(&lines[1]),
            vec![("  ", None), ("[", Some(1)), ("x", None), ("]", Some(1))]
        );
        assert_eq!(texts(&lines[2]), vec![("}", Some(0))]);
        assert_eq!(lines[2].number, 3);
    }

    #[test]
    fn test_unbalanced_close_does_not_underflow() {
        let lines = render_lines(&request("))", DisplayOptions::default()));
        assert_eq!(texts(&lines[0]), vec![(")", Some(0)), (")", Some(0))]);
    }

    #[test]
    fn test_plain_lines_without_colorization() {
        let options = DisplayOptions {
            bracket_pair_colorization: false,
            ..DisplayOptions::default()
        };
        let lines = render_lines(&request("a(b)\r\n", options));
        assert_eq!(texts(&lines[0]), vec![("a(b)", None)]);
        assert_eq!(texts(&lines[1]), vec![("", None)]);
    }

    #[test]
    fn test_render_all_whitespace() {
        let options = DisplayOptions {
            render_whitespace: WhitespaceMode::All,
            bracket_pair_colorization: false,
            tab_size: 4,
            ..DisplayOptions::default()
        };
        let lines = render_lines(&request("a b\tc", options));
        assert_eq!(texts(&lines[0]), vec![("a·b→   c", None)]);
    }
}
