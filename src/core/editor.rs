//! Sample files for the code editor and line-number computation.

use std::ops::RangeInclusive;

use crate::config::samples;

/// Editor tabs, each backed by fixed sample content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EditorTab {
    #[default]
    MainJs,
    IndexHtml,
    StylesCss,
}

impl EditorTab {
    pub const ALL: [EditorTab; 3] = [Self::MainJs, Self::IndexHtml, Self::StylesCss];

    pub fn label(self) -> &'static str {
        match self {
            Self::MainJs => "main.js",
            Self::IndexHtml => "index.html",
            Self::StylesCss => "styles.css",
        }
    }

    pub fn content(self) -> &'static str {
        match self {
            Self::MainJs => samples::MAIN_JS,
            Self::IndexHtml => samples::INDEX_HTML,
            Self::StylesCss => samples::STYLES_CSS,
        }
    }
}

/// Number of `\n`-separated lines; empty text still has one line.
pub fn line_count(text: &str) -> usize {
    text.split('\n').count()
}

/// Gutter numbers for `text`, starting at 1.
pub fn line_numbers(text: &str) -> RangeInclusive<usize> {
    1..=line_count(text)
}
