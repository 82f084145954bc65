//! Display styles of signal tracks, chosen from the mark name.
//!
//! Rules are evaluated in order and the first match wins. All comparisons are
//! case-insensitive. `INPUT` only matches a mark that is exactly `INPUT`, so
//! e.g. `ATAC_INPUT` falls through to the `ATAC` rule.

use lazy_static::lazy_static;
use std::fmt;

/// Track visibility in the browser.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Hide,
    Dense,
    Full,
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Visibility::Hide => write!(f, "hide"),
            Visibility::Dense => write!(f, "dense"),
            Visibility::Full => write!(f, "full"),
        }
    }
}

/// An RGB track color, rendered as `r,g,b`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color(pub u8, pub u8, pub u8);

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.0, self.1, self.2)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Style {
    pub visibility: Visibility,
    pub color: Color,
}

impl Style {
    pub const fn new(visibility: Visibility, color: Color) -> Self {
        Self { visibility, color }
    }
}

pub const DEFAULT_STYLE: Style = Style::new(Visibility::Hide, Color(128, 128, 128));

/// What a rule matches a mark against.
#[derive(Clone, Debug)]
pub enum MarkMatcher {
    /// The whole mark.
    Exact(&'static str),
    /// Any of these substrings.
    Contains(&'static [&'static str]),
}

impl MarkMatcher {
    /// `mark_upper` must already be upper case.
    fn matches(&self, mark_upper: &str) -> bool {
        match self {
            MarkMatcher::Exact(value) => mark_upper == value.to_uppercase(),
            MarkMatcher::Contains(needles) => needles
                .iter()
                .any(|needle| mark_upper.contains(&needle.to_uppercase())),
        }
    }
}

pub struct StyleRule {
    pub matcher: MarkMatcher,
    pub style: Style,
}

lazy_static! {
    /// The signal track style rules, in priority order.
    pub static ref SIGNAL_STYLE_RULES: Vec<StyleRule> = vec![
        StyleRule {
            matcher: MarkMatcher::Exact("INPUT"),
            style: Style::new(Visibility::Hide, Color(150, 150, 150)),
        },
        StyleRule {
            matcher: MarkMatcher::Contains(&["ATAC"]),
            style: Style::new(Visibility::Full, Color(153, 50, 204)),
        },
        // activating marks
        StyleRule {
            matcher: MarkMatcher::Contains(&["H3K4me3", "H3K9ac", "H3K27ac", "H3K18ac"]),
            style: Style::new(Visibility::Hide, Color(0, 128, 0)),
        },
        // repressive marks
        StyleRule {
            matcher: MarkMatcher::Contains(&["H3K9me3", "H3K27me3"]),
            style: Style::new(Visibility::Hide, Color(255, 0, 0)),
        },
        StyleRule {
            matcher: MarkMatcher::Contains(&["H2A.Z"]),
            style: Style::new(Visibility::Hide, Color(0, 0, 255)),
        },
    ];
}

/// Select the style of a mark from `rules`, falling back to `default`.
pub fn select_style(mark: &str, rules: &[StyleRule], default: Style) -> Style {
    let mark_upper = mark.to_uppercase();
    rules
        .iter()
        .find(|rule| rule.matcher.matches(&mark_upper))
        .map_or(default, |rule| rule.style)
}

/// The style of a signal track with the given (normalized) mark.
pub fn signal_style(mark: &str) -> Style {
    select_style(mark, &SIGNAL_STYLE_RULES, DEFAULT_STYLE)
}
