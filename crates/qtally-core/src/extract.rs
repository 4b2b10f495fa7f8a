//! Category label extraction.
//!
//! The question bank declares each entry's category as a single-quoted
//! field (`category: '资料分析'`). The pattern below and that textual
//! convention change in lockstep.

use once_cell::sync::Lazy;
use regex::{CaptureMatches, Regex};

/// The literal extraction pattern. The capture group takes any run of
/// characters up to the closing single quote.
pub const CATEGORY_PATTERN: &str = r"category: '([^']+)'";

static CATEGORY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(CATEGORY_PATTERN).unwrap());

/// Lazy iterator over category labels in left-to-right scan order.
pub struct Labels<'t> {
    matches: CaptureMatches<'static, 't>,
}

impl<'t> Iterator for Labels<'t> {
    type Item = &'t str;

    fn next(&mut self) -> Option<&'t str> {
        self.matches
            .next()
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

/// All non-overlapping matches of the category pattern in `text`.
///
/// Zero matches yields an empty iterator; calling again on the same text
/// restarts the scan from the beginning.
pub fn extract(text: &str) -> Labels<'_> {
    Labels {
        matches: CATEGORY_RE.captures_iter(text),
    }
}
