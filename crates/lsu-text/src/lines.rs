#![forbid(unsafe_code)]

//! Linebreak detection and whitespace trimming for multi-line text.
//!
//! These helpers tidy up text that was indented to fit its surroundings, such
//! as a code sample embedded in nicely formatted HTML:
//!
//! ```
//! use lsu_text::lines::remove_surrounding_whitespace;
//!
//! let sample = "\n    fn main() {\n        run();\n    }\n\n";
//! assert_eq!(remove_surrounding_whitespace(sample), "fn main() {\n    run();\n}");
//! ```
//!
//! # Linebreak model
//!
//! A text uses exactly one linebreak sequence, whichever is found first in
//! the order `"\r\n"`, `"\n"`, `"\r"`. Every helper splits on that sequence
//! and joins with it again, so the line structure (including a final
//! linebreak) survives unchanged.
//!
//! # Invariants
//!
//! 1. No helper ever adds characters; output length <= input length.
//! 2. Empty lines stay empty and are ignored when computing indentation.
//! 3. [`remove_surrounding_whitespace`] returns a fixed point: applying it
//!    again yields the same text.

use std::fmt;

/// The linebreak sequence used by a text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Linebreak {
    /// `"\r\n"` (Windows).
    CrLf,
    /// `"\n"` (Unix).
    Lf,
    /// `"\r"` (classic Mac).
    Cr,
}

impl Linebreak {
    /// The literal sequence.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CrLf => "\r\n",
            Self::Lf => "\n",
            Self::Cr => "\r",
        }
    }
}

impl fmt::Display for Linebreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Detect the linebreak sequence of `text`.
///
/// `"\r\n"` wins over `"\n"`, which wins over `"\r"`. Returns `None` for
/// single-line text.
#[must_use]
pub fn determine_linebreaks(text: &str) -> Option<Linebreak> {
    if text.contains("\r\n") {
        Some(Linebreak::CrLf)
    } else if text.contains('\n') {
        Some(Linebreak::Lf)
    } else if text.contains('\r') {
        Some(Linebreak::Cr)
    } else {
        None
    }
}

/// Split `text` on its detected linebreak.
///
/// Single-line text yields one line and `None`.
#[must_use]
pub fn split_lines(text: &str) -> (Vec<&str>, Option<Linebreak>) {
    match determine_linebreaks(text) {
        Some(linebreak) => (text.split(linebreak.as_str()).collect(), Some(linebreak)),
        None => (vec![text], None),
    }
}

fn join_lines<S: AsRef<str>>(lines: &[S], linebreak: Option<Linebreak>) -> String {
    let separator = linebreak.map_or("", Linebreak::as_str);
    let mut out = String::with_capacity(
        lines.iter().map(|line| line.as_ref().len()).sum::<usize>()
            + separator.len() * lines.len().saturating_sub(1),
    );
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        out.push_str(line.as_ref());
    }
    out
}

#[inline]
fn leading_whitespace(line: &str) -> &str {
    &line[..line.len() - line.trim_start().len()]
}

/// Drop the first `n` characters of `line`.
#[inline]
fn skip_chars(line: &str, n: usize) -> &str {
    match line.char_indices().nth(n) {
        Some((idx, _)) => &line[idx..],
        None => "",
    }
}

/// Number of characters every non-empty line can be shifted left by.
///
/// The candidate starts as the first non-empty line's leading whitespace and
/// is replaced by a later line's leading whitespace only when that whitespace
/// is a prefix of the candidate. With consistent indentation characters this
/// is the minimum indentation. With mixed tabs and spaces the shift can exceed
/// a line's own leading whitespace, and that line then loses characters past
/// its indentation (`"  a\n\tbc"` shifts to `"a\nc"`).
fn common_indent(lines: &[&str]) -> Option<usize> {
    let mut common: Option<&str> = None;

    for line in lines.iter().filter(|line| !line.is_empty()) {
        let whitespace = leading_whitespace(line);
        if common.is_none_or(|prefix| prefix.starts_with(whitespace)) {
            common = Some(whitespace);
        }
    }

    common.map(|prefix| prefix.chars().count())
}

/// Shift all lines left by their common indentation.
///
/// Relative indentation between lines is kept. Whitespace-only lines count
/// as indented lines; empty lines are ignored and stay empty.
#[must_use]
pub fn shift_lines_left(text: &str) -> String {
    let (lines, linebreak) = split_lines(text);

    let shift = match common_indent(&lines) {
        Some(shift) if shift > 0 => shift,
        _ => return text.to_owned(),
    };

    let shifted: Vec<&str> = lines.iter().map(|line| skip_chars(line, shift)).collect();
    join_lines(&shifted, linebreak)
}

/// Remove all leading linebreaks.
#[must_use]
pub fn remove_leading_linebreaks(text: &str) -> &str {
    match determine_linebreaks(text) {
        Some(linebreak) => text.trim_start_matches(linebreak.as_str()),
        None => text,
    }
}

/// Remove all trailing linebreaks.
#[must_use]
pub fn remove_trailing_linebreaks(text: &str) -> &str {
    match determine_linebreaks(text) {
        Some(linebreak) => text.trim_end_matches(linebreak.as_str()),
        None => text,
    }
}

/// Remove trailing spaces and tabs from every line.
#[must_use]
pub fn trim_lines(text: &str) -> String {
    let (lines, linebreak) = split_lines(text);
    let trimmed: Vec<&str> = lines
        .iter()
        .map(|line| line.trim_end_matches([' ', '\t']))
        .collect();
    join_lines(&trimmed, linebreak)
}

/// Remove leading and trailing empty lines and shift the remaining lines as
/// far left as their indentation allows.
///
/// The three steps repeat until nothing changes, because shifting can turn a
/// whitespace-only first line into a fresh leading linebreak.
#[must_use]
pub fn remove_surrounding_whitespace(text: &str) -> String {
    let mut current = text.to_owned();
    #[cfg(feature = "tracing")]
    let mut passes = 0u32;

    loop {
        let trimmed = remove_trailing_linebreaks(remove_leading_linebreaks(&current));
        let next = shift_lines_left(trimmed);
        #[cfg(feature = "tracing")]
        {
            passes += 1;
        }

        // Every step only removes characters, so this terminates.
        if next == current {
            break;
        }
        current = next;
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(passes, len = current.len(), "surrounding whitespace removed");

    current
}
