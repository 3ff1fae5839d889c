//! Text encoding of [`StatusErr`].
//!
//! Summary: `@StatusErr[<key>][<code>][<msg>]`, followed by `!` when the
//! error is talkable.
//!
//! Full form: `[<sources>]<summary><fields>[ <desc>]`.
//!
//! Brackets and commas inside `key`, `code`, or `msg` are not escaped.
//! Values containing them cannot be decoded reliably.

use crate::error::ParseError;
use crate::status::StatusErr;

const MARKER: &str = "@StatusErr[";
const SEPARATOR: &str = "][";

/// Renders the summary of `se`.
#[must_use]
pub fn render(se: &StatusErr) -> String {
    let mut s = format!("@StatusErr[{}][{}][{}]", se.key, se.code, se.msg);
    if se.can_be_talk {
        s.push('!');
    }
    s
}

/// Renders the full text form of `se`: sources, summary, fields, description.
#[must_use]
pub fn render_full(se: &StatusErr) -> String {
    let mut s = format!("[{}]{}{}", se.sources.join(","), render(se), se.fields);
    if !se.desc.is_empty() {
        s.push(' ');
        s.push_str(&se.desc);
    }
    s
}

/// Parses the first status error summary found anywhere in `text`.
///
/// Text around the summary, such as a leading source list or a trailing
/// description, is ignored. A summary must fit on a single line. When a
/// field contains `][`, segments are taken greedily: `key` extends to the
/// last separator that still leaves room for `code` and `msg`, and `msg`
/// extends to the last `]` on the line. A bare class code such as `404` is
/// normalized as by [`StatusErr::new`].
///
/// # Errors
/// - [`ParseError::Unsupported`] if no summary is present.
/// - [`ParseError::InvalidCode`] if the code segment is not an `i64`.
pub fn parse(text: &str) -> Result<StatusErr, ParseError> {
    let Some(summary) = locate(text) else {
        tracing::debug!(input = %text, "no status err summary found");
        return Err(ParseError::Unsupported { input: text.to_owned() });
    };

    let code = summary.code.parse::<i64>().map_err(|source| {
        tracing::debug!(input = %text, code = %summary.code, "invalid status err code");
        ParseError::InvalidCode {
            input: text.to_owned(),
            code: summary.code.to_owned(),
            source,
        }
    })?;

    let se = StatusErr::new(summary.key, code, summary.msg);
    Ok(if summary.talk { se.enable_talk() } else { se })
}

/// Borrowed segments of a located summary.
#[derive(Debug, PartialEq, Eq)]
struct Segments<'a> {
    key: &'a str,
    code: &'a str,
    msg: &'a str,
    talk: bool,
}

/// Finds the leftmost marker that starts a complete summary.
fn locate(text: &str) -> Option<Segments<'_>> {
    let mut from = 0;
    while let Some(offset) = text[from..].find(MARKER) {
        let start = from + offset;
        let body = &text[start + MARKER.len()..];
        let line = body.split('\n').next().unwrap_or_default();
        if let Some(segments) = split_line(line) {
            return Some(segments);
        }
        // Markers are ASCII, so stepping one byte stays on a char boundary.
        from = start + 1;
    }
    None
}

/// Splits `key][code][msg]` (plus optional `!`) out of one line.
///
/// All three segments are non-empty. Offsets are byte offsets; every
/// delimiter is ASCII.
fn split_line(line: &str) -> Option<Segments<'_>> {
    let close = line.rfind(']')?;

    let separators: Vec<usize> = line
        .match_indices(SEPARATOR)
        .map(|(i, _)| i)
        .collect();

    // `code` ends at the last separator that leaves a non-empty `msg`.
    let code_end = separators
        .iter()
        .copied()
        .rev()
        .find(|&q| q + SEPARATOR.len() < close)?;

    // `key` ends at the last separator that leaves a non-empty key and code.
    let key_end = separators
        .iter()
        .copied()
        .rev()
        .find(|&p| p >= 1 && p + SEPARATOR.len() < code_end)?;

    Some(Segments {
        key: &line[..key_end],
        code: &line[key_end + SEPARATOR.len()..code_end],
        msg: &line[code_end + SEPARATOR.len()..close],
        talk: line[close + 1..].starts_with('!'),
    })
}
