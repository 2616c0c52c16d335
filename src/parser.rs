//! The directive-stream tokenizer.
//!
//! Walks a raw `robots.txt` byte buffer line by line and emits
//! `(DirectiveType, value)` events for every line that can be coerced into
//! one. Malformed lines (no separator, empty key, empty value) are dropped,
//! never fatal: parsing a `robots.txt` file is defined to be infallible.

use bstr::ByteSlice;
use nom::branch::alt;
use nom::bytes::complete::{tag, take_while};
use nom::combinator::eof;
use nom::multi::many_till;
use nom::IResult;

use crate::model::DirectiveType;

/// A value longer than this (in UTF-8 bytes) is truncated before storage,
/// reserving two bytes in case a caller wants to substitute a replacement
/// character at the boundary (2083 is the de-facto max URL length many
/// crawlers assume; 2 is held back for that replacement).
pub(crate) const MAX_VALUE_BYTES: usize = 2_083 - 2;

/// A single tokenized event: a classified directive key and its value.
#[derive(Clone, PartialEq, Eq)]
pub(crate) struct Event {
    pub line_num: u32,
    pub directive: DirectiveType,
    pub value: String,
}

impl std::fmt::Debug for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Event")
            .field("line_num", &self.line_num)
            .field("directive", &self.directive)
            .field("value", &self.value)
            .finish()
    }
}

fn is_not_line_ending(c: u8) -> bool {
    c != b'\n' && c != b'\r'
}

/// Consumes exactly one line terminator: a `\r\n` pair counts as one, but a
/// lone `\r`, a lone `\n`, or a repeated run of either each terminate their
/// own (possibly empty) line. Returns `Ok` with no bytes consumed at the
/// true end of input, letting the `eof` branch of the caller's `many_till`
/// stop the loop before another (spurious) line is produced.
fn consume_terminator(input: &[u8]) -> IResult<&[u8], ()> {
    if let Ok((rest, _)) = tag::<_, _, nom::error::Error<&[u8]>>(b"\r\n".as_slice())(input) {
        return Ok((rest, ()));
    }
    if let Ok((rest, _)) = alt((tag(b"\r".as_slice()), tag(b"\n".as_slice())))(input) {
        return Ok((rest, ()));
    }
    Ok((input, ()))
}

fn one_line(input: &[u8]) -> IResult<&[u8], &[u8]> {
    let (input, content) = take_while(is_not_line_ending)(input)?;
    let (input, _) = consume_terminator(input)?;
    Ok((input, content))
}

fn lines(input: &[u8]) -> IResult<&[u8], Vec<&[u8]>> {
    let (input, (lines, _)) = many_till(one_line, eof)(input)?;
    Ok((input, lines))
}

fn strip_bom(input: &[u8]) -> &[u8] {
    match input.strip_prefix(b"\xef\xbb\xbf".as_slice()) {
        Some(rest) => rest,
        None => input,
    }
}

fn is_ws(b: u8) -> bool {
    b == b' ' || b == b'\t'
}

fn trim_ws(bytes: &[u8]) -> &[u8] {
    let start = bytes.iter().position(|&b| !is_ws(b)).unwrap_or(bytes.len());
    let end = bytes
        .iter()
        .rposition(|&b| !is_ws(b))
        .map(|i| i + 1)
        .unwrap_or(start);
    &bytes[start..end]
}

/// Locates the `key`/`value` split in a comment-stripped line, honoring the
/// first `:` as an explicit separator and, failing that, a whitespace run
/// between two non-whitespace runs as an implicit (Google-specific) one.
fn split_key_value(content: &[u8]) -> Option<(&[u8], &[u8])> {
    if let Some(pos) = content.iter().position(|&b| b == b':') {
        return Some((&content[..pos], &content[pos + 1..]));
    }

    let n = content.len();
    let mut i = 0;
    while i < n && !is_ws(content[i]) {
        i += 1;
    }
    if i == 0 || i == n {
        return None;
    }
    let key_end = i;
    while i < n && is_ws(content[i]) {
        i += 1;
    }
    if i == n {
        return None;
    }
    Some((&content[..key_end], &content[i..]))
}

fn strip_comment(line: &[u8]) -> &[u8] {
    match line.iter().position(|&b| b == b'#') {
        Some(i) => &line[..i],
        None => line,
    }
}

const TYPO_DISALLOW: &[&str] = &["dissallow", "dissalow", "disalow", "diasllow", "disallaw"];

fn classify_key(key: &str) -> DirectiveType {
    if key.eq_ignore_ascii_case("user-agent") {
        DirectiveType::UserAgent
    } else if key.eq_ignore_ascii_case("allow") {
        DirectiveType::Allow
    } else if key.eq_ignore_ascii_case("disallow") {
        DirectiveType::Disallow
    } else if key.eq_ignore_ascii_case("sitemap") {
        DirectiveType::Sitemap
    } else if TYPO_DISALLOW.iter().any(|t| key.eq_ignore_ascii_case(t)) {
        log::info!("correcting likely typo {:?} to disallow", key);
        DirectiveType::Disallow
    } else {
        log::warn!("unrecognized robots.txt directive {:?}", key);
        DirectiveType::Unknown
    }
}

fn process_line(raw: &[u8], line_num: u32, events: &mut Vec<Event>) {
    let content = strip_comment(raw);
    let (key, value) = match split_key_value(content) {
        Some(pair) => pair,
        None => {
            if content.iter().any(|&b| !is_ws(b)) {
                log::warn!(
                    "line {}: no key/value separator found in {:?}",
                    line_num,
                    content.as_bstr()
                );
            }
            return;
        }
    };

    let key = trim_ws(key);
    if key.is_empty() {
        return;
    }
    let value = trim_ws(value);
    if value.is_empty() {
        return;
    }

    let key = String::from_utf8_lossy(key);
    // Truncate the raw bytes before the lossy UTF-8 conversion: converting
    // first could expand an invalid byte sequence into a 3-byte U+FFFD
    // replacement, shifting where the 2 081-byte limit lands relative to the
    // original input.
    let value = if value.len() > MAX_VALUE_BYTES {
        log::info!(
            "line {}: truncating value to {} bytes",
            line_num,
            MAX_VALUE_BYTES
        );
        &value[..MAX_VALUE_BYTES]
    } else {
        value
    };
    let value = String::from_utf8_lossy(value).into_owned();

    let directive = classify_key(&key);
    events.push(Event {
        line_num,
        directive,
        value,
    });
}

/// Tokenizes a raw `robots.txt` byte buffer into a flat event stream.
///
/// This never fails: unparsable lines are skipped (with a logged warning
/// when they carried non-whitespace content), matching the "parsing is
/// infallible" contract of the library.
pub(crate) fn tokenize(input: &[u8]) -> Vec<Event> {
    let input = strip_bom(input);
    // `lines` only fails if nom's internal invariants are violated (it never
    // does for `many_till(one_line, eof)` since `one_line` always succeeds),
    // so an empty vec on error is an unreachable but harmless fallback.
    let raw_lines = lines(input).map(|(_, ls)| ls).unwrap_or_default();

    let mut events = Vec::new();
    for (i, raw) in raw_lines.into_iter().enumerate() {
        process_line(raw, (i + 1) as u32, &mut events);
    }
    events
}
