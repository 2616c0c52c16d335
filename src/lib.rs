/*!
Crate `robotstxt` is a library for parsing and matching against `robots.txt`
files. Its pattern matcher and verdict engine are built to agree bit-for-bit
with Google's production implementation, including its tolerance for
malformed lines, its percent-encoding canonicalization, and its
specific-over-global group precedence.

To read more about the `robots.txt` specification a good starting point is
[How Google interprets the robots.txt specification][google-spec].

[google-spec]: https://developers.google.com/search/docs/advanced/robots/robots_txt

# Overview of usage

[`parse`] turns a raw `robots.txt` byte buffer into a [`Document`]. Parsing
never fails: malformed lines are skipped (with a logged warning), since a
crawler that can't fetch a `robots.txt` at all has no reason to stop crawling
one it can't fully make sense of either. A [`Document`] is cheap to clone and
share; call [`Document::matcher`] to get a [`Matcher`] and ask it whether a
URL is allowed for one or more crawler identities.

```
let doc = robotstxt::parse(b"User-agent: FooBot\nDisallow: /private/\n");
let matcher = doc.matcher();
assert!(matcher.allowed_single("FooBot", "https://example.com/public/").unwrap());
assert!(!matcher.allowed_single("FooBot", "https://example.com/private/").unwrap());
```
*/

mod consumer;
mod model;
mod parser;
mod pattern;
mod verdict;

#[cfg(test)]
mod test_google;
#[cfg(test)]
mod test_seed_scenarios;

pub use model::{DirectiveType, Document, Group, Rule};
pub use verdict::Matcher;

/// Errors a [`Matcher`] query can return. Parsing a `robots.txt` document
/// itself never fails; only matching against a caller-supplied URL can.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// The URL given to a [`Matcher`] query could not be parsed.
    #[error("could not parse URL")]
    MalformedUrl,
}

/// Parses a raw `robots.txt` byte buffer into a [`Document`].
///
/// This is infallible: every line that cannot be coerced into a recognized
/// directive is skipped (and logged) rather than treated as an error.
pub fn parse(bytes: &[u8]) -> Document {
    let events = parser::tokenize(bytes);
    consumer::build_document(&events)
}
