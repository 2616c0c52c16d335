//! The pattern matcher: `*`-wildcard, terminal-`$`-anchored path matching.
//!
//! Implemented as a subset-construction-style scan over candidate prefix
//! lengths rather than compiled regexes, so that a pathological pattern like
//! `/a***************************b` can never blow up matching time or
//! memory the way naively regex-translating it can.

/// Sentinel returned by [`match_priority`] when the pattern does not match.
pub(crate) const NO_MATCH: i64 = -1;

/// Returns the match priority: the pattern's length in bytes if `pattern`
/// matches `path`, or [`NO_MATCH`] otherwise. Patterns and paths are always
/// ASCII by the time they reach this function (percent-encoding has already
/// folded out anything else), so byte length and character length coincide.
pub(crate) fn match_priority(path: &str, pattern: &str) -> i64 {
    if matches(path.as_bytes(), pattern.as_bytes()) {
        pattern.len() as i64
    } else {
        NO_MATCH
    }
}

/// Maintains an ascending set of reachable prefix lengths of `path` as the
/// pattern is consumed left to right. `*` replaces the set with every length
/// from the current minimum onward; a literal byte advances each candidate
/// by one if it matches; `$` at the very end requires the path to be fully
/// consumed.
fn matches(path: &[u8], pattern: &[u8]) -> bool {
    let mut candidates: Vec<usize> = vec![0];
    let last = pattern.len().wrapping_sub(1);

    for (i, &c) in pattern.iter().enumerate() {
        if c == b'$' && i == last {
            return candidates.last() == Some(&path.len());
        }

        if c == b'*' {
            let k = *candidates.first().expect("candidates is never empty");
            candidates = (k..=path.len()).collect();
            continue;
        }

        let mut next = Vec::with_capacity(candidates.len());
        for &k in &candidates {
            if k < path.len() && path[k] == c {
                next.push(k + 1);
            }
        }
        if next.is_empty() {
            return false;
        }
        candidates = next;
    }
    true
}
