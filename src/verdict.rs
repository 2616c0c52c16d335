//! The verdict engine: walks a [`Document`]'s groups to decide whether a
//! crawler identity may fetch a URL.

use url::{Position, Url};

use crate::model::{DirectiveType, Document};
use crate::pattern::match_priority;
use crate::Error;

/// A cheap, shareable handle over a parsed [`Document`].
///
/// Cloning a `Matcher` is just an `Arc` bump; any number of matchers over the
/// same document may be queried concurrently, since the document they share
/// is never mutated after [`crate::parse`] returns it.
#[derive(Debug, Clone)]
pub struct Matcher {
    doc: Document,
}

impl Matcher {
    pub(crate) fn new(doc: Document) -> Self {
        Matcher { doc }
    }

    /// Returns whether `url` is allowed to be fetched by any of `agents`.
    pub fn allowed(&self, agents: &[&str], url: &str) -> Result<bool, Error> {
        self.decide(agents, url, true)
    }

    /// Equivalent to `allowed(&[agent], url)`.
    pub fn allowed_single(&self, agent: &str, url: &str) -> Result<bool, Error> {
        self.allowed(&[agent], url)
    }

    /// As [`Matcher::allowed`], but groups introduced by the wildcard
    /// user-agent never contribute, even when no specific group matched.
    pub fn allowed_ignore_global(&self, agents: &[&str], url: &str) -> Result<bool, Error> {
        self.decide(agents, url, false)
    }

    fn decide(&self, agents: &[&str], url: &str, consider_global: bool) -> Result<bool, Error> {
        let path = url_to_path(url)?;

        let mut allow_specific = 0i64;
        let mut disallow_specific = 0i64;
        let mut allow_global = 0i64;
        let mut disallow_global = 0i64;
        let mut any_specific = false;

        for group in self.doc.groups() {
            if !group.is_active() {
                continue;
            }

            let specific = agents
                .iter()
                .any(|a| group.user_agents.iter().any(|g| g.eq_ignore_ascii_case(a)));
            if specific {
                any_specific = true;
            }

            let applicable = specific || (group.global && consider_global);
            if !applicable {
                continue;
            }

            for rule in &group.rules {
                let prio = match_priority(&path, &rule.value);
                if prio <= 0 {
                    continue;
                }
                match rule.directive {
                    DirectiveType::Allow => {
                        if specific {
                            allow_specific = allow_specific.max(prio);
                        }
                        if group.global {
                            allow_global = allow_global.max(prio);
                        }
                    }
                    DirectiveType::Disallow => {
                        if specific {
                            disallow_specific = disallow_specific.max(prio);
                        }
                        if group.global {
                            disallow_global = disallow_global.max(prio);
                        }
                    }
                    _ => {}
                }
            }
        }

        // Specific groups fully shadow global ones: a query matching any
        // agent-specific group drops global contributions entirely.
        if any_specific {
            allow_global = 0;
            disallow_global = 0;
        }

        let allowed = if allow_specific > 0 || disallow_specific > 0 {
            allow_specific >= disallow_specific
        } else if allow_global > 0 || disallow_global > 0 {
            allow_global >= disallow_global
        } else {
            true
        };

        Ok(allowed)
    }
}

/// Extracts the path-plus-query portion of a URL for matching, folding
/// `/index.htm(l)` to `/` the same way the consumer does for stored `Allow`
/// values, so a request for a directory and its index page agree.
///
/// `url` is not required to be an absolute URL: when it lacks a scheme (or
/// otherwise fails to parse), the raw string is treated as the path itself.
/// This keeps bare paths like `/kangaroo/zebra/cat/page.html` matchable
/// directly.
fn url_to_path(raw: &str) -> Result<String, Error> {
    if raw.is_empty() {
        return Ok("/".to_string());
    }

    let path = match Url::parse(raw) {
        // BeforePath..BeforeFragment keeps the query string (which
        // participates in `$`-anchored matching) but drops the fragment
        // (never sent to a server, so it shouldn't affect a crawl decision).
        Ok(parsed) => {
            let slice = &parsed[Position::BeforePath..Position::BeforeFragment];
            if slice.is_empty() {
                "/".to_string()
            } else {
                slice.to_string()
            }
        }
        Err(_) => crate::consumer::canonicalize_pattern(raw),
    };

    Ok(normalize_index_page(&path))
}

fn normalize_index_page(path: &str) -> String {
    if let Some(prefix) = path
        .strip_suffix("/index.html")
        .or_else(|| path.strip_suffix("/index.htm"))
    {
        format!("{}/", prefix)
    } else {
        path.to_string()
    }
}
