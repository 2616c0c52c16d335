//! The parsed document model: directives, rules, groups, and documents.
//!
//! This mirrors the shape the parse-event consumer builds up while walking a
//! `robots.txt` byte stream: an ordered list of [`Group`]s, each holding a set
//! of user-agent tokens and an ordered list of [`Rule`]s.

use std::collections::HashSet;
use std::sync::Arc;

/// The kind of directive a parsed line carries.
///
/// Only [`DirectiveType::UserAgent`], [`DirectiveType::Allow`], and
/// [`DirectiveType::Disallow`] influence verdicts; `Sitemap` and `Unknown`
/// are recognized but never change matching behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectiveType {
    UserAgent,
    Allow,
    Disallow,
    Sitemap,
    Unknown,
}

/// An immutable `(DirectiveType, value)` pair.
///
/// For `Allow`/`Disallow` the value is a canonicalized pattern string (see
/// [`crate::consumer::canonicalize_pattern`]); for other kinds it is the raw
/// trimmed directive text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub directive: DirectiveType,
    pub value: String,
}

impl Rule {
    pub fn new(directive: DirectiveType, value: impl Into<String>) -> Self {
        Rule {
            directive,
            value: value.into(),
        }
    }
}

/// A cluster of directives sharing one or more declared user-agents.
///
/// A group is "global" if any of its user-agent lines was the wildcard `*`
/// (optionally followed by whitespace-delimited text). A group may be global
/// and also name concrete user-agents at the same time.
#[derive(Debug, Clone, Default)]
pub struct Group {
    pub user_agents: HashSet<String>,
    pub rules: Vec<Rule>,
    pub global: bool,
}

impl Group {
    /// A group only contributes to verdicts if it has rules and an owner
    /// (a declared user-agent, or the global wildcard).
    pub fn is_active(&self) -> bool {
        !self.rules.is_empty() && (!self.user_agents.is_empty() || self.global)
    }

    pub(crate) fn has_owner(&self) -> bool {
        !self.user_agents.is_empty() || self.global
    }
}

#[derive(Debug, Default)]
struct DocumentInner {
    groups: Vec<Group>,
}

/// An ordered list of [`Group`]s produced by a single [`crate::parse`] call.
///
/// `Document` is a cheap-to-clone handle (an `Arc` internally): once built it
/// is treated as an immutable snapshot and may be shared freely across
/// threads and matcher invocations.
#[derive(Debug, Clone, Default)]
pub struct Document {
    inner: Arc<DocumentInner>,
}

impl Document {
    pub(crate) fn from_groups(groups: Vec<Group>) -> Self {
        Document {
            inner: Arc::new(DocumentInner { groups }),
        }
    }

    pub fn groups(&self) -> &[Group] {
        &self.inner.groups
    }

    /// Returns a cheap, shareable [`crate::Matcher`] handle over this document.
    pub fn matcher(&self) -> crate::Matcher {
        crate::Matcher::new(self.clone())
    }
}
