//! The literal scenarios a conforming implementation must reproduce:
//! simplest disallow, longest match, specific-shadows-global precedence,
//! wildcard+anchor interaction, typo tolerance, and index-page folding.
//!
//! Each of these also has direct coverage in `verdict.rs`'s unit tests; this
//! module keeps them as a single self-contained checklist that doesn't
//! depend on internals.

#[cfg(test)]
mod tests {
    use crate::parse;

    fn allowed(txt: &str, agent: &str, url: &str) -> bool {
        parse(txt.as_bytes())
            .matcher()
            .allowed_single(agent, url)
            .unwrap()
    }

    #[test]
    fn simplest_disallow() {
        let txt = "user-agent: FooBot\ndisallow: /\n";
        assert!(!allowed(txt, "FooBot", "http://foo.bar/x/y"));
    }

    #[test]
    fn longest_match() {
        let txt = "user-agent: FooBot\nallow: /x/page.html\ndisallow: /x/\n";
        assert!(allowed(txt, "FooBot", "http://foo.bar/x/page.html"));
        assert!(!allowed(txt, "FooBot", "http://foo.bar/x/"));
    }

    #[test]
    fn global_shadowed_by_specific() {
        let txt = "user-agent: *\ndisallow: /x/\nuser-agent: FooBot\ndisallow: /y/\n";
        assert!(allowed(txt, "FooBot", "http://foo.bar/x/page"));
        assert!(!allowed(txt, "FooBot", "http://foo.bar/y/page"));
    }

    #[test]
    fn wildcard_and_anchor() {
        let txt = "user-agent: FooBot\ndisallow: /\nallow: /*.php$\n";
        assert!(allowed(txt, "FooBot", "http://foo.bar/filename.php"));
        assert!(!allowed(txt, "FooBot", "http://foo.bar/filename.php?x=1"));
    }

    #[test]
    fn typo_tolerance() {
        let txt = "user-agent: FooBot\ndissallow: /a/\n";
        assert!(!allowed(txt, "FooBot", "http://foo.bar/a/"));
    }

    #[test]
    fn index_normalization() {
        let txt = "user-agent: FooBot\ndisallow: /\nallow: /index.html\n";
        assert!(allowed(txt, "FooBot", "http://foo.bar/"));
    }
}
