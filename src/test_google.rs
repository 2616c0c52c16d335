//! Broader matching scenarios exercising multi-group documents, repeated
//! wildcards, full absolute URLs with userinfo/port/fragment, and duplicate
//! user-agent blocks.

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
    fn rule_before_any_user_agent_has_no_owner() {
        let txt = "Disallow: /path\nAllow: /path/exception\n";
        assert!(allowed(txt, "Agent", "https://example.com/path/exception"));
        assert!(allowed(txt, "Agent", "https://example.com/path"));
    }

    #[test]
    fn empty_robots_txt_allows_everything() {
        assert!(allowed("", "Agent", "https://example.com/anything"));
    }

    #[test]
    fn full_url_with_userinfo_port_and_fragment() {
        let txt = "User-Agent: agent\nDisallow: /path;params?query\n";
        assert!(!allowed(
            txt,
            "Agent",
            "http://userinfo@example.com:10/path;params?query#fragment"
        ));
    }

    #[test]
    fn leading_repeated_wildcard_allow_overrides_disallow_all() {
        let txt = "User-agent: meow\nDisallow: /\nAllow: ****/cats\nAllow: */kangaroos\n";
        assert!(!allowed(txt, "meow", "/kangaroo/zebra/cat/page.html"));
        assert!(allowed(txt, "meow", "/cats.html"));
        assert!(allowed(txt, "meow", "/cats/page.html"));
        assert!(allowed(txt, "meow", "/get/more/cats/page.html"));
        assert!(allowed(txt, "meow", "/kangaroos/page.html"));
        assert!(allowed(txt, "meow", "/heaps/of/kangaroos/page.html"));
        assert!(allowed(txt, "meow", "/kangaroosandkoalas/page.html"));
    }

    #[test]
    fn leading_repeated_wildcard_disallow_overrides_allow_all() {
        let txt = "User-agent: meow\nAllow: /\nDisallow: ****/cats\nDisallow: */kangaroos\n";
        assert!(allowed(txt, "meow", "/kangaroo/zebra/cat/page.html"));
        assert!(!allowed(txt, "meow", "/cats.html"));
        assert!(!allowed(txt, "meow", "/cats/page.html"));
        assert!(!allowed(txt, "meow", "/get/more/cats/page.html"));
        assert!(!allowed(txt, "meow", "/kangaroos/page.html"));
    }

    #[test]
    fn duplicate_user_agent_lines_in_one_group_are_deduplicated() {
        let doc = parse(b"User-agent: FooBot\nUser-agent: FooBot\nDisallow: /x\n");
        assert_eq!(doc.groups().len(), 1);
        assert_eq!(doc.groups()[0].user_agents.len(), 1);
    }

    #[test]
    fn directive_keys_are_case_insensitive() {
        let txt = "UsEr-AgEnT: FooBot\nDISALLOW: /x\n";
        assert!(!allowed(txt, "FooBot", "http://example.com/x"));
    }

    #[test]
    fn relative_user_agent_value_truncates_at_first_invalid_byte() {
        let doc = parse(b"User-agent: FooBot/2.1\nDisallow: /x\n");
        assert!(doc.groups()[0].user_agents.contains("FooBot"));
    }

    #[test]
    fn allow_and_disallow_tie_favors_allow() {
        let txt = "User-agent: *\nAllow: /page\nDisallow: /page\n";
        assert!(allowed(txt, "FooBot", "http://example.com/page"));
    }

    #[test]
    fn unrelated_specific_group_does_not_shadow_a_different_agents_global_disallow() {
        let txt = "User-agent: *\nDisallow: /\nUser-agent: OtherBot\nDisallow: /only-other\n";
        assert!(!allowed(txt, "FooBot", "http://example.com/anything"));
    }

    #[test]
    fn url_without_path_defaults_to_root() {
        let txt = "User-agent: *\nDisallow: /secret\n";
        assert!(allowed(txt, "FooBot", "http://example.com"));
    }
}
