#![no_main]
extern crate libfuzzer_sys;

extern crate robotstxt;

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let doc = robotstxt::parse(data);
    let matcher = doc.matcher();
    let _ = matcher.allowed_single("*", "http://example.com/fuzz/path?query");
});
