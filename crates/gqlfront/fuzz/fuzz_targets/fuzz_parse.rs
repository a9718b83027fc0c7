#![no_main]

use gqlfront::ParseOptions;
use gqlfront::Source;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let source = Source::anonymous(s);
    if let Err(err) = gqlfront::parse(&source, ParseOptions::default()) {
        let _ = err.format_detailed();
    }
});
