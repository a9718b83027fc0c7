#![no_main]

use gqlfront::Source;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let source = Source::anonymous(s);
    if let Err(err) = gqlfront::tokenize(&source) {
        let _ = err.locations();
    }
});
