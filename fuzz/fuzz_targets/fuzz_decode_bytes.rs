#![no_main]

use libfuzzer_sys::fuzz_target;
use rowdiff::parsers::decode_bytes;

fuzz_target!(|data: &[u8]| {
    let (text, encoding) = decode_bytes(data);
    assert!(encoding == "utf-8" || encoding == "shift-jis");
    // Decoding must yield valid UTF-8 text usable by the parser
    let _ = text.len();
});
