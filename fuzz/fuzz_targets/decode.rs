#![no_main]
#[macro_use] extern crate libfuzzer_sys;
extern crate ruhuff;
use std::io::Read;

fuzz_target!(|data: &[u8]| {
    if let Ok(mut decoder) = ruhuff::StreamingDecoder::new(data) {
        let mut output = Vec::new();
        _ = decoder.read_to_end(&mut output);
    }
    let walked = {
        let mut output = Vec::new();
        ruhuff::decompress(data, &mut output, ruhuff::DecodeStrategy::TreeWalk).map(|_| output)
    };
    let looked_up = ruhuff::decompress_to_vec(data);
    assert_eq!(walked.is_ok(), looked_up.is_ok());
    if let (Ok(walked), Ok(looked_up)) = (walked, looked_up) {
        assert_eq!(walked, looked_up);
    }
});
