#![no_main]
#[macro_use] extern crate libfuzzer_sys;
extern crate ruhuff;

fuzz_target!(|data: &[u8]| {
    ruhuff::tree::round_trip(data);
});
