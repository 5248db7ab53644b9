#![no_main]

use ewf_error::Error;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(error) = Error::from_json(text) {
        let json = error.to_json().expect("re-encoding a decoded record");
        let again = Error::from_json(&json).expect("decoding a re-encoded record");
        assert_eq!(again, error);
    }
});
