#![no_main]

use ewf_error::{Domain, Error, is_valid};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (i32, i32, &str)| {
    let (domain, code, message) = input;
    let valid = Domain::from_raw(domain).is_ok_and(|d| is_valid(d, code));
    match Error::from_raw(domain, code, message) {
        Ok(error) => {
            assert!(valid);
            assert_eq!(error.code().to_raw(), (domain, code));
        }
        Err(_) => assert!(!valid),
    }
});
