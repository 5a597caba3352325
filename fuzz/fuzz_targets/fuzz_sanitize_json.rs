#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(mut value) = serde_json::from_str::<serde_json::Value>(s) {
            inventory_sanitize::sanitize(&mut value);
            let once = value.clone();
            inventory_sanitize::sanitize(&mut value);
            if once != value {
                panic!(
                    "Second pass changed the document!\nInput: {}\nFirst: {}\nSecond: {}",
                    s,
                    serde_json::to_string_pretty(&once).unwrap(),
                    serde_json::to_string_pretty(&value).unwrap()
                );
            }
        }
    }
});
