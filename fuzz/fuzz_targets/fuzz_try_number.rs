#![no_main]
use libfuzzer_sys::fuzz_target;
use serde_json::Value;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        match inventory_sanitize::try_number(Value::String(s.to_owned())) {
            Value::Number(n) => {
                if let Some(f) = n.as_f64() {
                    assert!(f.is_finite(), "non-finite number from {:?}", s);
                }
            }
            Value::String(back) => assert_eq!(back, s, "fallback must return the original string"),
            other => panic!("unexpected coercion result {:?} from {:?}", other, s),
        }
    }
});
