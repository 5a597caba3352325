#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::{arbitrary, fuzz_target};
use serde_json::{Map, Value};

const MAX_NESTING: u8 = 4;

/// One field value as it shows up in hand-maintained inventory exports.
#[derive(Arbitrary, Debug)]
enum RawField {
    Missing,
    Blank { spaces: u8, tab: bool },
    Whole { value: i64, grouped: bool, pad: u8 },
    Price { dollars: u32, cents: u8, grouped: bool, pad: u8 },
    Underscored { value: u32 },
    AlreadyNumber(i64),
    AlreadyFloat(f64),
    Flag(bool),
    Junk(String),
    Parts(Vec<Record>),
}

#[derive(Arbitrary, Debug)]
struct Record {
    name: Option<String>,
    fam_cost: Option<RawField>,
    retail_price: Option<RawField>,
    labor_hours: Option<RawField>,
    job_price: Option<RawField>,
    /// Numeric-looking text under a key that must never be coerced.
    sku: Option<RawField>,
}

#[derive(Arbitrary, Debug)]
struct Inventory {
    records: Vec<Record>,
    wrap_in_object: bool,
}

/// Renders `digits` with `,` every three places from the right.
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn padded(s: String, pad: u8) -> String {
    let n = usize::from(pad % 4);
    format!("{}{}{}", " ".repeat(n), s, " ".repeat(n))
}

impl RawField {
    fn to_json(&self, depth: u8) -> Value {
        match self {
            RawField::Missing => Value::Null,
            RawField::Blank { spaces, tab } => {
                let mut s = " ".repeat(usize::from(spaces % 8));
                if *tab {
                    s.push('\t');
                }
                Value::String(s)
            }
            RawField::Whole { value, grouped, pad } => {
                let digits = value.unsigned_abs().to_string();
                let body = if *grouped { group_thousands(&digits) } else { digits };
                let sign = if *value < 0 { "-" } else { "" };
                Value::String(padded(format!("{sign}{body}"), *pad))
            }
            RawField::Price { dollars, cents, grouped, pad } => {
                let digits = dollars.to_string();
                let body = if *grouped { group_thousands(&digits) } else { digits };
                Value::String(padded(format!("{body}.{:02}", cents % 100), *pad))
            }
            RawField::Underscored { value } => {
                Value::String(group_thousands(&value.to_string()).replace(',', "_"))
            }
            RawField::AlreadyNumber(n) => Value::from(*n),
            RawField::AlreadyFloat(f) => serde_json::Number::from_f64(*f)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            RawField::Flag(b) => Value::Bool(*b),
            RawField::Junk(s) => Value::String(s.clone()),
            RawField::Parts(parts) if depth < MAX_NESTING => {
                Value::Array(parts.iter().map(|r| r.to_json(depth + 1)).collect())
            }
            RawField::Parts(_) => Value::Array(Vec::new()),
        }
    }
}

impl Record {
    fn to_json(&self, depth: u8) -> Value {
        let mut obj = Map::new();
        if let Some(name) = &self.name {
            obj.insert("name".into(), Value::String(name.clone()));
        }
        let fields = [
            ("fam_cost", &self.fam_cost),
            ("retail_price", &self.retail_price),
            ("labor_hours", &self.labor_hours),
            ("job_price", &self.job_price),
            ("sku", &self.sku),
        ];
        for (key, field) in fields {
            if let Some(field) = field {
                obj.insert(key.into(), field.to_json(depth));
            }
        }
        Value::Object(obj)
    }
}

/// Checks the post-conditions that hold for every sanitized record tree.
fn check(before: &Value, after: &Value) {
    match (before, after) {
        (Value::Object(b), Value::Object(a)) => {
            assert_eq!(b.len(), a.len(), "entry count changed");
            for ((bk, bv), (ak, av)) in b.iter().zip(a.iter()) {
                assert_eq!(bk, ak, "key order changed");
                if inventory_sanitize::is_numeric_key(bk) {
                    match (bv, av) {
                        (Value::Null, _) => assert_eq!(av, &Value::from(0)),
                        (Value::String(s), Value::String(kept)) => assert_eq!(s, kept),
                        (Value::String(_), Value::Number(_)) => {}
                        (other, kept) => assert_eq!(other, kept, "non-string value rewritten"),
                    }
                } else {
                    check(bv, av);
                }
            }
        }
        (Value::Array(b), Value::Array(a)) => {
            assert_eq!(b.len(), a.len(), "array length changed");
            b.iter().zip(a.iter()).for_each(|(bv, av)| check(bv, av));
        }
        (b, a) => assert_eq!(b, a, "value outside a numeric key changed"),
    }
}

fuzz_target!(|inventory: Inventory| {
    let items = Value::Array(inventory.records.iter().map(|r| r.to_json(0)).collect());
    let doc = if inventory.wrap_in_object {
        let mut root = Map::new();
        root.insert("items".into(), items);
        Value::Object(root)
    } else {
        items
    };

    let once = inventory_sanitize::sanitized(doc.clone());
    check(&doc, &once);

    let twice = inventory_sanitize::sanitized(once.clone());
    if once != twice {
        panic!(
            "Structured idempotence mismatch!\nFirst: {}\nSecond: {}",
            serde_json::to_string_pretty(&once).unwrap(),
            serde_json::to_string_pretty(&twice).unwrap()
        );
    }
});
