use inventory_sanitize::{sanitize, sanitized};
use serde_json::json;

#[test]
fn thousands_separated_decimal() {
    let out = sanitized(json!({"fam_cost": "1,234.50"}));
    assert_eq!(out, json!({"fam_cost": 1234.5}));
    assert!(out["fam_cost"].is_f64());
}

#[test]
fn plain_integer_string_stays_integer() {
    let out = sanitized(json!({"job_price": "500"}));
    assert_eq!(out, json!({"job_price": 500}));
    assert!(out["job_price"].is_i64());
}

#[test]
fn null_becomes_zero() {
    assert_eq!(sanitized(json!({"retail_price": null})), json!({"retail_price": 0}));
}

#[test]
fn unparsable_value_is_kept() {
    assert_eq!(sanitized(json!({"labor_hours": "N/A"})), json!({"labor_hours": "N/A"}));
    assert_eq!(
        sanitized(json!({"labor_hours": "  about 3 "})),
        json!({"labor_hours": "  about 3 "})
    );
}

#[test]
fn objects_inside_arrays_are_walked() {
    let out = sanitized(json!({"items": [{"fam_cost": "10"}, {"fam_cost": 20}]}));
    assert_eq!(out, json!({"items": [{"fam_cost": 10}, {"fam_cost": 20}]}));
}

#[test]
fn other_keys_are_never_coerced() {
    let out = sanitized(json!({"name": "123", "stock": "4", "price": null}));
    assert_eq!(out, json!({"name": "123", "stock": "4", "price": null}));
}

#[test]
fn scalar_array_elements_are_untouched() {
    let doc = json!({"fam_cost": ["1", null], "tags": ["500", null, " 7 "]});
    let out = sanitized(doc.clone());
    assert_eq!(out, doc);
}

#[test]
fn containers_under_numeric_keys_are_not_walked() {
    let doc = json!({"job_price": {"retail_price": "5"}});
    assert_eq!(sanitized(doc.clone()), doc);
}

#[test]
fn deep_nesting_and_top_level_arrays() {
    let mut doc = json!([
        {"van": {"parts": [{"fam_cost": "1,000", "retail_price": "1,499.99"}]}},
        [[{"labor_hours": " 2.5 "}]],
        "job_price",
        {"job_price": ""}
    ]);
    sanitize(&mut doc);
    assert_eq!(
        doc,
        json!([
            {"van": {"parts": [{"fam_cost": 1000, "retail_price": 1499.99}]}},
            [[{"labor_hours": 2.5}]],
            "job_price",
            {"job_price": 0}
        ])
    );
}

#[test]
fn scalar_roots_are_noops() {
    for v in [json!(null), json!("fam_cost"), json!(12), json!(true)] {
        assert_eq!(sanitized(v.clone()), v);
    }
}

#[test]
fn key_order_is_preserved() {
    let out = sanitized(json!({"z": 1, "fam_cost": "2", "a": 3}));
    let keys: Vec<&str> = out.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys, ["z", "fam_cost", "a"]);
}

#[test]
fn second_pass_changes_nothing() {
    let doc = json!({
        "inventory": [
            {"name": "Roof rack", "fam_cost": "1,234.50", "retail_price": null,
             "labor_hours": "N/A", "job_price": " 500 ", "sku": "0042"},
            {"name": "Awning", "fam_cost": 99, "retail_price": "", "labor_hours": true}
        ]
    });
    let once = sanitized(doc);
    let twice = sanitized(once.clone());
    assert_eq!(once, twice);
}
