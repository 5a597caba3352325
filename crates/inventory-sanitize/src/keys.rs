/// Field names whose values are coerced to numbers wherever they appear.
pub const NUMERIC_KEYS: [&str; 4] = ["fam_cost", "retail_price", "labor_hours", "job_price"];

/// Exact, case-sensitive membership test against [`NUMERIC_KEYS`].
pub fn is_numeric_key(key: &str) -> bool {
    NUMERIC_KEYS.iter().any(|k| *k == key)
}
