//! Normalization rules for code-like asset fields.
//!
//! Asset codes, location codes, and status values are stored trimmed and
//! upper-cased so that lookups and the uniqueness check compare a single
//! canonical form. Absent optional fields are left untouched.

/// Canonicalize a code-like field: trim surrounding whitespace, upper-case.
pub fn normalize_code(value: &str) -> String {
    value.trim().to_uppercase()
}

/// Canonicalize an optional code-like field in place. `None` stays `None`.
pub fn normalize_code_opt(value: &mut Option<String>) {
    if let Some(v) = value {
        *v = normalize_code(v);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_uppercases() {
        assert_eq!(normalize_code("  ram-200 "), "RAM-200");
        assert_eq!(normalize_code("active"), "ACTIVE");
        assert_eq!(normalize_code("DEP-01"), "DEP-01");
    }

    #[test]
    fn already_canonical_is_unchanged() {
        assert_eq!(normalize_code("RAM-200"), "RAM-200");
    }

    #[test]
    fn whitespace_only_becomes_empty() {
        assert_eq!(normalize_code("   "), "");
    }

    #[test]
    fn optional_none_stays_none() {
        let mut value: Option<String> = None;
        normalize_code_opt(&mut value);
        assert_eq!(value, None);
    }

    #[test]
    fn optional_some_is_canonicalized() {
        let mut value = Some(" depot-3 ".to_string());
        normalize_code_opt(&mut value);
        assert_eq!(value.as_deref(), Some("DEPOT-3"));
    }
}
