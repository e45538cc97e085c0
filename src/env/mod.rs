use std::env;

/// Read a string from the process environment, falling back to `fallback`
/// when the variable is not set.
pub fn get_string(key: &str, fallback: &str) -> String {
    string_or(env::var(key).ok(), fallback)
}

/// Read an integer from the process environment. An unset variable and a
/// value that does not parse both yield `fallback`.
pub fn get_int(key: &str, fallback: i64) -> i64 {
    int_or(env::var(key).ok(), fallback)
}

fn string_or(val: Option<String>, fallback: &str) -> String {
    val.unwrap_or_else(|| fallback.to_string())
}

fn int_or(val: Option<String>, fallback: i64) -> i64 {
    val.and_then(|v| v.parse().ok()).unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_prefers_present_value() {
        assert_eq!(string_or(Some("from-env".to_string()), "fallback"), "from-env");
    }

    #[test]
    fn string_falls_back_when_unset() {
        assert_eq!(string_or(None, "fallback"), "fallback");
    }

    #[test]
    fn int_parses_present_value() {
        assert_eq!(int_or(Some("8080".to_string()), 3000), 8080);
    }

    #[test]
    fn int_falls_back_when_unset() {
        assert_eq!(int_or(None, 3000), 3000);
    }

    #[test]
    fn malformed_int_is_treated_as_unset() {
        assert_eq!(int_or(Some("not-a-number".to_string()), 3000), 3000);
    }

    #[test]
    fn unset_variable_yields_fallback() {
        assert_eq!(get_string("NOTE_SERVICE_NO_SUCH_VAR", "fallback"), "fallback");
        assert_eq!(get_int("NOTE_SERVICE_NO_SUCH_VAR", 42), 42);
    }
}
