/// Returns `name` with every `_` replaced by `-`.
///
/// This is the key used to compare parameter names, so `tau_t` and `tau-t` are
/// treated as the same parameter even when neither is in the catalog.
pub fn hyphenated(name: &str) -> String {
    name.replace('_', "-")
}

/// Returns `name` with every `-` replaced by `_`.
pub fn underscored(name: &str) -> String {
    name.replace('-', "_")
}

/// Whether `name` follows the mdp name grammar `[A-Za-z][A-Za-z0-9_-]*`.
pub fn is_parameter_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => chars.all(is_name_char),
        _ => false,
    }
}

/// Characters allowed after the first letter of a parameter name.
pub fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hyphenated_and_underscored_swap_separators() {
        assert_eq!(hyphenated("tau_t"), "tau-t");
        assert_eq!(hyphenated("init_lambda_state"), "init-lambda-state");
        assert_eq!(underscored("ref-t"), "ref_t");
        assert_eq!(hyphenated("integrator"), "integrator");
    }

    #[test]
    fn is_parameter_name_follows_grammar() {
        assert!(is_parameter_name("tau-t"));
        assert!(is_parameter_name("pull_coord1_k"));
        assert!(is_parameter_name("a"));
        assert!(!is_parameter_name(""));
        assert!(!is_parameter_name("1dt"));
        assert!(!is_parameter_name("-dt"));
        assert!(!is_parameter_name("dt!"));
        assert!(!is_parameter_name("ref t"));
    }
}
