use super::*;

#[test]
fn codes_render_with_prefix() {
    for code in ErrorCode::ALL {
        assert!(code.as_str().starts_with("QNT"));
        assert_eq!(code.to_string(), code.as_str());
        assert!(!code.description().is_empty());
    }
}

#[test]
fn codes_are_distinct() {
    let mut seen = std::collections::HashSet::new();
    for code in ErrorCode::ALL {
        assert!(seen.insert(code.as_str()), "duplicate code {code}");
    }
}

#[test]
fn only_9xx_codes_are_internal() {
    for code in ErrorCode::ALL {
        assert_eq!(code.is_internal(), code.as_str().starts_with("QNT9"));
    }
}
