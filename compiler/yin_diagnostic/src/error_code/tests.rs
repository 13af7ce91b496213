use super::*;

#[test]
fn test_error_code_display() {
    assert_eq!(ErrorCode::E1001.to_string(), "E1001");
    assert_eq!(ErrorCode::E0004.as_str(), "E0004");
}

#[test]
fn test_phase_predicates() {
    assert!(ErrorCode::E0001.is_reader_error());
    assert!(ErrorCode::E0008.is_reader_error());
    assert!(!ErrorCode::E0008.is_parser_error());

    assert!(ErrorCode::E1001.is_parser_error());
    assert!(ErrorCode::E1018.is_parser_error());
    assert!(!ErrorCode::E1018.is_reader_error());
}

#[test]
fn test_predicate_exclusivity() {
    for code in ErrorCode::ALL {
        assert_ne!(
            code.is_reader_error(),
            code.is_parser_error(),
            "{code} must belong to exactly one phase"
        );
    }
}

#[test]
fn test_as_str_matches_phase_digit() {
    for code in ErrorCode::ALL {
        let s = code.as_str();
        assert_eq!(s.len(), 5);
        let expected = if code.is_reader_error() { "E0" } else { "E1" };
        assert!(s.starts_with(expected), "{s} has wrong phase prefix");
    }
}

#[test]
fn test_all_is_sorted_and_unique() {
    let strs: Vec<&str> = ErrorCode::ALL.iter().map(ErrorCode::as_str).collect();
    let mut sorted = strs.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(strs, sorted);
    assert_eq!(strs.len(), 26);
}

#[test]
fn test_from_str_roundtrip() {
    for code in ErrorCode::ALL {
        assert_eq!(code.as_str().parse::<ErrorCode>(), Ok(*code));
    }
}

#[test]
fn test_from_str_case_insensitive() {
    assert_eq!("e1016".parse::<ErrorCode>(), Ok(ErrorCode::E1016));
}

#[test]
fn test_from_str_unknown() {
    assert_eq!("E9999".parse::<ErrorCode>(), Err(()));
    assert_eq!("".parse::<ErrorCode>(), Err(()));
}

#[test]
fn test_descriptions_are_nonempty() {
    for code in ErrorCode::ALL {
        assert!(!code.description().is_empty(), "{code} has no description");
    }
}
