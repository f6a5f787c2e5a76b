use crate::types::errors::{QuoteError, ValidationError};

#[test]
fn test_quote_error_from_validation() {
    let err = QuoteError::from(ValidationError::Negative {
        field: "time_per_unit",
        value: -1.5,
    });

    match err {
        QuoteError::Validation(ValidationError::Negative { field, value }) => {
            assert_eq!(field, "time_per_unit");
            assert_eq!(value, -1.5);
        }
        _ => panic!("Expected QuoteError::Validation"),
    }
}

#[test]
fn test_quote_error_from_json() {
    let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let err = QuoteError::from(json_err);
    assert!(matches!(err, QuoteError::Json(_)));
}

#[test]
fn test_quote_error_serialization() {
    let err = QuoteError::UnknownLine(42);

    // QuoteError serializes as just its Display string
    let serialized = serde_json::to_string(&err).unwrap();
    assert_eq!(serialized, "\"Unknown line number: 42\"");
}

#[test]
fn test_validation_error_display() {
    let err = ValidationError::NotANumber {
        field: "quantity",
        input: "abc".to_string(),
    };
    assert_eq!(err.to_string(), "quantity: 'abc' is not a number");
}
