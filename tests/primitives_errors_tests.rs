use nu_algebra::NuError;

#[test]
fn test_nu_error_display() {
    // InvalidExponent
    let err = NuError::InvalidExponent(0);
    assert_eq!(
        format!("{}", err),
        "Invalid exponent: 0 (only positive integer exponents are supported)"
    );

    // LengthMismatch
    let err = NuError::LengthMismatch { left: 3, right: 2 };
    assert_eq!(
        format!("{}", err),
        "Length mismatch: values have 3 entries, paired sequence has 2"
    );

    // EmptyInput
    let err = NuError::EmptyInput;
    assert_eq!(format!("{}", err), "Input is empty");

    // ZeroTotalWeight
    let err = NuError::ZeroTotalWeight;
    assert_eq!(format!("{}", err), "Total weight cannot be zero");

    // InvalidNumericValue
    let err = NuError::InvalidNumericValue("values[2]=NaN".to_string());
    assert_eq!(format!("{}", err), "Invalid numeric value: values[2]=NaN");

    // InvalidThreshold
    let err = NuError::InvalidThreshold(-1.0);
    assert_eq!(
        format!("{}", err),
        "Invalid tension threshold: -1 (must be > 0 and finite)"
    );

    // DuplicateParameter
    let err = NuError::DuplicateParameter { parameter: "foo" };
    assert_eq!(
        format!("{}", err),
        "Parameter 'foo' was set multiple times. Each parameter can only be configured once."
    );
}

#[test]
fn test_nu_error_properties() {
    let err1 = NuError::EmptyInput;
    let err2 = err1.clone();
    assert_eq!(err1, err2);
    assert_ne!(err1, NuError::ZeroTotalWeight);
}

#[cfg(feature = "std")]
#[test]
fn test_nu_error_is_std_error() {
    fn assert_error<T: std::error::Error>() {}
    assert_error::<NuError>();
}
