//! Unit tests for the presence and default-value guards

use argsentry::{GuardErrorKind, Prevent};

#[cfg(test)]
mod null_object {
    use super::*;

    #[test]
    fn test_absent_object_fails() {
        let obj: Option<Vec<u8>> = None;

        let error = Prevent::null_object(obj, "obj").unwrap_err();

        assert_eq!(error.kind(), GuardErrorKind::Null);
        assert_eq!(error.param_name(), "obj");
        assert_eq!(error.to_string(), "Value cannot be null. (Parameter 'obj')");
    }

    #[test]
    fn test_present_object_passes() {
        let obj = Some(String::new());

        assert_eq!(Prevent::null_object(obj, "obj").unwrap(), "");
    }

    #[test]
    fn test_zero_value_is_present() {
        assert_eq!(Prevent::null_object(Some(0i32), "obj").unwrap(), 0);
    }
}

#[cfg(test)]
mod default_value {
    use super::*;

    const EXPECTED_MESSAGE: &str = "Parameter cannot be default type value. (Parameter 'value')";

    #[test]
    fn test_default_int_fails() {
        let value = i32::default();

        let error = Prevent::default_value(value, "value").unwrap_err();

        assert_eq!(error.kind(), GuardErrorKind::Argument);
        assert_eq!(error.to_string(), EXPECTED_MESSAGE);
        assert_eq!(error.param_name(), "value");
    }

    #[test]
    fn test_default_string_fails() {
        let error = Prevent::default_value(String::default(), "value").unwrap_err();

        assert_eq!(error.to_string(), EXPECTED_MESSAGE);
    }

    #[test]
    fn test_absent_reference_fails() {
        let value: Option<Vec<String>> = None;

        let error = Prevent::default_value(value, "value").unwrap_err();

        assert_eq!(error.to_string(), EXPECTED_MESSAGE);
    }

    #[cfg(feature = "uuid")]
    #[test]
    fn test_nil_uuid_fails() {
        let error = Prevent::default_value(uuid::Uuid::default(), "value").unwrap_err();

        assert_eq!(error.to_string(), EXPECTED_MESSAGE);
    }

    #[test]
    fn test_non_default_int_passes() {
        assert_eq!(Prevent::default_value(123, "value").unwrap(), 123);
    }

    #[test]
    fn test_non_default_string_passes() {
        assert_eq!(Prevent::default_value("Testing...", "value").unwrap(), "Testing...");
    }

    #[cfg(feature = "uuid")]
    #[test]
    fn test_generated_uuid_passes() {
        let value = uuid::Uuid::new_v4();

        assert_eq!(Prevent::default_value(value, "value").unwrap(), value);
    }

    #[test]
    fn test_present_empty_list_passes() {
        let value = Some(Vec::<String>::new());

        assert_eq!(Prevent::default_value(value, "value").unwrap(), Some(Vec::new()));
    }
}
