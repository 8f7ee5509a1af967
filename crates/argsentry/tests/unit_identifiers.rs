//! Unit tests for the identifier guards
//!
//! UUID cases need the default `uuid` feature.

use argsentry::{GuardErrorKind, Identifier, Prevent};

/// A caller-defined identifier with its own sentinel
#[derive(Debug, Clone, Copy, PartialEq)]
struct TicketId(u32);

impl Identifier for TicketId {
    fn empty() -> Self {
        TicketId(0)
    }
}

#[cfg(test)]
mod null_identifier {
    use super::*;

    #[test]
    fn test_absent_identifier_fails() {
        let error = Prevent::null_identifier(None::<TicketId>, "obj").unwrap_err();

        assert_eq!(error.kind(), GuardErrorKind::Argument);
        assert_eq!(error.to_string(), "Value cannot be null. (Parameter 'obj')");
    }

    #[test]
    fn test_sentinel_identifier_passes() {
        assert_eq!(Prevent::null_identifier(Some(TicketId(0)), "obj").unwrap(), TicketId(0));
    }

    #[cfg(feature = "uuid")]
    #[test]
    fn test_uuid_passes() {
        let obj = uuid::Uuid::parse_str("18413dc6-df4b-4631-a4aa-146ad22c0319").unwrap();

        assert_eq!(Prevent::null_identifier(Some(obj), "obj").unwrap(), obj);
    }

    #[cfg(feature = "uuid")]
    #[test]
    fn test_nil_uuid_passes() {
        assert!(Prevent::null_identifier(Some(uuid::Uuid::nil()), "obj").is_ok());
    }
}

#[cfg(test)]
mod empty_identifier {
    use super::*;

    #[test]
    fn test_sentinel_fails() {
        let error = Prevent::empty_identifier(Some(TicketId(0)), "obj").unwrap_err();

        assert_eq!(error.param_name(), "obj");
        assert_eq!(error.to_string(), "Value cannot be empty. (Parameter 'obj')");
    }

    #[test]
    fn test_absent_identifier_passes() {
        assert_eq!(Prevent::empty_identifier(None::<TicketId>, "obj").unwrap(), None);
    }

    #[test]
    fn test_populated_identifier_passes() {
        assert_eq!(
            Prevent::empty_identifier(Some(TicketId(12)), "obj").unwrap(),
            Some(TicketId(12))
        );
    }

    #[cfg(feature = "uuid")]
    #[test]
    fn test_nil_uuid_fails() {
        assert!(Prevent::empty_identifier(Some(uuid::Uuid::nil()), "obj").is_err());
    }
}

#[cfg(test)]
mod null_or_empty_identifier {
    use super::*;

    #[test]
    fn test_absent_identifier_fails() {
        let error = Prevent::null_or_empty_identifier(None::<TicketId>, "obj").unwrap_err();

        assert_eq!(error.to_string(), "Value cannot be null or empty. (Parameter 'obj')");
    }

    #[test]
    fn test_sentinel_fails() {
        let error = Prevent::null_or_empty_identifier(Some(TicketId(0)), "obj").unwrap_err();

        assert_eq!(error.kind(), GuardErrorKind::Argument);
        assert_eq!(error.message(), "Value cannot be null or empty.");
    }

    #[cfg(feature = "uuid")]
    #[test]
    fn test_generated_uuid_passes() {
        let obj = uuid::Uuid::new_v4();

        assert_eq!(Prevent::null_or_empty_identifier(Some(obj), "obj").unwrap(), obj);
    }
}
