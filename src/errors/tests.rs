//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;
use std::rc::Rc;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position(10, Rc::new("test.js".to_string())),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
}

#[test]
fn test_error_position() {
    let pos = Position(42, Rc::new("test.js".to_string()));
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "identifier".to_string(),
        },
        pos.clone(),
    );

    assert_eq!(error.get_position().0, 42);
}

#[test]
fn test_number_parse_error() {
    let error = Error::new(
        ErrorImpl::NumberParseError {
            token: "0xZZ".to_string(),
        },
        Position(0, Rc::new("test.js".to_string())),
    );

    assert_eq!(error.get_error_name(), "NumberParseError");
    assert_eq!(error.get_tip().to_string(), "Invalid number literal: `0xZZ`");
}

#[test]
fn test_unterminated_errors() {
    let string = Error::new(ErrorImpl::UnterminatedString, Position::null());
    let comment = Error::new(ErrorImpl::UnterminatedComment, Position::null());

    assert_eq!(string.get_error_name(), "UnterminatedString");
    assert_eq!(comment.get_error_name(), "UnterminatedComment");
}

#[test]
fn test_invalid_assignment_target_error() {
    let error = Error::new(
        ErrorImpl::InvalidAssignmentTarget {
            target: "1".to_string(),
        },
        Position(3, Rc::new("test.js".to_string())),
    );

    assert_eq!(error.get_error_name(), "InvalidAssignmentTarget");
    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::InvalidAssignmentTarget {
            target: "1".to_string()
        }
    );
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken {
            token: "@".to_string(),
        },
        Position(0, Rc::new("test.js".to_string())),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: "}".to_string(),
        },
        Position(0, Rc::new("test.js".to_string())),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(_) => (),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_error_display() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            token: ")".to_string(),
        },
        Position(7, Rc::new("main.js".to_string())),
    );

    assert_eq!(error.to_string(), "unexpected token: \")\" at main.js:7");
}
