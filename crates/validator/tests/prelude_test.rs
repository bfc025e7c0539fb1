//! Integration tests for the prelude module.
//!
//! Verifies that `use formschema_validator::prelude::*` brings in everything
//! a consumer needs for common validation scenarios.

use formschema_validator::prelude::*;
use serde::Serialize;
use serde_json::json;

// ============================================================================
// PRELUDE IMPORT SMOKE TEST
// ============================================================================

#[test]
fn prelude_import_provides_validate_trait() {
    let v = string_field(StringConstraints::new().min_length(3)).unwrap();
    assert_eq!(v.validate_value(&json!("abc")).unwrap(), "abc");

    let issues = v.validate_value(&json!("ab")).unwrap_err();
    assert_eq!(issues.first().unwrap().kind, IssueKind::Length);
}

#[test]
fn validate_with_explicit_input() {
    let v = fields::text(true);
    assert!(v.validate(Input::Absent).is_err());
    assert!(v.validate(Input::from(&json!("x"))).is_ok());
}

// ============================================================================
// CONVENIENCE FIELDS
// ============================================================================

#[test]
fn convenience_fields() {
    assert!(fields::color().validate_value(&json!("#A1b2C3")).is_ok());
    assert!(fields::color().validate_value(&json!("#abc")).is_err());
    assert_eq!(fields::number(false).validate_value(&json!("12")).unwrap(), 12.0);
}

// ============================================================================
// COMBINATORS VIA PRELUDE
// ============================================================================

#[test]
fn ext_methods_via_prelude() {
    let nickname = fields::text(true).optional();
    assert_eq!(nickname.validate(Input::Absent).unwrap(), None);

    let named = email_field(EmailConstraints::new()).with_message("Check the address");
    let issues = named.validate_value(&json!("x")).unwrap_err();
    assert_eq!(issues.first().unwrap().message, "Check the address");

    let erased: BoxedValidator = fields::number(false).boxed();
    assert_eq!(erased.validate_value(&json!("4")).unwrap(), json!(4));
}

#[test]
fn validate_any_serializes_structs() {
    #[derive(Serialize)]
    struct Signup<'a> {
        name: &'a str,
        email: &'a str,
    }

    let form = ObjectValidator::new()
        .field("name", fields::text(true))
        .field("email", email_field(EmailConstraints::new().required()));

    assert!(form.validate_any(&Signup { name: "Ann", email: "ann@example.com" }).is_ok());

    let issues = form.validate_any(&Signup { name: "", email: "ann" }).unwrap_err();
    assert_eq!(issues.len(), 2);
}

#[test]
fn issues_compose_with_question_mark() {
    fn check(value: &serde_json::Value) -> Result<String, Box<dyn std::error::Error>> {
        let v = string_field(StringConstraints::new().required())?;
        Ok(v.validate_value(value)?)
    }

    assert_eq!(check(&json!("ok")).unwrap(), "ok");
    let err = check(&json!("")).unwrap_err();
    assert!(err.to_string().contains("required"));
}

#[test]
fn korean_locale_via_prelude() {
    let v = string_field(StringConstraints::new().required().locale(Locale::Korean)).unwrap();
    let issues = v.validate_value(&json!("")).unwrap_err();
    assert_eq!(issues.first().unwrap().message, "필수 입력값입니다.");
}
