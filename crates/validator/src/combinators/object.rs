//! OBJECT combinator - validates named properties of a JSON object
//!
//! Unlike the field validators, an object validator never stops at the first
//! failure. Every declared field is checked, and the issues of all failing
//! fields are returned together with the field name prepended to each path.

use std::fmt;

use indexmap::IndexMap;
use indexmap::map::Entry;
use serde_json::{Map, Value};

use crate::combinators::BoxedValidator;
use crate::foundation::{
    Input, Issue, IssueKind, Issues, Outcome, PathSegment, SchemaError, Validate, ValidateExt,
};
use crate::json::IntoJson;
use crate::locale::{Locale, Message};

// ============================================================================
// OBJECT VALIDATOR
// ============================================================================

/// Validates a JSON object against a set of named field validators.
///
/// Fields are checked in declaration order and the output object lists the
/// declared keys in that same order. Properties of the input that no field
/// declares are ignored and do not appear in the output.
///
/// Any non-null object-like input is accepted. For a JSON array, a field
/// named by a decimal index (`"0"`, `"1"`, ...) reads that element and every
/// other field sees an absent value.
///
/// # Examples
///
/// ```
/// use formschema_validator::prelude::*;
/// use serde_json::json;
///
/// let signup = ObjectValidator::new()
///     .field("name", string_field(StringConstraints::new().required()).unwrap())
///     .field("age", number_field(NumberConstraints::new().required()).unwrap());
///
/// let out = signup.validate_value(&json!({"name": "Ann", "age": "30"})).unwrap();
/// assert_eq!(serde_json::Value::Object(out), json!({"name": "Ann", "age": 30}));
///
/// let issues = signup.validate_value(&json!({"name": "", "age": "x"})).unwrap_err();
/// assert_eq!(issues.len(), 2);
/// ```
#[derive(Default)]
pub struct ObjectValidator {
    fields: IndexMap<String, BoxedValidator>,
    locale: Locale,
}

impl ObjectValidator {
    /// Creates an object validator with no fields.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a field.
    ///
    /// Declaring a name twice keeps the position of the first declaration
    /// and the validator of the last one, and logs a warning. Use
    /// [`try_field`](Self::try_field) to reject duplicates instead.
    #[must_use = "builder methods must be chained or built"]
    pub fn field<V>(mut self, name: impl Into<String>, validator: V) -> Self
    where
        V: Validate + 'static,
        V::Output: IntoJson,
    {
        let name = name.into();
        if self.fields.insert(name.clone(), validator.boxed()).is_some() {
            tracing::warn!(field = %name, "duplicate object field, keeping the last declaration");
        }
        self
    }

    /// Declares a field, failing if the name is already declared.
    pub fn try_field<V>(mut self, name: impl Into<String>, validator: V) -> Result<Self, SchemaError>
    where
        V: Validate + 'static,
        V::Output: IntoJson,
    {
        match self.fields.entry(name.into()) {
            Entry::Occupied(entry) => Err(SchemaError::DuplicateField(entry.key().clone())),
            Entry::Vacant(entry) => {
                entry.insert(validator.boxed());
                Ok(self)
            }
        }
    }

    /// Sets the language of the object-level "not an object" message.
    ///
    /// Field validators keep the locale of their own constraint sets.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Number of declared fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true when no field is declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Declared field names in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    fn not_an_object(&self, input: Input<'_>) -> Issues {
        Issue::new(IssueKind::Type, Message::NotObject.render(self.locale))
            .with_param("expected", "object")
            .with_param("actual", input.type_name())
            .into()
    }
}

impl fmt::Debug for ObjectValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectValidator")
            .field("fields", &self.fields.keys().collect::<Vec<_>>())
            .field("locale", &self.locale)
            .finish()
    }
}

// Arrays are object-like: a canonical decimal index names an element and
// any other key is missing.
fn lookup<'a>(container: &'a Value, name: &str) -> Input<'a> {
    match container {
        Value::Object(object) => Input::from(object.get(name)),
        Value::Array(items) => Input::from(array_index(name).and_then(|i| items.get(i))),
        _ => Input::Absent,
    }
}

fn array_index(name: &str) -> Option<usize> {
    let canonical = name == "0" || (!name.starts_with('0') && !name.is_empty());
    if canonical && name.bytes().all(|b| b.is_ascii_digit()) {
        name.parse().ok()
    } else {
        None
    }
}

impl Validate for ObjectValidator {
    type Output = Map<String, Value>;

    fn validate(&self, input: Input<'_>) -> Outcome<Self::Output> {
        let Some(container) = input.value().filter(|v| v.is_object() || v.is_array()) else {
            return Err(self.not_an_object(input));
        };

        let mut output = Map::with_capacity(self.fields.len());
        let mut issues = Issues::new();
        let mut failed_fields = 0usize;

        for (name, validator) in &self.fields {
            match validator.validate(lookup(container, name)) {
                Ok(value) => {
                    output.insert(name.clone(), value);
                }
                Err(field_issues) => {
                    tracing::trace!(field = %name, issues = field_issues.len(), "field failed");
                    failed_fields += 1;
                    let segment = PathSegment::key(name.clone());
                    if field_issues.is_empty() {
                        // A failure always carries at least one issue.
                        issues.push(
                            Issue::new(IssueKind::Type, Message::InvalidValue.render(self.locale))
                                .prefixed(segment),
                        );
                    } else {
                        issues.absorb_prefixed(field_issues, &segment);
                    }
                }
            }
        }

        if failed_fields == 0 {
            Ok(output)
        } else {
            tracing::debug!(
                fields = failed_fields,
                issues = issues.len(),
                "object validation failed"
            );
            Err(issues)
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::{
        EmailConstraints, NumberConstraints, StringConstraints, email_field, number_field,
        string_field,
    };
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn name_and_age() -> ObjectValidator {
        ObjectValidator::new()
            .field(
                "name",
                string_field(StringConstraints::new().required()).unwrap(),
            )
            .field(
                "age",
                number_field(NumberConstraints::new().required()).unwrap(),
            )
    }

    fn paths(issues: &Issues) -> Vec<String> {
        issues.iter().map(Issue::path_string).collect()
    }

    #[test]
    fn success_outputs_declared_keys_in_order() {
        let out = name_and_age()
            .validate_value(&json!({"age": "30", "name": "Ann", "extra": true}))
            .unwrap();
        assert_eq!(out.keys().collect::<Vec<_>>(), vec!["name", "age"]);
        assert_eq!(Value::Object(out), json!({"name": "Ann", "age": 30}));
    }

    #[test]
    fn aggregates_all_failing_fields() {
        let issues = name_and_age()
            .validate_value(&json!({"name": "", "age": "x"}))
            .unwrap_err();
        assert_eq!(paths(&issues), vec!["name", "age"]);
        assert_eq!(issues.as_slice()[0].kind, IssueKind::Required);
        assert_eq!(issues.as_slice()[1].kind, IssueKind::Type);
    }

    #[test]
    fn missing_property_is_absent() {
        let issues = name_and_age().validate_value(&json!({})).unwrap_err();
        let kinds: Vec<_> = issues.iter().map(|i| i.kind).collect();
        // An absent string is a type mismatch; an absent required number is not.
        assert_eq!(kinds, vec![IssueKind::Type, IssueKind::Required]);
    }

    #[test]
    fn null_property_is_present() {
        let v = ObjectValidator::new()
            .field("n", number_field(NumberConstraints::new().required()).unwrap());
        let out = v.validate_value(&json!({"n": null})).unwrap();
        assert_eq!(out["n"], json!(0));
    }

    #[test]
    fn non_object_input_is_one_type_issue() {
        let v = name_and_age();
        for input in [json!("x"), json!(null), json!(true), json!(3)] {
            let issues = v.validate_value(&input).unwrap_err();
            assert_eq!(issues.len(), 1);
            let issue = issues.first().unwrap();
            assert_eq!(issue.kind, IssueKind::Type);
            assert!(issue.path.is_empty());
        }

        let issues = v.validate(Input::Absent).unwrap_err();
        assert_eq!(issues.first().unwrap().param("actual"), Some("undefined"));
    }

    struct FailsSilently;

    impl Validate for FailsSilently {
        type Output = Value;

        fn validate(&self, _input: Input<'_>) -> Outcome<Value> {
            Err(Issues::new())
        }
    }

    #[test]
    fn failure_without_issues_still_fails_the_object() {
        let v = ObjectValidator::new()
            .field("a", string_field(StringConstraints::new()).unwrap())
            .field("b", FailsSilently);

        let issues = v.validate_value(&json!({"a": "x", "b": 1})).unwrap_err();
        assert_eq!(issues.len(), 1);
        let issue = issues.first().unwrap();
        assert_eq!(issue.kind, IssueKind::Type);
        assert_eq!(issue.path_string(), "b");
        assert_eq!(issue.message, "Invalid value");
    }

    #[test]
    fn arrays_are_object_like() {
        let nick = ObjectValidator::new().field(
            "nick",
            string_field(StringConstraints::new()).unwrap().optional(),
        );
        let out = nick.validate_value(&json!([])).unwrap();
        assert_eq!(Value::Object(out), json!({"nick": null}));

        let v = ObjectValidator::new()
            .field("0", string_field(StringConstraints::new()).unwrap())
            .field("1", number_field(NumberConstraints::new()).unwrap());
        let out = v.validate_value(&json!(["a", "2"])).unwrap();
        assert_eq!(Value::Object(out), json!({"0": "a", "1": 2}));

        let issues = v.validate_value(&json!(["a"])).unwrap_err();
        assert_eq!(issues.first().unwrap().path_string(), "1");
    }

    #[test]
    fn only_canonical_indexes_address_array_elements() {
        assert_eq!(array_index("0"), Some(0));
        assert_eq!(array_index("12"), Some(12));
        assert_eq!(array_index("01"), None);
        assert_eq!(array_index("+1"), None);
        assert_eq!(array_index(""), None);
        assert_eq!(array_index("length"), None);
    }

    #[test]
    fn nested_paths() {
        let address = ObjectValidator::new().field(
            "zip",
            string_field(StringConstraints::new().pattern(r"^\d{5}$")).unwrap(),
        );
        let user = ObjectValidator::new()
            .field("email", email_field(EmailConstraints::new()))
            .field("address", address);

        let issues = user
            .validate_value(&json!({"email": "a@b.co", "address": {"zip": "abc"}}))
            .unwrap_err();
        assert_eq!(issues.len(), 1);
        let issue = issues.first().unwrap();
        assert_eq!(
            issue.path.as_slice(),
            &[PathSegment::key("address"), PathSegment::key("zip")]
        );
        assert_eq!(issue.kind, IssueKind::Pattern);
    }

    #[test]
    fn nested_success_is_an_object() {
        let inner = ObjectValidator::new().field(
            "zip",
            string_field(StringConstraints::new()).unwrap(),
        );
        let outer = ObjectValidator::new().field("address", inner);
        let out = outer
            .validate_value(&json!({"address": {"zip": "12345", "x": 1}}))
            .unwrap();
        assert_eq!(Value::Object(out), json!({"address": {"zip": "12345"}}));
    }

    #[test]
    fn try_field_rejects_duplicates() {
        let err = ObjectValidator::new()
            .try_field("a", string_field(StringConstraints::new()).unwrap())
            .unwrap()
            .try_field("a", email_field(EmailConstraints::new()))
            .unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateField(name) if name == "a"));
    }

    #[test]
    fn field_keeps_last_declaration_in_first_position() {
        let v = ObjectValidator::new()
            .field("a", string_field(StringConstraints::new()).unwrap())
            .field("b", string_field(StringConstraints::new()).unwrap())
            .field("a", email_field(EmailConstraints::new()));
        assert_eq!(v.field_names().collect::<Vec<_>>(), vec!["a", "b"]);

        let issues = v.validate_value(&json!({"a": "plain", "b": ""})).unwrap_err();
        assert_eq!(issues.first().unwrap().kind, IssueKind::Format);
    }

    #[test]
    fn empty_object_validator_accepts_any_object() {
        let v = ObjectValidator::new();
        assert!(v.is_empty());
        assert_eq!(v.validate_value(&json!({"a": 1})).unwrap(), Map::new());
    }

    #[test]
    fn korean_not_object_message() {
        let v = ObjectValidator::new().with_locale(Locale::Korean);
        let issues = v.validate_value(&json!(1)).unwrap_err();
        assert_eq!(issues.first().unwrap().message, "객체여야 합니다.");
    }

    #[test]
    fn debug_lists_field_names() {
        let rendered = format!("{:?}", name_and_age());
        assert!(rendered.contains("\"name\""));
        assert!(rendered.contains("\"age\""));
    }
}
