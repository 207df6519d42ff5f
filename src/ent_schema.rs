// Ent Schema Framework - declarative field definitions used to validate untyped records
// before they are accepted as typed entities

use std::collections::HashSet;
use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

use crate::core::EntityType;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

static URL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://[^\s/$.?#][^\s]*$").expect("url pattern compiles"));

static CLOCK_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}:\d{2}$").expect("clock pattern compiles"));

/// A record that does not satisfy its schema: which field broke which constraint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub entity: EntityType,
    /// Path of the offending field, `$` for the record itself, `comments[0].authorId` for nested fields
    pub field: String,
    pub constraint: String,
}

impl ValidationError {
    pub fn new(entity: EntityType, field: impl Into<String>, constraint: impl Into<String>) -> Self {
        Self {
            entity,
            field: field.into(),
            constraint: constraint.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}: {}", self.entity, self.field, self.constraint)
    }
}

impl std::error::Error for ValidationError {}

/// Schema definition trait - one implementation per entity shape
pub trait EntSchema {
    fn entity_type() -> EntityType;

    fn fields() -> Vec<FieldDefinition>;

    /// Record-level rules spanning several fields. Runs after every field passed.
    fn check(_record: &Map<String, Value>) -> Result<(), ValidationError> {
        Ok(())
    }

    fn validate(record: &Value) -> Result<(), ValidationError> {
        let entity = Self::entity_type();
        let object = record
            .as_object()
            .ok_or_else(|| ValidationError::new(entity, "$", "expected an object"))?;
        validate_fields(entity, "", &Self::fields(), object)?;
        Self::check(object)
    }
}

#[derive(Debug, Clone)]
pub struct FieldDefinition {
    pub name: String,
    pub field_type: FieldType,
    pub optional: bool,
    pub validators: Vec<FieldValidator>,
}

impl FieldDefinition {
    pub fn new(name: &str, field_type: FieldType) -> Self {
        Self {
            name: name.to_string(),
            field_type,
            optional: false,
            validators: Vec::new(),
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn validate(mut self, validator: FieldValidator) -> Self {
        self.validators.push(validator);
        self
    }
}

#[derive(Debug, Clone)]
pub enum FieldType {
    String,
    Int,
    Bool,
    Url,
    Email,
    /// RFC 3339 instant
    Timestamp,
    /// `YYYY-MM-DD`
    Date,
    /// `HH:MM`
    ClockTime,
    StringList,
    ObjectList(Vec<FieldDefinition>),
}

#[derive(Debug, Clone)]
pub enum FieldValidator {
    /// Characters for strings, elements for lists
    MinLength(usize),
    MaxLength(usize),
    Pattern(String),
    Range(i64, i64),
    /// List elements must be distinct
    Unique,
}

fn field_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", prefix, name)
    }
}

pub fn validate_fields(
    entity: EntityType,
    prefix: &str,
    fields: &[FieldDefinition],
    record: &Map<String, Value>,
) -> Result<(), ValidationError> {
    for field in fields {
        let path = field_path(prefix, &field.name);
        match record.get(&field.name) {
            None | Some(Value::Null) if field.optional => continue,
            None | Some(Value::Null) => {
                return Err(ValidationError::new(entity, path, "is required"));
            }
            Some(value) => {
                validate_type(entity, &path, &field.field_type, value)?;
                for validator in &field.validators {
                    apply_validator(entity, &path, validator, value)?;
                }
            }
        }
    }
    Ok(())
}

fn expect_str<'a>(entity: EntityType, path: &str, value: &'a Value) -> Result<&'a str, ValidationError> {
    value
        .as_str()
        .ok_or_else(|| ValidationError::new(entity, path, "expected a string"))
}

fn expect_array<'a>(entity: EntityType, path: &str, value: &'a Value) -> Result<&'a Vec<Value>, ValidationError> {
    value
        .as_array()
        .ok_or_else(|| ValidationError::new(entity, path, "expected a list"))
}

fn validate_type(
    entity: EntityType,
    path: &str,
    field_type: &FieldType,
    value: &Value,
) -> Result<(), ValidationError> {
    match field_type {
        FieldType::String => {
            expect_str(entity, path, value)?;
        }
        FieldType::Int => {
            if value.as_i64().is_none() {
                return Err(ValidationError::new(entity, path, "expected an integer"));
            }
        }
        FieldType::Bool => {
            if !value.is_boolean() {
                return Err(ValidationError::new(entity, path, "expected a boolean"));
            }
        }
        FieldType::Url => {
            if !URL_PATTERN.is_match(expect_str(entity, path, value)?) {
                return Err(ValidationError::new(entity, path, "expected a URL"));
            }
        }
        FieldType::Email => {
            if !EMAIL_PATTERN.is_match(expect_str(entity, path, value)?) {
                return Err(ValidationError::new(entity, path, "expected an email address"));
            }
        }
        FieldType::Timestamp => {
            if DateTime::parse_from_rfc3339(expect_str(entity, path, value)?).is_err() {
                return Err(ValidationError::new(entity, path, "expected an RFC 3339 timestamp"));
            }
        }
        FieldType::Date => {
            if NaiveDate::parse_from_str(expect_str(entity, path, value)?, "%Y-%m-%d").is_err() {
                return Err(ValidationError::new(entity, path, "expected a date (YYYY-MM-DD)"));
            }
        }
        FieldType::ClockTime => {
            let text = expect_str(entity, path, value)?;
            if !CLOCK_PATTERN.is_match(text) || NaiveTime::parse_from_str(text, "%H:%M").is_err() {
                return Err(ValidationError::new(entity, path, "expected a time (HH:MM)"));
            }
        }
        FieldType::StringList => {
            for (index, item) in expect_array(entity, path, value)?.iter().enumerate() {
                expect_str(entity, &format!("{}[{}]", path, index), item)?;
            }
        }
        FieldType::ObjectList(nested) => {
            for (index, item) in expect_array(entity, path, value)?.iter().enumerate() {
                let item_path = format!("{}[{}]", path, index);
                let object = item
                    .as_object()
                    .ok_or_else(|| ValidationError::new(entity, item_path.as_str(), "expected an object"))?;
                validate_fields(entity, &item_path, nested, object)?;
            }
        }
    }
    Ok(())
}

fn value_length(value: &Value) -> Option<usize> {
    match value {
        Value::String(text) => Some(text.chars().count()),
        Value::Array(items) => Some(items.len()),
        _ => None,
    }
}

fn apply_validator(
    entity: EntityType,
    path: &str,
    validator: &FieldValidator,
    value: &Value,
) -> Result<(), ValidationError> {
    match validator {
        FieldValidator::MinLength(min) => {
            if value_length(value).is_some_and(|len| len < *min) {
                return Err(ValidationError::new(entity, path, format!("must have at least {} characters", min)));
            }
        }
        FieldValidator::MaxLength(max) => {
            if value_length(value).is_some_and(|len| len > *max) {
                return Err(ValidationError::new(entity, path, format!("must have at most {} characters", max)));
            }
        }
        FieldValidator::Pattern(pattern) => {
            let regex = Regex::new(pattern)
                .map_err(|_| ValidationError::new(entity, path, format!("invalid pattern {}", pattern)))?;
            if let Some(text) = value.as_str() {
                if !regex.is_match(text) {
                    return Err(ValidationError::new(entity, path, format!("must match {}", pattern)));
                }
            }
        }
        FieldValidator::Range(min, max) => {
            if let Some(number) = value.as_i64() {
                if number < *min || number > *max {
                    return Err(ValidationError::new(
                        entity,
                        path,
                        format!("must be between {} and {}", min, max),
                    ));
                }
            }
        }
        FieldValidator::Unique => {
            if let Some(items) = value.as_array() {
                let mut seen = HashSet::new();
                for item in items {
                    if !seen.insert(item.to_string()) {
                        return Err(ValidationError::new(entity, path, format!("duplicate entry {}", item)));
                    }
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct NoteSchema;

    impl EntSchema for NoteSchema {
        fn entity_type() -> EntityType {
            EntityType::Comment
        }

        fn fields() -> Vec<FieldDefinition> {
            vec![
                FieldDefinition::new("id", FieldType::String).validate(FieldValidator::MinLength(1)),
                FieldDefinition::new("title", FieldType::String)
                    .validate(FieldValidator::MaxLength(5))
                    .validate(FieldValidator::Pattern("^[a-z]+$".to_string())),
                FieldDefinition::new("rank", FieldType::Int).validate(FieldValidator::Range(1, 10)),
                FieldDefinition::new("tags", FieldType::StringList).validate(FieldValidator::Unique),
                FieldDefinition::new("note", FieldType::String).optional(),
                FieldDefinition::new(
                    "parts",
                    FieldType::ObjectList(vec![FieldDefinition::new("at", FieldType::ClockTime)]),
                ),
            ]
        }
    }

    fn valid_note() -> Value {
        json!({
            "id": "n1",
            "title": "abc",
            "rank": 3,
            "tags": ["a", "b"],
            "parts": [{"at": "09:30"}]
        })
    }

    #[test]
    fn test_valid_record_passes() {
        assert!(NoteSchema::validate(&valid_note()).is_ok());
    }

    #[test]
    fn test_non_object_record() {
        let err = NoteSchema::validate(&json!([1, 2])).unwrap_err();
        assert_eq!(err.field, "$");
    }

    #[test]
    fn test_missing_required_field() {
        let mut record = valid_note();
        record.as_object_mut().unwrap().remove("rank");
        let err = NoteSchema::validate(&record).unwrap_err();
        assert_eq!(err.field, "rank");
        assert_eq!(err.constraint, "is required");
    }

    #[test]
    fn test_validators_report_the_field() {
        let mut record = valid_note();
        record["title"] = json!("toolong");
        assert_eq!(NoteSchema::validate(&record).unwrap_err().field, "title");

        let mut record = valid_note();
        record["title"] = json!("ABC");
        assert!(NoteSchema::validate(&record).unwrap_err().constraint.starts_with("must match"));

        let mut record = valid_note();
        record["rank"] = json!(11);
        assert_eq!(NoteSchema::validate(&record).unwrap_err().constraint, "must be between 1 and 10");

        let mut record = valid_note();
        record["tags"] = json!(["a", "a"]);
        assert!(NoteSchema::validate(&record).unwrap_err().constraint.starts_with("duplicate"));
    }

    #[test]
    fn test_wrong_primitive_shape() {
        let mut record = valid_note();
        record["rank"] = json!("3");
        let err = NoteSchema::validate(&record).unwrap_err();
        assert_eq!(err.constraint, "expected an integer");

        let mut record = valid_note();
        record["tags"] = json!(["a", 2]);
        assert_eq!(NoteSchema::validate(&record).unwrap_err().field, "tags[1]");
    }

    #[test]
    fn test_nested_path_is_reported() {
        let mut record = valid_note();
        record["parts"] = json!([{"at": "09:30"}, {"at": "9am"}]);
        let err = NoteSchema::validate(&record).unwrap_err();
        assert_eq!(err.field, "parts[1].at");
        assert_eq!(err.to_string(), "comment.parts[1].at: expected a time (HH:MM)");
    }

    #[test]
    fn test_optional_field_may_be_null() {
        let mut record = valid_note();
        record["note"] = Value::Null;
        assert!(NoteSchema::validate(&record).is_ok());
    }
}
