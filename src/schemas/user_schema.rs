// User Entity Schema - directory profile fields and the connection list

use serde_json::{Map, Value};

use crate::core::EntityType;
use crate::ent_schema::{EntSchema, FieldDefinition, FieldType, FieldValidator, ValidationError};

/// User entity schema
pub struct UserSchema;

impl EntSchema for UserSchema {
    fn entity_type() -> EntityType {
        EntityType::User
    }

    fn fields() -> Vec<FieldDefinition> {
        vec![
            FieldDefinition::new("id", FieldType::String).validate(FieldValidator::MinLength(1)),
            FieldDefinition::new("name", FieldType::String).validate(FieldValidator::MinLength(1)),
            FieldDefinition::new("email", FieldType::Email),
            FieldDefinition::new("profilePicture", FieldType::Url),
            FieldDefinition::new("headline", FieldType::String),
            FieldDefinition::new("bio", FieldType::String),
            FieldDefinition::new("college", FieldType::String),
            FieldDefinition::new("branch", FieldType::String),
            FieldDefinition::new("graduationYear", FieldType::Int)
                .validate(FieldValidator::Range(1900, 2100)),
            FieldDefinition::new("currentCompany", FieldType::String),
            FieldDefinition::new("location", FieldType::String),
            FieldDefinition::new("skills", FieldType::StringList).validate(FieldValidator::Unique),
            FieldDefinition::new("connections", FieldType::StringList)
                .validate(FieldValidator::Unique),
        ]
    }

    // A user is never in their own connection list
    fn check(record: &Map<String, Value>) -> Result<(), ValidationError> {
        let own_id = record.get("id");
        let connected_to_self = record
            .get("connections")
            .and_then(Value::as_array)
            .is_some_and(|connections| connections.iter().any(|id| Some(id) == own_id));
        if connected_to_self {
            return Err(ValidationError::new(
                EntityType::User,
                "connections",
                "must not contain the user's own id",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record() -> Value {
        json!({
            "id": "7",
            "name": "Ana Ortiz",
            "email": "ana@example.com",
            "profilePicture": "https://images.example.com/ana.jpg",
            "headline": "Engineer",
            "bio": "",
            "college": "Stanford University",
            "branch": "Computer Science",
            "graduationYear": 2019,
            "currentCompany": "Acme",
            "location": "Austin, TX",
            "skills": ["Rust"],
            "connections": ["1"]
        })
    }

    #[test]
    fn test_user_record_passes() {
        assert!(UserSchema::validate(&record()).is_ok());
    }

    #[test]
    fn test_email_and_url_shapes() {
        let mut bad = record();
        bad["email"] = json!("not-an-email");
        assert_eq!(UserSchema::validate(&bad).unwrap_err().field, "email");

        let mut bad = record();
        bad["profilePicture"] = json!("ana.jpg");
        assert_eq!(UserSchema::validate(&bad).unwrap_err().field, "profilePicture");
    }

    #[test]
    fn test_self_connection_rejected() {
        let mut bad = record();
        bad["connections"] = json!(["1", "7"]);
        let err = UserSchema::validate(&bad).unwrap_err();
        assert_eq!(err.field, "connections");
    }
}
