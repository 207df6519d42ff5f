// Schema definitions for comments, events and groups

use serde_json::{Map, Value};

use super::post_schema::comment_fields;
use crate::core::EntityType;
use crate::ent_schema::{EntSchema, FieldDefinition, FieldType, FieldValidator, ValidationError};

/// Comment entity schema
pub struct CommentSchema;

impl EntSchema for CommentSchema {
    fn entity_type() -> EntityType {
        EntityType::Comment
    }

    fn fields() -> Vec<FieldDefinition> {
        comment_fields()
    }
}

/// Event entity schema
pub struct EventSchema;

impl EntSchema for EventSchema {
    fn entity_type() -> EntityType {
        EntityType::Event
    }

    fn fields() -> Vec<FieldDefinition> {
        vec![
            FieldDefinition::new("id", FieldType::String).validate(FieldValidator::MinLength(1)),
            FieldDefinition::new("title", FieldType::String).validate(FieldValidator::MinLength(1)),
            FieldDefinition::new("description", FieldType::String),
            FieldDefinition::new("date", FieldType::Date),
            FieldDefinition::new("time", FieldType::ClockTime),
            FieldDefinition::new("location", FieldType::String),
            FieldDefinition::new("isOnline", FieldType::Bool),
            FieldDefinition::new("organizer", FieldType::String),
            FieldDefinition::new("attendees", FieldType::StringList)
                .validate(FieldValidator::Unique),
            FieldDefinition::new("image", FieldType::Url),
        ]
    }
}

/// Group entity schema
pub struct GroupSchema;

impl EntSchema for GroupSchema {
    fn entity_type() -> EntityType {
        EntityType::Group
    }

    fn fields() -> Vec<FieldDefinition> {
        vec![
            FieldDefinition::new("id", FieldType::String).validate(FieldValidator::MinLength(1)),
            FieldDefinition::new("name", FieldType::String).validate(FieldValidator::MinLength(1)),
            FieldDefinition::new("description", FieldType::String),
            FieldDefinition::new("memberCount", FieldType::Int)
                .validate(FieldValidator::Range(0, u32::MAX as i64)),
            FieldDefinition::new("members", FieldType::StringList).validate(FieldValidator::Unique),
            FieldDefinition::new("image", FieldType::Url),
            FieldDefinition::new("isPrivate", FieldType::Bool),
        ]
    }

    fn check(record: &Map<String, Value>) -> Result<(), ValidationError> {
        let count = record.get("memberCount").and_then(Value::as_i64);
        let members = record.get("members").and_then(Value::as_array).map(Vec::len);
        match (count, members) {
            (Some(count), Some(members)) if count == members as i64 => Ok(()),
            _ => Err(ValidationError::new(
                EntityType::Group,
                "memberCount",
                "must equal the number of members",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_event_date_and_time_shapes() {
        let mut record = json!({
            "id": "1",
            "title": "Mixer",
            "description": "",
            "date": "2024-11-25",
            "time": "18:00",
            "location": "Pier 27",
            "isOnline": false,
            "organizer": "Alumni Association",
            "attendees": ["1"],
            "image": "https://images.example.com/mixer.jpg"
        });
        assert!(EventSchema::validate(&record).is_ok());

        record["date"] = json!("25/11/2024");
        assert_eq!(EventSchema::validate(&record).unwrap_err().field, "date");

        record["date"] = json!("2024-11-25");
        record["time"] = json!("6pm");
        assert_eq!(EventSchema::validate(&record).unwrap_err().field, "time");
    }

    #[test]
    fn test_group_member_count_matches_members() {
        let mut record = json!({
            "id": "1",
            "name": "CS Alumni",
            "description": "",
            "memberCount": 2,
            "members": ["1", "2"],
            "image": "https://images.example.com/cs.jpg",
            "isPrivate": false
        });
        assert!(GroupSchema::validate(&record).is_ok());

        record["memberCount"] = json!(1247);
        let err = GroupSchema::validate(&record).unwrap_err();
        assert_eq!(err.field, "memberCount");
    }

    #[test]
    fn test_comment_schema_standalone() {
        let record = json!({"id": "c1", "authorId": "1", "content": "hi", "timestamp": "yesterday"});
        assert_eq!(CommentSchema::validate(&record).unwrap_err().field, "timestamp");
    }
}
