// Post Entity Schema - feed posts with their owned comments

use crate::core::EntityType;
use crate::ent_schema::{EntSchema, FieldDefinition, FieldType, FieldValidator};

/// Longest post body accepted at creation time
pub const MAX_POST_LENGTH: usize = 500;

/// Post entity schema
pub struct PostSchema;

impl EntSchema for PostSchema {
    fn entity_type() -> EntityType {
        EntityType::Post
    }

    fn fields() -> Vec<FieldDefinition> {
        vec![
            FieldDefinition::new("id", FieldType::String).validate(FieldValidator::MinLength(1)),
            FieldDefinition::new("authorId", FieldType::String)
                .validate(FieldValidator::MinLength(1)),
            FieldDefinition::new("content", FieldType::String)
                .validate(FieldValidator::MaxLength(MAX_POST_LENGTH)),
            FieldDefinition::new("timestamp", FieldType::Timestamp),
            FieldDefinition::new("likes", FieldType::StringList).validate(FieldValidator::Unique),
            FieldDefinition::new("comments", FieldType::ObjectList(comment_fields())),
        ]
    }
}

/// Comment shape, shared by the standalone schema and the nested post list
pub fn comment_fields() -> Vec<FieldDefinition> {
    vec![
        FieldDefinition::new("id", FieldType::String).validate(FieldValidator::MinLength(1)),
        FieldDefinition::new("authorId", FieldType::String).validate(FieldValidator::MinLength(1)),
        FieldDefinition::new("content", FieldType::String),
        FieldDefinition::new("timestamp", FieldType::Timestamp),
    ]
}
