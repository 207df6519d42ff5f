// Entity layer - typed models bound to their schemas
//
// Untyped records only become entities through `Entity::from_record`, which runs the
// schema first and deserializes second.

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::core::EntityType;
use crate::ent_schema::EntSchema;
use crate::error::AppResult;

pub trait Entity: Serialize + DeserializeOwned + Clone + Send + Sync {
    type Schema: EntSchema;

    fn entity_type() -> EntityType {
        <Self::Schema as EntSchema>::entity_type()
    }

    /// Raw id, used for linear lookups in the store
    fn key(&self) -> &str;

    fn from_record(record: Value) -> AppResult<Self> {
        <Self::Schema as EntSchema>::validate(&record)?;
        Ok(serde_json::from_value(record)?)
    }

    fn from_records(records: Vec<Value>) -> AppResult<Vec<Self>> {
        records.into_iter().map(Self::from_record).collect()
    }
}

pub mod ent_comment;
pub mod ent_event;
pub mod ent_group;
pub mod ent_post;
pub mod ent_user;

pub use crate::models::{Comment, Event, Group, Post, User};
