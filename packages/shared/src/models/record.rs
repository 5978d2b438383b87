use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::models::identifier::render_id;

/// A document as read back from the store: the store-generated id plus the
/// entity's own fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record<T> {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(flatten)]
    pub fields: T,
}

impl<T> Record<T> {
    pub fn new(id: ObjectId, fields: T) -> Self {
        Record { id, fields }
    }
}

/// Response form of a [`Record`], with `_id` rendered as a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordResponse<T> {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(flatten)]
    pub fields: T,
}

impl<T> From<Record<T>> for RecordResponse<T> {
    fn from(record: Record<T>) -> Self {
        RecordResponse {
            id: render_id(&record.id),
            fields: record.fields,
        }
    }
}

pub fn to_response<T>(record: Option<Record<T>>) -> Option<RecordResponse<T>> {
    record.map(RecordResponse::from)
}

pub fn to_responses<T>(records: Vec<Record<T>>) -> Vec<RecordResponse<T>> {
    records.into_iter().map(RecordResponse::from).collect()
}

/// Body returned by every create endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedResponse {
    #[serde(rename = "_id")]
    pub id: String,
}

impl CreatedResponse {
    pub fn new(id: &ObjectId) -> Self {
        CreatedResponse { id: render_id(id) }
    }
}
