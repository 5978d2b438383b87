use mongodb::bson::oid::ObjectId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid identifier: {0:?}")]
pub struct InvalidIdError(pub String);

/// Parses the external string form of a document id.
///
/// Only the 24 hex character encoding is accepted, so malformed ids are
/// rejected before any query reaches the store.
pub fn parse_id(id: &str) -> Result<ObjectId, InvalidIdError> {
    ObjectId::parse_str(id).map_err(|_| InvalidIdError(id.to_string()))
}

pub fn render_id(id: &ObjectId) -> String {
    id.to_hex()
}
