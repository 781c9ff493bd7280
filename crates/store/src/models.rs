use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub type IntId = i32;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Actor {
    pub id: IntId,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: IntId,
    pub name: String,
    /// Not checked against the known actors.
    pub actor_id: IntId,
}

/// A movie that has not been assigned an id yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewMovie {
    pub name: String,
    pub actor_id: IntId,
}
