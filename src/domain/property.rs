use std::fmt;

use super::OwnerId;

/// Identifier of a [`Property`], assigned sequentially by the property registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PropertyId(pub i32);

impl From<i32> for PropertyId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A real-estate listing held by exactly one owner.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub id: PropertyId,
    pub name: String,
    pub price: f64,
    /// Listing type, conventionally `rent` or `sell`. Any string is accepted.
    pub kind: String,
    pub area: i32,
    pub address: String,
    pub owner_id: OwnerId,
}

/// Payload for listing a new property.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDraft {
    pub name: String,
    pub price: f64,
    pub kind: String,
    pub area: i32,
    pub address: String,
    pub owner_id: OwnerId,
}

impl PropertyDraft {
    pub fn new(
        name: impl Into<String>,
        price: f64,
        kind: impl Into<String>,
        area: i32,
        address: impl Into<String>,
        owner_id: OwnerId,
    ) -> Self {
        Self {
            name: name.into(),
            price,
            kind: kind.into(),
            area,
            address: address.into(),
            owner_id,
        }
    }
}
