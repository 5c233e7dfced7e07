use std::fmt;

/// Identifier of an [`Owner`], assigned sequentially by the owner registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OwnerId(pub i32);

impl From<i32> for OwnerId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A person or entity that can hold zero or more properties.
#[derive(Debug, Clone, PartialEq)]
pub struct Owner {
    pub id: OwnerId,
    pub national_id: String,
    pub name: String,
    pub phone_number: String,
}

/// Payload for registering a new owner.
#[derive(Debug, Clone, PartialEq)]
pub struct OwnerDraft {
    pub national_id: String,
    pub name: String,
    pub phone_number: String,
}

impl OwnerDraft {
    pub fn new(
        national_id: impl Into<String>,
        name: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            national_id: national_id.into(),
            name: name.into(),
            phone_number: phone_number.into(),
        }
    }
}
