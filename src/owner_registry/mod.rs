//! Owner bookkeeping: uniqueness of national ids and phone numbers, and
//! cascade deletion of the properties an owner holds.

mod entity;
pub mod error;

pub use error::*;

use tracing::{info, instrument, warn};

use crate::domain::{Owner, OwnerDraft, OwnerId};
use crate::entity_table::EntityTable;
use crate::property_registry::PropertyRegistry;

pub const OWNER_HEADER: &str = "------------------OWNER------------------";
pub const BLOCK_FOOTER: &str = "-----------------------------------------";

#[derive(Debug, Default)]
pub struct OwnerRegistry {
    owners: EntityTable<Owner>,
}

impl OwnerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new owner.
    ///
    /// # Errors
    /// Returns [`OwnerError::AlreadyExists`] if a live owner already uses the
    /// same national id or the same phone number. Either collision is enough.
    #[instrument(skip(self, draft), fields(national_id = %draft.national_id))]
    pub fn add_owner(&mut self, draft: OwnerDraft) -> Result<OwnerId, OwnerError> {
        let duplicate = self.owners.iter().any(|owner| {
            owner.national_id == draft.national_id || owner.phone_number == draft.phone_number
        });
        if duplicate {
            warn!("Owner rejected as duplicate");
            return Err(OwnerError::AlreadyExists);
        }

        let id = self.owners.insert(draft);
        info!(owner_id = %id, "Owner created");
        Ok(id)
    }

    /// Removes an owner together with every property in `properties` it holds.
    ///
    /// Returns the number of properties removed by the cascade.
    #[instrument(skip(self, properties))]
    pub fn remove_owner(
        &mut self,
        owner_id: OwnerId,
        properties: &mut PropertyRegistry,
    ) -> Result<usize, OwnerError> {
        if !self.owners.contains(owner_id) {
            warn!("Owner not found");
            return Err(OwnerError::NotFound(owner_id));
        }

        let cascaded = properties.remove_by_owner(owner_id);
        self.owners.remove(owner_id);
        info!(cascaded, "Owner removed");
        Ok(cascaded)
    }

    /// Renders every owner, in registration order, with the number of
    /// properties it currently holds in `properties`.
    pub fn display_owners(&self, properties: &PropertyRegistry) -> Vec<String> {
        let mut lines = Vec::new();
        for owner in self.owners.iter() {
            lines.push(OWNER_HEADER.to_string());
            lines.push(format!("Owner ID: {}", owner.id));
            lines.push(format!("National ID: {}", owner.national_id));
            lines.push(format!("Name: {}", owner.name));
            lines.push(format!("Phone number: {}", owner.phone_number));
            lines.push(format!("Properties owned: {}", properties.count_by_owner(owner.id)));
            lines.push(BLOCK_FOOTER.to_string());
        }
        lines
    }

    pub fn get(&self, owner_id: OwnerId) -> Option<&Owner> {
        self.owners.get(owner_id)
    }

    pub fn contains(&self, owner_id: OwnerId) -> bool {
        self.owners.contains(owner_id)
    }

    #[allow(dead_code)]
    pub fn iter(&self) -> impl Iterator<Item = &Owner> {
        self.owners.iter()
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.owners.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }
}
