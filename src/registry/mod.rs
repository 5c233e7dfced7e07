//! Single ownership boundary for owners and properties.
//!
//! [`Registry`] owns both registries, so the owner cascade and the
//! owner-existence check borrow each other only through this type.

use tracing::instrument;

use crate::domain::{OwnerDraft, OwnerId, PropertyDraft, PropertyId};
use crate::owner_registry::{OwnerError, OwnerRegistry};
use crate::property_registry::{PropertyError, PropertyFilter, PropertyRegistry};

#[derive(Debug, Default)]
pub struct Registry {
    owners: OwnerRegistry,
    properties: PropertyRegistry,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(dead_code)]
    pub fn owners(&self) -> &OwnerRegistry {
        &self.owners
    }

    #[allow(dead_code)]
    pub fn properties(&self) -> &PropertyRegistry {
        &self.properties
    }

    pub fn add_owner(&mut self, draft: OwnerDraft) -> Result<OwnerId, OwnerError> {
        self.owners.add_owner(draft)
    }

    /// Removes the owner and every property it holds as one operation.
    #[instrument(skip(self))]
    pub fn remove_owner_cascading(&mut self, owner_id: OwnerId) -> Result<usize, OwnerError> {
        self.owners.remove_owner(owner_id, &mut self.properties)
    }

    pub fn add_property(&mut self, draft: PropertyDraft) -> Result<PropertyId, PropertyError> {
        self.properties.add_property(draft, &self.owners)
    }

    pub fn remove_property(&mut self, property_id: PropertyId) -> Result<(), PropertyError> {
        self.properties.remove_property(property_id)
    }

    pub fn display_owners(&self) -> Vec<String> {
        self.owners.display_owners(&self.properties)
    }

    pub fn display_properties(&self, filter: &PropertyFilter) -> Vec<String> {
        self.properties.display_properties(&self.owners, filter)
    }
}
