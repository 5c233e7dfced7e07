//! Property listings: owner-existence check on creation and filtered display.

mod entity;
pub mod error;
mod filter;

pub use error::*;
pub use filter::*;

use tracing::{debug, info, instrument, warn};

use crate::domain::{OwnerId, Property, PropertyDraft, PropertyId};
use crate::entity_table::EntityTable;
use crate::owner_registry::{OwnerRegistry, BLOCK_FOOTER};

pub const PROPERTY_HEADER: &str = "----------------PROPERTY-----------------";

#[derive(Debug, Default)]
pub struct PropertyRegistry {
    properties: EntityTable<Property>,
}

impl PropertyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lists a new property for an existing owner.
    ///
    /// # Errors
    /// Returns [`PropertyError::OwnerNotFound`] if `owners` has no live owner
    /// with `draft.owner_id`. The registry is left untouched in that case.
    #[instrument(skip(self, draft, owners), fields(owner_id = %draft.owner_id))]
    pub fn add_property(
        &mut self,
        draft: PropertyDraft,
        owners: &OwnerRegistry,
    ) -> Result<PropertyId, PropertyError> {
        if !owners.contains(draft.owner_id) {
            warn!("Owner does not exist");
            return Err(PropertyError::OwnerNotFound(draft.owner_id));
        }

        let id = self.properties.insert(draft);
        info!(property_id = %id, "Property created");
        Ok(id)
    }

    #[instrument(skip(self))]
    pub fn remove_property(&mut self, property_id: PropertyId) -> Result<(), PropertyError> {
        match self.properties.remove(property_id) {
            Some(_) => {
                info!("Property removed");
                Ok(())
            }
            None => {
                warn!("Property not found");
                Err(PropertyError::NotFound(property_id))
            }
        }
    }

    /// Drops every property held by `owner_id`. Used by the owner cascade.
    pub fn remove_by_owner(&mut self, owner_id: OwnerId) -> usize {
        let removed = self.properties.remove_where(|p| p.owner_id == owner_id);
        debug!(owner_id = %owner_id, removed, "Removed properties of owner");
        removed
    }

    pub fn count_by_owner(&self, owner_id: OwnerId) -> usize {
        self.properties.iter().filter(|p| p.owner_id == owner_id).count()
    }

    /// Properties satisfying every criterion of `filter`, in listing order.
    pub fn filtered<'a>(&'a self, filter: &'a PropertyFilter) -> impl Iterator<Item = &'a Property> {
        self.properties.iter().filter(move |p| filter.matches(p))
    }

    /// Renders the properties matching `filter`.
    ///
    /// The owner name is looked up in `owners`; a property whose owner is not
    /// there renders with an empty name rather than an error.
    pub fn display_properties(&self, owners: &OwnerRegistry, filter: &PropertyFilter) -> Vec<String> {
        let mut lines = Vec::new();
        for property in self.filtered(filter) {
            let owner_name = owners
                .get(property.owner_id)
                .map(|owner| owner.name.as_str())
                .unwrap_or_default();

            lines.push(PROPERTY_HEADER.to_string());
            lines.push(format!("Property ID: {}", property.id));
            lines.push(format!("Name: {}", property.name));
            lines.push(format!("Price: {}", property.price));
            lines.push(format!("Type: {}", property.kind));
            lines.push(format!("Area: {}", property.area));
            lines.push(format!("Address: {}", property.address));
            lines.push(format!("Owner ID: {} - Owner Name: {}", property.owner_id, owner_name));
            lines.push(BLOCK_FOOTER.to_string());
        }
        lines
    }

    #[allow(dead_code)]
    pub fn get(&self, property_id: PropertyId) -> Option<&Property> {
        self.properties.get(property_id)
    }

    #[allow(dead_code)]
    pub fn iter(&self) -> impl Iterator<Item = &Property> {
        self.properties.iter()
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::OwnerDraft;

    fn owners() -> OwnerRegistry {
        let mut owners = OwnerRegistry::new();
        owners.add_owner(OwnerDraft::new("11111111", "Owner_One", "600000000")).unwrap();
        owners.add_owner(OwnerDraft::new("22222222", "Owner_Two", "700000000")).unwrap();
        owners
    }

    fn draft(name: &str, kind: &str, area: i32, address: &str, owner: i32) -> PropertyDraft {
        PropertyDraft::new(name, 150000.0, kind, area, address, OwnerId(owner))
    }

    #[test]
    fn test_add_property_requires_live_owner() {
        let owners = owners();
        let mut properties = PropertyRegistry::new();

        let result = properties.add_property(draft("Studio", "rent", 50, "Madrid", 999), &owners);

        assert_eq!(result, Err(PropertyError::OwnerNotFound(OwnerId(999))));
        assert!(properties.is_empty());
    }

    #[test]
    fn test_add_property_assigns_sequential_ids() {
        let owners = owners();
        let mut properties = PropertyRegistry::new();

        let first = properties.add_property(draft("Studio", "rent", 50, "Madrid", 1), &owners);
        properties.add_property(draft("Ghost", "rent", 50, "Madrid", 42), &owners).unwrap_err();
        let second = properties.add_property(draft("Loft", "sell", 80, "Madrid", 2), &owners);

        assert_eq!(first, Ok(PropertyId(1)));
        assert_eq!(second, Ok(PropertyId(2)));

        let stored = properties.get(PropertyId(1)).unwrap();
        assert_eq!(stored.area, 50);
        assert_eq!(stored.owner_id, OwnerId(1));
    }

    #[test]
    fn test_remove_property() {
        let owners = owners();
        let mut properties = PropertyRegistry::new();
        properties.add_property(draft("Studio", "rent", 50, "Madrid", 1), &owners).unwrap();

        assert_eq!(properties.remove_property(PropertyId(1)), Ok(()));
        assert_eq!(
            properties.remove_property(PropertyId(1)),
            Err(PropertyError::NotFound(PropertyId(1)))
        );
        assert!(properties.is_empty());
    }

    #[test]
    fn test_filters_combine_with_and() {
        let owners = owners();
        let mut properties = PropertyRegistry::new();
        for d in [
            draft("A", "rent", 50, "Madrid", 1),
            draft("B", "sell", 50, "Madrid", 1),
            draft("C", "rent", 30, "Madrid", 2),
            draft("D", "rent", 130, "Madrid", 2),
            draft("E", "rent", 120, "madrid", 2),
            draft("F", "rent", 60, "Sevilla", 1),
        ] {
            properties.add_property(d, &owners).unwrap();
        }

        let filter = PropertyFilter {
            kind: Some("rent".into()),
            min_area: Some(40),
            max_area: Some(120),
            address: Some("Madrid".into()),
            ..Default::default()
        };
        let names: Vec<&str> = properties.filtered(&filter).map(|p| p.name.as_str()).collect();

        assert_eq!(names, vec!["A", "E"]);
    }

    #[test]
    fn test_display_properties_renders_owner_name() {
        let owners = owners();
        let mut properties = PropertyRegistry::new();
        properties
            .add_property(PropertyDraft::new("Studio", 22.4, "sell", 90, "Madrid", OwnerId(2)), &owners)
            .unwrap();

        let lines = properties.display_properties(&owners, &PropertyFilter::default());

        assert_eq!(
            lines,
            vec![
                PROPERTY_HEADER.to_string(),
                "Property ID: 1".to_string(),
                "Name: Studio".to_string(),
                "Price: 22.4".to_string(),
                "Type: sell".to_string(),
                "Area: 90".to_string(),
                "Address: Madrid".to_string(),
                "Owner ID: 2 - Owner Name: Owner_Two".to_string(),
                BLOCK_FOOTER.to_string(),
            ]
        );
    }

    #[test]
    fn test_display_with_unknown_owner_renders_empty_name() {
        let owners = owners();
        let mut properties = PropertyRegistry::new();
        properties.add_property(draft("Studio", "rent", 50, "Madrid", 1), &owners).unwrap();

        let lines = properties.display_properties(&OwnerRegistry::new(), &PropertyFilter::default());

        assert!(lines.contains(&"Owner ID: 1 - Owner Name: ".to_string()));
    }

    #[test]
    fn test_whole_prices_render_without_fraction() {
        let owners = owners();
        let mut properties = PropertyRegistry::new();
        properties.add_property(draft("Studio", "rent", 50, "Madrid", 1), &owners).unwrap();

        let lines = properties.display_properties(&owners, &PropertyFilter::default());
        assert!(lines.contains(&"Price: 150000".to_string()));
    }
}
