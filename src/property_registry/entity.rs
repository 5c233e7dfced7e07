use crate::domain::{Property, PropertyDraft, PropertyId};
use crate::entity_table::Entity;

impl Entity for Property {
    type Id = PropertyId;
    type Draft = PropertyDraft;

    fn id(&self) -> PropertyId {
        self.id
    }

    fn from_draft(id: PropertyId, draft: PropertyDraft) -> Self {
        Self {
            id,
            name: draft.name,
            price: draft.price,
            kind: draft.kind,
            area: draft.area,
            address: draft.address,
            owner_id: draft.owner_id,
        }
    }
}
