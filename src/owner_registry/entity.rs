use crate::domain::{Owner, OwnerDraft, OwnerId};
use crate::entity_table::Entity;

impl Entity for Owner {
    type Id = OwnerId;
    type Draft = OwnerDraft;

    fn id(&self) -> OwnerId {
        self.id
    }

    /// Creates a new Owner from its registration payload.
    ///
    /// # Arguments
    /// * `id` - Sequential identifier chosen by the registry
    /// * `draft` - National id, display name and phone number
    fn from_draft(id: OwnerId, draft: OwnerDraft) -> Self {
        Self {
            id,
            national_id: draft.national_id,
            name: draft.name,
            phone_number: draft.phone_number,
        }
    }
}
