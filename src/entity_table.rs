use std::collections::BTreeMap;
use std::fmt::{Debug, Display};

// =============================================================================
// 1. THE ABSTRACTION (Entity trait with lifecycle hooks)
// =============================================================================

/// Trait that any domain entity must implement to be stored in an [`EntityTable`].
pub trait Entity: Clone + Debug {
    /// Sequential identifier. Ids are handed out by the table, starting at 1.
    type Id: Copy + Ord + Display + Debug + From<i32>;
    /// Everything needed to build the entity except its id.
    type Draft: Debug;

    /// Get the ID of the entity
    fn id(&self) -> Self::Id;

    /// Construct the full Entity from the assigned ID and the draft
    fn from_draft(id: Self::Id, draft: Self::Draft) -> Self;

    // --- Lifecycle Hooks ---

    fn on_create(&mut self) {}
    fn on_delete(&self) {}
}

// =============================================================================
// 2. THE GENERIC TABLE
// =============================================================================

/// Insertion-ordered collection of entities with its own id counter.
///
/// Ids are monotonic, so iterating the underlying `BTreeMap` in key order
/// yields entities in the order they were inserted. Ids of removed entities
/// are never handed out again.
#[derive(Debug, Clone)]
pub struct EntityTable<T: Entity> {
    rows: BTreeMap<T::Id, T>,
    next_id: i32,
}

impl<T: Entity> Default for EntityTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> EntityTable<T> {
    pub fn new() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Assigns the next id to `draft` and stores the resulting entity.
    pub fn insert(&mut self, draft: T::Draft) -> T::Id {
        let id = T::Id::from(self.next_id);
        self.next_id += 1;

        let mut item = T::from_draft(id, draft);
        item.on_create();
        self.rows.insert(id, item);
        id
    }

    pub fn get(&self, id: T::Id) -> Option<&T> {
        self.rows.get(&id)
    }

    pub fn contains(&self, id: T::Id) -> bool {
        self.rows.contains_key(&id)
    }

    pub fn remove(&mut self, id: T::Id) -> Option<T> {
        let item = self.rows.remove(&id)?;
        item.on_delete();
        Some(item)
    }

    /// Removes every entity matching `predicate`, returning how many were removed.
    pub fn remove_where(&mut self, mut predicate: impl FnMut(&T) -> bool) -> usize {
        let doomed: Vec<T::Id> = self
            .rows
            .values()
            .filter(|item| predicate(*item))
            .map(|item| item.id())
            .collect();

        for id in &doomed {
            self.remove(*id);
        }
        doomed.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.rows.values()
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// =============================================================================
// 3. EXAMPLE USAGE (Test)
// =============================================================================
