//! Comparison session: the two named document slots and their transitions
//!
//! Models the per-interaction state explicitly, independent of any rendering
//! framework: slots are created empty, filled or overwritten one at a time in
//! either order, and cleared as a pair.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::types::document::{DocumentSlot, UploadedDocument};

/// What happened to a slot when a document arrived
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotTransition {
    /// The slot was empty and is now filled
    Filled,
    /// The slot already held a document, which was overwritten
    Replaced,
}

/// One user interaction: two optional document slots.
///
/// The comparison readiness predicate is the only gate to the LLM call:
/// both slots must hold a successfully-read document.
#[derive(Debug)]
pub struct ComparisonSession {
    id: Uuid,
    created_at: DateTime<Utc>,
    slots: [Option<UploadedDocument>; 2],
}

impl ComparisonSession {
    /// Create an empty session
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            slots: [None, None],
        }
    }

    /// Session id
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Creation time
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Store a document in its slot, reporting the transition
    pub fn insert(&mut self, doc: UploadedDocument) -> SlotTransition {
        let index = doc.slot.index();
        let transition = if self.slots[index].is_some() {
            SlotTransition::Replaced
        } else {
            SlotTransition::Filled
        };
        self.slots[index] = Some(doc);
        transition
    }

    /// Document currently held in a slot
    pub fn get(&self, slot: DocumentSlot) -> Option<&UploadedDocument> {
        self.slots[slot.index()].as_ref()
    }

    /// True when both slots are filled
    pub fn is_ready(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Both documents, in slot order, when the session is ready
    pub fn documents(&self) -> Option<(&UploadedDocument, &UploadedDocument)> {
        match (&self.slots[0], &self.slots[1]) {
            (Some(doc1), Some(doc2)) => Some((doc1, doc2)),
            _ => None,
        }
    }

    /// Slots currently filled, in display order
    pub fn filled_slots(&self) -> Vec<DocumentSlot> {
        DocumentSlot::ALL
            .into_iter()
            .filter(|slot| self.slots[slot.index()].is_some())
            .collect()
    }

    /// Empty both slots
    pub fn clear(&mut self) {
        self.slots = [None, None];
    }
}

impl Default for ComparisonSession {
    fn default() -> Self {
        Self::new()
    }
}
