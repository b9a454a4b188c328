use crate::domain::errors::{DomainError, DomainResult};

/// A single user-entered entry: a title and a note, both non-blank.
///
/// The only way to obtain an `Item` is through [`Item::new`], which trims
/// both fields and rejects blank input, so every `Item` in the system
/// satisfies the non-blank invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    title: String,
    note: String,
}

impl Item {
    pub fn new(title: &str, note: &str) -> DomainResult<Item> {
        let title = title.trim();
        let note = note.trim();

        if title.is_empty() {
            return Err(DomainError::BlankTitle);
        }
        if note.is_empty() {
            return Err(DomainError::BlankNote);
        }

        Ok(Item {
            title: title.to_string(),
            note: note.to_string(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn note(&self) -> &str {
        &self.note
    }
}

/// Whether a title/note pair is saveable: both must be non-empty after
/// trimming. Recomputed on every call rather than cached.
pub fn can_save(title: &str, note: &str) -> bool {
    !title.trim().is_empty() && !note.trim().is_empty()
}

/// Insertion-ordered sequence of items.
///
/// No deletion, editing, or reordering is exposed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemList {
    items: Vec<Item>,
}

impl ItemList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }
}
