//! Item Selection
//!
//! Toggled set of item category ids, kept in the order they were picked.

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ItemSelection {
    ids: Vec<u32>,
}

impl ItemSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove `id` if selected, otherwise append it.
    ///
    /// Returns whether `id` is selected afterwards.
    pub fn toggle(&mut self, id: u32) -> bool {
        if let Some(pos) = self.ids.iter().position(|&selected| selected == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id);
            true
        }
    }

    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    pub fn ids(&self) -> &[u32] {
        &self.ids
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
