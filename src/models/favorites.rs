//! Favorite kitchens, kept in the order they were marked.

use super::kitchen::{Kitchen, KitchenId};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Favorites {
    kitchens: Vec<Kitchen>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: KitchenId) -> bool {
        self.kitchens.iter().any(|k| k.id == id)
    }

    /// Add the kitchen if absent, remove it if present.
    ///
    /// Returns `true` when the kitchen is a favorite afterwards.
    pub fn toggle(&mut self, kitchen: &Kitchen) -> bool {
        if self.contains(kitchen.id) {
            self.kitchens.retain(|k| k.id != kitchen.id);
            false
        } else {
            self.kitchens.push(kitchen.clone());
            true
        }
    }

    pub fn kitchens(&self) -> &[Kitchen] {
        &self.kitchens
    }

    pub fn len(&self) -> usize {
        self.kitchens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kitchens.is_empty()
    }

    pub fn clear(&mut self) {
        self.kitchens.clear();
    }
}
