//! Player inventory.
//!
//! Items are stacked per slot. A slot disappears when its quantity reaches
//! zero, so every stored slot holds at least one item.

use arrayvec::ArrayVec;

use crate::config::CombatConfig;
use crate::env::ItemId;

/// Inventory slot containing an item and its quantity.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InventorySlot {
    pub item: ItemId,
    pub quantity: u16,
}

impl InventorySlot {
    pub fn new(item: impl Into<ItemId>, quantity: u16) -> Self {
        Self {
            item: item.into(),
            quantity,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory {
    slots: ArrayVec<InventorySlot, { CombatConfig::MAX_INVENTORY_SLOTS }>,
}

impl Inventory {
    pub fn empty() -> Self {
        Self {
            slots: ArrayVec::new(),
        }
    }

    /// Adds `quantity` of `item`, stacking onto an existing slot up to
    /// `max_stack`. Returns how many were actually stored.
    pub fn add(&mut self, item: &ItemId, quantity: u16, max_stack: u16) -> u16 {
        if quantity == 0 {
            return 0;
        }

        if let Some(slot) = self.slots.iter_mut().find(|s| &s.item == item) {
            let stored = quantity.min(max_stack.saturating_sub(slot.quantity));
            slot.quantity += stored;
            return stored;
        }

        let stored = quantity.min(max_stack);
        if stored == 0 || self.slots.try_push(InventorySlot::new(item.clone(), stored)).is_err() {
            return 0;
        }
        stored
    }

    /// Removes one `item`. Returns false when none is held.
    pub fn consume(&mut self, item: &ItemId) -> bool {
        let Some(index) = self.slots.iter().position(|s| &s.item == item) else {
            return false;
        };

        let slot = &mut self.slots[index];
        slot.quantity -= 1;
        if slot.quantity == 0 {
            self.slots.remove(index);
        }
        true
    }

    pub fn quantity(&self, item: &ItemId) -> u16 {
        self.slots
            .iter()
            .find(|s| &s.item == item)
            .map_or(0, |s| s.quantity)
    }

    pub fn contains(&self, item: &ItemId) -> bool {
        self.quantity(item) > 0
    }

    pub fn slots(&self) -> &[InventorySlot] {
        &self.slots
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
