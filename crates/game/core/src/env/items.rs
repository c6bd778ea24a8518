use super::ItemId;

/// Effect of consuming an item. Items always affect their user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemEffect {
    RestoreHp(u32),
    RestoreMp(u32),
    /// Removes debuffs, damage-over-time effects, and stun.
    Cleanse,
}

/// Consumable item definition.
///
/// Quantities live in the inventory; `max_stack` caps how many of one item a
/// single slot can hold.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    pub id: ItemId,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    pub effect: ItemEffect,
    #[cfg_attr(feature = "serde", serde(default = "ItemDefinition::default_max_stack"))]
    pub max_stack: u16,
}

impl ItemDefinition {
    pub const DEFAULT_MAX_STACK: u16 = 99;

    pub fn new(id: impl Into<ItemId>, name: impl Into<String>, effect: ItemEffect) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            effect,
            max_stack: Self::DEFAULT_MAX_STACK,
        }
    }

    #[cfg(feature = "serde")]
    const fn default_max_stack() -> u16 {
        Self::DEFAULT_MAX_STACK
    }
}
