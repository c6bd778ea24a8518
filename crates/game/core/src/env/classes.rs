//! Player class definitions.
//!
//! Classes differ only in data: starting stats, growth per level, skill list,
//! and starting inventory. There is no per-class behaviour.

use super::{ItemId, SkillId};
use crate::stats::{BaseStats, StatGrowth};

/// Playable classes.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClassKind {
    Warrior,
    Wizard,
    Ranger,
    Thief,
}

/// Item and quantity granted when a character is created.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StartingItem {
    pub item: ItemId,
    pub quantity: u16,
}

impl StartingItem {
    pub fn new(item: impl Into<ItemId>, quantity: u16) -> Self {
        Self {
            item: item.into(),
            quantity,
        }
    }
}

/// Static definition of a playable class.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassDefinition {
    pub class: ClassKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    pub base: BaseStats,
    pub growth: StatGrowth,
    pub skills: Vec<SkillId>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub starting_items: Vec<StartingItem>,
}

impl ClassDefinition {
    pub fn new(class: ClassKind, base: BaseStats, growth: StatGrowth) -> Self {
        Self {
            class,
            description: String::new(),
            base,
            growth,
            skills: Vec::new(),
            starting_items: Vec::new(),
        }
    }

    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SkillId>,
    {
        self.skills = skills.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_starting_item(mut self, item: impl Into<ItemId>, quantity: u16) -> Self {
        self.starting_items.push(StartingItem::new(item, quantity));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn class_names_parse_case_insensitively() {
        assert_eq!("warrior".parse::<ClassKind>(), Ok(ClassKind::Warrior));
        assert_eq!("THIEF".parse::<ClassKind>(), Ok(ClassKind::Thief));
        assert!("bard".parse::<ClassKind>().is_err());
    }

    #[test]
    fn four_classes() {
        assert_eq!(ClassKind::iter().count(), 4);
    }
}
