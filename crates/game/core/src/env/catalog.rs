//! Validated lookup tables for all static definitions.

use std::collections::BTreeMap;

use super::{
    ClassDefinition, ClassKind, EnemyId, EnemyTemplate, ItemDefinition, ItemId, SkillDefinition,
    SkillId,
};
use crate::error::{ConfigurationError, ReferenceOwner};
use crate::state::{Combatant, Enemy, Player};

/// Immutable, cross-checked tables of skills, items, classes, and enemies.
///
/// Construction fails if any definition references a skill or item that is
/// not in the catalog, so lookups made while a session runs only miss when a
/// combatant was built outside the catalog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    skills: BTreeMap<SkillId, SkillDefinition>,
    items: BTreeMap<ItemId, ItemDefinition>,
    classes: BTreeMap<ClassKind, ClassDefinition>,
    enemies: BTreeMap<EnemyId, EnemyTemplate>,
}

impl Catalog {
    pub fn new(
        skills: impl IntoIterator<Item = SkillDefinition>,
        items: impl IntoIterator<Item = ItemDefinition>,
        classes: impl IntoIterator<Item = ClassDefinition>,
        enemies: impl IntoIterator<Item = EnemyTemplate>,
    ) -> Result<Self, ConfigurationError> {
        let catalog = Self {
            skills: index(skills, |s| s.id.clone(), |id| format!("skill '{id}'"))?,
            items: index(items, |i| i.id.clone(), |id| format!("item '{id}'"))?,
            classes: index(classes, |c| c.class, |class| format!("class {class}"))?,
            enemies: index(enemies, |e| e.id.clone(), |id| format!("enemy '{id}'"))?,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), ConfigurationError> {
        for skill in self.skills.values() {
            skill.validate().map_err(|reason| ConfigurationError::Invalid {
                owner: format!("skill '{}'", skill.id),
                reason,
            })?;
        }

        for class in self.classes.values() {
            let owner = ReferenceOwner::Class(class.class);
            if class.base.max_hp == 0 {
                return Err(ConfigurationError::Invalid {
                    owner: owner.to_string(),
                    reason: "max_hp must be positive",
                });
            }
            self.check_skills(&owner, &class.skills)?;
            for starting in &class.starting_items {
                self.check_item(&owner, &starting.item)?;
            }
        }

        for enemy in self.enemies.values() {
            let owner = ReferenceOwner::Enemy(enemy.id.clone());
            if enemy.base.max_hp == 0 {
                return Err(ConfigurationError::Invalid {
                    owner: owner.to_string(),
                    reason: "max_hp must be positive",
                });
            }
            self.check_skills(&owner, &enemy.skills)?;
        }

        Ok(())
    }

    fn check_skills(
        &self,
        owner: &ReferenceOwner,
        skills: &[SkillId],
    ) -> Result<(), ConfigurationError> {
        match skills.iter().find(|id| !self.skills.contains_key(*id)) {
            Some(missing) => Err(ConfigurationError::MissingSkill {
                owner: owner.clone(),
                skill: missing.clone(),
            }),
            None => Ok(()),
        }
    }

    fn check_item(&self, owner: &ReferenceOwner, item: &ItemId) -> Result<(), ConfigurationError> {
        if self.items.contains_key(item) {
            Ok(())
        } else {
            Err(ConfigurationError::MissingItem {
                owner: owner.clone(),
                item: item.clone(),
            })
        }
    }

    /// Checks that every skill and item a combatant carries is defined here.
    pub fn validate_combatant<C: Combatant + ?Sized>(
        &self,
        combatant: &C,
    ) -> Result<(), ConfigurationError> {
        let owner = ReferenceOwner::Combatant(combatant.name().to_owned());
        self.check_skills(&owner, combatant.skills())?;
        for slot in combatant.held_items() {
            self.check_item(&owner, &slot.item)?;
        }
        Ok(())
    }

    // ===== lookups =====

    pub fn skill(&self, id: &SkillId) -> Option<&SkillDefinition> {
        self.skills.get(id)
    }

    pub fn item(&self, id: &ItemId) -> Option<&ItemDefinition> {
        self.items.get(id)
    }

    pub fn class(&self, class: ClassKind) -> Option<&ClassDefinition> {
        self.classes.get(&class)
    }

    pub fn enemy(&self, id: &EnemyId) -> Option<&EnemyTemplate> {
        self.enemies.get(id)
    }

    pub fn skills(&self) -> impl Iterator<Item = &SkillDefinition> {
        self.skills.values()
    }

    pub fn items(&self) -> impl Iterator<Item = &ItemDefinition> {
        self.items.values()
    }

    pub fn classes(&self) -> impl Iterator<Item = &ClassDefinition> {
        self.classes.values()
    }

    pub fn enemies(&self) -> impl Iterator<Item = &EnemyTemplate> {
        self.enemies.values()
    }

    // ===== factories =====

    /// Creates a level 1 character of `class` with its skills and starting
    /// inventory.
    pub fn create_player(
        &self,
        name: impl Into<String>,
        class: ClassKind,
    ) -> Result<Player, ConfigurationError> {
        let definition = self
            .class(class)
            .ok_or(ConfigurationError::MissingClass(class))?;

        let mut player = Player::new(name, class, &definition.base, definition.growth)
            .with_skills(definition.skills.iter().cloned());

        for starting in &definition.starting_items {
            let item = self.item(&starting.item).ok_or_else(|| ConfigurationError::MissingItem {
                owner: ReferenceOwner::Class(class),
                item: starting.item.clone(),
            })?;
            player
                .inventory_mut()
                .add(&item.id, starting.quantity, item.max_stack);
        }

        Ok(player)
    }

    /// Spawns a fresh enemy from its template.
    pub fn spawn_enemy(&self, id: &EnemyId) -> Result<Enemy, ConfigurationError> {
        self.enemy(id)
            .map(Enemy::spawn)
            .ok_or_else(|| ConfigurationError::MissingEnemy(id.clone()))
    }
}

fn index<K, V>(
    values: impl IntoIterator<Item = V>,
    key: impl Fn(&V) -> K,
    describe: impl Fn(&K) -> String,
) -> Result<BTreeMap<K, V>, ConfigurationError>
where
    K: Ord,
{
    let mut map = BTreeMap::new();
    for value in values {
        let id = key(&value);
        if map.contains_key(&id) {
            return Err(ConfigurationError::Duplicate(describe(&id)));
        }
        map.insert(id, value);
    }
    Ok(map)
}
