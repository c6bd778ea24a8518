//! Deterministic turn-based combat engine.
//!
//! `game-core` owns the combat rules for a single encounter between a player
//! character and an enemy: stat blocks, status effects, skill and item
//! definitions, enemy policies, and the [`CombatSession`] state machine that
//! resolves one round per submitted action. It performs no I/O; content
//! loading and presentation live in other crates.
//!
//! Every random roll goes through an injected [`RngOracle`], so a session is
//! fully reproducible from its seed and the sequence of player actions.
pub mod combat;
pub mod config;
pub mod env;
pub mod error;
pub mod session;
pub mod state;
pub mod stats;

pub use config::{CombatConfig, FleeConfig, ProgressionConfig};
pub use env::{
    Catalog, ClassDefinition, ClassKind, DotKind, EnemyId, EnemyPolicy, EnemyTemplate,
    ItemDefinition, ItemEffect, ItemId, PcgRng, RngOracle, RollContext, SkillDefinition, SkillId,
    SkillKind, StartingItem, compute_seed,
};
pub use error::{
    ConfigurationError, ErrorSeverity, GameError, InvalidActionError, ReferenceOwner, SessionError,
};
pub use session::{
    CombatAction, CombatSession, CombatantSnapshot, EventKind, LogEntry, PlannedAction,
    SessionState, Target, TurnResult,
};
pub use state::{
    Combatant, Enemy, Inventory, InventorySlot, Player, Reward, Side, StatusEffect,
    StatusEffectKind, StatusEffects, StatusTick,
};
pub use stats::{BaseStats, ResourceKind, ResourceMeter, StatBlock, StatGrowth, StatKind};
