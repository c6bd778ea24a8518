//! Common error infrastructure for game-core.
//!
//! Combat produces two families of errors:
//!
//! - [`InvalidActionError`]: the caller asked for something the combatant
//!   cannot do right now (not enough MP, unknown skill, empty item slot).
//!   Nothing in the session changes and the caller is expected to re-prompt.
//! - [`ConfigurationError`]: a catalog references a definition that does not
//!   exist. These are detected when the catalog is built and abort session
//!   construction.
//!
//! [`SessionError`] is what [`crate::session::CombatSession::submit_action`]
//! returns and wraps both.

use crate::env::{EnemyId, ItemId, SkillId};
use crate::session::SessionState;

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the same session can continue after a different input
/// - **Validation**: the input was malformed and should not be retried as-is
/// - **Fatal**: content or setup is broken, the session cannot start or continue
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    Recoverable,
    Validation,
    Fatal,
}

impl ErrorSeverity {
    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable | Self::Validation)
    }

    /// Returns true if this error should abort the session.
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal)
    }
}

/// Common trait for all game-core errors.
///
/// Provides a uniform interface for classification so the driver can decide
/// between re-prompting and aborting without matching on concrete types.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a stable identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

// ============================================================================
// Invalid actions
// ============================================================================

/// A player action that cannot be performed. The session is left untouched.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InvalidActionError {
    #[error("not enough MP: {skill} needs {required}, have {available}")]
    InsufficientMp {
        skill: SkillId,
        required: u32,
        available: u32,
    },

    #[error("unknown skill '{0}'")]
    UnknownSkill(SkillId),

    #[error("skill '{0}' is not known by this combatant")]
    SkillNotLearned(SkillId),

    #[error("skill '{skill}' cannot target {target}")]
    InvalidTarget {
        skill: SkillId,
        target: crate::session::Target,
    },

    #[error("no '{0}' left in inventory")]
    ItemNotInInventory(ItemId),
}

impl GameError for InvalidActionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InsufficientMp { .. } | Self::ItemNotInInventory(_) => {
                ErrorSeverity::Recoverable
            }
            Self::UnknownSkill(_) | Self::SkillNotLearned(_) | Self::InvalidTarget { .. } => {
                ErrorSeverity::Validation
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InsufficientMp { .. } => "ACTION_INSUFFICIENT_MP",
            Self::UnknownSkill(_) => "ACTION_UNKNOWN_SKILL",
            Self::SkillNotLearned(_) => "ACTION_SKILL_NOT_LEARNED",
            Self::InvalidTarget { .. } => "ACTION_INVALID_TARGET",
            Self::ItemNotInInventory(_) => "ACTION_ITEM_NOT_IN_INVENTORY",
        }
    }
}

// ============================================================================
// Configuration errors
// ============================================================================

/// Where a dangling reference was found.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReferenceOwner {
    Class(crate::env::ClassKind),
    Enemy(EnemyId),
    Combatant(String),
}

impl core::fmt::Display for ReferenceOwner {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Class(class) => write!(f, "class {class}"),
            Self::Enemy(id) => write!(f, "enemy '{id}'"),
            Self::Combatant(name) => write!(f, "combatant '{name}'"),
        }
    }
}

/// Content refers to something that does not exist.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("{owner} references undefined skill '{skill}'")]
    MissingSkill { owner: ReferenceOwner, skill: SkillId },

    #[error("{owner} references undefined item '{item}'")]
    MissingItem { owner: ReferenceOwner, item: ItemId },

    #[error("no definition for class {0}")]
    MissingClass(crate::env::ClassKind),

    #[error("no definition for enemy '{0}'")]
    MissingEnemy(EnemyId),

    #[error("duplicate definition for {0}")]
    Duplicate(String),

    #[error("invalid definition for {owner}: {reason}")]
    Invalid {
        owner: String,
        reason: &'static str,
    },
}

impl GameError for ConfigurationError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingSkill { .. } => "CONFIG_MISSING_SKILL",
            Self::MissingItem { .. } => "CONFIG_MISSING_ITEM",
            Self::MissingClass(_) => "CONFIG_MISSING_CLASS",
            Self::MissingEnemy(_) => "CONFIG_MISSING_ENEMY",
            Self::Duplicate(_) => "CONFIG_DUPLICATE",
            Self::Invalid { .. } => "CONFIG_INVALID",
        }
    }
}

// ============================================================================
// Session errors
// ============================================================================

/// Errors surfaced by a combat session.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("action rejected: {0}")]
    InvalidAction(#[from] InvalidActionError),

    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("combat is already over ({0})")]
    Finished(SessionState),
}

impl GameError for SessionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidAction(error) => error.severity(),
            Self::Configuration(error) => error.severity(),
            Self::Finished(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidAction(error) => error.error_code(),
            Self::Configuration(error) => error.error_code(),
            Self::Finished(_) => "SESSION_FINISHED",
        }
    }
}
