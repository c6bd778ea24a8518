/// Combat configuration constants and tunable parameters.
///
/// Compile-time constants size fixed-capacity collections; the runtime fields
/// carry balance numbers that content may override (`config.toml`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatConfig {
    pub flee: FleeConfig,
    pub progression: ProgressionConfig,
}

impl CombatConfig {
    // ===== compile-time constants used as type parameters =====
    /// One slot per distinct status effect kind is enough, since same-kind
    /// effects refresh instead of stacking.
    pub const MAX_STATUS_EFFECTS: usize = 8;
    pub const MAX_INVENTORY_SLOTS: usize = 8;

    /// Lower bound of any aggregate stat modifier, in percent.
    pub const MIN_MODIFIER_PERCENT: u32 = 10;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_flee(mut self, flee: FleeConfig) -> Self {
        self.flee = flee;
        self
    }

    pub fn with_progression(mut self, progression: ProgressionConfig) -> Self {
        self.progression = progression;
        self
    }
}

/// Flee chance parameters, all in percent.
///
/// `chance = clamp(base + scale × (ps − es) / (ps + es), min, max)`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FleeConfig {
    pub base_percent: u32,
    pub scale_percent: u32,
    pub min_percent: u32,
    pub max_percent: u32,
}

impl FleeConfig {
    pub const DEFAULT_BASE: u32 = 50;
    pub const DEFAULT_SCALE: u32 = 50;
    pub const DEFAULT_MIN: u32 = 10;
    pub const DEFAULT_MAX: u32 = 95;
}

impl Default for FleeConfig {
    fn default() -> Self {
        Self {
            base_percent: Self::DEFAULT_BASE,
            scale_percent: Self::DEFAULT_SCALE,
            min_percent: Self::DEFAULT_MIN,
            max_percent: Self::DEFAULT_MAX,
        }
    }
}

/// Experience curve parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ProgressionConfig {
    /// `threshold(level) = exp_base × level^1.5`
    pub exp_base: u32,
    pub max_level: u32,
}

impl ProgressionConfig {
    pub const DEFAULT_EXP_BASE: u32 = 100;
    pub const DEFAULT_MAX_LEVEL: u32 = 99;
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        Self {
            exp_base: Self::DEFAULT_EXP_BASE,
            max_level: Self::DEFAULT_MAX_LEVEL,
        }
    }
}
