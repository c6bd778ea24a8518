//! Combat session state machine.
//!
//! A [`CombatSession`] runs one encounter between a [`Player`] and an
//! [`Enemy`]. Each call to [`CombatSession::submit_action`] resolves exactly one
//! round:
//!
//! 1. validate the player's action (rejections change nothing)
//! 2. plan the enemy's action from its policy
//! 3. order the two actors by effective speed, player first on ties
//! 4. execute both actions, skipping anyone already defeated
//! 5. tick status effects for player then enemy
//! 6. evaluate termination
//!
//! Fleeing replaces steps 3-4: success ends the session at once, failure
//! gives the enemy a full turn.
//!
//! All randomness is drawn from the injected [`RngOracle`] with seeds derived
//! from the session seed and round number, so a session is reproducible from
//! its seed and action sequence.

mod action;
mod policy;
pub(crate) mod resolve;
mod result;

pub use action::{CombatAction, PlannedAction, Target};
pub use result::{CombatantSnapshot, EventKind, LogEntry, TurnResult};

use tracing::{debug, warn};

use crate::combat::{flee_chance, initiative};
use crate::config::CombatConfig;
use crate::env::{Catalog, PcgRng, RngOracle, RollContext, compute_seed};
use crate::error::{ConfigurationError, InvalidActionError, ReferenceOwner, SessionError};
use crate::state::{Combatant, Enemy, Player, Side};

/// Lifecycle of a session. `Victory`, `Defeat`, and `Fled` are terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SessionState {
    #[strum(serialize = "awaiting player action")]
    AwaitingPlayerAction,
    /// Only observable while a round is being resolved.
    #[strum(serialize = "resolving turn")]
    ResolvingTurn,
    #[strum(serialize = "victory")]
    Victory,
    #[strum(serialize = "defeat")]
    Defeat,
    #[strum(serialize = "fled")]
    Fled,
}

impl SessionState {
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Victory | Self::Defeat | Self::Fled)
    }
}

/// What the player will do this round after validation.
enum PlayerPlan<'c> {
    Act(PlannedAction<'c>),
    Flee,
}

/// One combat encounter.
///
/// Holds both participants by exclusive reference for its lifetime; dropping
/// the session at any point leaves them as they were after the last round.
pub struct CombatSession<'a, R: RngOracle = PcgRng> {
    catalog: &'a Catalog,
    config: &'a CombatConfig,
    rng: R,
    seed: u64,
    round: u64,
    state: SessionState,
    player: &'a mut Player,
    enemy: &'a mut Enemy,
}

impl<'a> CombatSession<'a, PcgRng> {
    /// Starts a session using the default PCG oracle.
    pub fn start(
        catalog: &'a Catalog,
        config: &'a CombatConfig,
        player: &'a mut Player,
        enemy: &'a mut Enemy,
        seed: u64,
    ) -> Result<Self, ConfigurationError> {
        Self::with_rng(catalog, config, player, enemy, seed, PcgRng)
    }
}

impl<'a, R: RngOracle> CombatSession<'a, R> {
    /// Starts a session with a custom random source.
    ///
    /// Fails if either combatant refers to a skill or item missing from
    /// `catalog`, or enters the fight already defeated.
    pub fn with_rng(
        catalog: &'a Catalog,
        config: &'a CombatConfig,
        player: &'a mut Player,
        enemy: &'a mut Enemy,
        seed: u64,
        rng: R,
    ) -> Result<Self, ConfigurationError> {
        catalog.validate_combatant(&*player)?;
        catalog.validate_combatant(&*enemy)?;

        for combatant in [&*player as &dyn Combatant, &*enemy] {
            if !combatant.is_alive() {
                return Err(ConfigurationError::Invalid {
                    owner: format!("combatant '{}'", combatant.name()),
                    reason: "cannot start a fight with zero HP",
                });
            }
        }

        debug!(
            player = player.name(),
            enemy = enemy.name(),
            seed,
            "combat session started"
        );

        Ok(Self {
            catalog,
            config,
            rng,
            seed,
            round: 0,
            state: SessionState::AwaitingPlayerAction,
            player,
            enemy,
        })
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Number of rounds resolved so far.
    pub fn round(&self) -> u64 {
        self.round
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn player(&self) -> &Player {
        &*self.player
    }

    pub fn enemy(&self) -> &Enemy {
        &*self.enemy
    }

    /// Resolves one round with the player's `action`.
    ///
    /// Invalid actions are rejected with [`SessionError::InvalidAction`] and
    /// leave the session exactly as it was. Submitting after the session has
    /// ended returns [`SessionError::Finished`].
    pub fn submit_action(&mut self, action: CombatAction) -> Result<TurnResult, SessionError> {
        if self.state.is_terminal() {
            return Err(SessionError::Finished(self.state));
        }

        let plan = match self.validate(&action) {
            Ok(plan) => plan,
            Err(error) => {
                warn!(action = ?action, %error, "player action rejected");
                return Err(error);
            }
        };

        self.state = SessionState::ResolvingTurn;
        self.round += 1;

        let catalog = self.catalog;
        let enemy_plan =
            policy::choose_enemy_action(&*self.enemy, catalog, &self.rng, self.seed, self.round);

        let mut log = Vec::new();
        let player_stunned = self.player.is_stunned();

        match plan {
            PlayerPlan::Flee if !player_stunned => {
                if self.attempt_flee(&mut log) {
                    return Ok(self.finish_round(SessionState::Fled, log));
                }
                self.act(Side::Enemy, Some(enemy_plan), &mut log);
            }
            PlayerPlan::Flee => {
                self.act(Side::Player, None, &mut log);
                self.act(Side::Enemy, Some(enemy_plan), &mut log);
            }
            PlayerPlan::Act(player_plan) => {
                let order = initiative(
                    self.player.effective_speed(),
                    self.enemy.effective_speed(),
                );
                for side in order {
                    let planned = match side {
                        Side::Player => player_plan,
                        Side::Enemy => enemy_plan,
                    };
                    self.act(side, Some(planned), &mut log);
                }
            }
        }

        if let Some(outcome) = self.outcome() {
            return Ok(self.conclude(outcome, log));
        }

        resolve::tick(&mut *self.player, &mut log);
        resolve::tick(&mut *self.enemy, &mut log);

        let next = self.outcome().unwrap_or(SessionState::AwaitingPlayerAction);
        Ok(self.conclude(next, log))
    }

    /// Checks `action` against the player's resources and the catalog.
    fn validate(&self, action: &CombatAction) -> Result<PlayerPlan<'a>, SessionError> {
        let catalog = self.catalog;
        match action {
            CombatAction::BasicAttack => Ok(PlayerPlan::Act(PlannedAction::BasicAttack)),
            CombatAction::Flee => Ok(PlayerPlan::Flee),
            CombatAction::UseSkill { skill, target } => {
                let definition = catalog
                    .skill(skill)
                    .ok_or_else(|| InvalidActionError::UnknownSkill(skill.clone()))?;

                if !self.player.knows_skill(skill) {
                    return Err(InvalidActionError::SkillNotLearned(skill.clone()).into());
                }

                let expected = definition.kind.target();
                if let Some(target) = target.filter(|target| *target != expected) {
                    return Err(InvalidActionError::InvalidTarget {
                        skill: skill.clone(),
                        target,
                    }
                    .into());
                }

                let available = self.player.stats().mp();
                if definition.mp_cost > available {
                    return Err(InvalidActionError::InsufficientMp {
                        skill: skill.clone(),
                        required: definition.mp_cost,
                        available,
                    }
                    .into());
                }

                Ok(PlayerPlan::Act(PlannedAction::Skill(definition)))
            }
            CombatAction::UseItem { item } => {
                if !self.player.holds_item(item) {
                    return Err(InvalidActionError::ItemNotInInventory(item.clone()).into());
                }
                let definition = catalog.item(item).ok_or_else(|| {
                    ConfigurationError::MissingItem {
                        owner: ReferenceOwner::Combatant(self.player.name().to_owned()),
                        item: item.clone(),
                    }
                })?;
                Ok(PlayerPlan::Act(PlannedAction::Item(definition)))
            }
        }
    }

    /// Runs one side's action. `None` means the actor gives up its turn.
    ///
    /// Defeated actors never act; stunned actors log a no-op instead. A
    /// skipped defeated actor logs nothing here: its `Defeated` entry was
    /// already written when its HP reached zero.
    fn act(&mut self, side: Side, planned: Option<PlannedAction<'_>>, log: &mut Vec<LogEntry>) {
        let (actor, opponent): (&mut dyn Combatant, &mut dyn Combatant) = match side {
            Side::Player => (&mut *self.player, &mut *self.enemy),
            Side::Enemy => (&mut *self.enemy, &mut *self.player),
        };

        if !actor.is_alive() || !opponent.is_alive() {
            return;
        }

        if actor.is_stunned() {
            log.push(LogEntry::new(side, EventKind::Stunned, 0));
            return;
        }

        let Some(planned) = planned else {
            return;
        };

        match side {
            Side::Player => self.player.take_turn(&mut *self.enemy, planned, log),
            Side::Enemy => self.enemy.take_turn(&mut *self.player, planned, log),
        }
    }

    /// Rolls the flee check. Returns true on success.
    fn attempt_flee(&mut self, log: &mut Vec<LogEntry>) -> bool {
        let chance = flee_chance(
            self.player.effective_speed(),
            self.enemy.effective_speed(),
            &self.config.flee,
        );
        let seed = compute_seed(self.seed, self.round, Side::Player.index(), RollContext::Flee);
        let escaped = self.rng.chance(seed, chance);

        let event = if escaped {
            EventKind::FleeSucceeded
        } else {
            EventKind::FleeFailed
        };
        debug!(round = self.round, chance, escaped, "flee attempt");
        log.push(LogEntry::new(Side::Player, event, chance));
        escaped
    }

    /// Terminal state implied by current HP, if any. Defeat wins a double KO.
    fn outcome(&self) -> Option<SessionState> {
        if !self.player.is_alive() {
            Some(SessionState::Defeat)
        } else if !self.enemy.is_alive() {
            Some(SessionState::Victory)
        } else {
            None
        }
    }

    fn conclude(&mut self, next: SessionState, mut log: Vec<LogEntry>) -> TurnResult {
        if next == SessionState::Victory {
            self.grant_reward(&mut log);
        }
        self.finish_round(next, log)
    }

    fn grant_reward(&mut self, log: &mut Vec<LogEntry>) {
        let reward = self.enemy.reward();
        let levels = self.player.grant_reward(reward, &self.config.progression);

        log.push(LogEntry::new(Side::Player, EventKind::ExperienceGained, reward.exp));
        log.push(LogEntry::new(Side::Player, EventKind::GoldGained, reward.gold));
        log.extend(
            levels
                .into_iter()
                .map(|level| LogEntry::new(Side::Player, EventKind::LevelUp, level)),
        );
    }

    fn finish_round(&mut self, next: SessionState, entries: Vec<LogEntry>) -> TurnResult {
        self.state = next;
        debug!(
            round = self.round,
            state = %next,
            events = entries.len(),
            player_hp = self.player.stats().hp(),
            enemy_hp = self.enemy.stats().hp(),
            "round resolved"
        );

        TurnResult {
            round: self.round,
            entries,
            player: self.player.snapshot(),
            enemy: self.enemy.snapshot(),
            state: next,
        }
    }
}
