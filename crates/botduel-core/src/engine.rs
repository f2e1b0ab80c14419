//! Match engine: command resolution and the fixed-tick simulation step.
//!
//! [`MatchEngine`] owns a [`Battlefield`] and is its only mutation path.
//! Two entry points drive the match:
//!
//! - [`MatchEngine::apply`] validates a player [`Command`] and either
//!   mutates state or rejects it with a [`CommandError`].
//! - [`MatchEngine::step`] advances every in-flight projectile one tick,
//!   resolves arrivals into damage, and evaluates the win condition.
//!
//! # Scheduling
//!
//! The engine holds no timer. An external scheduler calls `step()` at
//! whatever cadence it likes (~60 Hz in the original presentation); once a
//! winner is declared `step()` becomes a no-op, so a straggling timer
//! callback can never mutate a concluded match.
//!
//! # Tick Ordering
//!
//! Within one tick, projectiles are processed in launch order, and all
//! advancement and impact resolution happens before the global survivor
//! re-check. Win detection is immediate: the lethal hit declares its source
//! the winner in the same tick it lands.

use tracing::{debug, info};

use crate::battlefield::Battlefield;
use crate::command::{Command, CommandError};
use crate::event::Event;
use crate::projectile::{Projectile, ProjectileId};
use crate::robot::RobotId;
use crate::snapshot::MatchSnapshot;

/// Energy deducted from the source robot by each attack.
pub const ATTACK_ENERGY_COST: f32 = 20.0;

/// Energy restored by each recharge, clamped to the robot's capacity.
pub const RECHARGE_AMOUNT: f32 = 30.0;

/// Drives one match from reset to winner declaration.
///
/// # Example
///
/// ```
/// use botduel_core::command::Command;
/// use botduel_core::engine::MatchEngine;
/// use botduel_core::robot::RobotId;
///
/// let mut engine = MatchEngine::new();
/// let astro = RobotId::new(1);
/// let nebula = RobotId::new(2);
///
/// engine.apply(Command::Select { robot: astro }).unwrap();
/// engine
///     .apply(Command::Attack {
///         source: astro,
///         target: nebula,
///     })
///     .unwrap();
///
/// // Run ticks until the projectile lands.
/// while engine.battlefield().projectile_count() > 0 {
///     engine.step();
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MatchEngine {
    state: Battlefield,
}

impl MatchEngine {
    /// Creates an engine with a fresh battlefield and the standard roster.
    #[must_use]
    pub fn new() -> Self {
        let mut engine = Self {
            state: Battlefield::new(),
        };
        engine.state.set_message(Event::MatchStarted.to_string());
        engine
    }

    /// Restarts the match: restores the roster to initial stats, clears
    /// projectiles, selection, and winner, and resets the tick counter.
    ///
    /// Valid at any time, including after a concluded match.
    pub fn reset(&mut self) -> Event {
        self.state = Battlefield::new();
        let event = Event::MatchStarted;
        self.state.set_message(event.to_string());
        info!("match reset");
        event
    }

    /// Applies a player command.
    ///
    /// On success the returned events describe what happened and the status
    /// message is updated from the last of them. On rejection no combat
    /// state changes, but the status message still describes the refusal.
    ///
    /// # Errors
    ///
    /// Returns a [`CommandError`] naming the first validation rule the
    /// command violated.
    pub fn apply(&mut self, command: Command) -> Result<Vec<Event>, CommandError> {
        match self.validate_and_apply(command) {
            Ok(events) => {
                if let Some(last) = events.last() {
                    self.state.set_message(last.to_string());
                }
                Ok(events)
            }
            Err(reason) => {
                debug!(?command, actor = %command.actor(), %reason, "command rejected");
                self.state
                    .set_message(Event::CommandRejected { reason }.to_string());
                Err(reason)
            }
        }
    }

    /// Advances the simulation by one tick.
    ///
    /// For each in-flight projectile in launch order: an arrived projectile
    /// is removed and its damage applied to the robot it was fired at; any
    /// other projectile advances toward its target. After all projectiles
    /// are processed, the survivor re-check runs. No-op once the match has
    /// a winner.
    pub fn step(&mut self) -> Vec<Event> {
        if self.state.is_over() {
            return Vec::new();
        }

        let mut events = Vec::new();

        let ids: Vec<ProjectileId> = self.state.projectile_ids_sorted().collect();
        for id in ids {
            let arrived = self
                .state
                .projectile(id)
                .is_some_and(Projectile::has_arrived);
            if arrived {
                if let Some(projectile) = self.state.remove_projectile(id) {
                    self.resolve_impact(&projectile, &mut events);
                }
            } else if let Some(projectile) = self.state.projectile_mut(id) {
                projectile.advance();
            }
        }

        // Covers conclusions not attributable to a lethal hit this tick.
        if !self.state.is_over() && self.state.living_count() <= 1 {
            if let Some(survivor) = self.state.sole_survivor() {
                let winner = survivor.id;
                let name = survivor.name.clone();
                self.state.declare_winner(winner);
                info!(%winner, "match won by last robot standing");
                events.push(Event::MatchWon { winner, name });
            }
        }

        self.state.advance_tick();
        if let Some(last) = events.last() {
            self.state.set_message(last.to_string());
        }
        events
    }

    /// Captures a read-only snapshot for the presentation layer.
    #[must_use]
    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot::capture(&self.state)
    }

    /// Returns a read-only reference to the battlefield.
    #[must_use]
    pub const fn battlefield(&self) -> &Battlefield {
        &self.state
    }

    /// Returns a mutable reference to the battlefield.
    ///
    /// Intended for test setup; gameplay mutation goes through `apply` and
    /// `step`.
    #[must_use]
    pub fn battlefield_mut(&mut self) -> &mut Battlefield {
        &mut self.state
    }

    /// Returns `true` once a winner has been declared.
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.state.is_over()
    }

    fn validate_and_apply(&mut self, command: Command) -> Result<Vec<Event>, CommandError> {
        if self.state.is_over() {
            return Err(CommandError::MatchOver);
        }
        match command {
            Command::Select { robot } => self.apply_select(robot),
            Command::Attack { source, target } => self.apply_attack(source, target),
            Command::Recharge { robot } => self.apply_recharge(robot),
        }
    }

    fn apply_select(&mut self, robot: RobotId) -> Result<Vec<Event>, CommandError> {
        let selected = self
            .state
            .robot(robot)
            .ok_or(CommandError::UnknownRobot(robot))?;
        if !selected.is_alive() {
            return Err(CommandError::RobotDefeated(robot));
        }
        let name = selected.name.clone();
        self.state.set_selected(Some(robot));
        debug!(%robot, "robot selected");
        Ok(vec![Event::RobotSelected { robot, name }])
    }

    fn apply_attack(
        &mut self,
        source: RobotId,
        target: RobotId,
    ) -> Result<Vec<Event>, CommandError> {
        let selected = self.state.selected().ok_or(CommandError::NoSelection)?;
        if selected != source {
            return Err(CommandError::SelectionMismatch(source));
        }
        if source == target {
            return Err(CommandError::SelfTarget);
        }

        let attacker = self
            .state
            .robot(source)
            .ok_or(CommandError::UnknownRobot(source))?;
        if !attacker.is_alive() {
            return Err(CommandError::RobotDefeated(source));
        }
        if attacker.energy < ATTACK_ENERGY_COST {
            return Err(CommandError::InsufficientEnergy {
                have: attacker.energy,
                need: ATTACK_ENERGY_COST,
            });
        }
        let attacker = attacker.clone();

        let defender = self
            .state
            .robot(target)
            .ok_or(CommandError::UnknownRobot(target))?;
        if !defender.is_alive() {
            return Err(CommandError::RobotDefeated(target));
        }
        let defender = defender.clone();

        let projectile = self
            .state
            .spawn_projectile(|id| Projectile::launch(id, &attacker, &defender));
        if let Some(robot) = self.state.robot_mut(source) {
            robot.spend_energy(ATTACK_ENERGY_COST);
        }
        self.state.set_selected(None);
        debug!(%source, %target, %projectile, "attack launched");

        Ok(vec![Event::AttackLaunched {
            source,
            name: attacker.name,
            projectile,
        }])
    }

    fn apply_recharge(&mut self, robot: RobotId) -> Result<Vec<Event>, CommandError> {
        let recharging = self
            .state
            .robot_mut(robot)
            .ok_or(CommandError::UnknownRobot(robot))?;
        recharging.recharge(RECHARGE_AMOUNT);
        let name = recharging.name.clone();
        let energy = recharging.energy;
        self.state.set_selected(None);
        debug!(%robot, energy, "energy recharged");
        Ok(vec![Event::EnergyRecharged {
            robot,
            name,
            energy,
        }])
    }

    /// Applies an arrived projectile's damage to the robot it was bound to
    /// at launch. A lethal hit declares the shooter the winner immediately,
    /// unless a winner already stands.
    fn resolve_impact(&mut self, projectile: &Projectile, events: &mut Vec<Event>) {
        let (damage, was_lethal, target_name) = {
            let Some(target) = self.state.robot_mut(projectile.target) else {
                return;
            };
            let was_alive = target.is_alive();
            let damage = target.take_hit(projectile.payload);
            (damage, was_alive && !target.is_alive(), target.name.clone())
        };

        debug!(
            projectile = %projectile.id,
            target = %projectile.target,
            damage,
            "projectile hit"
        );
        events.push(Event::ProjectileHit {
            projectile: projectile.id,
            target: projectile.target,
            name: target_name.clone(),
            damage,
        });

        if was_lethal {
            events.push(Event::RobotDefeated {
                robot: projectile.target,
                name: target_name,
            });
            // Only the first lethal hit of a tick takes the win; a crossing
            // lethal projectile still downs its target but declares nothing.
            if !self.state.is_over() {
                if let Some(source) = self.state.robot(projectile.source) {
                    let winner = source.id;
                    let name = source.name.clone();
                    self.state.declare_winner(winner);
                    info!(%winner, "match won by lethal hit");
                    events.push(Event::MatchWon { winner, name });
                }
            }
        }
    }
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::new()
    }
}
