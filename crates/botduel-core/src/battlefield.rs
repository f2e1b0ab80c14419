//! Battlefield state: the single source of truth for one match.
//!
//! The [`Battlefield`] owns the robot roster, the in-flight projectile set,
//! the selection cursor, the winner flag, the tick counter, and the latest
//! status message. It is a plain value with no timer or I/O attached; the
//! command and tick layers in [`crate::engine`] are the only mutation paths.
//!
//! # Determinism
//!
//! Both robots and projectiles live in `BTreeMap`s keyed by their
//! monotonically assigned ids, so iteration order is deterministic across
//! platforms. For projectiles, id order is launch order.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::projectile::{Projectile, ProjectileId};
use crate::robot::{standard_roster, Robot, RobotId};

/// Canonical state of one match from reset to winner declaration.
///
/// # Example
///
/// ```
/// use botduel_core::battlefield::Battlefield;
///
/// let field = Battlefield::new();
/// assert_eq!(field.living_count(), 2);
/// assert!(field.winner().is_none());
/// assert!(field.projectiles_sorted().next().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Battlefield {
    /// Robot roster, keyed by id for deterministic iteration.
    robots: BTreeMap<RobotId, Robot>,
    /// In-flight projectiles, keyed by launch-order id.
    projectiles: BTreeMap<ProjectileId, Projectile>,
    /// Counter backing projectile id assignment.
    next_projectile_id: u64,
    /// Currently selected robot, if any. At most one robot is selected.
    selected: Option<RobotId>,
    /// Winner, once the match has concluded.
    winner: Option<RobotId>,
    /// Completed simulation ticks since reset.
    tick: u64,
    /// Latest human-readable status message.
    message: String,
}

impl Battlefield {
    /// Creates a fresh battlefield with the standard roster installed.
    #[must_use]
    pub fn new() -> Self {
        let robots = standard_roster()
            .into_iter()
            .map(|robot| (robot.id, robot))
            .collect();
        Self {
            robots,
            projectiles: BTreeMap::new(),
            next_projectile_id: 0,
            selected: None,
            winner: None,
            tick: 0,
            message: String::new(),
        }
    }

    /// Returns a reference to a robot by id.
    #[must_use]
    pub fn robot(&self, id: RobotId) -> Option<&Robot> {
        self.robots.get(&id)
    }

    /// Returns a mutable reference to a robot by id.
    #[must_use]
    pub fn robot_mut(&mut self, id: RobotId) -> Option<&mut Robot> {
        self.robots.get_mut(&id)
    }

    /// Iterates over robots in id order.
    pub fn robots_sorted(&self) -> impl Iterator<Item = &Robot> + '_ {
        self.robots.values()
    }

    /// Number of robots with positive health.
    #[must_use]
    pub fn living_count(&self) -> usize {
        self.robots.values().filter(|r| r.is_alive()).count()
    }

    /// The sole robot with positive health, if exactly one remains.
    #[must_use]
    pub fn sole_survivor(&self) -> Option<&Robot> {
        let mut living = self.robots.values().filter(|r| r.is_alive());
        let survivor = living.next()?;
        if living.next().is_some() {
            return None;
        }
        Some(survivor)
    }

    /// Adds a projectile to the active set and returns its assigned id.
    ///
    /// Ids come from a monotonically increasing counter that is never
    /// reused within a match.
    pub fn spawn_projectile(
        &mut self,
        build: impl FnOnce(ProjectileId) -> Projectile,
    ) -> ProjectileId {
        let id = ProjectileId::new(self.next_projectile_id);
        self.next_projectile_id += 1;
        self.projectiles.insert(id, build(id));
        id
    }

    /// Removes a projectile from the active set.
    pub fn remove_projectile(&mut self, id: ProjectileId) -> Option<Projectile> {
        self.projectiles.remove(&id)
    }

    /// Returns a reference to a projectile by id.
    #[must_use]
    pub fn projectile(&self, id: ProjectileId) -> Option<&Projectile> {
        self.projectiles.get(&id)
    }

    /// Returns a mutable reference to a projectile by id.
    #[must_use]
    pub fn projectile_mut(&mut self, id: ProjectileId) -> Option<&mut Projectile> {
        self.projectiles.get_mut(&id)
    }

    /// Iterates over in-flight projectiles in launch order.
    pub fn projectiles_sorted(&self) -> impl Iterator<Item = &Projectile> + '_ {
        self.projectiles.values()
    }

    /// Ids of in-flight projectiles in launch order.
    pub fn projectile_ids_sorted(&self) -> impl Iterator<Item = ProjectileId> + '_ {
        self.projectiles.keys().copied()
    }

    /// Number of in-flight projectiles.
    #[must_use]
    pub fn projectile_count(&self) -> usize {
        self.projectiles.len()
    }

    /// Currently selected robot, if any.
    #[must_use]
    pub const fn selected(&self) -> Option<RobotId> {
        self.selected
    }

    /// Sets or clears the selection cursor.
    pub fn set_selected(&mut self, selected: Option<RobotId>) {
        self.selected = selected;
    }

    /// The winner, once declared.
    #[must_use]
    pub const fn winner(&self) -> Option<RobotId> {
        self.winner
    }

    /// Declares a winner. The first declaration wins; later calls are
    /// ignored so a match never has more than one winner.
    pub fn declare_winner(&mut self, id: RobotId) {
        if self.winner.is_none() {
            self.winner = Some(id);
        }
    }

    /// Returns `true` once a winner has been declared.
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Completed ticks since reset.
    #[must_use]
    pub const fn current_tick(&self) -> u64 {
        self.tick
    }

    /// Advances the tick counter.
    pub fn advance_tick(&mut self) {
        self.tick += 1;
    }

    /// Latest human-readable status message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Replaces the status message.
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }
}

impl Default for Battlefield {
    fn default() -> Self {
        Self::new()
    }
}
