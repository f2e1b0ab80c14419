//! Robot roster and per-robot combat state.
//!
//! This module provides:
//! - [`RobotId`]: Unique identifier for robots
//! - [`Robot`]: The full mutable state of one combatant
//! - [`standard_roster`]: The fixed two-entry roster a match starts from
//!
//! # Lifecycle
//!
//! Robots are created once at match start and never despawned. A defeated
//! robot stays in the roster with zero health; it is excluded from the win
//! check and is not a valid selection or attack target.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum damage applied by any hit, regardless of defense.
pub const DAMAGE_FLOOR: f32 = 5.0;

/// Unique identifier for a robot.
///
/// `RobotId` is a newtype wrapper around `u64`. IDs are stable for the
/// lifetime of a match and ordered by their numeric value, which gives the
/// roster a deterministic iteration order.
///
/// # Example
///
/// ```
/// use botduel_core::robot::RobotId;
///
/// let id1 = RobotId::new(1);
/// let id2 = RobotId::new(2);
///
/// assert!(id1 < id2);
/// assert_eq!(id1.as_u64(), 1);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RobotId(u64);

impl RobotId {
    /// Creates a new `RobotId` from a raw `u64` value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw `u64` value of this identifier.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for RobotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RobotId({})", self.0)
    }
}

impl fmt::Display for RobotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for RobotId {
    fn from(id: u64) -> Self {
        Self::new(id)
    }
}

impl From<RobotId> for u64 {
    fn from(id: RobotId) -> Self {
        id.0
    }
}

/// The full state of one combatant.
///
/// `attack`, `defense`, `max_health`, `max_energy`, `position`, and `color`
/// are fixed for the lifetime of a match; only `health` and `energy` change.
/// Robots are stationary, so `position` doubles as the launch and target
/// coordinate for projectiles.
///
/// # Example
///
/// ```
/// use botduel_core::robot::{standard_roster, DAMAGE_FLOOR};
///
/// let [astro, nebula] = standard_roster();
/// assert!(astro.is_alive());
/// // High defense still cannot reduce a hit below the damage floor.
/// assert!(nebula.mitigated_damage(1.0) >= DAMAGE_FLOOR);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Robot {
    /// Stable identifier, unique within the match.
    pub id: RobotId,
    /// Display name.
    pub name: String,
    /// Current health, clamped to `[0, max_health]`.
    pub health: f32,
    /// Health at match start.
    pub max_health: f32,
    /// Damage potential carried by this robot's projectiles.
    pub attack: f32,
    /// Damage mitigation applied to incoming hits.
    pub defense: f32,
    /// Current energy, clamped to `[0, max_energy]`.
    pub energy: f32,
    /// Energy capacity.
    pub max_energy: f32,
    /// Fixed position on the battlefield.
    pub position: Vec2,
    /// Display color as a hex string (e.g. `#FF5733`).
    pub color: String,
}

impl Robot {
    /// Returns `true` while this robot has positive health.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }

    /// Current health as a fraction of maximum, in `[0, 1]`.
    #[must_use]
    pub fn health_ratio(&self) -> f32 {
        self.health / self.max_health
    }

    /// Current energy as a fraction of maximum, in `[0, 1]`.
    #[must_use]
    pub fn energy_ratio(&self) -> f32 {
        self.energy / self.max_energy
    }

    /// Damage this robot takes from a hit with the given payload.
    ///
    /// Defense halves into the mitigation term, and the result never drops
    /// below [`DAMAGE_FLOOR`].
    #[must_use]
    pub fn mitigated_damage(&self, payload: f32) -> f32 {
        (payload - self.defense / 2.0).max(DAMAGE_FLOOR)
    }

    /// Applies a hit with the given payload and returns the damage dealt.
    ///
    /// Health is clamped at zero and never goes negative.
    pub fn take_hit(&mut self, payload: f32) -> f32 {
        let damage = self.mitigated_damage(payload);
        self.health = (self.health - damage).max(0.0);
        damage
    }

    /// Deducts energy, saturating at zero.
    pub fn spend_energy(&mut self, amount: f32) {
        self.energy = (self.energy - amount).max(0.0);
    }

    /// Adds energy, clamped to `max_energy`.
    pub fn recharge(&mut self, amount: f32) {
        self.energy = (self.energy + amount).min(self.max_energy);
    }
}

/// The fixed two-entry roster a match starts from.
///
/// Astro-X hits harder; Nebula-7 is tougher. Positions put the robots on
/// opposite sides of the battlefield.
#[must_use]
pub fn standard_roster() -> [Robot; 2] {
    [
        Robot {
            id: RobotId::new(1),
            name: "Astro-X".to_string(),
            health: 100.0,
            max_health: 100.0,
            attack: 20.0,
            defense: 10.0,
            energy: 100.0,
            max_energy: 100.0,
            position: Vec2::new(100.0, 300.0),
            color: "#FF5733".to_string(),
        },
        Robot {
            id: RobotId::new(2),
            name: "Nebula-7".to_string(),
            health: 120.0,
            max_health: 120.0,
            attack: 15.0,
            defense: 15.0,
            energy: 100.0,
            max_energy: 100.0,
            position: Vec2::new(700.0, 300.0),
            color: "#3498DB".to_string(),
        },
    ]
}
