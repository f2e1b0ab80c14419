//! In-flight projectiles and their fixed-tick motion.
//!
//! A projectile is created by a successful attack command, advances a fixed
//! number of units toward its target every tick, and is removed the tick it
//! comes within [`ARRIVAL_THRESHOLD`] of the target position.
//!
//! # Hit Resolution
//!
//! Each projectile carries the id of the robot it was fired at, captured at
//! launch time. Impacts resolve against that id rather than against whatever
//! happens to occupy the target coordinate, so hit attribution stays
//! unambiguous even if robots ever become mobile.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::robot::{Robot, RobotId};

/// Distance a projectile travels per tick, in battlefield units.
pub const PROJECTILE_SPEED: f32 = 5.0;

/// Distance below which a projectile is considered to have hit its target.
///
/// Larger than [`PROJECTILE_SPEED`], so a closing projectile can never step
/// over the arrival band in a single tick.
pub const ARRIVAL_THRESHOLD: f32 = 10.0;

/// Unique identifier for a projectile.
///
/// Assigned from a monotonically increasing counter at launch, so sorting by
/// id reproduces launch order.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProjectileId(u64);

impl ProjectileId {
    /// Creates a new `ProjectileId` from a raw `u64` value.
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

impl fmt::Debug for ProjectileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ProjectileId({})", self.0)
    }
}

impl fmt::Display for ProjectileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ProjectileId {
    fn from(id: u64) -> Self {
        Self::new(id)
    }
}

/// One in-flight projectile.
///
/// The target position is a snapshot of the target robot's position at
/// launch; it is not tracked live. `payload` is the source robot's attack
/// stat at launch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    /// Launch-order identifier.
    pub id: ProjectileId,
    /// Current position.
    pub position: Vec2,
    /// Fixed target position, copied from the target robot at launch.
    pub target_pos: Vec2,
    /// Robot this projectile was fired at.
    pub target: RobotId,
    /// Robot that fired this projectile.
    pub source: RobotId,
    /// Damage potential delivered on impact, before mitigation.
    pub payload: f32,
    /// Distance travelled per tick.
    pub speed: f32,
}

impl Projectile {
    /// Launches a projectile from `source` at `target`.
    ///
    /// The launch position is the source's current position and the payload
    /// is the source's attack stat.
    #[must_use]
    pub fn launch(id: ProjectileId, source: &Robot, target: &Robot) -> Self {
        Self {
            id,
            position: source.position,
            target_pos: target.position,
            target: target.id,
            source: source.id,
            payload: source.attack,
            speed: PROJECTILE_SPEED,
        }
    }

    /// Euclidean distance from the current position to the target position.
    #[must_use]
    pub fn distance_to_target(&self) -> f32 {
        self.position.distance(self.target_pos)
    }

    /// Returns `true` once this projectile is within the arrival threshold.
    #[must_use]
    pub fn has_arrived(&self) -> bool {
        self.distance_to_target() < ARRIVAL_THRESHOLD
    }

    /// Advances the position by `speed` units along the normalized direction
    /// toward the target.
    pub fn advance(&mut self) {
        let direction = (self.target_pos - self.position).normalize_or_zero();
        self.position += direction * self.speed;
    }
}
