//! Events emitted by commands and simulation ticks.
//!
//! Every accepted command and every tick returns the [`Event`]s it produced.
//! The `Display` impl renders the human-readable status line shown by the
//! presentation layer; the battlefield keeps the most recent rendering as
//! its status message.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::command::CommandError;
use crate::projectile::ProjectileId;
use crate::robot::RobotId;

/// Something that happened in the match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// A match was started or restarted.
    MatchStarted,
    /// A robot became the current selection.
    RobotSelected {
        /// Selected robot.
        robot: RobotId,
        /// Display name of the selected robot.
        name: String,
    },
    /// A projectile was launched.
    AttackLaunched {
        /// Robot that fired.
        source: RobotId,
        /// Display name of the firing robot.
        name: String,
        /// The launched projectile.
        projectile: ProjectileId,
    },
    /// A robot restored energy.
    EnergyRecharged {
        /// Robot that recharged.
        robot: RobotId,
        /// Display name of the robot.
        name: String,
        /// Energy level after the recharge.
        energy: f32,
    },
    /// A projectile reached its target and dealt damage.
    ProjectileHit {
        /// The projectile that arrived.
        projectile: ProjectileId,
        /// Robot that was hit.
        target: RobotId,
        /// Display name of the hit robot.
        name: String,
        /// Damage dealt after mitigation.
        damage: f32,
    },
    /// A robot's health reached zero.
    RobotDefeated {
        /// Defeated robot.
        robot: RobotId,
        /// Display name of the defeated robot.
        name: String,
    },
    /// A winner was declared and the match ended.
    MatchWon {
        /// Winning robot.
        winner: RobotId,
        /// Display name of the winner.
        name: String,
    },
    /// A command was refused.
    CommandRejected {
        /// Why the command was refused.
        reason: CommandError,
    },
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MatchStarted => write!(f, "The battle has begun! Select a robot."),
            Self::RobotSelected { name, .. } => {
                write!(f, "{name} selected. Click the enemy robot to attack.")
            }
            Self::AttackLaunched { name, .. } => write!(f, "{name} is attacking!"),
            Self::EnergyRecharged { name, .. } => write!(f, "{name} recharged energy."),
            Self::ProjectileHit { name, damage, .. } => {
                write!(f, "{name} took {damage} damage.")
            }
            Self::RobotDefeated { name, .. } => write!(f, "{name} is down!"),
            Self::MatchWon { name, .. } => write!(f, "{name} wins!"),
            Self::CommandRejected { reason } => write!(f, "Action refused: {reason}."),
        }
    }
}
