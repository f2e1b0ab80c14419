//! Player commands and their rejection reasons.
//!
//! Commands are the only input surface of the core. The presentation layer
//! translates clicks into [`Command`] values and feeds them to
//! [`crate::engine::MatchEngine::apply`]; a rejected command returns a
//! [`CommandError`] and leaves combat state untouched.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::robot::RobotId;

/// A discrete player input.
///
/// # Example
///
/// ```
/// use botduel_core::command::Command;
/// use botduel_core::robot::RobotId;
///
/// let cmd = Command::Select {
///     robot: RobotId::new(1),
/// };
/// assert_eq!(cmd.actor(), RobotId::new(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Select a robot as the acting unit.
    Select {
        /// Robot to select.
        robot: RobotId,
    },
    /// Fire a projectile from the selected robot at an opponent.
    Attack {
        /// Robot issuing the attack; must match the current selection.
        source: RobotId,
        /// Robot being attacked.
        target: RobotId,
    },
    /// Restore a fixed amount of energy to a robot.
    Recharge {
        /// Robot recharging.
        robot: RobotId,
    },
}

impl Command {
    /// The robot performing this command.
    #[must_use]
    pub const fn actor(&self) -> RobotId {
        match self {
            Self::Select { robot } | Self::Recharge { robot } => *robot,
            Self::Attack { source, .. } => *source,
        }
    }
}

/// Why a command was rejected.
///
/// Rejection leaves robots, projectiles, selection, and winner untouched;
/// only the status message is updated to describe the refusal.
#[derive(Debug, Clone, Copy, PartialEq, Error, Serialize, Deserialize)]
pub enum CommandError {
    /// The match already has a winner; no further actions are accepted.
    #[error("the match is already over")]
    MatchOver,
    /// The referenced robot id is not in the roster.
    #[error("robot {0} is not in this match")]
    UnknownRobot(RobotId),
    /// The referenced robot has zero health.
    #[error("robot {0} is out of the fight")]
    RobotDefeated(RobotId),
    /// An attack was issued with no robot selected.
    #[error("no robot is selected")]
    NoSelection,
    /// The attack's source does not match the current selection.
    #[error("robot {0} is not the selected robot")]
    SelectionMismatch(RobotId),
    /// A robot tried to attack itself.
    #[error("a robot cannot attack itself")]
    SelfTarget,
    /// The source robot lacks the energy to attack.
    #[error("not enough energy: have {have}, need {need}")]
    InsufficientEnergy {
        /// Energy the robot currently has.
        have: f32,
        /// Energy the action costs.
        need: f32,
    },
}
