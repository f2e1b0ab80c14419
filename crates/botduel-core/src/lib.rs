//! # Botduel Core
//!
//! Deterministic simulation core for a two-robot combat match.
//!
//! Players select a robot, fire projectiles at the opponent, and manage an
//! energy resource while a fixed-tick step function resolves projectile
//! motion, impacts, and the win condition. The core is a pure state machine:
//! it holds no timer, performs no I/O, and is driven entirely through
//! command and tick entry points, which keeps every match replayable and
//! testable without real time.
//!
//! ## Architecture
//!
//! - [`battlefield`]: canonical match state (roster, projectiles, selection,
//!   winner, status message)
//! - [`engine`]: command validation and the fixed-tick simulation step
//! - [`command`] / [`event`]: the input and output vocabulary of the core
//! - [`snapshot`]: read-only views for the presentation layer
//!
//! ## Usage
//!
//! ```
//! use botduel_core::{Command, MatchEngine, RobotId};
//!
//! let mut engine = MatchEngine::new();
//! engine
//!     .apply(Command::Select {
//!         robot: RobotId::new(1),
//!     })
//!     .unwrap();
//! engine
//!     .apply(Command::Attack {
//!         source: RobotId::new(1),
//!         target: RobotId::new(2),
//!     })
//!     .unwrap();
//!
//! while !engine.is_over() && engine.battlefield().projectile_count() > 0 {
//!     engine.step();
//! }
//!
//! let snapshot = engine.snapshot();
//! assert!(snapshot.robots[1].health < snapshot.robots[1].max_health);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod battlefield;
pub mod command;
pub mod engine;
pub mod event;
pub mod projectile;
pub mod robot;
pub mod snapshot;

pub use battlefield::Battlefield;
pub use command::{Command, CommandError};
pub use engine::MatchEngine;
pub use event::Event;
pub use projectile::{Projectile, ProjectileId};
pub use robot::{Robot, RobotId};
pub use snapshot::MatchSnapshot;

#[cfg(test)]
mod tests;
