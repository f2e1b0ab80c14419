//! Shared setup utilities for scenario and determinism tests.

use crate::command::Command;
use crate::engine::MatchEngine;
use crate::event::Event;
use crate::robot::RobotId;

/// Roster id of Astro-X.
pub const ASTRO: RobotId = RobotId::new(1);

/// Roster id of Nebula-7.
pub const NEBULA: RobotId = RobotId::new(2);

/// Selects `source` and fires at `target`, panicking on rejection.
pub fn select_and_attack(engine: &mut MatchEngine, source: RobotId, target: RobotId) {
    engine.apply(Command::Select { robot: source }).unwrap();
    engine.apply(Command::Attack { source, target }).unwrap();
}

/// Steps the engine until no projectiles remain or the match ends.
///
/// Returns all events produced along the way. Panics if nothing resolves
/// within a generous tick bound, so a stalled projectile fails loudly.
pub fn run_until_quiet(engine: &mut MatchEngine) -> Vec<Event> {
    let mut events = Vec::new();
    for _ in 0..10_000 {
        if engine.is_over() || engine.battlefield().projectile_count() == 0 {
            return events;
        }
        events.extend(engine.step());
    }
    panic!("projectiles never resolved");
}

/// Sets a robot's health directly, for scenarios starting mid-match.
pub fn set_health(engine: &mut MatchEngine, robot: RobotId, health: f32) {
    engine.battlefield_mut().robot_mut(robot).unwrap().health = health;
}

/// Sets a robot's energy directly, for scenarios starting mid-match.
pub fn set_energy(engine: &mut MatchEngine, robot: RobotId, energy: f32) {
    engine.battlefield_mut().robot_mut(robot).unwrap().energy = energy;
}
