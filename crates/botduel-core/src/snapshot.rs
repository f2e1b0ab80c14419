//! Read-only snapshots for the presentation layer.
//!
//! The presentation boundary never touches [`crate::battlefield::Battlefield`]
//! directly; it renders from a [`MatchSnapshot`] captured after each command
//! or tick. Snapshots are plain serde-serializable values with no references
//! back into the engine.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::battlefield::Battlefield;
use crate::projectile::{Projectile, ProjectileId};
use crate::robot::{Robot, RobotId};

/// Renderable view of one robot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RobotView {
    /// Stable identifier.
    pub id: RobotId,
    /// Display name.
    pub name: String,
    /// Position on the battlefield.
    pub position: Vec2,
    /// Current health.
    pub health: f32,
    /// Health at match start.
    pub max_health: f32,
    /// Health as a fraction of maximum, for the health bar.
    pub health_ratio: f32,
    /// Current energy.
    pub energy: f32,
    /// Energy capacity.
    pub max_energy: f32,
    /// Energy as a fraction of maximum, for the energy bar.
    pub energy_ratio: f32,
    /// Display color as a hex string.
    pub color: String,
    /// `true` while the robot has positive health.
    pub alive: bool,
}

impl From<&Robot> for RobotView {
    fn from(robot: &Robot) -> Self {
        Self {
            id: robot.id,
            name: robot.name.clone(),
            position: robot.position,
            health: robot.health,
            max_health: robot.max_health,
            health_ratio: robot.health_ratio(),
            energy: robot.energy,
            max_energy: robot.max_energy,
            energy_ratio: robot.energy_ratio(),
            color: robot.color.clone(),
            alive: robot.is_alive(),
        }
    }
}

/// Renderable view of one in-flight projectile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectileView {
    /// Launch-order identifier.
    pub id: ProjectileId,
    /// Current position.
    pub position: Vec2,
}

impl From<&Projectile> for ProjectileView {
    fn from(projectile: &Projectile) -> Self {
        Self {
            id: projectile.id,
            position: projectile.position,
        }
    }
}

/// Complete read-only view of a match.
///
/// Robots and projectiles are listed in id order, so two snapshots of equal
/// state compare equal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    /// Completed ticks since reset.
    pub tick: u64,
    /// All robots, in id order.
    pub robots: Vec<RobotView>,
    /// In-flight projectiles, in launch order.
    pub projectiles: Vec<ProjectileView>,
    /// Currently selected robot, if any.
    pub selected: Option<RobotId>,
    /// Winner, once the match has concluded.
    pub winner: Option<RobotId>,
    /// Latest human-readable status message.
    pub message: String,
}

impl MatchSnapshot {
    /// Captures the current battlefield state.
    #[must_use]
    pub fn capture(field: &Battlefield) -> Self {
        Self {
            tick: field.current_tick(),
            robots: field.robots_sorted().map(RobotView::from).collect(),
            projectiles: field
                .projectiles_sorted()
                .map(ProjectileView::from)
                .collect(),
            selected: field.selected(),
            winner: field.winner(),
            message: field.message().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::robot::standard_roster;

    #[test]
    fn capture_reflects_roster() {
        let field = Battlefield::new();
        let snapshot = MatchSnapshot::capture(&field);

        assert_eq!(snapshot.tick, 0);
        assert_eq!(snapshot.robots.len(), 2);
        assert!(snapshot.projectiles.is_empty());
        assert!(snapshot.selected.is_none());
        assert!(snapshot.winner.is_none());

        let astro = &snapshot.robots[0];
        assert_eq!(astro.name, "Astro-X");
        assert_eq!(astro.color, "#FF5733");
        assert!(astro.alive);
        assert!((astro.health_ratio - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn capture_includes_projectiles_in_launch_order() {
        let mut field = Battlefield::new();
        let [astro, nebula] = standard_roster();
        field.spawn_projectile(|id| Projectile::launch(id, &astro, &nebula));
        field.spawn_projectile(|id| Projectile::launch(id, &nebula, &astro));

        let snapshot = MatchSnapshot::capture(&field);

        assert_eq!(snapshot.projectiles.len(), 2);
        assert_eq!(snapshot.projectiles[0].id, ProjectileId::new(0));
        assert_eq!(snapshot.projectiles[1].id, ProjectileId::new(1));
    }

    #[test]
    fn ratios_track_partial_health_and_energy() {
        let mut field = Battlefield::new();
        {
            let robot = field.robot_mut(RobotId::new(2)).unwrap();
            robot.health = 60.0;
            robot.energy = 25.0;
        }

        let snapshot = MatchSnapshot::capture(&field);
        let nebula = &snapshot.robots[1];

        assert!((nebula.health_ratio - 0.5).abs() < 0.0001);
        assert!((nebula.energy_ratio - 0.25).abs() < 0.0001);
    }

    #[test]
    fn serialization_roundtrip() {
        let field = Battlefield::new();
        let snapshot = MatchSnapshot::capture(&field);

        let json = serde_json::to_string(&snapshot).unwrap();
        let deserialized: MatchSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, deserialized);
    }
}
