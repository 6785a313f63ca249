//! Locomotion domain — action state machine, направление, скорость
//!
//! Содержит:
//! - Direction (дискретизация движения в 4 направления)
//! - compute_velocity (чистая функция state → velocity)
//! - advance_action_state (приоритетные transition rules)
//! - Update/FixedUpdate системы (decide / integrate split)

pub mod direction;
pub mod systems;
pub mod velocity;


// Re-export основных типов
pub use direction::Direction;
pub use systems::{
    advance_action_state, apply_locomotion_velocity, evaluate_action_transitions,
    integrate_velocity_to_transform,
};
pub use velocity::compute_velocity;

use bevy::prelude::*;

use crate::components::latch_input_edges;

/// Locomotion Plugin
///
/// Порядок выполнения:
/// - Update: transition evaluation → latch input edges
/// - FixedUpdate: velocity application → интеграция в Transform
pub struct LocomotionPlugin;

impl Plugin for LocomotionPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (evaluate_action_transitions, latch_input_edges).chain(),
        );

        app.add_systems(
            FixedUpdate,
            (apply_locomotion_velocity, integrate_velocity_to_transform).chain(),
        );
    }
}
