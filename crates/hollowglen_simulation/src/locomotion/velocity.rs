//! Velocity computer: чистая функция (state, movement, tunables) → velocity
//!
//! Вызывается раз в fixed tick; никаких failure modes.

use bevy::prelude::*;

use crate::components::{ActionState, MotionTunables};

/// Посчитать velocity персонажа для текущего fixed tick
///
/// - Idle/Walking: `movement * speed`
/// - Rolling: `captured_direction * speed * roll_multiplier` — live input
///   игнорируется, направление захвачено при входе в перекат
/// - Attacking: `movement * speed * attack_slow_multiplier` — live input
///   учитывается, но с замедлением
/// - Blocking: нулевой вектор
pub fn compute_velocity(
    state: &ActionState,
    movement: Vec2,
    tunables: &MotionTunables,
) -> Vec2 {
    match state {
        ActionState::Idle | ActionState::Walking => movement * tunables.speed,
        ActionState::Rolling { direction, .. } => {
            *direction * tunables.speed * tunables.roll_multiplier
        }
        ActionState::Attacking { .. } => {
            movement * tunables.speed * tunables.attack_slow_multiplier
        }
        ActionState::Blocking => Vec2::ZERO,
    }
}
