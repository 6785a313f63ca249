//! Player control marker component
//!
//! Отмечает персонажа, которым управляет игрок через input (в отличие от
//! будущих AI-driven персонажей).

use bevy::prelude::Component;

/// Marker component для player-controlled персонажа
///
/// Host input system пишет `ControlInput` только персонажам с этим
/// маркером; остальные получают input из других источников.
///
/// # Single-player
/// В single-player режиме обычно только один entity имеет этот компонент.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Player;
