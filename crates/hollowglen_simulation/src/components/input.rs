//! Input sampling компонент: movement axes + кнопки действий
//!
//! Host layer (рендер/платформа) пишет сырой input сюда раз в frame tick.
//! Для headless тестов — mock input через этот же компонент.
//!
//! Edge vs level semantics:
//! - Roll/Attack: edge-triggered (только переход released → pressed),
//!   иначе зажатая кнопка перезапускала бы действие каждый tick
//! - Block: edge-triggered на вход, level-tested на удержание

use bevy::prelude::*;

use super::motion::MOVE_EPSILON;

/// Per-tick input персонажа
///
/// `*_held` флаги выставляет host каждый frame tick (true пока кнопка
/// зажата). Предыдущее состояние защёлкивается системой
/// `latch_input_edges` ПОСЛЕ transition evaluation — до защёлки
/// `*_just_pressed()` отвечают про текущий tick.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct ControlInput {
    /// Movement vector, компоненты ~[-1, 1] (normalized при записи)
    pub move_axis: Vec2,
    /// Roll кнопка зажата в этом tick
    pub roll_held: bool,
    /// Attack кнопка зажата в этом tick
    pub attack_held: bool,
    /// Block кнопка зажата в этом tick
    pub block_held: bool,

    // Состояние предыдущего tick (для edge detection)
    prev_roll: bool,
    prev_attack: bool,
    prev_block: bool,
}

impl ControlInput {
    /// Записать movement axes (нормализует, чтобы диагональ не была быстрее)
    pub fn set_move_axis(&mut self, axis: Vec2) {
        self.move_axis = if axis.length_squared() > 1.0 {
            axis.normalize()
        } else {
            axis
        };
    }

    /// Ненулевой ли movement vector в этом tick
    pub fn is_moving(&self) -> bool {
        self.move_axis.length_squared() > MOVE_EPSILON
    }

    /// Roll нажата именно в этом tick (edge)
    pub fn roll_just_pressed(&self) -> bool {
        self.roll_held && !self.prev_roll
    }

    /// Attack нажата именно в этом tick (edge)
    pub fn attack_just_pressed(&self) -> bool {
        self.attack_held && !self.prev_attack
    }

    /// Block нажата именно в этом tick (edge)
    pub fn block_just_pressed(&self) -> bool {
        self.block_held && !self.prev_block
    }

    /// Block удерживается в этом tick (level)
    pub fn block_is_held(&self) -> bool {
        self.block_held
    }

    /// Защёлкнуть текущее состояние кнопок как "предыдущее"
    ///
    /// Вызывается раз в frame tick после transition evaluation.
    pub fn latch(&mut self) {
        self.prev_roll = self.roll_held;
        self.prev_attack = self.attack_held;
        self.prev_block = self.block_held;
    }
}

/// Система: защёлкивает предыдущее состояние кнопок (конец frame tick)
///
/// Должна стоять ПОСЛЕ `evaluate_action_transitions` в Update chain,
/// иначе edge detection видит уже защёлкнутое состояние.
pub fn latch_input_edges(mut query: Query<&mut ControlInput>) {
    for mut input in query.iter_mut() {
        input.latch();
    }
}
