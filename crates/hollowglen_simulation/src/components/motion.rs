//! Motion state компоненты: action state machine data, facing, tunables
//!
//! `ActionState` — единственный владелец текущего действия персонажа.
//! Взаимоисключаемость timed actions (Roll/Attack/Block) гарантируется
//! самим enum: одновременно существует ровно один variant.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::locomotion::Direction;

/// Порог "нулевого" movement vector (analog sticks дают шум около нуля)
pub const MOVE_EPSILON: f32 = 0.01;

/// Текущее действие персонажа (state machine state)
///
/// # Exclusivity
/// Rolling/Attacking/Blocking — timed exclusive actions: пока активен один,
/// другие не стартуют (entry guards требуют Idle/Walking). Триггеры во время
/// активного действия молча отбрасываются, без очереди.
///
/// # Timers
/// Rolling/Attacking несут remaining-duration счётчик, уменьшаемый раз в
/// frame tick. Blocking держится пока host держит block input (level-tested).
#[derive(Component, Debug, Clone, PartialEq, Default, Reflect)]
#[reflect(Component)]
pub enum ActionState {
    /// Стоим на месте (movement vector нулевой)
    #[default]
    Idle,

    /// Идём (movement vector ненулевой)
    Walking,

    /// Перекат — направление захвачено при входе, live input игнорируется
    Rolling {
        /// Оставшееся время переката (секунды)
        timer: f32,
        /// Направление, захваченное из Facing при входе (normalized)
        direction: Vec2,
    },

    /// Атака — движение с замедлением, live input учитывается
    Attacking {
        /// Оставшееся время атаки (секунды)
        timer: f32,
    },

    /// Блок (только ShieldSword) — нулевая скорость пока input держится
    Blocking,
}

impl ActionState {
    /// Активно ли timed exclusive action (Roll/Attack/Block)
    pub fn is_exclusive(&self) -> bool {
        matches!(
            self,
            ActionState::Rolling { .. } | ActionState::Attacking { .. } | ActionState::Blocking
        )
    }

    /// Animation action token для этого состояния
    pub fn kind(&self) -> ActionKind {
        match self {
            ActionState::Idle => ActionKind::Idle,
            ActionState::Walking => ActionKind::Walk,
            ActionState::Rolling { .. } => ActionKind::Roll,
            ActionState::Attacking { .. } => ActionKind::Attack,
            ActionState::Blocking => ActionKind::Block,
        }
    }
}

/// Action token для animation key (`Action_Direction_Suffix`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum ActionKind {
    Idle,
    Walk,
    Roll,
    Attack,
    Block,
}

impl ActionKind {
    /// Префикс animation key
    pub fn token(&self) -> &'static str {
        match self {
            ActionKind::Idle => "Idle",
            ActionKind::Walk => "Walk",
            ActionKind::Roll => "Roll",
            ActionKind::Attack => "Attack",
            ActionKind::Block => "Block",
        }
    }
}

/// Последнее ненулевое направление движения (persisted facing)
///
/// Инвариант: обновляется ТОЛЬКО в Idle/Walking. На время timed action
/// замораживается; Rolling использует захваченное значение verbatim.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Facing {
    /// Normalized последний ненулевой movement vector
    pub last_direction: Vec2,
}

impl Default for Facing {
    fn default() -> Self {
        // Спавнимся лицом вниз (к камере)
        Self {
            last_direction: Vec2::NEG_Y,
        }
    }
}

impl Facing {
    /// Обновить facing из movement vector (ненулевой → запоминаем)
    pub fn track(&mut self, movement: Vec2) {
        if movement.length_squared() > MOVE_EPSILON {
            self.last_direction = movement.normalize();
        }
    }

    /// Дискретное направление для animation key
    pub fn cardinal(&self) -> Direction {
        Direction::from_vec(self.last_direction)
    }
}

/// Параметры локомоции персонажа
///
/// Construction-time конфигурация; serde для data-driven пресетов.
#[derive(Component, Debug, Clone, Copy, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
pub struct MotionTunables {
    /// Базовая скорость ходьбы (units/sec)
    pub speed: f32,
    /// Во сколько раз перекат быстрее ходьбы
    pub roll_multiplier: f32,
    /// Длительность переката (секунды)
    pub roll_duration: f32,
    /// Замедление движения во время атаки (множитель скорости)
    pub attack_slow_multiplier: f32,
    /// Длительность атаки (секунды)
    pub attack_duration: f32,
}

impl Default for MotionTunables {
    fn default() -> Self {
        Self {
            speed: 5.0,
            roll_multiplier: 2.0,
            roll_duration: 0.3,
            attack_slow_multiplier: 0.4,
            attack_duration: 0.35,
        }
    }
}

/// Физическое тело персонажа (custom velocity, интегрируется в FixedUpdate)
///
/// Velocity пишется ровно одним владельцем — locomotion системами.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct PhysicsBody {
    /// Текущая скорость (units/sec)
    pub velocity: Vec2,
}

/// Персонаж с locomotion контроллером
///
/// Автоматически добавляет весь набор motion компонентов через
/// Required Components (Bevy 0.16).
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
#[require(
    BodyVariant,
    ControlInput,
    MotionTunables,
    ActionState,
    Facing,
    ActiveAnimation,
    PhysicsBody,
    Transform
)]
pub struct Character;

use crate::animation::ActiveAnimation;
use crate::components::{BodyVariant, ControlInput};
