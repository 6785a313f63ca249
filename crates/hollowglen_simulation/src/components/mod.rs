//! ECS Components для персонажей
//!
//! Организация по доменам:
//! - body: вариант тела/экипировки (BodyVariant)
//! - motion: action state machine data (ActionState, Facing, MotionTunables,
//!   PhysicsBody, Character)
//! - input: per-tick input sampling (ControlInput)
//! - player: player control marker (Player)

pub mod body;
pub mod input;
pub mod motion;
pub mod player;

// Re-exports для удобного импорта
pub use body::*;
pub use input::*;
pub use motion::*;
pub use player::*;
