//! Дискретизация движения в 4 кардинальных направления

use bevy::prelude::*;

/// Кардинальное направление персонажа (для animation keys)
///
/// Всегда одно из четырёх; нулевой вектор сюда не попадает — caller
/// подставляет последнее известное направление (`Facing`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Дискретизировать ненулевой movement vector
    ///
    /// |x| > |y| → горизонталь (Right/Left по знаку x),
    /// иначе → вертикаль (Up/Down по знаку y). Ничья уходит в вертикаль.
    pub fn from_vec(v: Vec2) -> Self {
        if v.x.abs() > v.y.abs() {
            if v.x > 0.0 {
                Direction::Right
            } else {
                Direction::Left
            }
        } else if v.y > 0.0 {
            Direction::Up
        } else {
            Direction::Down
        }
    }

    /// Суффикс направления в animation key
    pub fn token(&self) -> &'static str {
        match self {
            Direction::Up => "Up",
            Direction::Down => "Down",
            Direction::Left => "Left",
            Direction::Right => "Right",
        }
    }
}
