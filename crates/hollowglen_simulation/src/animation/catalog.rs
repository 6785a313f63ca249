//! Animation catalog: зарегистрированный набор animation keys
//!
//! Аналог `Animator.HasAnimation` — simulation сторона не проигрывает
//! клипы сама, но валидирует resolved keys против набора, который host
//! зарегистрировал при старте.

use std::collections::HashSet;
use std::fmt;

use bevy::prelude::*;

use super::keys::resolve_anim_key;
use crate::components::{ActionKind, BodyVariant};
use crate::locomotion::Direction;

/// Ошибка резолва анимации
///
/// Единственный error kind этого core. Не фатальна: state transition
/// проходит, деградирует только визуал (см. `ActiveAnimation::play`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnimationError {
    /// Resolved key отсутствует в зарегистрированном наборе
    NotFound { key: String },
}

impl fmt::Display for AnimationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnimationError::NotFound { key } => {
                write!(f, "animation '{}' not found in catalog", key)
            }
        }
    }
}

impl std::error::Error for AnimationError {}

/// Набор зарегистрированных animation keys
///
/// Host регистрирует keys существующих клипов при старте
/// (`AnimationCatalog::standard()` для полного набора всех вариантов,
/// или `register`/`register_variant` для кастомных наборов).
#[derive(Resource, Debug, Clone, Default)]
pub struct AnimationCatalog {
    keys: HashSet<String>,
}

impl AnimationCatalog {
    /// Пустой catalog (для тестов с partial наборами)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Полный набор: все варианты тела × все действия × 4 направления
    pub fn standard() -> Self {
        let mut catalog = Self::default();
        for variant in [
            BodyVariant::NoWeapon,
            BodyVariant::Glove,
            BodyVariant::ShieldSword,
        ] {
            catalog.register_variant(variant);
        }
        catalog
    }

    /// Зарегистрировать один key
    pub fn register(&mut self, key: impl Into<String>) {
        self.keys.insert(key.into());
    }

    /// Зарегистрировать все keys одного варианта тела
    ///
    /// Idle/Walk/Roll/Attack × 4 направления; Block добавляется только
    /// вариантам, которые умеют блокировать.
    pub fn register_variant(&mut self, variant: BodyVariant) {
        const DIRECTIONS: [Direction; 4] = [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ];

        let mut actions = vec![
            ActionKind::Idle,
            ActionKind::Walk,
            ActionKind::Roll,
            ActionKind::Attack,
        ];
        if variant.can_block() {
            actions.push(ActionKind::Block);
        }

        for action in actions {
            for direction in DIRECTIONS {
                self.register(resolve_anim_key(action, direction, variant));
            }
        }
    }

    /// Есть ли key в наборе (аналог `Animator.HasAnimation`)
    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    /// Количество зарегистрированных keys
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Пустой ли catalog
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
