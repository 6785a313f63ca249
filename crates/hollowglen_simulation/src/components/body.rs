//! Body variant компонент: экипировка/скин персонажа
//!
//! Вариант тела выбирает suffix для animation keys и доступность действий.
//! Block доступен только с щитом и мечом (ShieldSword).

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Вариант тела персонажа (экипировка/скин)
///
/// # Animation suffix
/// - NoWeapon → "NW"
/// - Glove → "G"
/// - ShieldSword → "SS"
///
/// # Action availability
/// Block требует ShieldSword. Roll/Attack доступны всем вариантам.
#[derive(
    Component, Debug, Clone, Copy, PartialEq, Eq, Default, Reflect, Serialize, Deserialize,
)]
#[reflect(Component)]
pub enum BodyVariant {
    /// Без оружия (базовый спрайт)
    #[default]
    NoWeapon,
    /// Перчатки (кулачный бой)
    Glove,
    /// Щит и меч (единственный вариант с Block)
    ShieldSword,
}

impl BodyVariant {
    /// Suffix для animation key (`Action_Direction_Suffix`)
    pub fn suffix(&self) -> &'static str {
        match self {
            BodyVariant::NoWeapon => "NW",
            BodyVariant::Glove => "G",
            BodyVariant::ShieldSword => "SS",
        }
    }

    /// Может ли этот вариант блокировать
    pub fn can_block(&self) -> bool {
        matches!(self, BodyVariant::ShieldSword)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_variant_default() {
        assert_eq!(BodyVariant::default(), BodyVariant::NoWeapon);
    }

    #[test]
    fn test_body_variant_suffixes() {
        assert_eq!(BodyVariant::NoWeapon.suffix(), "NW");
        assert_eq!(BodyVariant::Glove.suffix(), "G");
        assert_eq!(BodyVariant::ShieldSword.suffix(), "SS");
    }

    #[test]
    fn test_only_shield_sword_blocks() {
        assert!(!BodyVariant::NoWeapon.can_block());
        assert!(!BodyVariant::Glove.can_block());
        assert!(BodyVariant::ShieldSword.can_block());
    }
}
