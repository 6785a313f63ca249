//! Animation playback state + события для presentation layer
//!
//! Simulation сторона решает КАКОЙ клип играть; сам playback делает host
//! (рендер), подписанный на `AnimationSwitched` events. Идемпотентность
//! `Play` гарантируется same-key guard в `ActiveAnimation::play`.

use bevy::prelude::*;

use super::catalog::{AnimationCatalog, AnimationError};
use super::keys::resolve_anim_key;
use crate::components::{ActionKind, BodyVariant};
use crate::locomotion::Direction;

/// Текущий отображаемый animation key персонажа
///
/// `play` переключает key только если он отличается от текущего
/// (иначе повторный resolve того же состояния перезапускал бы клип).
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
pub struct ActiveAnimation {
    /// Key, который сейчас отображается (None до первого resolve)
    current: Option<String>,
    /// Последний missing key — для дедупликации диагностики
    last_missing: Option<String>,
}

impl ActiveAnimation {
    /// Текущий отображаемый key
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Переключить playback на key, если он зарегистрирован
    ///
    /// - `Ok(true)` — key отличается от текущего, playback переключён
    /// - `Ok(false)` — тот же key уже играет (no-op), либо повтор уже
    ///   зарепорченного missing key (диагностика не дублируется)
    /// - `Err(NotFound)` — key не зарегистрирован, впервые для этого
    ///   occurrence; caller репортит ровно один раз. Текущий key
    ///   сохраняется без изменений.
    pub fn play(&mut self, catalog: &AnimationCatalog, key: String) -> Result<bool, AnimationError> {
        if !catalog.contains(&key) {
            if self.last_missing.as_deref() == Some(key.as_str()) {
                return Ok(false);
            }
            self.last_missing = Some(key.clone());
            return Err(AnimationError::NotFound { key });
        }

        self.last_missing = None;

        if self.current.as_deref() == Some(key.as_str()) {
            return Ok(false);
        }

        self.current = Some(key);
        Ok(true)
    }
}

/// Event: playback переключился на новый key (ECS → presentation layer)
///
/// Host слушает и дёргает свой AnimationPlayer. Эмитится только при
/// реальной смене key, поэтому повторный resolve того же состояния не
/// перезапускает клип на стороне host.
#[derive(Event, Clone, Debug)]
pub struct AnimationSwitched {
    /// Персонаж, у которого сменилась анимация
    pub entity: Entity,
    /// Новый animation key
    pub key: String,
}

/// Резолвнуть key и переключить playback, с однократной диагностикой
///
/// Возвращает новый key если playback реально переключился (caller
/// эмитит `AnimationSwitched`). Ошибка резолва НЕ блокирует transition —
/// деградирует только визуал: репортим и оставляем прежний key.
pub fn resolve_and_play(
    anim: &mut ActiveAnimation,
    catalog: &AnimationCatalog,
    action: ActionKind,
    direction: Direction,
    variant: BodyVariant,
) -> Option<String> {
    let key = resolve_anim_key(action, direction, variant);
    match anim.play(catalog, key) {
        Ok(true) => anim.current().map(str::to_string),
        Ok(false) => None,
        Err(err) => {
            crate::log_error(&format!("🎞️ Animation resolve failed: {}", err));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> AnimationCatalog {
        AnimationCatalog::standard()
    }

    #[test]
    fn test_play_switches_once_per_key() {
        let catalog = catalog();
        let mut anim = ActiveAnimation::default();

        assert_eq!(anim.play(&catalog, "Walk_Up_NW".into()), Ok(true));
        assert_eq!(anim.current(), Some("Walk_Up_NW"));

        // Тот же key — playback не перезапускается
        assert_eq!(anim.play(&catalog, "Walk_Up_NW".into()), Ok(false));
        assert_eq!(anim.current(), Some("Walk_Up_NW"));

        // Другой key — переключаемся
        assert_eq!(anim.play(&catalog, "Idle_Up_NW".into()), Ok(true));
        assert_eq!(anim.current(), Some("Idle_Up_NW"));
    }

    #[test]
    fn test_missing_key_retains_current_and_reports_once() {
        let mut catalog = AnimationCatalog::empty();
        catalog.register("Idle_Down_NW");

        let mut anim = ActiveAnimation::default();
        assert_eq!(anim.play(&catalog, "Idle_Down_NW".into()), Ok(true));

        // Первый fail — Err (один репорт), текущий key не тронут
        assert_eq!(
            anim.play(&catalog, "Walk_Down_NW".into()),
            Err(AnimationError::NotFound {
                key: "Walk_Down_NW".to_string()
            })
        );
        assert_eq!(anim.current(), Some("Idle_Down_NW"));

        // Повтор того же missing key — диагностика не дублируется
        assert_eq!(anim.play(&catalog, "Walk_Down_NW".into()), Ok(false));
        assert_eq!(anim.current(), Some("Idle_Down_NW"));

        // Успешный resolve сбрасывает дедупликацию
        assert_eq!(anim.play(&catalog, "Idle_Down_NW".into()), Ok(false));
        assert_eq!(
            anim.play(&catalog, "Walk_Down_NW".into()),
            Err(AnimationError::NotFound {
                key: "Walk_Down_NW".to_string()
            })
        );
    }

    #[test]
    fn test_resolve_and_play_reports_switch() {
        let catalog = catalog();
        let mut anim = ActiveAnimation::default();

        let switched = resolve_and_play(
            &mut anim,
            &catalog,
            ActionKind::Roll,
            Direction::Left,
            BodyVariant::Glove,
        );
        assert_eq!(switched.as_deref(), Some("Roll_Left_G"));

        // Повтор — смены нет
        let switched = resolve_and_play(
            &mut anim,
            &catalog,
            ActionKind::Roll,
            Direction::Left,
            BodyVariant::Glove,
        );
        assert!(switched.is_none());
    }

    #[test]
    fn test_resolve_failure_keeps_state() {
        let catalog = AnimationCatalog::empty();
        let mut anim = ActiveAnimation::default();

        let switched = resolve_and_play(
            &mut anim,
            &catalog,
            ActionKind::Idle,
            Direction::Down,
            BodyVariant::NoWeapon,
        );
        assert!(switched.is_none());
        assert_eq!(anim.current(), None);
    }
}
