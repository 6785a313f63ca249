//! Animation domain — key resolution и playback selection
//!
//! ECS ответственность:
//! - Resolve animation key из (action, direction, body variant)
//! - Валидация против зарегистрированного набора (AnimationCatalog)
//! - Same-key guard (не перезапускать клип при повторном resolve)
//! - `AnimationSwitched` events для presentation layer
//!
//! Host ответственность:
//! - Собственно playback клипов (AnimationPlayer на стороне рендера)
//! - Регистрация существующих клипов в catalog при старте

pub mod catalog;
pub mod keys;
pub mod playback;

// Re-export основных типов
pub use catalog::{AnimationCatalog, AnimationError};
pub use keys::resolve_anim_key;
pub use playback::{resolve_and_play, ActiveAnimation, AnimationSwitched};

use bevy::prelude::*;

/// Animation Plugin
///
/// Регистрирует полный standard catalog (host может заменить resource
/// своим набором до первого tick) и `AnimationSwitched` event.
pub struct AnimationPlugin;

impl Plugin for AnimationPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(AnimationCatalog::standard())
            .add_event::<AnimationSwitched>();
    }
}
