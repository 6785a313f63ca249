//! Animation key resolver: (action, direction, variant) → key string
//!
//! Key формат: `Action_Direction_Suffix`, например `Walk_Up_NW`,
//! `Attack_Left_SS`. Чистая функция; валидация против зарегистрированного
//! набора — в `AnimationCatalog`.

use crate::components::{ActionKind, BodyVariant};
use crate::locomotion::Direction;

/// Собрать animation key из токенов
pub fn resolve_anim_key(action: ActionKind, direction: Direction, variant: BodyVariant) -> String {
    format!(
        "{}_{}_{}",
        action.token(),
        direction.token(),
        variant.suffix()
    )
}
