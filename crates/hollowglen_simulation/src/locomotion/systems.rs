//! Locomotion systems: transition evaluation (frame tick) + velocity
//! application (fixed tick)
//!
//! # Tick split
//!
//! - `Update` — input edges, приоритетные transition rules, animation
//!   selection ("decide")
//! - `FixedUpdate` — velocity computation + интеграция в Transform
//!   ("integrate")
//!
//! Внутри одного tick: transition evaluation полностью завершается до
//! подсчёта velocity; animation key резолвится только на входе в
//! состояние, не каждый tick.

use bevy::prelude::*;

use crate::animation::{resolve_and_play, ActiveAnimation, AnimationCatalog, AnimationSwitched};
use crate::components::{
    ActionKind, ActionState, BodyVariant, Character, ControlInput, Facing, MotionTunables,
    PhysicsBody,
};

use super::velocity::compute_velocity;

/// Продвинуть action state machine персонажа на один frame tick
///
/// Правила в приоритетном порядке:
/// 1. Blocking держится пока block input держится (level); остальные
///    триггеры игнорируются; на release — обычная локомоция
/// 2. Вход в Blocking (edge; только ShieldSword; только из Idle/Walking)
/// 3. Обычная локомоция: facing update + Idle/Walking resolve
/// 4. Вход в Rolling (edge) — захват facing, старт countdown
/// 5. Вход в Attacking (edge) — старт countdown
///
/// Timed actions продвигают свой countdown здесь же; на экспирации
/// состояние падает в правило 3 с movement vector текущего tick. Новые
/// триггеры оцениваются со следующего tick.
///
/// Возвращает новый animation key, если playback переключился (caller
/// эмитит `AnimationSwitched`).
pub fn advance_action_state(
    input: &ControlInput,
    variant: BodyVariant,
    tunables: &MotionTunables,
    state: &mut ActionState,
    facing: &mut Facing,
    anim: &mut ActiveAnimation,
    catalog: &AnimationCatalog,
    delta: f32,
) -> Option<String> {
    match state {
        // Правило 1: блок — level-tested удержание
        ActionState::Blocking => {
            if input.block_is_held() {
                return None;
            }
            crate::log("🛡️ Block released");
            return resolve_locomotion(input, variant, state, facing, anim, catalog);
        }

        ActionState::Rolling { timer, .. } => {
            *timer -= delta;
            if *timer > 0.0 {
                return None;
            }
            crate::log("✅ Roll complete");
            return resolve_locomotion(input, variant, state, facing, anim, catalog);
        }

        ActionState::Attacking { timer } => {
            *timer -= delta;
            if *timer > 0.0 {
                return None;
            }
            crate::log("✅ Attack complete");
            return resolve_locomotion(input, variant, state, facing, anim, catalog);
        }

        ActionState::Idle | ActionState::Walking => {}
    }

    // Правило 2: вход в блок
    if variant.can_block() && input.block_just_pressed() {
        *state = ActionState::Blocking;
        crate::log(&format!("🛡️ Block started (facing: {:?})", facing.cardinal()));
        return resolve_and_play(anim, catalog, ActionKind::Block, facing.cardinal(), variant);
    }

    // Правило 3: обычная локомоция
    let mut switched = resolve_locomotion(input, variant, state, facing, anim, catalog);

    // Правило 4: перекат — направление захватывается ДО входа и дальше
    // используется verbatim, live input на него не влияет
    if input.roll_just_pressed() {
        *state = ActionState::Rolling {
            timer: tunables.roll_duration,
            direction: facing.last_direction,
        };
        crate::log(&format!(
            "🌀 Roll started (dir: {:?}, {:.2}s)",
            facing.cardinal(),
            tunables.roll_duration
        ));
        switched = resolve_and_play(anim, catalog, ActionKind::Roll, facing.cardinal(), variant)
            .or(switched);
    }
    // Правило 5: атака (else — за один tick стартует максимум одно действие)
    else if input.attack_just_pressed() {
        *state = ActionState::Attacking {
            timer: tunables.attack_duration,
        };
        crate::log(&format!(
            "⚔️ Attack started (facing: {:?}, {:.2}s)",
            facing.cardinal(),
            tunables.attack_duration
        ));
        switched = resolve_and_play(anim, catalog, ActionKind::Attack, facing.cardinal(), variant)
            .or(switched);
    }

    switched
}

/// Правило 3: обновить facing и резолвнуть Idle/Walking
///
/// Facing обновляется только здесь — то есть только из Idle/Walking
/// (на время timed action он заморожен).
fn resolve_locomotion(
    input: &ControlInput,
    variant: BodyVariant,
    state: &mut ActionState,
    facing: &mut Facing,
    anim: &mut ActiveAnimation,
    catalog: &AnimationCatalog,
) -> Option<String> {
    if input.is_moving() {
        facing.track(input.move_axis);
        *state = ActionState::Walking;
        resolve_and_play(anim, catalog, ActionKind::Walk, facing.cardinal(), variant)
    } else {
        *state = ActionState::Idle;
        resolve_and_play(anim, catalog, ActionKind::Idle, facing.cardinal(), variant)
    }
}

/// Система: transition evaluation для всех персонажей (frame tick)
///
/// Стоит ПЕРЕД `latch_input_edges` в Update chain — edge detection должен
/// видеть ещё не защёлкнутое состояние кнопок.
pub fn evaluate_action_transitions(
    mut query: Query<(
        Entity,
        &ControlInput,
        &BodyVariant,
        &MotionTunables,
        &mut ActionState,
        &mut Facing,
        &mut ActiveAnimation,
    )>,
    catalog: Res<AnimationCatalog>,
    time: Res<Time>,
    mut switched_events: EventWriter<AnimationSwitched>,
) {
    let delta = time.delta_secs();

    for (entity, input, variant, tunables, mut state, mut facing, mut anim) in query.iter_mut() {
        let switched = advance_action_state(
            input,
            *variant,
            tunables,
            &mut state,
            &mut facing,
            &mut anim,
            &catalog,
            delta,
        );

        if let Some(key) = switched {
            switched_events.write(AnimationSwitched { entity, key });
        }
    }
}

/// Система: применить velocity к physics body (fixed tick)
///
/// Velocity переписывается каждый fixed tick из текущего состояния —
/// в том числе для Rolling (re-assert захваченного направления, см.
/// DESIGN.md про rolling velocity).
pub fn apply_locomotion_velocity(
    mut query: Query<(&ActionState, &ControlInput, &MotionTunables, &mut PhysicsBody)>,
) {
    for (state, input, tunables, mut body) in query.iter_mut() {
        body.velocity = compute_velocity(state, input.move_axis, tunables);
    }
}

/// Система: интеграция velocity → Transform (fixed tick)
///
/// Напрямую применяет PhysicsBody.velocity к Transform.translation;
/// collision response — ответственность host physics layer.
pub fn integrate_velocity_to_transform(
    mut query: Query<(&PhysicsBody, &mut Transform), With<Character>>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (body, mut transform) in query.iter_mut() {
        transform.translation += (body.velocity * delta).extend(0.0);
    }
}
