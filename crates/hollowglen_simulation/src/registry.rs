//! Character registry: явная регистрация контроллеров
//!
//! Вместо process-wide singleton (global instance pointer) — resource со
//! списком заспавненных персонажей, передаваемый по ссылке системам,
//! которым он нужен.

use bevy::prelude::*;

use crate::components::{BodyVariant, Character, MotionTunables};

/// Registry заспавненных персонажей
///
/// Порядок регистрации сохраняется (детерминированные обходы).
#[derive(Resource, Debug, Clone, Default)]
pub struct CharacterRegistry {
    characters: Vec<Entity>,
}

impl CharacterRegistry {
    /// Зарегистрировать персонажа (повторная регистрация — no-op)
    pub fn register(&mut self, entity: Entity) {
        if !self.contains(entity) {
            self.characters.push(entity);
        }
    }

    /// Убрать персонажа из registry (despawn)
    pub fn unregister(&mut self, entity: Entity) {
        self.characters.retain(|e| *e != entity);
    }

    /// Зарегистрирован ли персонаж
    pub fn contains(&self, entity: Entity) -> bool {
        self.characters.contains(&entity)
    }

    /// Обход персонажей в порядке регистрации
    pub fn iter(&self) -> impl Iterator<Item = Entity> + '_ {
        self.characters.iter().copied()
    }

    /// Количество персонажей
    pub fn len(&self) -> usize {
        self.characters.len()
    }

    /// Пустой ли registry
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }
}

/// Spawn helper: персонаж с полным locomotion набором
///
/// `Character` добирает остальные компоненты (ControlInput, ActionState,
/// Facing, ActiveAnimation, PhysicsBody) через Required Components.
pub fn spawn_character(
    commands: &mut Commands,
    registry: &mut CharacterRegistry,
    variant: BodyVariant,
    tunables: MotionTunables,
    position: Vec2,
) -> Entity {
    let entity = commands
        .spawn((
            Character,
            variant,
            tunables,
            Transform::from_translation(position.extend(0.0)),
        ))
        .id();

    registry.register(entity);

    crate::log(&format!(
        "🧍 Character spawned (entity: {:?}, variant: {:?})",
        entity, variant
    ));

    entity
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{ActionState, ControlInput, Facing};

    #[test]
    fn test_spawn_character_assembles_full_set() {
        let mut world = World::new();
        let mut registry = CharacterRegistry::default();

        let entity = {
            let mut commands = world.commands();
            spawn_character(
                &mut commands,
                &mut registry,
                BodyVariant::ShieldSword,
                MotionTunables::default(),
                Vec2::new(2.0, -1.0),
            )
        };
        world.flush();

        assert!(registry.contains(entity));

        // Required Components добрали весь locomotion набор
        assert!(world.get::<ActionState>(entity).is_some());
        assert!(world.get::<ControlInput>(entity).is_some());
        assert!(world.get::<Facing>(entity).is_some());
        assert_eq!(
            *world.get::<BodyVariant>(entity).unwrap(),
            BodyVariant::ShieldSword
        );

        let transform = world.get::<Transform>(entity).unwrap();
        assert_eq!(transform.translation, Vec3::new(2.0, -1.0, 0.0));
    }

    #[test]
    fn test_register_unregister() {
        let mut world = World::new();
        let a = world.spawn_empty().id();
        let b = world.spawn_empty().id();

        let mut registry = CharacterRegistry::default();
        assert!(registry.is_empty());

        registry.register(a);
        registry.register(b);
        assert_eq!(registry.len(), 2);
        assert!(registry.contains(a));

        // Повторная регистрация не дублирует
        registry.register(a);
        assert_eq!(registry.len(), 2);

        registry.unregister(a);
        assert!(!registry.contains(a));
        assert!(registry.contains(b));
    }

    #[test]
    fn test_iteration_order_is_registration_order() {
        let mut world = World::new();
        let entities: Vec<Entity> = (0..3).map(|_| world.spawn_empty().id()).collect();

        let mut registry = CharacterRegistry::default();
        for e in &entities {
            registry.register(*e);
        }

        let collected: Vec<Entity> = registry.iter().collect();
        assert_eq!(collected, entities);
    }
}
