//! Headless демо HOLLOWGLEN
//!
//! Запускает Bevy App без рендера и гоняет одного персонажа по
//! скриптованному input: ходьба → перекат → атака → блок.

use std::thread;
use std::time::Duration;

use bevy::prelude::*;
use hollowglen_simulation::{
    create_headless_app, ActionState, ActiveAnimation, BodyVariant, Character, CharacterRegistry,
    ControlInput, Player,
};

fn main() {
    println!("Starting HOLLOWGLEN headless simulation");

    let mut app = create_headless_app();

    // Спавним персонажа со щитом и мечом (полный набор действий)
    let entity = {
        let world = app.world_mut();
        let entity = world
            .spawn((Character, Player, BodyVariant::ShieldSword, Transform::default()))
            .id();
        world.resource_mut::<CharacterRegistry>().register(entity);
        entity
    };

    // Скриптованный input по тикам
    for tick in 0u32..240 {
        {
            let world = app.world_mut();
            let mut input = world.get_mut::<ControlInput>(entity).unwrap();

            if tick < 60 {
                // Идём вправо
                input.set_move_axis(Vec2::X);
            } else if tick == 60 {
                // Перекат (edge)
                input.roll_held = true;
            } else if tick < 120 {
                input.roll_held = false;
                input.set_move_axis(Vec2::ZERO);
            } else if tick == 120 {
                // Атака (edge)
                input.attack_held = true;
            } else if tick < 180 {
                input.attack_held = false;
            } else {
                // Блок (держим до конца)
                input.block_held = true;
            }
        }

        app.update();

        // Frame pacing ~60 FPS: таймеры действий идут от реального delta
        thread::sleep(Duration::from_millis(16));

        if tick % 30 == 0 {
            let world = app.world();
            let state = world.get::<ActionState>(entity).unwrap();
            let anim = world.get::<ActiveAnimation>(entity).unwrap();
            let transform = world.get::<Transform>(entity).unwrap();
            println!(
                "Tick {}: state {:?}, anim {:?}, pos ({:.2}, {:.2})",
                tick,
                state,
                anim.current(),
                transform.translation.x,
                transform.translation.y
            );
        }
    }

    println!("Simulation complete!");
}
