//! HOLLOWGLEN Simulation Core
//!
//! Tick-driven locomotion контроллер персонажа: ECS-симуляция на Bevy 0.16,
//! headless (рендер и playback анимаций — на стороне host layer).
//!
//! Архитектура:
//! - Update (frame tick) = "decide": input edges, action state machine,
//!   animation selection
//! - FixedUpdate (fixed tick, 60Hz) = "integrate": velocity → physics body
//!   → Transform

use bevy::prelude::*;

// Публичные модули
pub mod animation;
pub mod components;
pub mod locomotion;
pub mod registry;

// Re-export базовых типов для удобства
pub use animation::{
    resolve_and_play, resolve_anim_key, ActiveAnimation, AnimationCatalog, AnimationError,
    AnimationPlugin, AnimationSwitched,
};
pub use components::*;
pub use locomotion::{
    advance_action_state, compute_velocity, Direction, LocomotionPlugin,
};
pub use registry::{spawn_character, CharacterRegistry};

/// Главный plugin симуляции (объединяет все подсистемы)
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app
            // Fixed timestep 60Hz для velocity application (легче считать интервалы)
            .insert_resource(Time::<Fixed>::from_hz(60.0))
            // Явный registry вместо global singleton
            .init_resource::<CharacterRegistry>()
            // Подсистемы
            .add_plugins((AnimationPlugin, LocomotionPlugin));
    }
}

/// Создаёт minimal Bevy App для headless симуляции
pub fn create_headless_app() -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins).add_plugins(SimulationPlugin);

    app
}

use once_cell::sync::Lazy;
use std::sync::Mutex;

// Потокобезопасный глобальный logger (host подключает свой printer)
static LOGGER: Lazy<Mutex<Option<Box<dyn LogPrinter>>>> = Lazy::new(|| Mutex::new(None));

static LOGGER_LEVEL: Lazy<Mutex<LogLevel>> = Lazy::new(|| Mutex::new(LogLevel::Debug));

pub fn set_logger(logger: Box<dyn LogPrinter>) {
    *LOGGER.lock().unwrap() = Some(logger);
}

pub fn set_log_level(level: LogLevel) {
    *LOGGER_LEVEL.lock().unwrap() = level;
}

pub fn set_logger_if_needed(logger: Box<dyn LogPrinter>) {
    if LOGGER.lock().unwrap().is_none() {
        set_logger(logger);
    }
}

/// Уровень диагностики
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
        }
    }
}

/// Printer, который host подключает под свою платформу
pub trait LogPrinter: Send + Sync {
    fn log(&self, level: LogLevel, message: &str);
}

pub fn log(message: &str) {
    log_with_level(LogLevel::Debug, message);
}

pub fn log_info(message: &str) {
    log_with_level(LogLevel::Info, message);
}

pub fn log_warning(message: &str) {
    log_with_level(LogLevel::Warning, message);
}

pub fn log_error(message: &str) {
    log_with_level(LogLevel::Error, message);
}

pub fn log_with_level(level: LogLevel, message: &str) {
    // Сообщения ниже выставленного уровня отбрасываем
    if level < *LOGGER_LEVEL.lock().unwrap() {
        return;
    }

    // Лочим mutex, достаём logger, вызываем log (timestamp добавляем здесь)
    if let Some(logger) = LOGGER.lock().unwrap().as_ref() {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        logger.log(level, &format!("[{}] {}", timestamp, message));
    }
}

struct ConsoleLogger;

impl LogPrinter for ConsoleLogger {
    fn log(&self, level: LogLevel, message: &str) {
        println!("[{}] {}", level.as_str(), message);
    }
}

pub fn init_logger() {
    set_logger_if_needed(Box::new(ConsoleLogger));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warning);
        assert!(LogLevel::Warning < LogLevel::Error);
    }
}
