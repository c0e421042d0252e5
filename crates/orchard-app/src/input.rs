//! Input collaborator. The engine never reads devices directly; the
//! runner samples this trait once at the start of each tick and queues
//! the resulting commands.

use orchard_core::commands::PlayerCommand;
use orchard_core::enums::ControlKind;

/// Movement actions that can be held down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveAction {
    Up,
    Down,
    Left,
    Right,
}

/// Per-tick, non-blocking input state.
///
/// Held queries report the current state; press-edge queries report a
/// press at most once per physical press.
pub trait InputSource {
    fn is_held(&mut self, fruit: usize, action: MoveAction) -> bool;
    /// Pointer position in arena coordinates, used for aiming.
    fn pointer(&mut self) -> (f64, f64);
    fn fire_pressed(&mut self, fruit: usize) -> bool;
    fn recenter_pressed(&mut self, fruit: usize) -> bool;
    fn toggle_ai_shooting_pressed(&mut self) -> bool;
    fn quit_requested(&mut self) -> bool;
}

/// An input source with nothing attached. Exhibition and screensaver
/// rounds run on it.
pub struct NullInput;

impl InputSource for NullInput {
    fn is_held(&mut self, _fruit: usize, _action: MoveAction) -> bool {
        false
    }

    fn pointer(&mut self) -> (f64, f64) {
        (0.0, 0.0)
    }

    fn fire_pressed(&mut self, _fruit: usize) -> bool {
        false
    }

    fn recenter_pressed(&mut self, _fruit: usize) -> bool {
        false
    }

    fn toggle_ai_shooting_pressed(&mut self) -> bool {
        false
    }

    fn quit_requested(&mut self) -> bool {
        false
    }
}

/// Translate this tick's input state into engine commands for every
/// human fruit.
pub fn collect_commands<I>(input: &mut I, controls: &[ControlKind]) -> Vec<PlayerCommand>
where
    I: InputSource + ?Sized,
{
    let mut commands = Vec::new();

    for (fruit, control) in controls.iter().enumerate() {
        if *control != ControlKind::Human {
            continue;
        }

        let dx = axis(input.is_held(fruit, MoveAction::Right))
            - axis(input.is_held(fruit, MoveAction::Left));
        let dy = axis(input.is_held(fruit, MoveAction::Down))
            - axis(input.is_held(fruit, MoveAction::Up));
        if dx != 0.0 || dy != 0.0 {
            commands.push(PlayerCommand::Steer { fruit, dx, dy });
        }

        if input.recenter_pressed(fruit) {
            commands.push(PlayerCommand::Recenter { fruit });
        }

        if input.fire_pressed(fruit) {
            let (aim_x, aim_y) = input.pointer();
            commands.push(PlayerCommand::Fire { fruit, aim_x, aim_y });
        }
    }

    if input.toggle_ai_shooting_pressed() {
        commands.push(PlayerCommand::ToggleAiShooting);
    }

    commands
}

fn axis(held: bool) -> f64 {
    if held {
        1.0
    } else {
        0.0
    }
}
