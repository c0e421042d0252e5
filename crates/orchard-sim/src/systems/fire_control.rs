//! Fire control system: AI shot selection and projectile launch.
//!
//! AI fruits pick the nearest rival by squared center distance and hold
//! fire while one of their own projectiles still overlaps them. Human
//! fire requests arrive pre-aimed from the command queue and skip the
//! hold-fire gate.

use glam::DVec2;
use hecs::World;

use orchard_core::components::{Fruit, Projectile, ShotBudget, Tint};
use orchard_core::config::WorldConfig;
use orchard_core::enums::ControlKind;
use orchard_core::events::GameEvent;
use orchard_core::types::{Rect, Velocity};

/// Evaluate fire decisions for every fruit in ascending index order and
/// spawn the resulting projectiles.
pub fn run(
    world: &mut World,
    fruits: &[hecs::Entity],
    projectiles: &mut Vec<hecs::Entity>,
    config: &WorldConfig,
    ai_shooting: bool,
    fire_requests: &[Option<DVec2>],
    events: &mut Vec<GameEvent>,
) {
    for index in 0..fruits.len() {
        let (control, remaining, rect, tint) = match read_shooter(world, fruits[index]) {
            Some(parts) => parts,
            None => continue,
        };

        if remaining == 0 {
            continue;
        }

        let aim = match control {
            ControlKind::Ai => {
                if !ai_shooting {
                    continue;
                }
                // Hold fire while an own projectile still overlaps us.
                if own_projectile_overlaps(world, projectiles, index, &rect) {
                    continue;
                }
                match nearest_rival(world, fruits, index, &rect) {
                    Some(rival) => match world.get::<&Rect>(fruits[rival]) {
                        Ok(rival_rect) => rival_rect.center(),
                        Err(_) => continue,
                    },
                    None => continue,
                }
            }
            ControlKind::Human => match fire_requests[index] {
                Some(aim) => aim,
                None => continue,
            },
        };

        spawn_projectile(world, projectiles, index, &rect, aim, tint, config);

        let mut after = remaining;
        if let Ok(mut budget) = world.get::<&mut ShotBudget>(fruits[index]) {
            budget.remaining -= 1;
            after = budget.remaining;
        }
        events.push(GameEvent::ShotFired {
            fruit: index,
            remaining: after,
        });
    }
}

/// Nearest other fruit by squared center distance, ties to the lowest
/// index. Returns its index.
pub fn nearest_rival(
    world: &World,
    fruits: &[hecs::Entity],
    shooter: usize,
    shooter_rect: &Rect,
) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;

    for (index, &entity) in fruits.iter().enumerate() {
        if index == shooter {
            continue;
        }
        let rect = match world.get::<&Rect>(entity) {
            Ok(rect) => *rect,
            Err(_) => continue,
        };
        let dist_sq = shooter_rect.center_distance_sq(&rect);
        if best.map_or(true, |(_, d)| dist_sq < d) {
            best = Some((index, dist_sq));
        }
    }

    best.map(|(index, _)| index)
}

/// Whether any live projectile owned by `shooter` overlaps `rect`.
pub fn own_projectile_overlaps(
    world: &World,
    projectiles: &[hecs::Entity],
    shooter: usize,
    rect: &Rect,
) -> bool {
    for &entity in projectiles {
        if let Ok(projectile) = world.get::<&Projectile>(entity) {
            if projectile.owner != shooter {
                continue;
            }
        } else {
            continue;
        }
        if let Ok(proj_rect) = world.get::<&Rect>(entity) {
            if proj_rect.intersects(rect) {
                return true;
            }
        }
    }
    false
}

/// Spawn a projectile centered on the shooter, heading toward `aim` at
/// the configured speed.
fn spawn_projectile(
    world: &mut World,
    projectiles: &mut Vec<hecs::Entity>,
    owner: usize,
    shooter_rect: &Rect,
    aim: DVec2,
    tint: Tint,
    config: &WorldConfig,
) {
    let center = shooter_rect.center();
    let to_aim = aim - center;
    let velocity = if to_aim.length_squared() > f64::EPSILON {
        let v = to_aim.normalize() * config.projectile_speed;
        Velocity::new(v.x, v.y)
    } else {
        Velocity::new(0.0, config.projectile_speed) // fallback: straight down
    };

    let size = config.projectile_size;
    let rect = Rect::new(center.x - size / 2.0, center.y - size / 2.0, size, size);

    let entity = world.spawn((Projectile { owner }, rect, velocity, tint));
    projectiles.push(entity);
}

/// Read the components a fire decision needs from one fruit entity.
fn read_shooter(world: &World, entity: hecs::Entity) -> Option<(ControlKind, u32, Rect, Tint)> {
    let fruit = world.get::<&Fruit>(entity).ok()?;
    let budget = world.get::<&ShotBudget>(entity).ok()?;
    let rect = world.get::<&Rect>(entity).ok()?;
    let tint = world.get::<&Tint>(entity).ok()?;
    Some((fruit.control, budget.remaining, *rect, *tint))
}
