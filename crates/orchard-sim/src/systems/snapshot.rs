//! Snapshot system: queries the ECS world and builds a complete WorldSnapshot.
//!
//! This system is read-only and never modifies the world. Transparency
//! hints reuse the same pure overlap query the collision systems use.

use hecs::World;

use orchard_core::components::{Fruit, Projectile, ShotBudget, Target, Tint};
use orchard_core::constants::{FULL_ALPHA, OVERLAP_ALPHA};
use orchard_core::enums::RoundPhase;
use orchard_core::events::GameEvent;
use orchard_core::state::{FruitView, ProjectileView, TargetView, WorldSnapshot};
use orchard_core::types::Rect;

/// Build a complete WorldSnapshot from the current world state.
#[allow(clippy::too_many_arguments)]
pub fn build_snapshot(
    world: &World,
    tick: u64,
    phase: RoundPhase,
    winner: Option<usize>,
    ai_shooting: bool,
    fruits: &[hecs::Entity],
    targets: &[hecs::Entity],
    projectiles: &[hecs::Entity],
    events: Vec<GameEvent>,
) -> WorldSnapshot {
    let fruit_views = build_fruits(world, fruits, targets);
    let draw_order = build_draw_order(&fruit_views);

    WorldSnapshot {
        tick,
        phase,
        winner,
        ai_shooting,
        targets: build_targets(world, targets),
        projectiles: build_projectiles(world, projectiles),
        fruits: fruit_views,
        draw_order,
        events,
    }
}

/// Build FruitView list in ascending index order, with transparency hints.
fn build_fruits(
    world: &World,
    fruits: &[hecs::Entity],
    targets: &[hecs::Entity],
) -> Vec<FruitView> {
    let rects: Vec<Rect> = fruits
        .iter()
        .map(|&entity| world.get::<&Rect>(entity).map(|r| *r).unwrap_or_default())
        .collect();

    let mut views = Vec::with_capacity(fruits.len());
    for (index, &entity) in fruits.iter().enumerate() {
        let fruit = match world.get::<&Fruit>(entity) {
            Ok(fruit) => *fruit,
            Err(_) => continue,
        };
        let remaining_shots = world
            .get::<&ShotBudget>(entity)
            .map(|b| b.remaining)
            .unwrap_or_default();
        let tint = world.get::<&Tint>(entity).map(|t| *t).unwrap_or_default();

        views.push(FruitView {
            index: fruit.index,
            rect: rects[index],
            tint,
            control: fruit.control,
            remaining_shots,
            alpha: alpha_hint(world, index, &rects, targets),
        });
    }
    views
}

/// Transparency hint for the fruit at `index`: reduced while it overlaps
/// any other fruit or its own target.
fn alpha_hint(world: &World, index: usize, fruit_rects: &[Rect], targets: &[hecs::Entity]) -> f64 {
    let rect = &fruit_rects[index];

    let over_fruit = fruit_rects
        .iter()
        .enumerate()
        .any(|(other, other_rect)| other != index && rect.intersects(other_rect));

    let over_target = world
        .get::<&Rect>(targets[index])
        .map(|target_rect| rect.intersects(&target_rect))
        .unwrap_or(false);

    if over_fruit || over_target {
        OVERLAP_ALPHA
    } else {
        FULL_ALPHA
    }
}

/// Fruit indices sorted biggest first, ties by ascending index. Smaller
/// fruits draw later, on top.
fn build_draw_order(fruits: &[FruitView]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..fruits.len()).collect();
    order.sort_by(|&a, &b| {
        let area_a = fruits[a].rect.w * fruits[a].rect.h;
        let area_b = fruits[b].rect.w * fruits[b].rect.h;
        area_b
            .partial_cmp(&area_a)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.cmp(&b))
    });
    order
}

/// Build TargetView list in ascending owner order.
fn build_targets(world: &World, targets: &[hecs::Entity]) -> Vec<TargetView> {
    targets
        .iter()
        .filter_map(|&entity| {
            let target = world.get::<&Target>(entity).ok()?;
            let rect = world.get::<&Rect>(entity).ok()?;
            let tint = world.get::<&Tint>(entity).ok()?;
            Some(TargetView {
                owner: target.owner,
                rect: *rect,
                tint: *tint,
            })
        })
        .collect()
}

/// Build ProjectileView list in spawn order.
fn build_projectiles(world: &World, projectiles: &[hecs::Entity]) -> Vec<ProjectileView> {
    projectiles
        .iter()
        .filter_map(|&entity| {
            let projectile = world.get::<&Projectile>(entity).ok()?;
            let rect = world.get::<&Rect>(entity).ok()?;
            let tint = world.get::<&Tint>(entity).ok()?;
            Some(ProjectileView {
                owner: projectile.owner,
                rect: *rect,
                tint: *tint,
            })
        })
        .collect()
}
