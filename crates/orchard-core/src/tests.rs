#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::config::{GameMode, WorldConfig};
    use crate::constants::*;
    use crate::enums::{ControlKind, RoundPhase};
    use crate::events::GameEvent;
    use crate::state::WorldSnapshot;
    use crate::types::Rect;

    /// Verify all enums round-trip through serde_json.
    #[test]
    fn test_control_kind_serde() {
        let variants = vec![ControlKind::Human, ControlKind::Ai];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: ControlKind = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_round_phase_serde() {
        let variants = vec![RoundPhase::Running, RoundPhase::Complete];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: RoundPhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    /// Verify GameMode round-trips through serde (tagged union).
    #[test]
    fn test_game_mode_serde() {
        let modes = vec![
            GameMode::PvP,
            GameMode::PvAi { ai_count: 3 },
            GameMode::AiVsAi { fruit_count: 5 },
        ];
        for mode in modes {
            let json = serde_json::to_string(&mode).unwrap();
            let back: GameMode = serde_json::from_str(&json).unwrap();
            assert_eq!(mode, back);
        }
    }

    /// Out-of-range participant counts clamp to the nearest valid bound.
    #[test]
    fn test_game_mode_normalized_clamps() {
        assert_eq!(
            GameMode::PvAi { ai_count: 0 }.normalized(),
            GameMode::PvAi { ai_count: MIN_AI_OPPONENTS }
        );
        assert_eq!(
            GameMode::PvAi { ai_count: 9 }.normalized(),
            GameMode::PvAi { ai_count: MAX_AI_OPPONENTS }
        );
        assert_eq!(
            GameMode::AiVsAi { fruit_count: 0 }.normalized(),
            GameMode::AiVsAi {
                fruit_count: MIN_EXHIBITION_FRUITS
            }
        );
        assert_eq!(
            GameMode::AiVsAi { fruit_count: 99 }.normalized(),
            GameMode::AiVsAi {
                fruit_count: MAX_EXHIBITION_FRUITS
            }
        );
        // In-range counts pass through untouched.
        assert_eq!(
            GameMode::PvAi { ai_count: 2 }.normalized(),
            GameMode::PvAi { ai_count: 2 }
        );
    }

    #[test]
    fn test_game_mode_fruit_count() {
        assert_eq!(GameMode::PvP.fruit_count(), 2);
        assert_eq!(GameMode::PvAi { ai_count: 4 }.fruit_count(), 5);
        assert_eq!(GameMode::AiVsAi { fruit_count: 3 }.fruit_count(), 3);
        // Counts are normalized before use.
        assert_eq!(GameMode::AiVsAi { fruit_count: 99 }.fruit_count(), 5);
    }

    #[test]
    fn test_game_mode_control_kinds() {
        assert_eq!(GameMode::PvP.control_kind(0), ControlKind::Human);
        assert_eq!(GameMode::PvP.control_kind(1), ControlKind::Human);

        let pvai = GameMode::PvAi { ai_count: 2 };
        assert_eq!(pvai.control_kind(0), ControlKind::Human);
        assert_eq!(pvai.control_kind(1), ControlKind::Ai);
        assert_eq!(pvai.control_kind(2), ControlKind::Ai);

        let exhibition = GameMode::AiVsAi { fruit_count: 2 };
        assert_eq!(exhibition.control_kind(0), ControlKind::Ai);
        assert_eq!(exhibition.control_kind(1), ControlKind::Ai);
    }

    /// Verify PlayerCommand round-trips through serde (tagged union).
    #[test]
    fn test_player_command_serde() {
        let commands = vec![
            PlayerCommand::Steer {
                fruit: 0,
                dx: -1.0,
                dy: 1.0,
            },
            PlayerCommand::Recenter { fruit: 1 },
            PlayerCommand::Fire {
                fruit: 0,
                aim_x: 400.0,
                aim_y: 300.0,
            },
            PlayerCommand::ToggleAiShooting,
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: PlayerCommand = serde_json::from_str(&json).unwrap();
            // Compare JSON representations since PlayerCommand doesn't derive PartialEq
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    /// Verify GameEvent round-trips through serde.
    #[test]
    fn test_game_event_serde() {
        let events = vec![
            GameEvent::TargetConsumed { fruit: 2 },
            GameEvent::ShotFired {
                fruit: 0,
                remaining: 4,
            },
            GameEvent::FruitHit { fruit: 1, owner: 0 },
            GameEvent::RoundWon { fruit: 3 },
        ];
        for event in &events {
            let json = serde_json::to_string(event).unwrap();
            let back: GameEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    /// Verify WorldSnapshot can be serialized to JSON.
    #[test]
    fn test_snapshot_serde() {
        let snapshot = WorldSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: WorldSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.tick, back.tick);
        assert_eq!(snapshot.phase, back.phase);
        // Verify the default snapshot is reasonably small
        assert!(
            json.len() < 512,
            "Empty snapshot should be <512B, was {} bytes",
            json.len()
        );
    }

    /// Verify Rect geometry.
    #[test]
    fn test_rect_center() {
        let r = Rect::new(10.0, 20.0, 50.0, 30.0);
        let c = r.center();
        assert_eq!(c.x, 35.0);
        assert_eq!(c.y, 35.0);
    }

    #[test]
    fn test_rect_center_distance_sq() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(3.0, 4.0, 10.0, 10.0);
        assert!((a.center_distance_sq(&b) - 25.0).abs() < 1e-10);
    }

    #[test]
    fn test_rect_intersects() {
        let a = Rect::new(0.0, 0.0, 50.0, 50.0);
        let overlapping = Rect::new(25.0, 25.0, 50.0, 50.0);
        let touching = Rect::new(50.0, 0.0, 50.0, 50.0);
        let disjoint = Rect::new(100.0, 100.0, 50.0, 50.0);

        assert!(a.intersects(&overlapping));
        assert!(overlapping.intersects(&a));
        // Shared edges are not an intersection.
        assert!(!a.intersects(&touching));
        assert!(!a.intersects(&disjoint));
    }

    #[test]
    fn test_rect_contains() {
        let arena = Rect::new(0.0, 0.0, 800.0, 600.0);
        let inside = Rect::new(10.0, 10.0, 50.0, 50.0);
        let flush = Rect::new(750.0, 550.0, 50.0, 50.0);
        let straddling = Rect::new(-1.0, 10.0, 50.0, 50.0);
        let outside = Rect::new(900.0, 10.0, 50.0, 50.0);

        assert!(arena.contains(&inside));
        assert!(arena.contains(&flush));
        assert!(!arena.contains(&straddling));
        assert!(!arena.contains(&outside));
    }

    /// Clamping an in-bounds rectangle is a no-op.
    #[test]
    fn test_clamp_idempotent_in_bounds() {
        let mut r = Rect::new(100.0, 200.0, 50.0, 50.0);
        let before = r;
        r.clamp_within(800.0, 600.0);
        assert_eq!(r, before);
    }

    #[test]
    fn test_clamp_pulls_back_in_bounds() {
        let mut r = Rect::new(-20.0, 590.0, 50.0, 50.0);
        r.clamp_within(800.0, 600.0);
        assert_eq!(r.x, 0.0);
        assert_eq!(r.y, 550.0);
    }

    /// A rectangle at least as large as the arena pins its position to 0.
    #[test]
    fn test_clamp_oversized_pins_origin() {
        let mut r = Rect::new(37.0, -12.0, 800.0, 900.0);
        r.clamp_within(800.0, 600.0);
        assert_eq!(r.x, 0.0);
        assert_eq!(r.y, 0.0);
    }

    /// Verify WorldConfig defaults and per-mode shrink selection.
    #[test]
    fn test_world_config_defaults() {
        let config = WorldConfig::default();
        assert_eq!(config.arena_width, ARENA_WIDTH);
        assert_eq!(config.arena_height, ARENA_HEIGHT);
        assert_eq!(config.shrink_amount, SHRINK_AMOUNT_VERSUS);
        assert!(config.min_fruit_size > 0.0);
        assert!(config.tax_rate >= 0.0 && config.tax_rate < 1.0);
    }

    #[test]
    fn test_world_config_for_mode() {
        let versus = WorldConfig::for_mode(GameMode::PvAi { ai_count: 2 });
        assert_eq!(versus.shrink_amount, SHRINK_AMOUNT_VERSUS);

        let exhibition = WorldConfig::for_mode(GameMode::AiVsAi { fruit_count: 3 });
        assert_eq!(exhibition.shrink_amount, SHRINK_AMOUNT_EXHIBITION);
    }

    /// The palette covers the largest possible round.
    #[test]
    fn test_palette_covers_max_round() {
        let biggest = GameMode::AiVsAi {
            fruit_count: MAX_EXHIBITION_FRUITS,
        };
        assert!(PALETTE.len() >= biggest.fruit_count());
    }
}
