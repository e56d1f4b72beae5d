#[cfg(test)]
mod tests {
    use crate::commands::SquadCommand;
    use crate::components::Health;
    use crate::config::{ConfigError, SimConfig, VariantTable};
    use crate::effects::{Effect, EffectKind};
    use crate::enums::*;
    use crate::state::SimSnapshot;
    use crate::types::{vec2, Rect, SimTime};

    /// Verify all enums round-trip through serde_json.
    #[test]
    fn test_squad_mode_serde() {
        let variants = vec![SquadMode::Follow, SquadMode::Hold, SquadMode::Overwatch];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: SquadMode = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_zombie_variant_serde() {
        let variants = vec![
            ZombieVariant::Basic,
            ZombieVariant::Fast,
            ZombieVariant::Tank,
            ZombieVariant::Spitter,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: ZombieVariant = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    #[test]
    fn test_mission_status_serde() {
        let variants = vec![
            MissionStatus::Active,
            MissionStatus::Won,
            MissionStatus::Lost,
        ];
        for v in variants {
            let json = serde_json::to_string(&v).unwrap();
            let back: MissionStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
        }
    }

    /// Verify SquadCommand round-trips through serde (tagged union).
    #[test]
    fn test_squad_command_serde() {
        let commands = vec![
            SquadCommand::MoveOrder {
                position: vec2(320.0, 480.0),
            },
            SquadCommand::SetMode {
                mode: SquadMode::Overwatch,
            },
            SquadCommand::SetSprint { sprinting: true },
            SquadCommand::ReloadAll,
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: SquadCommand = serde_json::from_str(&json).unwrap();
            // Compare JSON representations since SquadCommand doesn't derive PartialEq
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
    }

    /// Verify Effect round-trips through serde.
    #[test]
    fn test_effect_serde() {
        let effects = vec![
            Effect::new(
                EffectKind::BulletTrail {
                    from: vec2(0.0, 0.0),
                    to: vec2(100.0, 50.0),
                },
                100.0,
            ),
            Effect::new(EffectKind::AttackFlash { at: vec2(5.0, 5.0) }, 200.0),
            Effect::new(
                EffectKind::AcidSpit {
                    from: vec2(1.0, 2.0),
                    to: vec2(3.0, 4.0),
                },
                300.0,
            ),
            Effect::new(EffectKind::Transformation { at: vec2(9.0, 9.0) }, 500.0),
        ];
        for effect in &effects {
            let json = serde_json::to_string(effect).unwrap();
            let _back: Effect = serde_json::from_str(&json).unwrap();
        }
    }

    #[test]
    fn test_effect_progress_clamps() {
        let mut effect = Effect::new(EffectKind::AttackFlash { at: vec2(0.0, 0.0) }, 200.0);
        assert_eq!(effect.progress(), 0.0);
        effect.elapsed_ms = 100.0;
        assert!((effect.progress() - 0.5).abs() < 1e-10);
        effect.elapsed_ms = 450.0;
        assert_eq!(effect.progress(), 1.0);
    }

    /// Verify SimSnapshot can be serialized to JSON.
    #[test]
    fn test_snapshot_serde() {
        let snapshot = SimSnapshot::default();
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: SimSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot.time.frame, back.time.frame);
        assert_eq!(snapshot.status, back.status);
        assert!(
            json.len() < 1024,
            "Empty snapshot should be <1KB, was {} bytes",
            json.len()
        );
    }

    #[test]
    fn test_config_serde_and_default_valid() {
        let config = SimConfig::default();
        config.validate().expect("default config must validate");

        let json = serde_json::to_string(&config).unwrap();
        let back: SimConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config.seed, back.seed);
        assert_eq!(config.world.barriers.len(), back.world.barriers.len());
        assert_eq!(config.squad.members.len(), back.squad.members.len());
    }

    #[test]
    fn test_config_rejects_empty_squad() {
        let mut config = SimConfig::default();
        config.squad.members.clear();
        assert!(matches!(config.validate(), Err(ConfigError::EmptySquad)));
    }

    #[test]
    fn test_config_rejects_degenerate_world() {
        let mut config = SimConfig::default();
        config.world.width = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DegenerateWorld { .. })
        ));

        let mut config = SimConfig::default();
        config.world.height = f64::NAN;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DegenerateWorld { .. })
        ));
    }

    #[test]
    fn test_config_rejects_zero_magazine() {
        let mut config = SimConfig::default();
        config.weapon.magazine_capacity = 0;
        assert!(matches!(config.validate(), Err(ConfigError::ZeroMagazine)));
    }

    #[test]
    fn test_config_rejects_bad_spawn_weights() {
        let mut config = SimConfig::default();
        config.variants.spawn_weights = [0.0, 0.0, 0.0, 0.0];
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidSpawnWeights)
        ));

        let mut config = SimConfig::default();
        config.variants.spawn_weights[2] = -1.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidSpawnWeights)
        ));
    }

    /// The variant table fixes each profile at its documented row.
    #[test]
    fn test_variant_table_rows() {
        let table = VariantTable::default();

        let basic = table.stats(ZombieVariant::Basic);
        assert_eq!(basic.max_health, 60);
        assert_eq!(basic.attack_damage, 15);
        assert!((basic.infection_chance - 0.3).abs() < 1e-10);

        let fast = table.stats(ZombieVariant::Fast);
        assert_eq!(fast.max_health, 40);
        assert!((fast.speed - 80.0).abs() < 1e-10);
        assert!((fast.scan_interval_ms - 300.0).abs() < 1e-10);

        let tank = table.stats(ZombieVariant::Tank);
        assert_eq!(tank.max_health, 150);
        assert!((tank.speed - 25.0).abs() < 1e-10);
        assert!((tank.scan_interval_ms - 700.0).abs() < 1e-10);

        // Spitter is the only variant with reach beyond melee contact.
        let spitter = table.stats(ZombieVariant::Spitter);
        assert!((spitter.attack_range - 80.0).abs() < 1e-10);
        assert!((spitter.infection_chance - 0.6).abs() < 1e-10);
        for v in [ZombieVariant::Basic, ZombieVariant::Fast, ZombieVariant::Tank] {
            assert!((table.stats(v).attack_range - 20.0).abs() < 1e-10);
        }
    }

    /// Verify Rect geometry.
    #[test]
    fn test_rect_overlaps_circle() {
        let rect = Rect::new(100.0, 100.0, 50.0, 20.0);

        assert!(rect.overlaps_circle(vec2(125.0, 110.0), 1.0));
        assert!(rect.overlaps_circle(vec2(95.0, 110.0), 6.0));
        assert!(!rect.overlaps_circle(vec2(90.0, 110.0), 6.0));
        assert!(!rect.overlaps_circle(vec2(125.0, 200.0), 10.0));
    }

    #[test]
    fn test_rect_center_and_contains() {
        let rect = Rect::new(0.0, 0.0, 10.0, 4.0);
        let center = rect.center();
        assert!((center.x - 5.0).abs() < 1e-10);
        assert!((center.y - 2.0).abs() < 1e-10);
        assert!(rect.contains(vec2(5.0, 2.0)));
        assert!(!rect.contains(vec2(11.0, 2.0)));
    }

    /// Verify SimTime advancement.
    #[test]
    fn test_sim_time_advance() {
        let mut time = SimTime::default();
        assert_eq!(time.frame, 0);
        assert_eq!(time.elapsed_ms, 0.0);

        for _ in 0..60 {
            time.advance(16.0);
        }
        assert_eq!(time.frame, 60);
        assert!((time.elapsed_ms - 960.0).abs() < 1e-9);
    }

    #[test]
    fn test_health_accessors() {
        let mut health = Health::full(100);
        assert!(health.alive());
        assert!((health.fraction() - 1.0).abs() < 1e-10);

        health.current = 25;
        assert!((health.fraction() - 0.25).abs() < 1e-10);

        health.current = 0;
        assert!(!health.alive());
    }
}
