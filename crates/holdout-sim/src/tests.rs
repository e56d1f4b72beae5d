//! Tests for the simulation engine: world setup, commands, combat, infection,
//! spawning escalation, and terminal conditions.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use holdout_core::commands::SquadCommand;
use holdout_core::components::{Health, Soldier, Weapon, Zombie};
use holdout_core::config::SimConfig;
use holdout_core::constants::*;
use holdout_core::effects::EffectKind;
use holdout_core::enums::{MissionStatus, SquadMode, ZombieVariant};
use holdout_core::types::vec2;

use crate::engine::SimulationEngine;
use crate::objectives::ObjectiveState;
use crate::systems::spawner::{self, SpawnDirector};

/// Fixed step used throughout: ~60 Hz.
const DT: f64 = 16.0;

fn run_steps(engine: &mut SimulationEngine, steps: usize) {
    for _ in 0..steps {
        let _ = engine.step(DT);
    }
}

/// Config with the horde disabled: no initial adversaries, no spawning.
fn quiet_config() -> SimConfig {
    let mut config = SimConfig::default();
    config.spawner.initial_count = 0;
    config.spawner.max_alive = 0;
    config
}

// ---- Determinism ----

#[test]
fn test_determinism_same_seed() {
    let mut config = SimConfig::default();
    config.seed = 12345;
    let mut engine_a = SimulationEngine::new(config.clone()).unwrap();
    let mut engine_b = SimulationEngine::new(config).unwrap();

    engine_a.queue_command(SquadCommand::MoveOrder {
        position: vec2(200.0, 200.0),
    });
    engine_b.queue_command(SquadCommand::MoveOrder {
        position: vec2(200.0, 200.0),
    });

    for _ in 0..300 {
        let snap_a = engine_a.step(DT);
        let snap_b = engine_b.step(DT);

        let json_a = serde_json::to_string(&snap_a).unwrap();
        let json_b = serde_json::to_string(&snap_b).unwrap();
        assert_eq!(json_a, json_b, "Snapshots diverged with same seed");
    }
}

// ---- Initial layout ----

#[test]
fn test_initial_world_layout() {
    let mut engine = SimulationEngine::new(SimConfig::default()).unwrap();
    let snap = engine.step(0.0);

    assert_eq!(snap.status, MissionStatus::Active);
    assert_eq!(snap.time.frame, 0);

    // Squad in formation around the world center.
    assert_eq!(snap.soldiers.len(), 3);
    let callsigns: Vec<&str> = snap.soldiers.iter().map(|s| s.callsign.as_str()).collect();
    assert_eq!(callsigns, vec!["Alpha", "Bravo", "Charlie"]);
    for soldier in &snap.soldiers {
        assert_eq!(soldier.magazine, 30);
        assert_eq!(soldier.reserve, 120);
        assert!(!soldier.reloading);
        assert_eq!(soldier.mode, SquadMode::Follow);
        assert!(!soldier.sprinting);
    }

    // Opening horde on the perimeter.
    assert_eq!(snap.zombies.len(), 5);
    let config = engine.config().clone();
    for zombie in &snap.zombies {
        let p = zombie.position;
        let on_edge = p.x == 0.0
            || p.x == config.world.width
            || p.y == 0.0
            || p.y == config.world.height;
        assert!(on_edge, "zombie should start on the perimeter: {p:?}");
    }

    // Civilians placed clear of barriers and the squad.
    assert_eq!(snap.civilians.len(), 8);
    for civilian in &snap.civilians {
        assert!(!civilian.infected);
        assert!(!civilian.rescued);
        for barrier in &config.world.barriers {
            assert!(
                !barrier.overlaps_circle(civilian.position, CIVILIAN_RADIUS),
                "civilian placed inside a barrier"
            );
        }
        for soldier in &snap.soldiers {
            assert!(
                civilian.position.distance(soldier.position) > 99.0,
                "civilian placed on top of the squad"
            );
        }
    }

    assert_eq!(snap.objectives.total_civilians, 8);
    assert_eq!(snap.objectives.total_zombies_spawned, 5);
    assert_eq!(snap.objectives.zombies_killed, 0);
}

// ---- Pause semantics ----

#[test]
fn test_zero_dt_freezes_simulation() {
    let mut engine = SimulationEngine::new(SimConfig::default()).unwrap();

    let first = engine.step(0.0);
    for _ in 0..5 {
        let frozen = engine.step(0.0);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&frozen).unwrap(),
            "zero elapsed time must not change anything"
        );
    }
    assert_eq!(engine.time().frame, 0);

    // Non-finite and negative elapsed time are treated the same way.
    let _ = engine.step(f64::NAN);
    let _ = engine.step(-50.0);
    assert_eq!(engine.time().frame, 0);

    let _ = engine.step(DT);
    assert_eq!(engine.time().frame, 1);
}

// ---- Commands ----

#[test]
fn test_move_order_moves_squad() {
    let mut engine = SimulationEngine::new(SimConfig::default()).unwrap();
    let before = engine.step(0.0);
    let goal = vec2(100.0, 100.0);

    engine.queue_command(SquadCommand::MoveOrder { position: goal });
    run_steps(&mut engine, 150);
    let after = engine.step(0.0);

    for (a, b) in before.soldiers.iter().zip(&after.soldiers) {
        let start = a.position.distance(goal);
        let end = b.position.distance(goal);
        assert!(
            end < start - 100.0,
            "{} should have closed on the order position ({start:.0} -> {end:.0})",
            a.callsign
        );
    }
}

#[test]
fn test_nonfinite_move_order_rejected() {
    let mut engine = SimulationEngine::new(SimConfig::default()).unwrap();
    engine.queue_command(SquadCommand::MoveOrder {
        position: vec2(f64::NAN, 100.0),
    });
    let _ = engine.step(DT);

    let mut q = engine.world().query::<&Soldier>();
    for (_, soldier) in q.iter() {
        assert!(
            soldier.order_position.is_none(),
            "malformed order should be dropped silently"
        );
    }
}

#[test]
fn test_hold_mode_freezes_squad() {
    let mut engine = SimulationEngine::new(quiet_config()).unwrap();
    engine.queue_command(SquadCommand::MoveOrder {
        position: vec2(100.0, 100.0),
    });
    run_steps(&mut engine, 30);

    engine.queue_command(SquadCommand::SetMode {
        mode: SquadMode::Hold,
    });
    let held = engine.step(DT);
    run_steps(&mut engine, 50);
    let later = engine.step(0.0);

    for (a, b) in held.soldiers.iter().zip(&later.soldiers) {
        assert_eq!(a.position, b.position, "Hold must stop all locomotion");
        assert_eq!(b.mode, SquadMode::Hold);
    }
}

#[test]
fn test_overwatch_does_not_move() {
    let mut engine = SimulationEngine::new(quiet_config()).unwrap();
    engine.queue_command(SquadCommand::SetMode {
        mode: SquadMode::Overwatch,
    });
    engine.queue_command(SquadCommand::MoveOrder {
        position: vec2(100.0, 100.0),
    });
    let before = engine.step(DT);
    run_steps(&mut engine, 50);
    let after = engine.step(0.0);

    for (a, b) in before.soldiers.iter().zip(&after.soldiers) {
        assert_eq!(a.position, b.position, "Overwatch must not move");
    }
}

#[test]
fn test_reload_all_round_trip() {
    let mut engine = SimulationEngine::new(quiet_config()).unwrap();

    for (_, weapon) in engine.world_mut().query_mut::<&mut Weapon>() {
        weapon.magazine = 5;
        weapon.reserve = 50;
    }

    engine.queue_command(SquadCommand::ReloadAll);
    let snap = engine.step(DT);
    assert!(
        snap.soldiers.iter().all(|s| s.reloading),
        "all soldiers should be reloading after ReloadAll"
    );

    // Reload takes 2000ms.
    run_steps(&mut engine, 130);
    let snap = engine.step(0.0);
    for soldier in &snap.soldiers {
        assert!(!soldier.reloading);
        assert_eq!(soldier.magazine, 30);
        assert_eq!(soldier.reserve, 25);
    }
}

#[test]
fn test_reload_all_noop_when_full() {
    let mut engine = SimulationEngine::new(quiet_config()).unwrap();
    engine.queue_command(SquadCommand::ReloadAll);
    let snap = engine.step(DT);
    for soldier in &snap.soldiers {
        assert!(!soldier.reloading, "full magazine should not reload");
        assert_eq!(soldier.magazine, 30);
        assert_eq!(soldier.reserve, 120);
    }
}

// ---- Fire control ----

#[test]
fn test_sprint_suppresses_fire() {
    let mut engine = SimulationEngine::new(quiet_config()).unwrap();
    engine.spawn_test_zombie(vec2(660.0, 350.0), ZombieVariant::Tank);

    engine.queue_command(SquadCommand::SetSprint { sprinting: true });
    run_steps(&mut engine, 100);
    let snap = engine.step(0.0);
    for soldier in &snap.soldiers {
        assert!(soldier.sprinting);
        assert_eq!(
            soldier.magazine, 30,
            "no shots may be fired while sprinting"
        );
    }

    engine.queue_command(SquadCommand::SetSprint { sprinting: false });
    run_steps(&mut engine, 100);
    let snap = engine.step(0.0);
    assert!(
        snap.soldiers.iter().any(|s| s.magazine < 30),
        "squad should open fire once sprint ends"
    );
}

#[test]
fn test_squad_engages_and_kills() {
    let mut engine = SimulationEngine::new(SimConfig::default()).unwrap();
    engine.spawn_test_zombie(vec2(660.0, 350.0), ZombieVariant::Basic);

    let mut saw_trail = false;
    let mut saw_flash = false;
    for _ in 0..600 {
        let snap = engine.step(DT);
        for effect in &snap.effects {
            assert!(effect.elapsed_ms < effect.duration_ms, "expired effect leaked");
            if matches!(effect.kind, EffectKind::BulletTrail { .. }) {
                saw_trail = true;
            }
        }
        if snap.soldiers.iter().any(|s| s.muzzle_flash) {
            saw_flash = true;
        }
    }

    let snap = engine.step(0.0);
    assert!(snap.objectives.zombies_killed >= 1, "the close zombie dies");
    assert!(
        snap.soldiers
            .iter()
            .any(|s| s.magazine < 30 || s.reserve < 120),
        "ammo should have been spent"
    );
    for soldier in &snap.soldiers {
        assert!(soldier.magazine <= 30, "magazine above capacity");
    }
    assert!(saw_trail, "hits should emit bullet trails");
    assert!(saw_flash, "shots should flash the muzzle");
}

#[test]
fn test_zombie_attacks_soldiers() {
    let mut engine = SimulationEngine::new(quiet_config()).unwrap();
    // Sprint keeps the squad from shooting back.
    engine.queue_command(SquadCommand::SetSprint { sprinting: true });
    engine.spawn_test_zombie(vec2(610.0, 360.0), ZombieVariant::Tank);

    run_steps(&mut engine, 120);
    let snap = engine.step(0.0);

    assert_eq!(snap.objectives.zombies_killed, 0);
    assert!(
        snap.soldiers.iter().any(|s| s.health_fraction < 1.0),
        "an adjacent zombie should have landed a hit"
    );
}

// ---- Infection ----

#[test]
fn test_infection_conversion() {
    let mut config = quiet_config();
    config.civilians.count = 0;
    let mut engine = SimulationEngine::new(config).unwrap();
    let civilian_entity = engine.spawn_test_civilian(vec2(50.0, 50.0));
    {
        let mut civilian = engine
            .world_mut()
            .get::<&mut holdout_core::components::Civilian>(civilian_entity)
            .unwrap();
        civilian.infected = true;
    }

    // Partway through: still present, visibly turning.
    run_steps(&mut engine, 100);
    let snap = engine.step(0.0);
    assert_eq!(snap.civilians.len(), 1);
    let turning = &snap.civilians[0];
    assert!(turning.infected);
    assert!(turning.infection_progress > 0.0 && turning.infection_progress < 1.0);
    assert_eq!(snap.zombies.len(), 0);

    // Past the 5000ms countdown: gone, replaced by a Basic adversary.
    run_steps(&mut engine, 250);
    let snap = engine.step(0.0);
    assert!(snap.civilians.is_empty());
    assert_eq!(snap.zombies.len(), 1);
    assert_eq!(snap.zombies[0].variant, ZombieVariant::Basic);
    assert!(
        snap.zombies[0].position.distance(vec2(50.0, 50.0)) < 15.0,
        "replacement spawns where the civilian fell"
    );
    assert_eq!(snap.objectives.civilians_lost, 1);
    assert_eq!(snap.objectives.total_zombies_spawned, 1);
    assert_eq!(snap.status, MissionStatus::Active);
}

// ---- Rescue ----

#[test]
fn test_rescue_near_soldier() {
    let mut config = quiet_config();
    config.civilians.count = 0;
    let mut engine = SimulationEngine::new(config).unwrap();
    engine.spawn_test_civilian(vec2(610.0, 350.0));

    run_steps(&mut engine, 40);
    let snap = engine.step(0.0);

    assert_eq!(snap.objectives.civilians_rescued, 1);
    assert!(snap.civilians.is_empty(), "rescued civilians leave play");
    // With the last civilian rescued and no adversaries left, that's a win.
    assert_eq!(snap.status, MissionStatus::Won);
}

// ---- Spawn escalation ----

#[test]
fn test_spawn_interval_decays_per_spawn() {
    let mut world = hecs::World::new();
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let mut config = SimConfig::default();
    config.spawner.max_alive = 1000;
    let mut director = SpawnDirector::new(config.spawner.initial_interval_ms);
    let mut next_id = 0;
    let mut objectives = ObjectiveState::default();

    for _ in 0..5 {
        spawner::run(
            &mut world,
            &mut rng,
            &mut director,
            &config,
            &mut next_id,
            &mut objectives,
            3000.0,
        );
    }
    assert_eq!(objectives.total_zombies_spawned, 5);
    assert!((director.interval_ms - 2750.0).abs() < 1e-9);

    // Escalation floors at the minimum and never reverses.
    for _ in 0..45 {
        spawner::run(
            &mut world,
            &mut rng,
            &mut director,
            &config,
            &mut next_id,
            &mut objectives,
            3000.0,
        );
    }
    assert_eq!(objectives.total_zombies_spawned, 50);
    assert!((director.interval_ms - 1500.0).abs() < 1e-9);
}

#[test]
fn test_spawn_cap_blocks_and_pauses_decay() {
    let mut world = hecs::World::new();
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let mut config = SimConfig::default();
    config.spawner.max_alive = 3;
    let mut director = SpawnDirector::new(config.spawner.initial_interval_ms);
    let mut next_id = 0;
    let mut objectives = ObjectiveState::default();

    for _ in 0..10 {
        spawner::run(
            &mut world,
            &mut rng,
            &mut director,
            &config,
            &mut next_id,
            &mut objectives,
            3000.0,
        );
    }

    let alive = {
        let mut q = world.query::<(&Zombie, &Health)>();
        q.iter().count()
    };
    assert_eq!(alive, 3, "population cap must hold");
    assert_eq!(objectives.total_zombies_spawned, 3);
    // Only successful spawns tighten the interval.
    assert!((director.interval_ms - 2850.0).abs() < 1e-9);
}

// ---- Terminal conditions ----

#[test]
fn test_squad_wipe_loses() {
    let mut engine = SimulationEngine::new(SimConfig::default()).unwrap();
    for (_, (_soldier, health)) in engine.world_mut().query_mut::<(&Soldier, &mut Health)>() {
        health.current = 0;
    }

    let snap = engine.step(DT);
    assert_eq!(snap.status, MissionStatus::Lost);

    // Terminal state is idempotent: nothing simulates afterwards.
    let frame = engine.time().frame;
    let objectives = snap.objectives;
    run_steps(&mut engine, 10);
    let snap = engine.step(0.0);
    assert_eq!(snap.status, MissionStatus::Lost);
    assert_eq!(engine.time().frame, frame);
    assert_eq!(
        serde_json::to_string(&snap.objectives).unwrap(),
        serde_json::to_string(&objectives).unwrap()
    );
}

#[test]
fn test_cleared_field_wins() {
    let mut config = quiet_config();
    config.civilians.count = 0;
    let mut engine = SimulationEngine::new(config).unwrap();

    let snap = engine.step(DT);
    assert_eq!(
        snap.status,
        MissionStatus::Won,
        "no adversaries and no civilians left is a win"
    );
}

#[test]
fn test_defeat_takes_precedence() {
    let mut config = quiet_config();
    config.civilians.count = 0;
    let mut engine = SimulationEngine::new(config).unwrap();
    for (_, (_soldier, health)) in engine.world_mut().query_mut::<(&Soldier, &mut Health)>() {
        health.current = 0;
    }

    let snap = engine.step(DT);
    assert_eq!(snap.status, MissionStatus::Lost);
}

// ---- Bounds ----

#[test]
fn test_squad_stays_in_bounds() {
    let mut engine = SimulationEngine::new(SimConfig::default()).unwrap();
    engine.queue_command(SquadCommand::MoveOrder {
        position: vec2(-500.0, -500.0),
    });
    run_steps(&mut engine, 400);

    let snap = engine.step(0.0);
    let config = engine.config();
    for soldier in &snap.soldiers {
        assert!(soldier.position.x >= 0.0 && soldier.position.x <= config.world.width);
        assert!(soldier.position.y >= 0.0 && soldier.position.y <= config.world.height);
    }
}
