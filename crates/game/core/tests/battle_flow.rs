use battle_core::{
    BattleAction, BattleConfig, BattleEngine, BattleEnv, BattleError, BattleEvent, BattleState,
    Combatant, Difficulty, ElementType, FixedRng, Move, PcgRng, Phase, Side,
};

fn psyduck() -> Combatant {
    Combatant::new(
        "Psyduck",
        5,
        [
            Move::new("Scratch", ElementType::Normal, 10),
            Move::new("Water Gun", ElementType::Water, 15),
            Move::new("Confusion", ElementType::Psychic, 20),
            Move::new("Headache", ElementType::Psychic, 25),
        ],
    )
    .unwrap()
}

fn oshawott() -> Combatant {
    Combatant::new(
        "Oshawott",
        7,
        [
            Move::new("Tackle", ElementType::Normal, 10),
            Move::new("Water Gun", ElementType::Water, 15),
            Move::new("Razor Shell", ElementType::Water, 20),
            Move::new("Aqua Jet", ElementType::Water, 18),
        ],
    )
    .unwrap()
}

fn new_battle(difficulty: Difficulty) -> BattleState {
    BattleState::new(
        psyduck(),
        oshawott(),
        &BattleConfig::new(difficulty),
        0xC0FFEE,
        "Fire vs Water",
    )
}

fn phases(events: &[BattleEvent]) -> Vec<Phase> {
    events
        .iter()
        .filter_map(|event| match event {
            BattleEvent::PhaseChanged { to, .. } => Some(*to),
            _ => None,
        })
        .collect()
}

#[test]
fn scratch_with_roll_five_deals_fifteen() {
    let mut state = new_battle(Difficulty::Medium);
    let rng = FixedRng(5);

    BattleEngine::new(&mut state)
        .resolve_player_move(BattleEnv::new(&rng), 0)
        .unwrap();

    assert_eq!(state.enemy.health(), 85);
    assert_eq!(state.phase(), Phase::EnemyAttacking);
    assert_eq!(state.narration(), "Psyduck used Scratch! It did 15 damage!");
}

#[test]
fn overkill_clamps_enemy_health_and_finishes() {
    let mut state = new_battle(Difficulty::Medium);
    state.enemy.set_health(8);
    let rng = FixedRng(2);

    let events = BattleEngine::new(&mut state)
        .resolve_player_move(BattleEnv::new(&rng), 0)
        .unwrap();

    assert!(events.contains(&BattleEvent::DamageDealt {
        target: Side::Enemy,
        damage: 12,
        health_before: 8,
        health_after: 0,
    }));
    assert_eq!(events.last(), Some(&BattleEvent::BattleEnded { winner: Side::Player }));

    let snapshot = state.snapshot();
    assert_eq!(snapshot.enemy_health, 0);
    assert_eq!(snapshot.phase, Phase::Finished);
    assert_eq!(snapshot.winner, Some(Side::Player));
    assert_eq!(snapshot.narration, "Oshawott fainted! You won the battle!");
}

#[test]
fn finished_battle_ignores_further_moves() {
    let mut state = new_battle(Difficulty::Medium);
    state.enemy.set_health(1);
    let rng = FixedRng(0);
    let mut engine = BattleEngine::new(&mut state);

    engine.resolve_player_move(BattleEnv::new(&rng), 3).unwrap();
    let after_finish = engine.snapshot();

    assert_eq!(
        engine.resolve_player_move(BattleEnv::new(&rng), 0),
        Err(BattleError::InvalidState {
            action: BattleAction::PlayerMove,
            phase: Phase::Finished,
        })
    );
    assert!(engine.resolve_enemy_move(BattleEnv::new(&rng)).is_err());
    assert_eq!(engine.snapshot(), after_finish);
}

#[test]
fn player_move_during_enemy_turn_is_a_no_op() {
    let mut state = new_battle(Difficulty::Hard);
    let rng = FixedRng(4);
    BattleEngine::new(&mut state)
        .resolve_player_move(BattleEnv::new(&rng), 1)
        .unwrap();
    assert_eq!(state.phase(), Phase::EnemyAttacking);

    let before = state.clone();
    for index in [0, 1, 7] {
        let result = BattleEngine::new(&mut state).resolve_player_move(BattleEnv::new(&rng), index);
        assert!(matches!(result, Err(BattleError::InvalidState { .. })));
    }
    assert_eq!(state, before);
}

#[test]
fn full_round_walks_every_phase_in_order() {
    let mut state = new_battle(Difficulty::Medium);
    let rng = FixedRng(3);
    let mut engine = BattleEngine::new(&mut state);

    let player_events = engine.resolve_player_move(BattleEnv::new(&rng), 0).unwrap();
    let enemy_events = engine.resolve_enemy_move(BattleEnv::new(&rng)).unwrap();

    assert_eq!(
        phases(&player_events),
        vec![Phase::PlayerAttacking, Phase::EnemyAttacking]
    );
    assert_eq!(phases(&enemy_events), vec![Phase::Choosing]);
}

#[test]
fn damage_narration_precedes_health_update_and_phase_change() {
    let mut state = new_battle(Difficulty::Easy);
    let rng = FixedRng(9);
    let mut engine = BattleEngine::new(&mut state);
    engine.resolve_player_move(BattleEnv::new(&rng), 0).unwrap();
    let events = engine.resolve_enemy_move(BattleEnv::new(&rng)).unwrap();

    let hit_text = events
        .iter()
        .position(|e| e.narration().is_some_and(|t| t.contains("damage")))
        .unwrap();
    let damage = events
        .iter()
        .position(|e| matches!(e, BattleEvent::DamageDealt { .. }))
        .unwrap();
    let phase = events
        .iter()
        .position(|e| matches!(e, BattleEvent::PhaseChanged { .. }))
        .unwrap();

    assert!(hit_text < damage);
    assert!(damage < phase);
}

#[test]
fn player_damage_stays_within_power_plus_nine() {
    for roll in 0..10 {
        for index in 0..4 {
            let mut state = new_battle(Difficulty::Hard);
            let power = state.player.moves()[index].power;
            let rng = FixedRng(roll);

            BattleEngine::new(&mut state)
                .resolve_player_move(BattleEnv::new(&rng), index)
                .unwrap();

            let damage = 100 - state.enemy.health();
            assert_eq!(damage, power + roll, "difficulty must not scale player damage");
        }
    }
}

#[test]
fn enemy_damage_is_scaled_and_floored() {
    let single_move = |power| {
        Combatant::new("Dummy", 1, [Move::new("Poke", ElementType::Normal, power)]).unwrap()
    };

    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        let percent = difficulty.multiplier_percent();
        for power in [0, 7, 15, 18] {
            for roll in 0..10 {
                let mut state = BattleState::new(
                    psyduck(),
                    single_move(power),
                    &BattleConfig::new(difficulty),
                    1,
                    "Books vs Movies",
                );
                // Player roll 0 with Scratch leaves the enemy standing.
                let rng = FixedRng(roll);
                let mut engine = BattleEngine::new(&mut state);
                engine.resolve_player_move(BattleEnv::new(&rng), 0).unwrap();
                engine.resolve_enemy_move(BattleEnv::new(&rng)).unwrap();

                let damage = 100 - state.player.health();
                let low = power * percent / 100;
                let high = (power + 9) * percent / 100;
                assert_eq!(damage, (power + roll) * percent / 100);
                assert!((low..=high).contains(&damage));
            }
        }
    }
}

#[test]
fn enemy_knockout_hands_victory_to_enemy() {
    let mut state = new_battle(Difficulty::Hard);
    state.player.set_health(5);
    let rng = FixedRng(0);
    let mut engine = BattleEngine::new(&mut state);

    engine.resolve_player_move(BattleEnv::new(&rng), 0).unwrap();
    let events = engine.resolve_enemy_move(BattleEnv::new(&rng)).unwrap();

    assert!(events.contains(&BattleEvent::Fainted { side: Side::Player }));
    let snapshot = engine.snapshot();
    assert_eq!(snapshot.player_health, 0);
    assert_eq!(snapshot.phase, Phase::Finished);
    assert_eq!(snapshot.winner, Some(Side::Enemy));
    assert_eq!(snapshot.narration, "Psyduck fainted! You lost the battle!");
}

#[test]
fn reset_restores_full_health_from_any_phase() {
    let rng = FixedRng(6);

    // Choosing, mid-round (EnemyAttacking) and Finished.
    for steps in 0..3 {
        let mut state = new_battle(Difficulty::Medium);
        if steps == 2 {
            state.enemy.set_health(1);
        }
        let mut engine = BattleEngine::new(&mut state);
        if steps > 0 {
            engine.resolve_player_move(BattleEnv::new(&rng), 2).unwrap();
        }

        engine.reset("Robots vs Dinosaurs");
        let snapshot = engine.snapshot();

        assert_eq!(snapshot.phase, Phase::Choosing);
        assert_eq!(snapshot.player_health, 100);
        assert_eq!(snapshot.enemy_health, 100);
        assert_eq!(snapshot.winner, None);
        assert_eq!(snapshot.round, 0);
        assert_eq!(snapshot.epoch, 1);
        assert_eq!(
            snapshot.narration,
            "Battle topic: Robots vs Dinosaurs. What will you do?"
        );
    }
}

#[test]
fn seeded_battle_runs_to_completion_with_valid_health() {
    let mut state = new_battle(Difficulty::Hard);
    let rng = PcgRng;
    let mut engine = BattleEngine::new(&mut state);

    for turn in 0..200 {
        let snapshot = engine.snapshot();
        assert!(snapshot.player_health <= 100 && snapshot.enemy_health <= 100);

        match snapshot.phase {
            Phase::Choosing => {
                engine
                    .resolve_player_move(BattleEnv::new(&rng), turn % 4)
                    .unwrap();
            }
            Phase::EnemyAttacking => {
                engine.resolve_enemy_move(BattleEnv::new(&rng)).unwrap();
            }
            Phase::Finished => break,
            Phase::PlayerAttacking => unreachable!("transient phase is never observable"),
        }
    }

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.phase, Phase::Finished);
    let loser_health = match snapshot.winner {
        Some(Side::Player) => snapshot.enemy_health,
        Some(Side::Enemy) => snapshot.player_health,
        None => panic!("finished battle must have a winner"),
    };
    assert_eq!(loser_health, 0);
}

#[test]
fn same_seed_replays_identically() {
    let run = || {
        let mut state = new_battle(Difficulty::Medium);
        let rng = PcgRng;
        let mut engine = BattleEngine::new(&mut state);
        let mut log = Vec::new();
        for _ in 0..3 {
            if let Ok(events) = engine.resolve_player_move(BattleEnv::new(&rng), 1) {
                log.extend(events);
            }
            if let Ok(events) = engine.resolve_enemy_move(BattleEnv::new(&rng)) {
                log.extend(events);
            }
        }
        log
    };

    assert_eq!(run(), run());
}

#[test]
fn enemy_move_choice_is_roughly_uniform() {
    const BATTLES: u64 = 4000;
    let rng = PcgRng;
    let moves = oshawott()
        .moves()
        .iter()
        .map(|m| m.name.clone())
        .collect::<Vec<_>>();
    let mut counts = vec![0u32; moves.len()];

    for seed in 0..BATTLES {
        let mut state = BattleState::new(
            psyduck(),
            oshawott(),
            &BattleConfig::new(Difficulty::Medium),
            seed,
            "Fire vs Water",
        );
        let mut engine = BattleEngine::new(&mut state);
        engine.resolve_player_move(BattleEnv::new(&rng), 0).unwrap();
        let events = engine.resolve_enemy_move(BattleEnv::new(&rng)).unwrap();

        let chosen = events
            .iter()
            .find_map(|event| match event {
                BattleEvent::MoveAnnounced {
                    side: Side::Enemy,
                    move_name,
                    ..
                } => Some(move_name.as_str()),
                _ => None,
            })
            .expect("enemy announces its move");
        let index = moves.iter().position(|name| name == chosen).unwrap();
        counts[index] += 1;
    }

    let expected = (BATTLES / moves.len() as u64) as u32;
    for (name, count) in moves.iter().zip(&counts) {
        assert!(
            count.abs_diff(expected) < expected / 6,
            "{name} chosen {count} times, expected about {expected}"
        );
    }
}
