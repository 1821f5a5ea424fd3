use argmin::core::{Executor, Problem, Solver, State};
use pretty_assertions::assert_eq;
use test_case::test_case;

use super::seeded;
use crate::prelude::*;

fn run_seeded(seed: u64, generations: u64) -> SwarmReport {
    ParticleSwarm::new(PsoConfig::default(), seeded(seed))
        .run(generations)
        .unwrap()
}

#[test]
fn test_same_seed_is_bit_identical() {
    let a = run_seeded(42, 500);
    let b = run_seeded(42, 500);
    assert_eq!(a, b);
    assert_eq!(a.best_fitness.to_bits(), b.best_fitness.to_bits());
    assert_eq!(a.best_position[0].to_bits(), b.best_position[0].to_bits());
    assert_eq!(a.best_position[1].to_bits(), b.best_position[1].to_bits());
}

#[test]
fn test_zero_generations_reports_initialization_best() {
    let report = run_seeded(9, 0);
    let swarm = Swarm::initialize(&PsoConfig::default(), &mut seeded(9)).unwrap();

    assert_eq!(report.generations, 0);
    assert_eq!(report.best_fitness, swarm.global_best().fitness);
    assert_eq!(report.best_position, swarm.global_best().position);
    assert_eq!(report.cost_history, vec![swarm.global_best().fitness]);
}

#[test_case(1; "one generation")]
#[test_case(17; "a few generations")]
#[test_case(250; "many generations")]
fn test_run_matches_manual_stepping(generations: u64) {
    let report = run_seeded(1234, generations);

    let mut rng = seeded(1234);
    let mut swarm = Swarm::initialize(&PsoConfig::default(), &mut rng).unwrap();
    let mut history = vec![swarm.global_best().fitness];
    for _ in 0..generations {
        swarm.step(&mut rng);
        history.push(swarm.global_best().fitness);
    }

    assert_eq!(report.generations, generations);
    assert_eq!(report.best_fitness, swarm.global_best().fitness);
    assert_eq!(report.best_position, swarm.global_best().position);
    assert_eq!(report.cost_history, history);
}

#[test]
fn test_cost_history_is_non_increasing() {
    let report = run_seeded(77, 500);

    assert_eq!(report.cost_history.len(), 501);
    assert!(
        report.cost_history.windows(2).all(|w| w[1] <= w[0]),
        "best cost went up: {:?}",
        report.cost_history
    );
    assert_eq!(report.cost_history.last(), Some(&report.best_fitness));
    assert_eq!(report.best_fitness, saddle(&report.best_position));
}

#[test]
fn test_executor_state_tracks_swarm() {
    let solver = ParticleSwarm::new(PsoConfig::default(), seeded(8));
    let opt_result = Executor::new(SaddleObjective, solver)
        .configure(|state| state.max_iters(3))
        .run()
        .unwrap();

    let swarm = opt_result.solver.swarm().unwrap();
    assert_eq!(swarm.generation(), 3);
    assert_eq!(opt_result.state.get_iter(), 3);

    let positions: Vec<Position> = swarm.particles().iter().map(|p| p.position).collect();
    assert_eq!(opt_result.state.get_population(), Some(&positions));
    assert_eq!(opt_result.state.get_best_cost(), swarm.global_best().fitness);
    assert_eq!(
        opt_result.state.get_best_param(),
        Some(&swarm.global_best().position)
    );
}

#[test]
fn test_next_iter_before_init_fails() {
    let mut solver = ParticleSwarm::new(PsoConfig::default(), seeded(0));
    let mut problem = Problem::new(SaddleObjective);

    let err = solver
        .next_iter(&mut problem, SwarmState::new())
        .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<PsoError>(),
        Some(PsoError::NotInitialized)
    ));
}

#[test]
fn test_run_rejects_invalid_config() {
    let err = ParticleSwarm::new(PsoConfig::default().with_population(0), seeded(0))
        .run(10)
        .unwrap_err();
    assert!(matches!(err, PsoError::EmptySwarm));

    let cfg = PsoConfig::default().with_bounds(Bounds::new(0.0, 0.0));
    let err = ParticleSwarm::new(cfg, seeded(0)).run(10).unwrap_err();
    assert!(matches!(err, PsoError::InvalidBounds { .. }));
}

/// Default problem: population 20, 500 generations on `[-10, 10]²`. The swarm should land near
/// `(0, ±10)` in nearly every seeded run.
#[test]
fn test_converges_to_box_minimum() {
    let runs = 40;
    let mut hits = 0;
    for seed in 0..runs {
        let report = run_seeded(seed, 500);
        let (x1, x2) = (report.best_position[0], report.best_position[1]);

        assert!(report.best_fitness >= -100.0);
        if report.best_fitness <= -90.0 && x1.abs() <= 2.0 && x2.abs() >= 8.0 {
            hits += 1;
        }
    }
    assert!(hits >= 36, "only {hits}/{runs} runs converged");
}

#[test]
fn test_solver_name() {
    let solver = ParticleSwarm::new(PsoConfig::default(), seeded(0));
    assert_eq!(solver.name(), "ParticleSwarm");
}

#[test]
fn test_report_display_is_three_result_lines() {
    let report = SwarmReport {
        best_fitness: -100.0,
        best_position: Position::new(0.000000025, -10.0),
        generations: 500,
        cost_history: vec![-3.5, -100.0],
    };
    assert_eq!(report.to_string(), "ymin = -100\nx1 = 0.000000025\nx2 = -10\n");
}

#[test]
fn test_seeded_report_display() {
    let report = run_seeded(42, 500);
    let text = report.to_string();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(
        lines,
        vec![
            format!("ymin = {}", report.best_fitness),
            format!("x1 = {}", report.best_position[0]),
            format!("x2 = {}", report.best_position[1]),
        ]
    );
    assert!(text.ends_with('\n'));
}
