use allot_rs::{
    calendar::{BreakWindow, Calendar},
    catalog::Catalog,
    genetics::{
        EliteReinsertion, EvolveParams, GeneticAlgorithm, ShuffleMutation, TimetableEvaluation,
        TournamentSelection, TwoPointCrossover, UniformInitialization,
    },
};
use chrono::{Duration, NaiveTime};
use std::sync::atomic::AtomicBool;

type Algorithm = GeneticAlgorithm<
    TimetableEvaluation,
    UniformInitialization,
    TournamentSelection,
    TwoPointCrossover,
    ShuffleMutation,
    EliteReinsertion,
>;

fn wall(repr: &str) -> NaiveTime {
    NaiveTime::parse_from_str(repr, "%H:%M").unwrap()
}

fn sample_catalog() -> Catalog {
    Catalog::new(
        vec!["A".into(), "B".into()],
        vec![
            (
                "Alg".into(),
                vec!["Ada".into(), "Grace".into(), "Edsger".into()],
            ),
            ("Os".into(), vec!["Linus".into(), "Dennis".into()]),
            ("Db".into(), vec!["Michael".into(), "Edgar".into()]),
        ],
    )
    .unwrap()
}

fn sample_calendar() -> Calendar {
    Calendar::new(
        wall("09:00"),
        wall("13:00"),
        Duration::hours(1),
        &[BreakWindow::new(wall("11:00"), wall("11:30"))],
    )
    .unwrap()
}

fn sample_algorithm() -> Algorithm {
    let catalog = sample_catalog();
    let evaluation = TimetableEvaluation::new(&catalog, &sample_calendar(), 3).unwrap();
    let dims = evaluation.dimensions();
    GeneticAlgorithm::new(
        evaluation,
        UniformInitialization::new(dims, &catalog),
        TournamentSelection::new(3).unwrap(),
        TwoPointCrossover::new(0.7).unwrap(),
        ShuffleMutation::new(0.1).unwrap(),
        EliteReinsertion,
    )
}

fn params(generations: usize, seed: u64) -> EvolveParams {
    EvolveParams {
        population_size: 30,
        generations,
        elite_count: 2,
        seed: Some(seed),
    }
}

#[test]
fn test_same_seed_reproduces_the_run() {
    let algo = sample_algorithm();
    let first = algo.evolve(&params(40, 7), None).unwrap();
    let second = algo.evolve(&params(40, 7), None).unwrap();

    assert_eq!(first.best_history, second.best_history);
    assert_eq!(first.best(), second.best());
    assert_eq!(
        first.hall_of_fame.members(),
        second.hall_of_fame.members()
    );
}

#[test]
fn test_best_score_never_regresses() {
    let algo = sample_algorithm();
    let evolution = algo.evolve(&params(60, 3), None).unwrap();

    assert!(!evolution.best_history.is_empty());
    assert!(evolution
        .best_history
        .windows(2)
        .all(|pair| pair[1] <= pair[0]));
    assert_eq!(
        *evolution.best_history.last().unwrap(),
        evolution.best().fitness
    );
}

#[test]
fn test_longer_budget_never_ends_worse() {
    let algo = sample_algorithm();
    let short = algo.evolve(&params(10, 11), None).unwrap();
    let long = algo.evolve(&params(80, 11), None).unwrap();
    assert!(long.best().fitness <= short.best().fitness);
}

#[test]
fn test_archive_members_stay_sorted_and_bounded() {
    let algo = sample_algorithm();
    let evolution = algo.evolve(&params(25, 5), None).unwrap();
    let members = evolution.hall_of_fame.members();

    assert!(!members.is_empty() && members.len() <= 2);
    assert!(members
        .windows(2)
        .all(|pair| pair[0].fitness <= pair[1].fitness));
}

#[test]
fn test_cancellation_returns_the_seeded_best() {
    let algo = sample_algorithm();
    let cancel = AtomicBool::new(true);
    let evolution = algo.evolve(&params(1000, 7), Some(&cancel)).unwrap();

    // No generation ran, yet the initial population's best is available.
    assert!(evolution.best_history.is_empty());
    assert!(evolution.best().is_evaluated());
}

#[test]
fn test_trivial_instance_stops_early_at_zero() {
    // One panel, one subject, every roster member qualified: any chromosome
    // is conflict-free, so the run stops before its first generation.
    let catalog = Catalog::new(
        vec!["A".into()],
        vec![("Alg".into(), vec!["Ada".into(), "Grace".into()])],
    )
    .unwrap();
    let evaluation = TimetableEvaluation::new(&catalog, &sample_calendar(), 2).unwrap();
    let dims = evaluation.dimensions();
    let algo = GeneticAlgorithm::new(
        evaluation,
        UniformInitialization::new(dims, &catalog),
        TournamentSelection::new(2).unwrap(),
        TwoPointCrossover::new(0.7).unwrap(),
        ShuffleMutation::new(0.1).unwrap(),
        EliteReinsertion,
    );
    let evolution = algo.evolve(&params(500, 1), None).unwrap();

    assert_eq!(evolution.best().fitness, 0);
    assert!(evolution.best_history.is_empty());
}

#[test]
fn test_misconfiguration_fails_before_running() {
    let algo = sample_algorithm();

    let mut bad = params(10, 1);
    bad.population_size = 1;
    assert!(algo.evolve(&bad, None).is_err());

    let mut bad = params(10, 1);
    bad.generations = 0;
    assert!(algo.evolve(&bad, None).is_err());

    let mut bad = params(10, 1);
    bad.elite_count = 0;
    assert!(algo.evolve(&bad, None).is_err());

    let mut bad = params(10, 1);
    bad.elite_count = bad.population_size + 1;
    assert!(algo.evolve(&bad, None).is_err());
}

#[test]
fn test_operator_misconfiguration_is_rejected() {
    assert!(TournamentSelection::new(0).is_err());
    assert!(TwoPointCrossover::new(1.2).is_err());
    assert!(ShuffleMutation::new(-0.2).is_err());
}
