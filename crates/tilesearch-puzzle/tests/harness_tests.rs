use tilesearch_core::SearchConfig;
use tilesearch_puzzle::{
    Benchmark, BenchmarkConfig, Board, Heuristic, IdentityScheme, PuzzleError, PuzzleGenerator,
    is_solvable,
};

fn easy_starts() -> Vec<Board> {
    vec![
        Board::GOAL,
        Board::new([0, 1, 3, 4, 2, 5, 6, 7, 8]).expect("valid board"),
        Board::new([1, 2, 3, 4, 0, 6, 7, 5, 8]).expect("valid board"),
    ]
}

fn config_with_workers(workers: usize) -> BenchmarkConfig {
    BenchmarkConfig {
        puzzles: 3,
        workers,
        heuristics: vec![Heuristic::MisplacedTiles, Heuristic::Manhattan],
        ..BenchmarkConfig::default()
    }
}

#[test]
fn inline_run_returns_one_result_per_job() {
    let benchmark = Benchmark::new(config_with_workers(0));
    let report = benchmark.run_on(&easy_starts()).expect("benchmark should run");

    assert_eq!(report.puzzles, 3);
    assert_eq!(report.runs(), 6);
    for heuristic in [Heuristic::MisplacedTiles, Heuristic::Manhattan] {
        let summary = report.summary(heuristic).expect("summary per heuristic");
        assert_eq!(summary.solved, 3);
        assert_eq!(summary.unsolved, 0);
        assert!(summary.avg_nodes() >= 1.0);
    }
}

#[test]
fn worker_pool_matches_inline_run() {
    let inline = Benchmark::new(config_with_workers(0))
        .run_on(&easy_starts())
        .expect("inline benchmark should run");
    let pooled = Benchmark::new(config_with_workers(3))
        .run_on(&easy_starts())
        .expect("pooled benchmark should run");

    assert_eq!(pooled.runs(), inline.runs());
    for (a, b) in inline.summaries.iter().zip(&pooled.summaries) {
        assert_eq!(a.heuristic, b.heuristic);
        assert_eq!(a.solved, b.solved);
        assert_eq!(a.total_nodes, b.total_nodes);
        assert_eq!(a.total_path_length, b.total_path_length);
    }
}

#[test]
fn more_workers_than_jobs_still_terminates() {
    let config = BenchmarkConfig {
        workers: 8,
        heuristics: vec![Heuristic::Manhattan],
        ..config_with_workers(8)
    };
    let report = Benchmark::new(config)
        .run_on(&[Board::GOAL])
        .expect("benchmark should run");

    assert_eq!(report.runs(), 1);
    let summary = report.summary(Heuristic::Manhattan).expect("manhattan summary");
    assert_eq!(summary.total_nodes, 1);
    assert_eq!(summary.total_path_length, 0);
}

#[test]
fn unsolvable_and_limited_searches_are_counted_as_unsolved() {
    let unsolvable = Board::new([2, 1, 3, 4, 0, 5, 6, 7, 8]).expect("valid board");
    let sample = Board::new([1, 2, 3, 4, 0, 6, 7, 5, 8]).expect("valid board");
    let config = BenchmarkConfig {
        workers: 2,
        heuristics: vec![Heuristic::Manhattan],
        search: SearchConfig {
            max_expansions: Some(3),
            ..SearchConfig::default()
        },
        ..BenchmarkConfig::default()
    };
    let report = Benchmark::new(config)
        .run_on(&[unsolvable, Board::GOAL, sample])
        .expect("benchmark should run");

    let summary = report.summary(Heuristic::Manhattan).expect("manhattan summary");
    assert_eq!(summary.solved, 1);
    assert_eq!(summary.unsolved, 2);
    // 0 for the unsolvable start, 1 for the goal, 3 before the limit.
    assert_eq!(summary.total_nodes, 4);
    assert!(summary.to_string().ends_with("(2 unsolved)"));
}

#[test]
fn seeded_run_is_reproducible() {
    let config = BenchmarkConfig {
        puzzles: 2,
        workers: 2,
        seed: 11,
        heuristics: vec![Heuristic::Manhattan],
        identity: IdentityScheme::ArrangementOnly,
        ..BenchmarkConfig::default()
    };

    let first = Benchmark::new(config.clone()).run().expect("first run");
    let second = Benchmark::new(config).run().expect("second run");

    let (a, b) = (
        first.summary(Heuristic::Manhattan).expect("summary"),
        second.summary(Heuristic::Manhattan).expect("summary"),
    );
    assert_eq!(a.solved, 2);
    assert_eq!(a.total_nodes, b.total_nodes);
    assert_eq!(a.total_path_length, b.total_path_length);
}

#[test]
fn generator_only_yields_solvable_boards() {
    let mut generator = PuzzleGenerator::new(3);
    let boards = generator.random_solvable_batch(20, &Board::GOAL);

    assert_eq!(boards.len(), 20);
    assert!(boards.iter().all(|board| is_solvable(board, &Board::GOAL)));

    let mut replay = PuzzleGenerator::new(3);
    assert_eq!(replay.random_solvable_batch(20, &Board::GOAL), boards);
}

#[test]
fn report_display_and_json() {
    let report = Benchmark::new(config_with_workers(0))
        .run_on(&[Board::GOAL])
        .expect("benchmark should run");

    let text = report.to_string();
    assert_eq!(text.lines().count(), 2);
    assert!(text.starts_with(
        "heuristic misplaced_tiles solved 1 puzzles with avg nodes 1.00, avg time "
    ));

    let json: serde_json::Value =
        serde_json::from_str(&report.to_json().expect("report encodes")).expect("valid JSON");
    assert_eq!(json["puzzles"], 1);
    assert_eq!(json["summaries"][1]["heuristic"], "manhattan");
}

#[test]
fn default_yaml_config_parses() {
    let config = BenchmarkConfig::from_default_yaml().expect("default config should parse");
    assert_eq!(config, BenchmarkConfig::default());
    assert_eq!(config.queue_capacity(), 15 * 3 + 4 + 1);
    assert_eq!(config.queue_capacity_for(6), 6 + 4 + 1);
}

#[test]
fn caller_supplied_batch_larger_than_config_fits_the_queue() {
    // Ten starts with two heuristics is more jobs than `puzzles: 3` implies.
    let starts = vec![Board::GOAL; 10];
    let report = Benchmark::new(config_with_workers(0))
        .run_on(&starts)
        .expect("benchmark should run");

    assert_eq!(report.runs(), 20);
}

#[test]
fn partial_yaml_config_keeps_defaults() {
    let config = BenchmarkConfig::from_yaml_str(
        "puzzles: 2\nheuristics: [h2, manhattan_reversals]\n",
    );
    // Aliases are for the command line; YAML takes the snake_case names only.
    assert!(matches!(config, Err(PuzzleError::Yaml(_))));

    let config = BenchmarkConfig::from_yaml_str(
        "puzzles: 2\nheuristics: [manhattan, manhattan_reversals]\nsearch:\n  max_expansions: 1000\n",
    )
    .expect("config should parse");
    assert_eq!(config.puzzles, 2);
    assert_eq!(config.workers, 4);
    assert_eq!(config.search.max_expansions, Some(1000));
    assert_eq!(config.search.log_every, 10_000);
}

#[test]
fn invalid_yaml_configs_are_rejected() {
    let zero_puzzles = BenchmarkConfig::from_yaml_str("puzzles: 0\n");
    assert!(matches!(zero_puzzles, Err(PuzzleError::InvalidConfig(_))));

    let no_heuristics = BenchmarkConfig::from_yaml_str("heuristics: []\n");
    assert!(matches!(no_heuristics, Err(PuzzleError::InvalidConfig(_))));

    let repeated = BenchmarkConfig::from_yaml_str("heuristics: [manhattan, manhattan]\n");
    assert!(matches!(repeated, Err(PuzzleError::InvalidConfig(_))));

    let zero_limit = BenchmarkConfig::from_yaml_str("search:\n  max_expansions: 0\n");
    assert!(matches!(zero_limit, Err(PuzzleError::SearchConfig(_))));

    let unknown_identity = BenchmarkConfig::from_yaml_str("identity: by_hash\n");
    assert!(matches!(unknown_identity, Err(PuzzleError::Yaml(_))));
}
