use tilesearch_core::{AStar, SearchConfig, SearchOutcome};
use tilesearch_puzzle::{Board, EightPuzzle, Heuristic, IdentityScheme, PuzzleState};

fn main() {
    // Step 1: Pick a start board. Only tiles 5, 6 and 7 are off their goal cells:
    //  1 2 3
    //  4 . 6
    //  7 5 8
    let start: Board = "1,2,3,4,0,6,7,5,8"
        .parse()
        .expect("start board should parse");
    let puzzle = EightPuzzle::default();

    println!("Start position:");
    println!("{start}");
    println!();
    println!("Goal position:");
    println!("{}", puzzle.goal());
    println!();

    // Step 2: Solve once per heuristic with a shared driver.
    //    Every run builds its own open and closed sets, so reuse is safe.
    let mut astar = AStar::new(SearchConfig::default());
    for heuristic in Heuristic::ALL {
        let outcome = puzzle
            .solve_with(&mut astar, start, heuristic, IdentityScheme::WithPathCost)
            .expect("search should succeed");
        match outcome {
            SearchOutcome::Solved(report) => println!(
                "{:<20} ({}) path length {:>2}, {:>5} nodes explored",
                heuristic.name(),
                heuristic.alias(),
                report.path_length,
                report.nodes_explored
            ),
            other => println!("{heuristic} gave up: {:?}", other.phase()),
        }
    }

    // Step 3: Drive the core engine directly with a hook to watch the frontier.
    let goal = *puzzle.goal();
    let mut widest_open = 0;
    let outcome = astar
        .run_with_hook(
            &puzzle,
            PuzzleState::start(start),
            |state: &PuzzleState| Heuristic::Manhattan.score(state, &goal),
            |state: &PuzzleState| IdentityScheme::ArrangementOnly.state_id(state),
            |event| widest_open = widest_open.max(event.open_len),
        )
        .expect("search should succeed");

    println!();
    println!(
        "manhattan with arrangement-only identity: path length {:?}, widest open set {}",
        outcome.path_length(),
        widest_open
    );
}
