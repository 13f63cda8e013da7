/// Solving one start board.
use super::*;

impl Solve {
    pub fn run(self) {
        let start: Board = match self.tiles.parse() {
            Ok(board) => board,
            Err(err) => fatal_error!(2, "{}", err),
        };
        let heuristic: Heuristic = match self.heuristic.parse() {
            Ok(heuristic) => heuristic,
            Err(err) => fatal_error!(2, "{}", err),
        };
        let identity: IdentityScheme = match self.identity.parse() {
            Ok(identity) => identity,
            Err(err) => fatal_error!(2, "{}", err),
        };
        let config = SearchConfig {
            max_expansions: self.max_expansions,
            ..SearchConfig::default()
        };
        if let Err(err) = config.validate() {
            fatal_error!(2, "{}", err);
        }

        let puzzle = EightPuzzle::default();

        let outcome = match puzzle.solve(start, heuristic, identity, &config) {
            Ok(outcome) => outcome,
            Err(err) => fatal_error!(1, "Search failed: {}", err),
        };

        if self.json {
            match serde_json::to_string_pretty(&outcome) {
                Ok(json) => println!("{json}"),
                Err(err) => fatal_error!(1, "Cannot encode outcome: {}", err),
            }
            return;
        }

        println!("{}", start);
        println!();
        println!("{:18}{}", "Heuristic:".bold(), heuristic);
        println!("{:18}{}", "Identity:".bold(), identity);
        match &outcome {
            SearchOutcome::Solved(report) => {
                println!("{:18}{}", "Path length:".bold(), report.path_length);
                println!("{:18}{}", "Nodes explored:".bold(), report.nodes_explored);
                println!("{:18}{:.6}s", "Time:".bold(), report.elapsed_secs);
            }
            SearchOutcome::Exhausted(metrics) => {
                println!("{:18}{}", "Result:".bold(), "unsolvable".red());
                if metrics.nodes_explored == 0 {
                    println!("{:18}wrong inversion parity", "Reason:".bold());
                }
                println!("{:18}{}", "Nodes explored:".bold(), metrics.nodes_explored);
            }
            SearchOutcome::LimitReached(metrics) => {
                println!("{:18}{}", "Result:".bold(), "expansion limit reached".yellow());
                println!("{:18}{}", "Nodes explored:".bold(), metrics.nodes_explored);
            }
        }
    }
}
