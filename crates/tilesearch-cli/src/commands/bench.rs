/// Running the multi-heuristic benchmark.
use super::*;

impl Bench {
    /// Loaded config with the command-line overrides applied.
    fn build_config(&self) -> BenchmarkConfig {
        let mut config = match &self.config {
            Some(path) => match BenchmarkConfig::from_yaml_path(path) {
                Ok(config) => config,
                Err(err) => fatal_error!(1, "Cannot load config {}: {}", path.display(), err),
            },
            None => BenchmarkConfig::default(),
        };

        if let Some(puzzles) = self.puzzles {
            config.puzzles = puzzles;
        }
        if let Some(workers) = self.workers {
            config.workers = workers;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if !self.heuristics.is_empty() {
            config.heuristics = self
                .heuristics
                .iter()
                .map(|name| match name.parse::<Heuristic>() {
                    Ok(heuristic) => heuristic,
                    Err(err) => fatal_error!(2, "{}", err),
                })
                .collect();
        }
        if let Some(identity) = &self.identity {
            config.identity = match identity.parse::<IdentityScheme>() {
                Ok(identity) => identity,
                Err(err) => fatal_error!(2, "{}", err),
            };
        }
        if self.max_expansions.is_some() {
            config.search.max_expansions = self.max_expansions;
        }

        if let Err(err) = config.validate() {
            fatal_error!(2, "{}", err);
        }
        config
    }

    pub fn run(self) {
        let config = self.build_config();
        log::info!(
            "benchmarking {} puzzles with {} heuristics on {} workers (seed {}, {} identity)",
            config.puzzles,
            config.heuristics.len(),
            config.workers,
            config.seed,
            config.identity
        );

        let report = match Benchmark::new(config).run() {
            Ok(report) => report,
            Err(err) => fatal_error!(1, "Benchmark failed: {}", err),
        };

        if self.json {
            match report.to_json() {
                Ok(json) => println!("{json}"),
                Err(err) => fatal_error!(1, "Cannot encode report: {}", err),
            }
            return;
        }

        println!("{:18}{}", "Puzzles:".bold(), report.puzzles);
        for summary in &report.summaries {
            println!("{summary}");
            if summary.solved > 0 {
                println!(
                    "  {:16}{:.2}",
                    "avg path length:".dimmed(),
                    summary.avg_path_length()
                );
            }
        }
    }
}
