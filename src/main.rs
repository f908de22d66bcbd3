//! Sweep Collide entry point
//!
//! Usage:
//!   sweep-collide [SCENARIO.json] [--steps N]   resolve a step (or N steps)
//!   sweep-collide --batch COUNT [SEED]          time COUNT random classifications
//!
//! Set `RUST_LOG=debug` (or `trace`) to see the classifier's decisions.

#[cfg(not(target_arch = "wasm32"))]
use std::process::ExitCode;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match native::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No command line on wasm; the library is the only entry point there
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::error::Error;
    use std::time::{Duration, Instant};

    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    use sweep_collide::sweep::classify;
    use sweep_collide::{CollisionType, Scenario, StepOutcome};

    const DEFAULT_SEED: u64 = 12345;

    enum Command {
        Run { path: Option<String>, steps: usize },
        Batch { count: usize, seed: u64 },
    }

    fn parse_args(args: &[String]) -> Result<Command, Box<dyn Error>> {
        if args.first().map(String::as_str) == Some("--batch") {
            let count = args
                .get(1)
                .ok_or("--batch needs a COUNT")?
                .parse::<usize>()?;
            let seed = match args.get(2) {
                Some(s) => s.parse::<u64>()?,
                None => DEFAULT_SEED,
            };
            return Ok(Command::Batch { count, seed });
        }

        let mut path = None;
        let mut steps = 1;
        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--steps" => {
                    steps = iter.next().ok_or("--steps needs a count")?.parse()?;
                }
                flag if flag.starts_with("--") => {
                    return Err(format!("unknown option: {flag}").into());
                }
                file => path = Some(file.to_string()),
            }
        }
        Ok(Command::Run { path, steps })
    }

    pub fn run(args: &[String]) -> Result<(), Box<dyn Error>> {
        match parse_args(args)? {
            Command::Run { path, steps } => run_scenario(path.as_deref(), steps),
            Command::Batch { count, seed } => run_batch(count, seed),
        }
    }

    fn print_outcome(outcome: &StepOutcome, duration: Duration) {
        println!("Collision\t{}", outcome.collision.kind().as_str());
        if let Some(contacts) = outcome.collision.contacts() {
            println!("Circle Contact\t{}", contacts.circle);
            println!("Segment Contact\t{}", contacts.segment);
        }
        println!("Execution Time\t{} ns", duration.as_nanos());
        println!("New Position\t{}", outcome.center);
    }

    fn run_scenario(path: Option<&str>, steps: usize) -> Result<(), Box<dyn Error>> {
        let mut scenario = match path {
            Some(path) => Scenario::load(path)?,
            None => {
                log::info!("No scenario file given, using the built-in example");
                Scenario::default()
            }
        };

        for step in 0..steps {
            let start = Instant::now();
            let outcome = scenario.advance()?;
            let duration = start.elapsed();

            if steps > 1 {
                println!("--- step {}", step + 1);
            }
            print_outcome(&outcome, duration);
        }
        Ok(())
    }

    fn run_batch(count: usize, seed: u64) -> Result<(), Box<dyn Error>> {
        if count == 0 {
            return Err("--batch COUNT must be positive".into());
        }

        let mut rng = Pcg32::seed_from_u64(seed);
        let scenarios = (0..count)
            .map(|_| Scenario::random(&mut rng))
            .collect::<Result<Vec<_>, _>>()?;
        log::info!("Generated {count} scenarios with seed {seed}");

        let mut counts = [0usize; 3];
        let start = Instant::now();
        for scenario in &scenarios {
            let collision = classify(&scenario.circle, scenario.displacement(), &scenario.segment);
            let slot = match collision.kind() {
                CollisionType::None => 0,
                CollisionType::Between => 1,
                CollisionType::EndPoint => 2,
            };
            counts[slot] += 1;
        }
        let duration = start.elapsed();

        println!("Queries\t\t{count}");
        println!("None\t\t{}", counts[0]);
        println!("Between\t\t{}", counts[1]);
        println!("EndPoint\t{}", counts[2]);
        println!("Total Time\t{} us", duration.as_micros());
        println!("Per Query\t{:.1} ns", duration.as_nanos() as f64 / count as f64);
        Ok(())
    }

}
