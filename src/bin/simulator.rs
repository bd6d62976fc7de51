//! Flapper Headless Simulator
//!
//! Runs the game session without any terminal, feeding it a scripted input
//! pattern. Uses the exact same `Session::frame()` as the interactive game,
//! so a seed plus a flap pattern always reproduces the same run.
//!
//! Usage:
//!   cargo run --bin simulator -- [OPTIONS]
//!
//! Options:
//!   --ticks N        Ticks to simulate (default: 3600 = 1 minute at 60 Hz)
//!   --seed N         RNG seed (default: 42)
//!   --flap-every N   Press the action key every N ticks (default: 0 = never)
//!   --restart        Start a new game after each crash
//!   --json           Print the report as JSON
//!   --verbose        Log every finished game (set RUST_LOG=info)

use flapper::build_info;
use flapper::core::{SIM_DEFAULT_SEED, SIM_DEFAULT_TICKS};
use flapper::{FrameOutcome, GameConfig, GameInput, RenderSnapshot, Session};
use serde::Serialize;

// ── CLI Configuration ────────────────────────────────────────────────

struct SimConfig {
    ticks: u64,
    seed: u64,
    flap_every: u64,
    restart: bool,
    json: bool,
    verbose: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            ticks: SIM_DEFAULT_TICKS,
            seed: SIM_DEFAULT_SEED,
            flap_every: 0,
            restart: false,
            json: false,
            verbose: false,
        }
    }
}

fn parse_number(args: &[String], i: usize, flag: &str) -> Result<u64, String> {
    args.get(i)
        .ok_or_else(|| format!("{flag} requires a number"))?
        .parse()
        .map_err(|_| format!("{flag} requires a number"))
}

fn parse_args(args: &[String]) -> Result<SimConfig, String> {
    let mut config = SimConfig::default();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--ticks" => {
                i += 1;
                config.ticks = parse_number(args, i, "--ticks")?;
            }
            "--seed" => {
                i += 1;
                config.seed = parse_number(args, i, "--seed")?;
            }
            "--flap-every" => {
                i += 1;
                config.flap_every = parse_number(args, i, "--flap-every")?;
            }
            "--restart" => config.restart = true,
            "--json" => config.json = true,
            "--verbose" => config.verbose = true,
            "--version" | "-v" => {
                println!("{}", build_info::version_string("simulator"));
                std::process::exit(0);
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => return Err(format!("Unknown argument: {other}")),
        }
        i += 1;
    }
    Ok(config)
}

fn print_usage() {
    eprintln!(
        "Flapper Headless Simulator\n\
         \n\
         Usage: simulator [OPTIONS]\n\
         \n\
         Options:\n\
         \x20 --ticks N        Ticks to simulate (default: 3600)\n\
         \x20 --seed N         RNG seed (default: 42)\n\
         \x20 --flap-every N   Press the action key every N ticks (default: 0 = never)\n\
         \x20 --restart        Start a new game after each crash\n\
         \x20 --json           Print the report as JSON\n\
         \x20 --verbose        Log every finished game (set RUST_LOG=info)\n\
         \x20 --help, -h       Show this help"
    );
}

// ── Simulation Report ────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct SimReport {
    seed: u64,
    ticks_run: u64,
    games_finished: u32,
    best_score: u32,
    total_score: u64,
    obstacles_spawned: u64,
    config: GameConfig,
    final_frame: Option<RenderSnapshot>,
}

fn simulate(sim: &SimConfig) -> Result<SimReport, flapper::ConfigError> {
    let mut session = Session::with_seed(GameConfig::default(), sim.seed)?;

    let mut report = SimReport {
        seed: sim.seed,
        ticks_run: 0,
        games_finished: 0,
        best_score: 0,
        total_score: 0,
        obstacles_spawned: 0,
        config: session.config().clone(),
        final_frame: None,
    };

    for tick in 1..=sim.ticks {
        let was_over = session.is_game_over();
        if was_over && !sim.restart {
            break;
        }

        let press = was_over || (sim.flap_every > 0 && tick % sim.flap_every == 0);
        let inputs: &[GameInput] = if press {
            &[GameInput::ImpulseOrRestart]
        } else {
            &[]
        };

        let FrameOutcome::Continue(snapshot) = session.frame(inputs) else {
            break;
        };
        report.ticks_run += 1;
        // The spawn timer only reads zero right after a spawn
        if session.state().spawn_timer == 0 {
            report.obstacles_spawned += 1;
        }

        if snapshot.game_over {
            report.games_finished += 1;
            report.best_score = report.best_score.max(snapshot.score);
            report.total_score += u64::from(snapshot.score);
            if sim.verbose {
                log::info!(
                    "game {} over at tick {} with score {}",
                    report.games_finished,
                    tick,
                    snapshot.score
                );
            }
        }
        report.final_frame = Some(snapshot);
    }

    Ok(report)
}

fn print_summary(report: &SimReport) {
    println!("seed:              {}", report.seed);
    println!("ticks run:         {}", report.ticks_run);
    println!("games finished:    {}", report.games_finished);
    println!("best score:        {}", report.best_score);
    println!("total score:       {}", report.total_score);
    println!("obstacles spawned: {}", report.obstacles_spawned);
    if let Some(frame) = &report.final_frame {
        println!(
            "final frame:       y={:.1} score={} game_over={}",
            frame.avatar_y, frame.score, frame.game_over
        );
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let sim = match parse_args(&args) {
        Ok(sim) => sim,
        Err(message) => {
            eprintln!("{message}");
            print_usage();
            std::process::exit(1);
        }
    };

    let report = match simulate(&sim) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    if sim.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Failed to serialize report: {e}");
                std::process::exit(1);
            }
        }
    } else {
        print_summary(&report);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("simulator")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_parse_defaults() {
        let sim = parse_args(&args(&[])).unwrap();
        assert_eq!(sim.ticks, SIM_DEFAULT_TICKS);
        assert_eq!(sim.seed, SIM_DEFAULT_SEED);
        assert_eq!(sim.flap_every, 0);
        assert!(!sim.restart);
    }

    #[test]
    fn test_parse_options() {
        let sim = parse_args(&args(&[
            "--ticks", "100", "--seed", "7", "--flap-every", "12", "--restart", "--json",
        ]))
        .unwrap();
        assert_eq!(sim.ticks, 100);
        assert_eq!(sim.seed, 7);
        assert_eq!(sim.flap_every, 12);
        assert!(sim.restart);
        assert!(sim.json);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(parse_args(&args(&["--ticks"])).is_err());
        assert!(parse_args(&args(&["--seed", "abc"])).is_err());
        assert!(parse_args(&args(&["--bogus"])).is_err());
    }

    #[test]
    fn test_free_fall_ends_single_game() {
        let sim = SimConfig::default();
        let report = simulate(&sim).unwrap();
        // Falling from y=300 with gravity 0.5 leaves the screen on tick 35
        assert_eq!(report.ticks_run, 35);
        assert_eq!(report.games_finished, 1);
        assert_eq!(report.best_score, 0);
        assert_eq!(report.obstacles_spawned, 0);
        assert!(report.final_frame.unwrap().game_over);
    }

    #[test]
    fn test_restart_keeps_playing() {
        let sim = SimConfig {
            ticks: 200,
            restart: true,
            ..SimConfig::default()
        };
        let report = simulate(&sim).unwrap();
        assert_eq!(report.ticks_run, 200);
        assert!(report.games_finished >= 5);
    }

    #[test]
    fn test_same_seed_same_report() {
        let sim = SimConfig {
            ticks: 2_000,
            flap_every: 18,
            restart: true,
            ..SimConfig::default()
        };
        let a = simulate(&sim).unwrap();
        let b = simulate(&sim).unwrap();
        assert_eq!(a.final_frame, b.final_frame);
        assert_eq!(a.games_finished, b.games_finished);
        assert_eq!(a.obstacles_spawned, b.obstacles_spawned);
    }
}
