use crossterm::event;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use flapper::build_info;
use flapper::core::FrameClock;
use flapper::input::map_event;
use flapper::ui::draw_ui;
use flapper::{FrameOutcome, GameConfig, GameInput, Session};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

type Tui = Terminal<CrosstermBackend<io::Stdout>>;

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!("{}", build_info::version_string("flapper"));
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Flapper - terminal arcade reflex game\n");
                println!("Usage: flapper [option]\n");
                println!("Controls:");
                println!("  Space/Up/Enter  Flap (restart after a crash)");
                println!("  Esc/Q/Ctrl+C    Quit\n");
                println!("Options:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Run 'flapper --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    env_logger::init();

    let seed: u64 = rand::random();
    let mut session = Session::with_seed(GameConfig::default(), seed)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    log::info!("Game initialized with seed: {}", seed);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut session);

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Fixed-rate loop: input, one tick, render, wait.
fn run(terminal: &mut Tui, session: &mut Session) -> io::Result<()> {
    let config = session.config().clone();
    let mut clock = FrameClock::new(config.ticks_per_second);

    loop {
        let inputs = poll_inputs()?;

        match session.frame(&inputs) {
            FrameOutcome::Quit => {
                log::info!("Quit requested at score {}", session.score());
                break;
            }
            FrameOutcome::Continue(snapshot) => {
                terminal.draw(|f| draw_ui(f, &snapshot, &config))?;
            }
        }

        clock.wait();
    }

    Ok(())
}

/// Drain every pending terminal event without blocking.
fn poll_inputs() -> io::Result<Vec<GameInput>> {
    let mut inputs = Vec::new();
    while event::poll(Duration::ZERO)? {
        if let Some(input) = map_event(&event::read()?) {
            inputs.push(input);
        }
    }
    Ok(inputs)
}
