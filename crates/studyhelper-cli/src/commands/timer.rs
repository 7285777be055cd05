use std::io::Write;
use std::time::Duration;

use clap::Subcommand;
use studyhelper_core::timer::{format_mm_ss, Phase, PomodoroEngine, PomodoroSettings};
use studyhelper_core::{Config, Event};

use super::read_line;

#[derive(Subcommand)]
pub enum TimerAction {
    /// Run the Pomodoro cycle in the foreground
    Run {
        /// Focus minutes (overrides config)
        #[arg(long)]
        focus: Option<u32>,
        /// Short break minutes (overrides config)
        #[arg(long)]
        short: Option<u32>,
        /// Long break minutes (overrides config)
        #[arg(long)]
        long: Option<u32>,
        /// Stop between phases and wait for a command on stdin
        #[arg(long)]
        no_auto: bool,
        /// Do not ring the terminal bell on phase changes
        #[arg(long)]
        no_sound: bool,
        /// Milliseconds per timer second
        #[arg(long, default_value = "1000")]
        tick_ms: u64,
    },
    /// Print the phase sequence for the configured durations
    Plan,
}

fn print_event(event: &Event) {
    match event {
        Event::PhaseChanged {
            from,
            to,
            focus_sessions_completed,
            cue,
            ..
        } => {
            if *cue {
                print!("\x07");
            }
            println!(
                "\n{} -> {}  ({} focus done)",
                from.label(),
                to.label(),
                focus_sessions_completed
            );
        }
        Event::TimerStarted { phase, remaining_secs, .. } => {
            println!("{} started, {} left", phase.label(), format_mm_ss(*remaining_secs));
        }
        Event::TimerStopped { phase, remaining_secs, .. } => {
            println!("{} paused, {} left", phase.label(), format_mm_ss(*remaining_secs));
        }
        Event::TimerReset { .. } => println!("reset to Focus"),
        Event::StateSnapshot {
            phase,
            focus_sessions_completed,
            remaining_secs,
            total_secs,
            running,
            ..
        } => {
            println!(
                "{} {} / {}  ({} focus done, {})",
                phase.label(),
                format_mm_ss(*remaining_secs),
                format_mm_ss(*total_secs),
                focus_sessions_completed,
                if *running { "running" } else { "stopped" }
            );
        }
    }
}

const PROMPT_HELP: &str = "Enter start, s skip, r reset, i status, f <min> focus length, q quit";

fn run_cycle(settings: PomodoroSettings, tick_ms: u64) -> Result<(), Box<dyn std::error::Error>> {
    let mut engine = PomodoroEngine::new(settings);
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut out = std::io::stdout();

    engine.start();
    while engine.phase() != Phase::Done {
        let Some(handle) = engine.tick_handle() else {
            write!(out, "{} ready ({PROMPT_HELP}) ", engine.badge())?;
            out.flush()?;
            let Some(line) = read_line(&mut input)? else {
                break;
            };
            let event = match line.split_once(' ').unwrap_or((line.as_str(), "")) {
                ("", _) => engine.toggle(),
                ("s", _) => engine.skip(),
                ("r", _) => engine.reset(),
                ("i", _) => Some(engine.snapshot()),
                ("f", minutes) => match minutes.trim().parse::<u32>() {
                    Ok(focus_min) => {
                        engine.apply_settings(PomodoroSettings {
                            focus_min,
                            ..*engine.settings()
                        });
                        println!("focus set to {} min", engine.settings().focus_min);
                        None
                    }
                    Err(_) => {
                        println!("usage: f <minutes>");
                        None
                    }
                },
                ("q", _) => break,
                _ => {
                    println!("{PROMPT_HELP}");
                    None
                }
            };
            if let Some(event) = event {
                print_event(&event);
            }
            continue;
        };

        std::thread::sleep(Duration::from_millis(tick_ms));
        if let Some(event) = engine.tick(handle) {
            print_event(&event);
            continue;
        }
        write!(out, "\r{:<11} {}", engine.badge(), format_mm_ss(engine.remaining_secs()))?;
        out.flush()?;
    }

    println!("{}", engine.badge());
    Ok(())
}

fn print_plan(settings: PomodoroSettings) {
    let mut engine = PomodoroEngine::new(PomodoroSettings {
        auto_advance: false,
        ..settings
    });
    let mut total_secs = 0;
    let mut step = 1;
    while engine.phase() != Phase::Done {
        let secs = engine.phase_duration_secs(engine.phase());
        total_secs += secs;
        println!("{step:>2}. {:<11} {}", engine.phase().label(), format_mm_ss(secs));
        engine.skip();
        step += 1;
    }
    println!("total {} min", total_secs / 60);
}

pub fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();

    match action {
        TimerAction::Run {
            focus,
            short,
            long,
            no_auto,
            no_sound,
            tick_ms,
        } => {
            let base = config.pomodoro_settings();
            let settings = PomodoroSettings {
                focus_min: focus.unwrap_or(base.focus_min),
                short_break_min: short.unwrap_or(base.short_break_min),
                long_break_min: long.unwrap_or(base.long_break_min),
                auto_advance: base.auto_advance && !no_auto,
                sound_enabled: base.sound_enabled && !no_sound,
            };
            run_cycle(settings, tick_ms)?;
        }
        TimerAction::Plan => print_plan(config.pomodoro_settings()),
    }
    Ok(())
}
