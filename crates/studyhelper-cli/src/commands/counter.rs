use std::io::Write;

use clap::Subcommand;
use studyhelper_core::Counter;

use super::read_line;

#[derive(Subcommand)]
pub enum CounterAction {
    /// Count down from TARGET, one Enter press per repetition
    Run {
        /// Number of repetitions
        target: u32,
    },
}

pub fn run(action: CounterAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        CounterAction::Run { target } => {
            let mut counter = Counter::new(target);
            let stdin = std::io::stdin();
            let mut input = stdin.lock();
            let mut out = std::io::stdout();

            while !counter.is_done() {
                write!(out, "{} left (Enter to count, r to reset, q to quit) ", counter.remaining())?;
                out.flush()?;
                match read_line(&mut input)?.as_deref() {
                    None | Some("q") => break,
                    Some("r") => counter.reset(),
                    Some(_) => {
                        counter.press();
                    }
                }
            }

            if counter.is_done() {
                println!("\ndone: {} repetitions", counter.target());
            } else {
                println!("\nstopped with {} left", counter.remaining());
            }
        }
    }
    Ok(())
}
