use std::io::Write;
use std::path::PathBuf;

use clap::Subcommand;
use rand::rngs::StdRng;
use rand::SeedableRng;
use studyhelper_core::quiz::{builtin_bank, load_bank, QuizSession};

use super::read_line;

#[derive(Subcommand)]
pub enum QuizAction {
    /// Play through a question bank, answering on stdin
    Play {
        /// Seed for a reproducible question order
        #[arg(long)]
        seed: Option<u64>,
        /// Question bank file (TOML, or JSON with a .json extension)
        #[arg(long)]
        bank: Option<PathBuf>,
    },
}

pub fn run(action: QuizAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        QuizAction::Play { seed, bank } => {
            let bank = match bank {
                Some(path) => load_bank(&path)?,
                None => builtin_bank(),
            };
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let mut session = QuizSession::new(bank, &mut rng);
            if session.total() == 0 {
                return Err("question bank is empty".into());
            }

            let stdin = std::io::stdin();
            let mut input = stdin.lock();
            let mut out = std::io::stdout();

            'questions: while let Some(question) = session.current().cloned() {
                println!(
                    "\nQuestion {}/{} [{}]  score {}",
                    session.number(),
                    session.total(),
                    question.category,
                    session.score()
                );
                println!("{}", question.prompt);
                for (i, option) in question.options.iter().enumerate() {
                    println!("  {}) {}", i + 1, option);
                }

                let answer = loop {
                    write!(out, "> ")?;
                    out.flush()?;
                    let Some(line) = read_line(&mut input)? else {
                        break 'questions;
                    };
                    let choice = line
                        .parse::<usize>()
                        .ok()
                        .filter(|n| (1..=question.options.len()).contains(n));
                    match choice.and_then(|n| session.choose(n - 1)) {
                        Some(answer) => break answer,
                        None => println!("pick 1-{}", question.options.len()),
                    }
                };

                if answer.correct {
                    println!("correct! {}", answer.explanation);
                } else {
                    println!(
                        "wrong, the answer is {}) {}. {}",
                        answer.correct_index + 1,
                        question.correct_option(),
                        answer.explanation
                    );
                }
                session.advance();
            }

            match session.summary() {
                Some(summary) => println!("\nfinal score: {}/{}", summary.score, summary.total),
                None => println!("\nstopped at {}/{} answered correctly", session.score(), session.total()),
            }
        }
    }
    Ok(())
}
