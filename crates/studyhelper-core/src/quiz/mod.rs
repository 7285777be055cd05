mod bank;
mod session;

pub use bank::{builtin_bank, load_bank, parse_bank, Question};
pub use session::{Answer, QuizSession, Summary};
