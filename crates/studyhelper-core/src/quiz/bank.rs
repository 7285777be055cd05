use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidationError};

const BUILTIN: &str = include_str!("../../assets/questions.toml");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub category: String,
    pub prompt: String,
    pub options: Vec<String>,
    /// Zero-based index into `options`.
    pub answer: usize,
    pub explanation: String,
}

impl Question {
    pub fn correct_option(&self) -> &str {
        self.options.get(self.answer).map(String::as_str).unwrap_or("")
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if !(2..=3).contains(&self.options.len()) {
            return Err(ValidationError::InvalidValue {
                field: "options".into(),
                message: format!("'{}' needs 2 or 3 options", self.prompt),
            });
        }
        if self.answer >= self.options.len() {
            return Err(ValidationError::InvalidValue {
                field: "answer".into(),
                message: format!("'{}' answer index {} out of range", self.prompt, self.answer),
            });
        }
        Ok(())
    }
}

#[derive(Deserialize)]
struct BankFile {
    #[serde(rename = "question")]
    questions: Vec<Question>,
}

/// Parse a TOML question bank (`[[question]]` tables).
pub fn parse_bank(toml_src: &str) -> Result<Vec<Question>, ValidationError> {
    let file: BankFile = toml::from_str(toml_src).map_err(|e| ValidationError::InvalidValue {
        field: "question bank".into(),
        message: e.to_string(),
    })?;
    for q in &file.questions {
        q.validate()?;
    }
    Ok(file.questions)
}

/// Load a question bank from disk.
///
/// Files ending in `.json` are read as JSON (`{"question": [...]}`),
/// anything else as TOML.
pub fn load_bank(path: &Path) -> Result<Vec<Question>> {
    let content = std::fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if !is_json {
        return Ok(parse_bank(&content)?);
    }

    let file: BankFile = serde_json::from_str(&content)?;
    for q in &file.questions {
        q.validate()?;
    }
    Ok(file.questions)
}

/// The question bank shipped with the crate.
pub fn builtin_bank() -> Vec<Question> {
    match parse_bank(BUILTIN) {
        Ok(bank) => bank,
        Err(e) => {
            tracing::warn!("built-in question bank is invalid: {e}");
            Vec::new()
        }
    }
}
