//! Grade engine: module marks, semester averages, pass/fail.
//!
//! The engine never reads UI state. Callers pass a plain mapping from input
//! identifier (see [`ModuleDescriptor::input_id`]) to the raw field text and
//! get a plain result back.

use std::collections::BTreeMap;

use serde::Serialize;

use super::catalog::{AssessmentShape, Component, ModuleDescriptor, Semester};
use super::scale::{is_blank, is_pass, parse_mark, Weights};
use crate::error::GradeError;

/// Raw field values keyed by input identifier.
pub type MarkInputs = BTreeMap<String, String>;

/// Computed mark of one included module.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModuleResult {
    pub name: String,
    pub mark: f64,
    pub coefficient: u32,
}

/// Outcome of a semester computation. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SemesterResult {
    pub semester: String,
    pub weighted_average: f64,
    pub total_coefficient: u32,
    pub passed: bool,
    pub rows: Vec<ModuleResult>,
}

impl SemesterResult {
    pub fn status(&self) -> &'static str {
        if self.passed {
            "PASS"
        } else {
            "FAIL"
        }
    }
}

fn raw<'a>(inputs: &'a MarkInputs, id: &str) -> &'a str {
    inputs.get(id).map(String::as_str).unwrap_or("")
}

fn read(inputs: &MarkInputs, semester: &str, module: &ModuleDescriptor, c: Component) -> Option<f64> {
    parse_mark(raw(inputs, &module.input_id(semester, c)))
}

/// Mark of a single module, or `None` if any component it needs is invalid.
pub fn module_mark(semester: &str, module: &ModuleDescriptor, inputs: &MarkInputs) -> Option<f64> {
    let get = |c| read(inputs, semester, module, c);

    let mark = match module.shape {
        AssessmentShape::Single => get(Component::Note)?,
        AssessmentShape::TdExam => {
            let (td, ex) = (get(Component::Td), get(Component::Exam));
            Weights::CC * td? + Weights::EXAM * ex?
        }
        AssessmentShape::TdTpExam => {
            let (td, tp, ex) = (get(Component::Td), get(Component::Tp), get(Component::Exam));
            Weights::CC * ((td? + tp?) / 2.0) + Weights::EXAM * ex?
        }
        AssessmentShape::TpExam => {
            let (tp, ex) = (get(Component::Tp), get(Component::Exam));
            Weights::CC * tp? + Weights::EXAM * ex?
        }
    };
    Some(mark)
}

/// Whether a module takes part in the average.
///
/// Required modules always do. Optional ones only once any of their fields
/// has content.
pub fn is_selected(semester: &str, module: &ModuleDescriptor, inputs: &MarkInputs) -> bool {
    if !module.optional {
        return true;
    }
    module
        .components()
        .iter()
        .any(|c| !is_blank(raw(inputs, &module.input_id(semester, *c))))
}

/// Compute the coefficient-weighted average of a semester.
///
/// A single invalid field in any included module blocks the whole result.
pub fn compute_semester(semester: &Semester, inputs: &MarkInputs) -> Result<SemesterResult, GradeError> {
    let mut sum = 0.0;
    let mut total_coefficient = 0;
    let mut rows = Vec::new();

    for module in semester.modules {
        if !is_selected(semester.key, module, inputs) {
            continue;
        }

        let mark = module_mark(semester.key, module, inputs).ok_or_else(GradeError::missing_input)?;

        sum += mark * f64::from(module.coefficient);
        total_coefficient += module.coefficient;
        rows.push(ModuleResult {
            name: module.display_name(),
            mark,
            coefficient: module.coefficient,
        });
    }

    if total_coefficient == 0 {
        return Err(GradeError::NoModulesSelected);
    }

    let weighted_average = sum / f64::from(total_coefficient);
    tracing::debug!(
        semester = semester.key,
        average = weighted_average,
        total_coefficient,
        "semester computed"
    );

    Ok(SemesterResult {
        semester: semester.key.to_string(),
        weighted_average,
        total_coefficient,
        passed: is_pass(weighted_average),
        rows,
    })
}
