pub mod catalog;
mod engine;
mod sample;
pub mod scale;

pub use catalog::{semester, AssessmentShape, Component, ModuleDescriptor, Semester, SEMESTERS};
pub use engine::{compute_semester, is_selected, module_mark, MarkInputs, ModuleResult, SemesterResult};
pub use sample::sample_inputs;
pub use scale::{clamp_mark, parse_mark, MarkScale, Weights};
