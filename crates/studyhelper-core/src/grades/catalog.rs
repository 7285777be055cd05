//! Static module catalog for the six-semester curriculum.
//!
//! Every module carries exactly one [`AssessmentShape`], fixed here at
//! definition time. Coefficients are positive integers.

use serde::Serialize;

use crate::error::ValidationError;
use AssessmentShape::{Single, TdTpExam, TpExam};

/// How a module is assessed, and therefore which inputs it needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentShape {
    /// One final note, no blending.
    Single,
    /// Tutorial work plus exam.
    #[default]
    TdExam,
    /// Tutorial and lab work averaged, plus exam.
    TdTpExam,
    /// Lab work plus exam.
    TpExam,
}

impl AssessmentShape {
    /// Components a module of this shape requires, in display order.
    pub fn components(self) -> &'static [Component] {
        match self {
            AssessmentShape::Single => &[Component::Note],
            AssessmentShape::TdExam => &[Component::Td, Component::Exam],
            AssessmentShape::TdTpExam => &[Component::Td, Component::Tp, Component::Exam],
            AssessmentShape::TpExam => &[Component::Tp, Component::Exam],
        }
    }
}

/// One assessment input of a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Component {
    Note,
    Td,
    Tp,
    Exam,
}

impl Component {
    /// Suffix used when building input identifiers.
    pub fn suffix(self) -> &'static str {
        match self {
            Component::Note => "note",
            Component::Td => "td",
            Component::Tp => "tp",
            Component::Exam => "ex",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Component::Note => "Note",
            Component::Td => "TD",
            Component::Tp => "TP",
            Component::Exam => "Exam",
        }
    }

    /// Parse a component from its suffix or label, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "note" => Some(Component::Note),
            "td" => Some(Component::Td),
            "tp" => Some(Component::Tp),
            "ex" | "exam" => Some(Component::Exam),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModuleDescriptor {
    pub key: &'static str,
    pub name: &'static str,
    pub coefficient: u32,
    pub shape: AssessmentShape,
    pub optional: bool,
}

impl ModuleDescriptor {
    const fn new(key: &'static str, name: &'static str, coefficient: u32) -> Self {
        Self {
            key,
            name,
            coefficient,
            shape: AssessmentShape::TdExam,
            optional: false,
        }
    }

    const fn with_shape(mut self, shape: AssessmentShape) -> Self {
        self.shape = shape;
        self
    }

    const fn elective(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Name as rendered in result rows.
    pub fn display_name(&self) -> String {
        if self.optional {
            format!("{} (choice)", self.name)
        } else {
            self.name.to_string()
        }
    }

    /// Identifier of one input field: semester key, module key, component suffix.
    pub fn input_id(&self, semester: &str, component: Component) -> String {
        format!("{semester}{}{}", self.key, component.suffix())
    }

    pub fn components(&self) -> &'static [Component] {
        self.shape.components()
    }
}

/// One semester of the curriculum.
#[derive(Debug, Serialize)]
pub struct Semester {
    pub key: &'static str,
    pub label: &'static str,
    pub modules: &'static [ModuleDescriptor],
}

impl Semester {
    pub fn module(&self, key: &str) -> Result<&'static ModuleDescriptor, ValidationError> {
        self.modules
            .iter()
            .find(|m| m.key == key)
            .ok_or_else(|| ValidationError::UnknownModule {
                semester: self.key.to_string(),
                module: key.to_string(),
            })
    }

    /// Every input identifier of this semester, in catalog order.
    pub fn input_ids(&self) -> Vec<String> {
        self.modules
            .iter()
            .flat_map(|m| m.components().iter().map(|c| m.input_id(self.key, *c)))
            .collect()
    }

    pub fn total_coefficient(&self) -> u32 {
        self.modules.iter().map(|m| m.coefficient).sum()
    }
}

static S1: [ModuleDescriptor; 8] = [
    ModuleDescriptor::new("an1", "Analysis 1", 4),
    ModuleDescriptor::new("alg1", "Algebra 1", 3),
    ModuleDescriptor::new("asd1", "ASD 1", 4).with_shape(TdTpExam),
    ModuleDescriptor::new("ms1", "MS 1", 3),
    ModuleDescriptor::new("ste", "STE", 1).with_shape(Single),
    ModuleDescriptor::new("eng", "English", 1).with_shape(Single),
    ModuleDescriptor::new("phy1", "Physics 1", 2).elective(),
    ModuleDescriptor::new("elec", "Electronics", 2).elective(),
];

static S2: [ModuleDescriptor; 8] = [
    ModuleDescriptor::new("an2", "Analysis 2", 4),
    ModuleDescriptor::new("alg2", "Algebra 2", 2),
    ModuleDescriptor::new("asd2", "ASD 2", 4).with_shape(TdTpExam),
    ModuleDescriptor::new("ms2", "MS 2", 2),
    ModuleDescriptor::new("proba", "ProbaStats", 2),
    ModuleDescriptor::new("ict", "ICT", 1).with_shape(Single),
    ModuleDescriptor::new("ptm", "PTM", 1).with_shape(TpExam),
    ModuleDescriptor::new("phy2", "Physics 2", 2),
];

static S3: [ModuleDescriptor; 7] = [
    ModuleDescriptor::new("algo", "Algo", 3).with_shape(TdTpExam),
    ModuleDescriptor::new("archi", "Archi", 3).with_shape(TdTpExam),
    ModuleDescriptor::new("tg", "TG", 2),
    ModuleDescriptor::new("si", "SI", 3),
    ModuleDescriptor::new("eng", "English", 1).with_shape(Single),
    ModuleDescriptor::new("mn", "MN", 2),
    ModuleDescriptor::new("lm", "LM", 2),
];

static S4: [ModuleDescriptor; 7] = [
    ModuleDescriptor::new("os", "OS", 3).with_shape(TdTpExam),
    ModuleDescriptor::new("tl", "TL", 2),
    ModuleDescriptor::new("rx", "RX", 3).with_shape(TdTpExam),
    ModuleDescriptor::new("bd", "BD", 3).with_shape(TdTpExam),
    ModuleDescriptor::new("eng", "English", 1).with_shape(Single),
    ModuleDescriptor::new("poo", "POO", 2).with_shape(TpExam),
    ModuleDescriptor::new("web", "Web", 2).with_shape(TpExam),
];

static S5: [ModuleDescriptor; 10] = [
    ModuleDescriptor::new("os2", "OS 2", 2).with_shape(TdTpExam),
    ModuleDescriptor::new("compil", "Compilation", 2).with_shape(TdTpExam),
    ModuleDescriptor::new("logp", "Logic Prog", 2),
    ModuleDescriptor::new("gl2", "SE 2", 2).with_shape(TdTpExam),
    ModuleDescriptor::new("mhi", "MHI", 2).with_shape(TdTpExam),
    ModuleDescriptor::new("ps", "ProbStats", 2).elective(),
    ModuleDescriptor::new("pl", "Linear Prog", 2).elective(),
    ModuleDescriptor::new("pp", "Paradigms", 2).elective(),
    ModuleDescriptor::new("ai", "AI", 2).elective(),
    ModuleDescriptor::new("eng", "English", 1),
];

static S6: [ModuleDescriptor; 8] = [
    ModuleDescriptor::new("mob", "Mobile", 3).with_shape(TdTpExam),
    ModuleDescriptor::new("sec", "Security", 3),
    ModuleDescriptor::new("adb", "Admin BD", 2).elective(),
    ModuleDescriptor::new("info", "Infographics", 2).elective(),
    ModuleDescriptor::new("ws", "Web Sem", 2).elective(),
    ModuleDescriptor::new("crypto", "Crypto", 2).elective(),
    ModuleDescriptor::new("sw", "Sci Writing", 1).elective(),
    ModuleDescriptor::new("proj", "Project", 4).with_shape(Single),
];

/// The full curriculum, in semester order.
pub static SEMESTERS: [Semester; 6] = [
    Semester { key: "s1", label: "S1 average", modules: &S1 },
    Semester { key: "s2", label: "S2 average", modules: &S2 },
    Semester { key: "s3", label: "S3 average", modules: &S3 },
    Semester { key: "s4", label: "S4 average", modules: &S4 },
    Semester { key: "s5", label: "S5 average", modules: &S5 },
    Semester { key: "s6", label: "S6 average", modules: &S6 },
];

/// Look up a semester by key (`s1`..`s6`, case-insensitive).
pub fn semester(key: &str) -> Result<&'static Semester, ValidationError> {
    let key = key.trim().to_ascii_lowercase();
    SEMESTERS
        .iter()
        .find(|s| s.key == key)
        .ok_or(ValidationError::UnknownSemester(key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn module_keys_unique_per_semester() {
        for sem in &SEMESTERS {
            let keys: HashSet<_> = sem.modules.iter().map(|m| m.key).collect();
            assert_eq!(keys.len(), sem.modules.len(), "duplicate key in {}", sem.key);
        }
    }

    #[test]
    fn coefficients_are_positive() {
        for sem in &SEMESTERS {
            assert!(sem.modules.iter().all(|m| m.coefficient > 0));
        }
    }

    #[test]
    fn input_ids_are_globally_unique() {
        let mut seen = HashSet::new();
        for sem in &SEMESTERS {
            for id in sem.input_ids() {
                assert!(seen.insert(id.clone()), "duplicate id {id}");
            }
        }
    }

    #[test]
    fn input_ids_follow_shape() {
        let s1 = semester("s1").unwrap();
        let ids = s1.input_ids();
        assert!(ids.contains(&"s1an1td".to_string()));
        assert!(ids.contains(&"s1an1ex".to_string()));
        assert!(ids.contains(&"s1asd1tp".to_string()));
        assert!(ids.contains(&"s1stenote".to_string()));
        assert!(!ids.contains(&"s1an1tp".to_string()));
    }

    #[test]
    fn unknown_semester_is_rejected() {
        assert_eq!(
            semester("s7").unwrap_err(),
            ValidationError::UnknownSemester("s7".into())
        );
        assert!(semester("S3").is_ok());
    }

    #[test]
    fn default_shape_is_td_exam() {
        let s1 = semester("s1").unwrap();
        assert_eq!(s1.module("an1").unwrap().shape, AssessmentShape::TdExam);
        assert_eq!(s1.module("asd1").unwrap().shape, AssessmentShape::TdTpExam);
        assert_eq!(semester("s2").unwrap().module("ptm").unwrap().shape, AssessmentShape::TpExam);
    }

    #[test]
    fn component_parse_accepts_suffix_and_label() {
        assert_eq!(Component::parse("ex"), Some(Component::Exam));
        assert_eq!(Component::parse("Exam"), Some(Component::Exam));
        assert_eq!(Component::parse("TD"), Some(Component::Td));
        assert_eq!(Component::parse("lab"), None);
    }
}
