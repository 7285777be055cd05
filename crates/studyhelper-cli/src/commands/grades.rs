use clap::Subcommand;
use studyhelper_core::grades::{self, Component, Semester, SEMESTERS};
use studyhelper_core::storage::{Database, MarksStore};
use studyhelper_core::ValidationError;

#[derive(Subcommand)]
pub enum GradesAction {
    /// List semesters, or the modules of one semester
    List {
        /// Semester key (s1..s6)
        semester: Option<String>,
    },
    /// Record one mark field
    Set {
        /// Semester key (s1..s6)
        semester: String,
        /// Module key (e.g. "an1")
        module: String,
        /// Component: note, td, tp or ex
        component: String,
        /// Mark between 0 and 20 (stored as typed)
        value: String,
    },
    /// Show stored marks of a semester with per-module results
    Show {
        semester: String,
    },
    /// Compute the semester average
    Compute {
        semester: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Clear every stored mark of a semester
    Reset {
        semester: String,
    },
    /// Fill a semester with example marks
    Example {
        semester: String,
    },
}

fn component_list(components: &[Component]) -> String {
    components
        .iter()
        .map(|c| c.suffix())
        .collect::<Vec<_>>()
        .join(",")
}

fn print_semesters() {
    for sem in &SEMESTERS {
        println!(
            "{}  {} modules, total coefficient {}",
            sem.key,
            sem.modules.len(),
            sem.total_coefficient()
        );
    }
}

fn print_modules(sem: &Semester) {
    for module in sem.modules {
        println!(
            "{:<8} {:<24} coef {}  [{}]",
            module.key,
            module.display_name(),
            module.coefficient,
            component_list(module.components())
        );
    }
}

pub fn run(action: GradesAction) -> Result<(), Box<dyn std::error::Error>> {
    if let GradesAction::List { semester } = &action {
        match semester {
            Some(key) => print_modules(grades::semester(key)?),
            None => print_semesters(),
        }
        return Ok(());
    }

    let db = Database::open()?;
    let store = MarksStore::new(&db);

    match action {
        GradesAction::List { .. } => {}
        GradesAction::Set {
            semester,
            module,
            component,
            value,
        } => {
            let sem = grades::semester(&semester)?;
            let descriptor = sem.module(&module.to_ascii_lowercase())?;
            let component = Component::parse(&component)
                .filter(|c| descriptor.components().contains(c))
                .ok_or_else(|| ValidationError::UnknownComponent {
                    module: descriptor.key.to_string(),
                    component: component.clone(),
                })?;

            let id = descriptor.input_id(sem.key, component);
            store.persist_input(&id, &value);
            match grades::parse_mark(&value) {
                Some(mark) => println!("{id} = {mark:.2}"),
                None => println!("{id} = '{value}' (not a mark between 0 and 20)"),
            }
        }
        GradesAction::Show { semester } => {
            let sem = grades::semester(&semester)?;
            let inputs = store.marks();
            println!("{}", sem.label);
            for module in sem.modules {
                let fields = module
                    .components()
                    .iter()
                    .map(|c| {
                        let raw = inputs
                            .get(&module.input_id(sem.key, *c))
                            .map(String::as_str)
                            .unwrap_or("");
                        format!("{}={}", c.suffix(), if raw.trim().is_empty() { "-" } else { raw.trim() })
                    })
                    .collect::<Vec<_>>()
                    .join(" ");
                let mark = if grades::is_selected(sem.key, module, &inputs) {
                    grades::module_mark(sem.key, module, &inputs)
                        .map(|m| format!("{m:.2}"))
                        .unwrap_or_else(|| "incomplete".to_string())
                } else {
                    "not selected".to_string()
                };
                println!("  {:<24} {:<28} {}", module.display_name(), fields, mark);
            }
        }
        GradesAction::Compute { semester, json } => {
            let sem = grades::semester(&semester)?;
            match grades::compute_semester(sem, &store.marks()) {
                Ok(result) if json => println!("{}", serde_json::to_string_pretty(&result)?),
                Ok(result) => {
                    for row in &result.rows {
                        println!("  {:<24} {:>6.2}  x{}", row.name, row.mark, row.coefficient);
                    }
                    println!(
                        "{}: {:.2}  {}",
                        sem.label,
                        result.weighted_average,
                        result.status()
                    );
                }
                Err(warning) => eprintln!("warning: {warning}"),
            }
        }
        GradesAction::Reset { semester } => {
            let sem = grades::semester(&semester)?;
            let removed = store.clear_semester(sem.key);
            println!("cleared {removed} marks from {}", sem.key);
        }
        GradesAction::Example { semester } => {
            let sem = grades::semester(&semester)?;
            store.restore(&grades::sample_inputs(sem.key));
            println!("loaded example marks for {}", sem.key);
        }
    }
    Ok(())
}
