use clap::Subcommand;
use studyhelper_core::storage::{Database, MarksStore};

#[derive(Subcommand)]
pub enum NotesAction {
    /// Print the saved notes
    Show,
    /// Replace the saved notes
    Set {
        /// New notes text
        text: String,
    },
}

pub fn run(action: NotesAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let store = MarksStore::new(&db);

    match action {
        NotesAction::Show => {
            let notes = store.notes();
            if notes.is_empty() {
                println!("(no notes)");
            } else {
                println!("{notes}");
            }
        }
        NotesAction::Set { text } => {
            store.set_notes(&text);
            println!("notes saved");
        }
    }
    Ok(())
}
