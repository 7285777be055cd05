use chrono::{Local, NaiveDate, Utc};
use clap::Subcommand;
use studyhelper_core::storage::{Database, HabitStore};
use studyhelper_core::Config;

#[derive(Subcommand)]
pub enum HabitAction {
    /// Add a new habit
    Add {
        /// Habit name
        name: String,
        /// Completions needed per day
        #[arg(long, default_value = "1")]
        goal: u32,
        /// Category (defaults to "General")
        #[arg(long, default_value = "")]
        category: String,
    },
    /// List habits grouped by category with today's progress
    List,
    /// Count one completion for today
    Done {
        /// Habit ID
        id: String,
    },
    /// Delete a habit and its history
    Delete {
        /// Habit ID
        id: String,
    },
    /// Show totals for today
    Stats,
    /// Show the last 13 weeks of a habit
    Graph {
        /// Habit ID
        id: String,
    },
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn run(action: HabitAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let store = HabitStore::new(&db);
    let mut tracker = store.load();
    let config = Config::load_or_default();
    let window = config.habits.streak_window_days;
    let today = today();

    match action {
        HabitAction::Add {
            name,
            goal,
            category,
        } => {
            let mut rng = rand::thread_rng();
            let habit = tracker.add_habit(&name, goal, &category, Utc::now(), &mut rng)?;
            println!("Habit added: {} ({})", habit.name, habit.id);
            store.save(&tracker);
        }
        HabitAction::List => {
            if tracker.habits.is_empty() {
                println!("No habits yet.");
            }
            for (category, habits) in tracker.grouped_by_category() {
                println!("{category}");
                for habit in habits {
                    let progress = tracker.progress(&habit.id, today)?;
                    let streak = tracker.streak_within(&habit.id, today, window)?;
                    println!(
                        "  {}  {:<20} {}/{} ({:.0}%)  streak {}  {}",
                        habit.id,
                        habit.name,
                        progress.count,
                        progress.goal,
                        progress.percent,
                        streak,
                        if progress.is_complete() { "done" } else { "" }
                    );
                }
            }
        }
        HabitAction::Done { id } => {
            let count = tracker.record_progress(&id, today)?;
            let goal = tracker.habit(&id)?.goal;
            println!("{count}/{goal} today");
            store.save(&tracker);
        }
        HabitAction::Delete { id } => {
            let removed = tracker.delete_habit(&id)?;
            println!("Habit deleted: {}", removed.name);
            store.save(&tracker);
        }
        HabitAction::Stats => {
            let stats = tracker.stats_within(today, window);
            println!("Total habits:    {}", stats.total_habits);
            println!("Completed today: {}", stats.completed_today);
            println!("Best streak:     {}", stats.best_streak);
        }
        HabitAction::Graph { id } => {
            let name = tracker.habit(&id)?.name.clone();
            let levels = tracker.contribution_levels(&id, today)?;
            let glyphs = config.ui.graph_glyphs();
            println!("{name}");
            for week in levels.chunks(7) {
                let start = week.first().map(|(d, _)| d.format("%Y-%m-%d").to_string());
                let cells: String = week
                    .iter()
                    .map(|(_, level)| glyphs[usize::from(*level).min(4)])
                    .collect();
                println!("  {}  {}", start.unwrap_or_default(), cells);
            }
        }
    }
    Ok(())
}
