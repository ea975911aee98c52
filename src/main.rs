/// Main entry point for the mood journal CLI
///
/// This binary is the presentation glue over the journal core: it sets up
/// logging, resolves the data file location, and maps subcommands onto the
/// repository and stats engine.

use chrono::Local;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use mood_journal::{Emotion, EntryId, EntryRepository, JsonFileStore, MoodStats};

/// Get the default data file path with a fallback strategy
fn get_default_data_path() -> Result<PathBuf, Box<dyn std::error::Error>> {
    // Try various locations in order of preference
    let potential_paths = [
        // 1. User's data directory (platform-specific)
        dirs::data_dir().map(|mut p| {
            p.push("mood-journal");
            p
        }),
        // 2. User's config directory
        dirs::config_dir().map(|mut p| {
            p.push("mood-journal");
            p
        }),
        // 3. Current working directory (last resort)
        std::env::current_dir().ok().map(|mut p| {
            p.push(".mood-journal");
            p
        }),
    ];

    for potential_path in potential_paths.iter().flatten() {
        if std::fs::create_dir_all(potential_path).is_ok() {
            // Test if we can write to this directory
            let test_file = potential_path.join(".test_write");
            if std::fs::write(&test_file, "test").is_ok() {
                let _ = std::fs::remove_file(&test_file);
                let mut data_path = potential_path.clone();
                data_path.push("entries.json");
                return Ok(data_path);
            }
        }
    }

    // Ultimate fallback: use a temporary directory
    let mut temp_path = std::env::temp_dir();
    temp_path.push("mood-journal");
    std::fs::create_dir_all(&temp_path)?;
    temp_path.push("entries.json");

    tracing::warn!("Using temporary directory for entries: {}", temp_path.display());
    Ok(temp_path)
}

/// Command line arguments for the mood journal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the JSON data file
    /// If not provided, uses a default location in the user's data directory
    #[arg(long)]
    data_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Enable verbose output (implies debug)
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Record how you feel today
    Add {
        /// The emotion for this entry
        #[arg(short, long, value_enum)]
        emotion: Emotion,
        /// Your reflection for the day
        note: String,
    },
    /// Show every entry, newest first
    List,
    /// Rewrite the note of an existing entry
    Edit {
        /// Id of the entry to edit
        id: String,
        /// The replacement note
        note: String,
    },
    /// Remove an entry
    Delete {
        /// Id of the entry to remove
        id: String,
    },
    /// Show streaks, emotion frequency and weekday activity
    Stats,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Set up logging based on command line flags
    let log_level = if args.verbose {
        "debug"
    } else if args.debug {
        "info"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(format!("mood_journal={}", log_level))
        .with_writer(std::io::stderr) // Logs to stderr, output to stdout
        .init();

    // Determine the data file path
    let data_path = match args.data_file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.exists() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            path
        }
        None => get_default_data_path()?,
    };

    info!("Using entries at: {}", data_path.display());

    let repository = EntryRepository::new(JsonFileStore::new(data_path));

    match args.command {
        Command::Add { emotion, note } => {
            let display_date = Local::now().format("%A, %B %-d").to_string();
            let entry = repository.create(emotion.glyph(), &note, &display_date).await?;
            println!(
                "{} Saved your reflection for {} (id {})",
                entry.emotion, entry.formatted_date, entry.id
            );
        }
        Command::List => {
            let entries = repository.list().await?;
            if entries.is_empty() {
                println!("No entries yet. Add one to start your journal.");
            } else {
                for entry in entries {
                    let written = entry
                        .created_at
                        .with_timezone(&Local)
                        .format("%A, %B %-d, %Y %H:%M");
                    println!("{}  {}  {}", written, entry.emotion, entry.note);
                    println!("    id: {}", entry.id);
                }
            }
        }
        Command::Edit { id, note } => {
            let entry = repository.update(&EntryId::from(id.as_str()), &note).await?;
            println!("✅ Updated entry {}", entry.id);
        }
        Command::Delete { id } => {
            repository.delete(&EntryId::from(id.as_str())).await?;
            println!("🗑️ Deleted entry {}", id);
        }
        Command::Stats => {
            let entries = repository.list().await?;
            let stats = MoodStats::from_entries(&entries);
            print_stats(&stats);
        }
    }

    Ok(())
}

/// Render the stats screen
fn print_stats(stats: &MoodStats) {
    if stats.total_entries == 0 {
        println!("No entries recorded yet. Your statistics will appear here.");
        return;
    }

    println!("Your statistics");
    if let Some(entry) = &stats.most_recent {
        println!("Last entry: {}", entry.formatted_date);
    }
    println!();
    println!("🔥 Max streak:     {}", stats.streak);
    println!("📝 Total entries:  {}", stats.total_entries);

    if !stats.emotion_frequency.is_empty() {
        println!();
        println!("Your most frequent emotions");
        for emotion in stats.emotion_frequency.iter().take(3) {
            println!("  {}  {} — {} times", emotion.glyph, emotion.name, emotion.count);
        }
    }

    println!();
    println!("Activity by day of week");
    let labels = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
    for (label, count) in labels.iter().zip(stats.weekly_activity.iter()) {
        println!("  {}  {:3}  {}", label, count, "█".repeat(*count as usize));
    }

    if let Some(top) = stats.emotion_frequency.first() {
        println!();
        println!("You have felt {} most frequently", top.name.to_lowercase());
    }
}
