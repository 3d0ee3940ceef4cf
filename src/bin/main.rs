use checkpoint_lib::{advance_checkpoint, PruneOutcome};
use std::env;
use std::error::Error;
use std::path::Path;

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);
    let (users, accumulated, current) = match (args.next(), args.next(), args.next()) {
        (Some(users), Some(accumulated), Some(current)) => (users, accumulated, current),
        _ => {
            println!("Usage: advance <pending_users> <accumulated_graph> <current_graph>");
            return Ok(());
        }
    };

    println!("Saving current graph {} to {}...", current, accumulated);
    let summary = advance_checkpoint(
        Path::new(&users),
        Path::new(&accumulated),
        Path::new(&current),
    )?;
    println!(
        "Appended {} bytes ({} lines, {} distinct users).",
        summary.appended_bytes, summary.records, summary.distinct_users
    );

    println!("Last processed user: {}", summary.last_user);
    println!("Removing processed users from {}...", users);
    println!("Original users: {}", summary.pending_before);
    match summary.outcome {
        PruneOutcome::Advanced { removed } => println!("Removed users: {}", removed),
        PruneOutcome::NotFound => eprintln!(
            "Warning: user {} is not in the pending list, nothing was removed.",
            summary.last_user
        ),
    }
    println!("Remaining users: {}", summary.pending_after);

    Ok(())
}
