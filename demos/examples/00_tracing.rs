use tally::Tally;
use tally_demos::common::{init_tracing, load_events};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Spans for each pipeline stage plus per-snapshot trace events
    init_tracing();

    let events = load_events("breakfast")?;
    let tally = Tally::builder().max_rank(3).build()?;
    let board = tally.run(&events)?;

    tracing::info!(
        members = board.cohort.len(),
        days = board.day_boundaries.len(),
        "done"
    );
    Ok(())
}
