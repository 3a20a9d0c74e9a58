use tally::{DayBoundary, Tally};
use tally_demos::common::load_events;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let events = load_events("aliased-days")?;

    for mode in [DayBoundary::DayOfMonth, DayBoundary::CalendarDate] {
        let board = Tally::builder().day_boundary(mode).build()?.run(&events)?;
        println!("{mode:?}: {} day boundaries", board.day_boundaries.len());
        for s in &board.histories {
            println!("  {} {:?} span={:?}", s.actor, s.history, s.span.as_range());
        }
    }
    Ok(())
}
