use tally::Tally;
use tally_demos::common::load_events;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let events = load_events("eviction")?;
    let board = Tally::builder().max_rank(2).build()?.run(&events)?;
    println!("{}", serde_json::to_string_pretty(&board)?);
    Ok(())
}
