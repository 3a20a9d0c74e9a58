use tally::Tally;
use tally_core::{color_position, legend_columns, linestyle_for};
use tally_demos::common::{init_tracing, load_events};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let events = load_events("breakfast")?;
    let board = Tally::builder().max_rank(3).build()?.run(&events)?;

    let Some((start, end)) = board.time_range() else {
        println!("no events");
        return Ok(());
    };
    println!("{} days from {start} to {end}", board.day_boundaries.len());
    println!("y-axis up to {}", board.max_total());
    println!("legend columns: {}", legend_columns(board.histories.len()));

    println!("\nFinal standings:");
    for (place, (actor, total)) in board.final_standings().into_iter().enumerate() {
        println!("{:>3}. {actor}={total}", place + 1);
    }

    println!("\nSeries to draw:");
    let count = board.histories.len();
    for (i, s) in board.histories.iter().enumerate() {
        let Some((times, values)) = board.series_window(&s.actor) else {
            continue;
        };
        println!(
            "  {:<8} style={:<2} color={:.3} points={} from {} -> {:?}",
            s.actor,
            linestyle_for(i, count).as_str(),
            color_position(i, count),
            values.len(),
            times.first().map(ToString::to_string).unwrap_or_default(),
            values,
        );
    }
    Ok(())
}
