use chrono::{DateTime, NaiveDateTime};
use proptest::prelude::*;
use tally::{DayBoundary, Event, Tally};

fn ts(secs: i64) -> NaiveDateTime {
    DateTime::from_timestamp(secs, 0).unwrap().naive_utc()
}

fn arb_events() -> impl Strategy<Value = Vec<Event>> {
    proptest::collection::vec((0usize..8, 0u64..20, 0i64..200_000), 0..120).prop_map(|rows| {
        let mut secs = 1_300_000_000i64;
        rows.into_iter()
            .map(|(a, q, gap)| {
                secs += gap;
                Event::new(format!("actor-{a}"), q, ts(secs))
            })
            .collect()
    })
}

fn arb_mode() -> impl Strategy<Value = DayBoundary> {
    prop_oneof![Just(DayBoundary::DayOfMonth), Just(DayBoundary::CalendarDate)]
}

proptest! {
    #[test]
    fn run_is_idempotent(events in arb_events(), k in 1usize..6, mode in arb_mode()) {
        let tally = Tally::builder().max_rank(k).day_boundary(mode).build().unwrap();
        prop_assert_eq!(tally.run(&events).unwrap(), tally.run(&events).unwrap());
    }

    #[test]
    fn every_series_is_aligned_and_bounded(events in arb_events(), k in 1usize..6, mode in arb_mode()) {
        let tally = Tally::builder().max_rank(k).day_boundary(mode).build().unwrap();
        let board = tally.run(&events).unwrap();
        prop_assert_eq!(board.histories.len(), board.cohort.len());
        for s in &board.histories {
            prop_assert_eq!(s.history.len(), board.day_boundaries.len());
            prop_assert!(s.history.windows(2).all(|w| w[0] <= w[1]));
            prop_assert!(s.span.first <= s.span.last);
            prop_assert!(s.span.last <= s.history.len());
            let (times, values) = board.series_window(&s.actor).unwrap();
            prop_assert_eq!(times.len(), values.len());
        }
    }

    #[test]
    fn single_snapshot_cohort_is_capped(events in arb_events(), k in 1usize..6) {
        // Everything on one calendar date means exactly one snapshot.
        let base = events.first().map(|e| e.timestamp.date());
        let same_day: Vec<Event> = events
            .into_iter()
            .filter(|e| Some(e.timestamp.date()) == base)
            .collect();
        let board = Tally::builder().max_rank(k).build().unwrap().run(&same_day).unwrap();
        prop_assert!(board.cohort.len() <= k);
        prop_assert_eq!(board.day_boundaries.len(), usize::from(!same_day.is_empty()));
    }
}
