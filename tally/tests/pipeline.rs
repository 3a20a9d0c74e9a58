use chrono::{NaiveDate, NaiveDateTime};
use tally::{DayBoundary, Event, Span, Tally, TallyError};
use tally_mock::MockLog;

fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, s)
        .unwrap()
}

fn events(name: &str) -> Vec<Event> {
    MockLog::new().events(name).unwrap().unwrap()
}

#[test]
fn single_actor_end_to_end() {
    let tally = Tally::builder().build().unwrap();
    let board = tally
        .run(&[
            Event::new("A", 5, at(2021, 3, 1, 9, 0, 0)),
            Event::new("A", 3, at(2021, 3, 2, 9, 0, 0)),
        ])
        .unwrap();
    assert_eq!(board.cohort, vec![("A".to_string(), 8)]);
    assert_eq!(board.day_boundaries.len(), 2);
    assert_eq!(board.history("A"), Some(&[5, 8][..]));
    assert_eq!(board.span("A"), Some(Span { first: 0, last: 2 }));
}

#[test]
fn breakfast_top_three_keeps_everyone_who_ever_ranked() {
    let tally = Tally::builder().max_rank(3).build().unwrap();
    let board = tally.run(&events("breakfast")).unwrap();

    let members: Vec<&str> = board.histories.iter().map(|s| s.actor.as_str()).collect();
    assert_eq!(members, vec!["hilde", "arvid", "maja", "oskar", "tuva", "ebbe"]);
    assert_eq!(board.day_boundaries.len(), 8);
    assert_eq!(board.day_boundaries[5], at(2019, 5, 1, 8, 5, 5));

    assert_eq!(board.history("hilde"), Some(&[2, 2, 3, 3, 6, 6, 6, 7][..]));
    assert_eq!(board.history("ebbe"), Some(&[0, 0, 0, 0, 0, 2, 6, 9][..]));
    assert_eq!(board.span("hilde"), Some(Span { first: 1, last: 8 }));
    assert_eq!(board.span("maja"), Some(Span { first: 0, last: 5 }));
    assert_eq!(board.span("tuva"), Some(Span { first: 2, last: 7 }));
}

#[test]
fn breakfast_top_one_breaks_final_tie_by_first_seen() {
    let tally = Tally::builder().max_rank(1).build().unwrap();
    let board = tally.run(&events("breakfast")).unwrap();

    // ebbe ties tuva at 9 on the last day but was seen later
    assert!(board.series("ebbe").is_none());
    assert_eq!(
        board.cohort,
        vec![
            ("hilde".to_string(), 2),
            ("arvid".to_string(), 3),
            ("maja".to_string(), 4),
            ("oskar".to_string(), 7),
            ("tuva".to_string(), 9),
        ]
    );
    assert_eq!(board.history("oskar"), Some(&[0, 0, 4, 6, 6, 7, 7, 7][..]));
}

#[test]
fn evicted_leader_keeps_a_flat_series() {
    let tally = Tally::builder().max_rank(2).build().unwrap();
    let board = tally.run(&events("eviction")).unwrap();
    assert_eq!(board.cohort.len(), 4);
    assert_eq!(board.history("early"), Some(&[5, 5, 5, 5][..]));
    assert_eq!(board.span("early"), Some(Span { first: 0, last: 4 }));
    assert_eq!(board.span("second"), Some(Span { first: 0, last: 2 }));
    assert_eq!(board.span("fourth"), Some(Span { first: 2, last: 4 }));
}

#[test]
fn month_wrap_counts_as_new_day() {
    let board = Tally::builder()
        .build()
        .unwrap()
        .run(&events("month-wrap"))
        .unwrap();
    assert_eq!(board.day_boundaries.len(), 2);
    assert_eq!(board.history("kari"), Some(&[2, 5][..]));
}

#[test]
fn calendar_mode_separates_aliased_days() {
    let log = events("aliased-days");
    let literal = Tally::builder().build().unwrap().run(&log).unwrap();
    assert_eq!(literal.history("kari"), Some(&[2, 6][..]));

    let dated = Tally::builder()
        .day_boundary(DayBoundary::CalendarDate)
        .build()
        .unwrap()
        .run(&log)
        .unwrap();
    assert_eq!(dated.history("kari"), Some(&[2, 5, 6][..]));
    assert_eq!(dated.span("kari"), Some(Span { first: 0, last: 3 }));
}

#[test]
fn empty_log_is_not_an_error() {
    let board = Tally::builder().build().unwrap().run(&[]).unwrap();
    assert!(board.is_empty());
    assert!(board.cohort.is_empty());
    assert!(board.histories.is_empty());
    assert_eq!(board.time_range(), None);
    assert_eq!(board.max_total(), 0);
}

#[test]
fn parse_errors_abort_the_run() {
    let tally = Tally::builder().build().unwrap();
    let log = MockLog::new();

    let err = tally
        .run_records(log.rows("bad-timestamp").unwrap())
        .unwrap_err();
    assert_eq!(err, TallyError::malformed_timestamp(1, "2021-02-30 10:00:00"));

    let err = tally
        .run_records(log.rows("bad-quantity").unwrap())
        .unwrap_err();
    assert_eq!(err, TallyError::invalid_quantity(1, "-3"));
}

#[test]
fn run_records_matches_run_on_parsed_events() {
    let tally = Tally::builder().max_rank(2).build().unwrap();
    let rows = MockLog::new().rows("breakfast").unwrap();
    assert_eq!(
        tally.run_records(rows).unwrap(),
        tally.run(&events("breakfast")).unwrap()
    );
}

#[test]
fn overflowing_totals_abort_the_run() {
    let tally = Tally::builder().build().unwrap();
    let err = tally
        .run_records([
            ["1", "18446744073709551615", "2021-03-01 09:00:00", "whale"],
            ["2", "18446744073709551615", "2021-03-02 09:00:00", "whale"],
        ])
        .unwrap_err();
    assert!(matches!(err, TallyError::Data(_)));
}
