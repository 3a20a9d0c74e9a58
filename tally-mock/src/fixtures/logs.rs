type Row = [&'static str; 4];

pub fn by_name(name: &str) -> Option<&'static [Row]> {
    match name {
        "breakfast" => Some(BREAKFAST),
        "eviction" => Some(EVICTION),
        "month-wrap" => Some(MONTH_WRAP),
        "aliased-days" => Some(ALIASED_DAYS),
        "bad-timestamp" => Some(BAD_TIMESTAMP),
        "bad-quantity" => Some(BAD_QUANTITY),
        "empty" => Some(&[]),
        _ => None,
    }
}

/// Ten days across an April/May month end, six eaters.
const BREAKFAST: &[Row] = &[
    ["1", "2", "2019-04-24 08:01:12", "hilde"],
    ["2", "1", "2019-04-24 08:05:40", "arvid"],
    ["3", "3", "2019-04-24 09:12:03", "maja"],
    ["4", "2", "2019-04-25 07:58:30", "arvid"],
    ["5", "1", "2019-04-25 08:30:00", "hilde"],
    ["6", "4", "2019-04-25 10:02:11", "oskar"],
    ["7", "1", "2019-04-26 08:00:00", "maja"],
    ["8", "2", "2019-04-26 08:44:19", "oskar"],
    ["9", "5", "2019-04-26 12:30:55", "tuva"],
    ["10", "1", "2019-04-29 08:10:10", "arvid"],
    ["11", "2", "2019-04-29 08:15:42", "tuva"],
    ["12", "3", "2019-04-29 09:01:00", "hilde"],
    ["13", "1", "2019-04-30 07:45:00", "maja"],
    ["14", "2", "2019-04-30 08:20:00", "ebbe"],
    ["15", "1", "2019-05-01 08:05:05", "oskar"],
    ["16", "4", "2019-05-01 08:06:00", "ebbe"],
    ["17", "1", "2019-05-01 11:11:11", "arvid"],
    ["18", "2", "2019-05-02 08:00:30", "tuva"],
    ["19", "3", "2019-05-02 08:31:45", "ebbe"],
    ["20", "1", "2019-05-03 07:59:59", "hilde"],
    ["21", "2", "2019-05-03 08:40:00", "maja"],
    ["22", "1", "2019-05-03 09:00:00", "tuva"],
];

/// `early` leads on day one, then three later arrivals push it out of a top-2.
const EVICTION: &[Row] = &[
    ["1", "5", "2020-02-03 09:00:00", "early"],
    ["2", "6", "2020-02-04 09:00:00", "second"],
    ["3", "7", "2020-02-05 09:00:00", "third"],
    ["4", "8", "2020-02-06 09:00:00", "fourth"],
];

const MONTH_WRAP: &[Row] = &[
    ["1", "2", "2021-03-31 10:00:00", "kari"],
    ["2", "3", "2021-04-01 10:00:00", "kari"],
];

/// Same day-of-month in consecutive months with nothing in between.
const ALIASED_DAYS: &[Row] = &[
    ["1", "2", "2021-01-05 10:00:00", "kari"],
    ["2", "3", "2021-02-05 10:00:00", "kari"],
    ["3", "1", "2021-02-06 10:00:00", "kari"],
];

const BAD_TIMESTAMP: &[Row] = &[
    ["1", "2", "2021-01-05 10:00:00", "kari"],
    ["2", "3", "2021-02-30 10:00:00", "kari"],
];

const BAD_QUANTITY: &[Row] = &[
    ["1", "2", "2021-01-05 10:00:00", "kari"],
    ["2", "-3", "2021-01-06 10:00:00", "kari"],
];
