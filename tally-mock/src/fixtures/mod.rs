pub mod logs;

pub const NAMES: &[&str] = &[
    "breakfast",
    "eviction",
    "month-wrap",
    "aliased-days",
    "bad-timestamp",
    "bad-quantity",
    "empty",
];
