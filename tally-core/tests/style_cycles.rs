use tally_core::{LineStyle, color_position, legend_columns, linestyle_for};

#[test]
fn few_series_are_all_solid() {
    for i in 0..10 {
        assert_eq!(linestyle_for(i, 10), LineStyle::Solid);
    }
}

#[test]
fn medium_counts_split_in_halves() {
    let n = 30;
    assert_eq!(linestyle_for(0, n), LineStyle::DashDot);
    assert_eq!(linestyle_for(14, n), LineStyle::DashDot);
    assert_eq!(linestyle_for(15, n), LineStyle::Solid);
    assert_eq!(linestyle_for(29, n), LineStyle::Solid);
}

#[test]
fn large_counts_split_in_quarters() {
    let n = 60;
    assert_eq!(linestyle_for(0, n), LineStyle::Dotted);
    assert_eq!(linestyle_for(15, n), LineStyle::DashDot);
    assert_eq!(linestyle_for(30, n), LineStyle::Dashed);
    assert_eq!(linestyle_for(45, n), LineStyle::Solid);
    assert_eq!(LineStyle::Dashed.as_str(), "--");
}

#[test]
fn colors_stay_in_unit_interval_and_repeat_for_many_series() {
    for n in [1usize, 10, 26, 51, 100] {
        for i in 0..n {
            let c = color_position(i, n);
            assert!((0.0..1.0).contains(&c), "n={n} i={i} c={c}");
        }
    }
    assert!((color_position(5, 10) - 0.5).abs() < 1e-12);
    // palette walked twice above 25 series
    assert!((color_position(15, 30) - 0.0).abs() < 1e-12);
    assert_eq!(color_position(0, 0), 0.0);
}

#[test]
fn legend_columns_grow_every_twelve_series() {
    assert_eq!(legend_columns(0), 1);
    assert_eq!(legend_columns(11), 1);
    assert_eq!(legend_columns(24), 2);
    assert_eq!(legend_columns(40), 3);
}
