use chrono::{Local, TimeZone, Utc};
use price_graph_wasm::domain::chart::{
    ChartData, ChartDataState, extract_data_points, extract_labels,
};
use price_graph_wasm::domain::errors::TransformError;
use price_graph_wasm::domain::market_data::Series;
use price_graph_wasm::presentation::graph_caption;
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;
use serde_json::json;

fn local_clock(millis: i64) -> String {
    Local.timestamp_millis_opt(millis).unwrap().format("%H:%M").to_string()
}

fn sample_series() -> Series {
    Series::from_pairs(&[(1000.0, 100.0), (2000.0, 110.0), (3000.0, 90.0)])
}

#[quickcheck]
fn data_points_are_index_aligned(pairs: Vec<(i32, f64)>) -> TestResult {
    if pairs.iter().any(|(_, price)| !price.is_finite()) {
        return TestResult::discard();
    }
    let pairs_f64: Vec<_> = pairs.iter().map(|&(ts, p)| (ts as f64, p)).collect();
    let series = Series::from_pairs(&pairs_f64);
    let points = extract_data_points(&series).unwrap();
    TestResult::from_bool(
        points.len() == pairs.len()
            && points.iter().zip(&pairs).all(|(value, (_, price))| value == price),
    )
}

#[quickcheck]
fn labels_are_local_clock_times(seconds: Vec<i32>) -> bool {
    let pairs: Vec<(f64, f64)> = seconds.iter().map(|&s| (s as f64, 1.0)).collect();
    let labels = extract_labels(&Series::from_pairs(&pairs), &Local).unwrap();
    labels.len() == seconds.len()
        && labels
            .iter()
            .zip(&seconds)
            .all(|(label, &s)| *label == local_clock(s as i64 * 1000))
}

#[test]
fn end_to_end_three_points() {
    let data = ChartData::from_series(&sample_series(), &Local).unwrap();
    assert_eq!(data.data_points, vec![100.0, 110.0, 90.0]);
    assert_eq!(
        data.labels,
        vec![local_clock(1_000_000), local_clock(2_000_000), local_clock(3_000_000)]
    );
}

#[test]
fn absent_series_keeps_previous_data() {
    let mut state = ChartDataState::default();
    assert_eq!(state.apply(Some(&sample_series()), &Utc), Ok(true));
    let before = state.current().clone();

    assert_eq!(state.apply(None, &Utc), Ok(false));
    assert_eq!(state.current(), &before);
    assert_eq!(state.revision(), 1);
}

#[test]
fn malformed_entry_keeps_previous_data() {
    let mut state = ChartDataState::default();
    state.apply(Some(&sample_series()), &Utc).unwrap();
    let before = state.current().clone();

    let broken = Series::new(vec![json!([1000, 100]), json!(2000), json!([3000, 90])]);
    assert_eq!(
        state.apply(Some(&broken), &Utc),
        Err(TransformError::MalformedEntry { index: 1, reason: "entry is not an array" })
    );
    assert_eq!(state.current(), &before);
    assert_eq!(state.revision(), 1);
}

#[test]
fn labels_and_values_never_diverge() {
    // A series whose prices are fine but one timestamp is not: nothing is updated.
    let mut state = ChartDataState::default();
    state.apply(Some(&sample_series()), &Utc).unwrap();

    let bad_time = Series::new(vec![json!([1000, 1]), json!([null, 2])]);
    assert!(state.apply(Some(&bad_time), &Utc).is_err());
    assert_eq!(state.current().data_points, vec![100.0, 110.0, 90.0]);
    assert_eq!(state.current().labels.len(), state.current().data_points.len());
}

#[test]
fn identical_series_still_counts_as_an_update() {
    let mut state = ChartDataState::default();
    state.apply(Some(&sample_series()), &Utc).unwrap();
    state.apply(Some(&sample_series()), &Utc).unwrap();
    assert_eq!(state.revision(), 2);
}

#[test]
fn caption_follows_the_last_accepted_series() {
    let mut state = ChartDataState::default();
    assert_eq!(graph_caption(&state), None);

    state.apply(Some(&sample_series()), &Utc).unwrap();
    assert_eq!(graph_caption(&state).as_deref(), Some("Last 33 minutes"));

    let far_future = Series::new(vec![json!([0, 1]), json!([1e300, 2])]);
    assert!(matches!(
        state.apply(Some(&far_future), &Utc),
        Err(TransformError::InvalidTimestamp { index: 1, .. })
    ));
    assert_eq!(state.span_seconds(), Some(2000));
    assert_eq!(graph_caption(&state).as_deref(), Some("Last 33 minutes"));
}
