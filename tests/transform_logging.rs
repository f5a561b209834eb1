#![cfg(not(target_arch = "wasm32"))]

use chrono::Utc;
use price_graph_wasm::application::apply_series;
use price_graph_wasm::domain::chart::ChartDataState;
use price_graph_wasm::domain::logging::{LogComponent, LogEntry, LogLevel, Logger, init_logger};
use price_graph_wasm::domain::market_data::Series;
use serde_json::json;
use std::sync::Mutex;

static ENTRIES: Mutex<Vec<LogEntry>> = Mutex::new(Vec::new());

struct CapturingLogger;

impl Logger for CapturingLogger {
    fn log(&self, entry: LogEntry) {
        ENTRIES.lock().unwrap().push(entry);
    }
}

fn errors() -> Vec<LogEntry> {
    ENTRIES
        .lock()
        .unwrap()
        .iter()
        .filter(|e| e.level == LogLevel::Error)
        .cloned()
        .collect()
}

#[test]
fn failed_update_logs_one_error_and_keeps_data() {
    init_logger(Box::new(CapturingLogger));
    let mut state = ChartDataState::default();
    let good = Series::from_pairs(&[(1000.0, 100.0), (2000.0, 110.0)]);

    assert!(apply_series(&mut state, Some(&good), &Utc));
    assert!(!apply_series(&mut state, None, &Utc));
    assert!(errors().is_empty());

    let broken = Series::new(vec![json!([1000, 100]), json!([2000])]);
    assert!(!apply_series(&mut state, Some(&broken), &Utc));

    let logged = errors();
    assert_eq!(logged.len(), 1);
    assert_eq!(logged[0].component, LogComponent::Application("ChartData"));
    assert!(
        logged[0].message.starts_with("There was an error processing chart data"),
        "{}",
        logged[0].message
    );
    assert_eq!(state.current().data_points, vec![100.0, 110.0]);
}
