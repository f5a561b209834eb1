use chrono::Utc;
use price_graph_wasm::domain::chart::{
    ChartConfig, ChartData, ChartKind, DEFAULT_DATASET_LABEL, DatasetStyle,
};
use price_graph_wasm::domain::market_data::Series;
use serde_json::json;

fn sample_config() -> ChartConfig {
    let series = Series::from_pairs(&[(1000.0, 100.0), (2000.0, 110.0), (3000.0, 90.0)]);
    let data = ChartData::from_series(&series, &Utc).unwrap();
    ChartConfig::line(&data, DEFAULT_DATASET_LABEL, &DatasetStyle::default())
}

#[test]
fn config_uses_chart_js_keys() {
    let value = serde_json::to_value(sample_config()).unwrap();
    assert_eq!(value["type"], json!("line"));
    assert_eq!(value["data"]["labels"], json!(["00:16", "00:33", "00:50"]));
    assert_eq!(value["data"]["datasets"][0]["data"], json!([100.0, 110.0, 90.0]));
    assert_eq!(value["data"]["datasets"][0]["label"], json!("Price 1w"));
    assert_eq!(value["options"]["scales"]["y"]["beginAtZero"], json!(false));
}

#[test]
fn dataset_styling_matches_the_graph_look() {
    let config = sample_config();
    let style = &config.primary_dataset().unwrap().style;
    assert_eq!(style.border_width, 3);
    assert_eq!(style.point_border_width, 0);
    assert_eq!(style.point_radius, 2);
    assert_eq!(style.point_hover_radius, 5);
    assert_eq!(style.point_hover_background_color, "red");
    assert_eq!(config.kind, ChartKind::Line);
    assert_eq!(config.kind.as_ref(), "line");
}

#[test]
fn serialized_config_snapshot() {
    insta::assert_snapshot!(
        sample_config().to_json().unwrap(),
        @r#"{"type":"line","data":{"labels":["00:16","00:33","00:50"],"datasets":[{"label":"Price 1w","data":[100.0,110.0,90.0],"borderColor":"rgb(54, 162, 235)","borderWidth":3,"pointBorderWidth":0,"pointRadius":2,"pointHoverRadius":5,"pointHoverBackgroundColor":"red"}]},"options":{"scales":{"y":{"beginAtZero":false}}}}"#
    );
}

#[test]
fn empty_data_still_yields_one_dataset() {
    let config =
        ChartConfig::line(&ChartData::default(), DEFAULT_DATASET_LABEL, &DatasetStyle::default());
    assert_eq!(config.data.datasets.len(), 1);
    assert!(config.data.labels.is_empty());
    assert!(config.primary_dataset().unwrap().data.is_empty());
}
