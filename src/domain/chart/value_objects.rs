use serde::Serialize;
use strum::{AsRefStr, Display as StrumDisplay};

use crate::domain::chart::ChartData;

/// Dataset caption shown in the legend.
pub const DEFAULT_DATASET_LABEL: &str = "Price 1w";

/// Value Object - kind of chart handed to the rendering engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, StrumDisplay, AsRefStr, Serialize)]
pub enum ChartKind {
    #[default]
    #[strum(serialize = "line")]
    #[serde(rename = "line")]
    Line,
}

/// Value Object - per-dataset styling, in CSS pixels and CSS colors
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetStyle {
    pub border_color: String,
    pub border_width: u32,
    pub point_border_width: u32,
    pub point_radius: u32,
    pub point_hover_radius: u32,
    pub point_hover_background_color: String,
}

impl Default for DatasetStyle {
    fn default() -> Self {
        Self {
            border_color: "rgb(54, 162, 235)".to_string(),
            border_width: 3,
            point_border_width: 0,
            point_radius: 2,
            point_hover_radius: 5,
            point_hover_background_color: "red".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    pub label: String,
    pub data: Vec<f64>,
    #[serde(flatten)]
    pub style: DatasetStyle,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ChartDataConfig {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisOptions {
    pub begin_at_zero: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Scales {
    pub y: AxisOptions,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartOptions {
    pub scales: Scales,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self { scales: Scales { y: AxisOptions { begin_at_zero: false } } }
    }
}

/// Complete description of one chart, shaped like a Chart.js configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ChartConfig {
    #[serde(rename = "type")]
    pub kind: ChartKind,
    pub data: ChartDataConfig,
    pub options: ChartOptions,
}

impl ChartConfig {
    /// Single-dataset line chart over `data`, y axis autoscaled.
    pub fn line(data: &ChartData, label: &str, style: &DatasetStyle) -> Self {
        Self {
            kind: ChartKind::Line,
            data: ChartDataConfig {
                labels: data.labels.clone(),
                datasets: vec![Dataset {
                    label: label.to_string(),
                    data: data.data_points.clone(),
                    style: style.clone(),
                }],
            },
            options: ChartOptions::default(),
        }
    }

    pub fn primary_dataset(&self) -> Option<&Dataset> {
        self.data.datasets.first()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
