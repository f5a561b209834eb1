//! Pure layout math for the canvas line chart.

/// Space kept around the plot for tick labels and the legend, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Insets {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

pub const PLOT_INSETS: Insets = Insets { left: 64.0, right: 16.0, top: 32.0, bottom: 28.0 };

/// Approximate width of an `HH:mm` label plus gap at 12px.
pub const X_LABEL_SLOT_PX: f64 = 44.0;
/// Upper bound for y-axis ticks.
pub const MAX_Y_TICKS: usize = 6;

/// Autoscaled value range.
///
/// Non-finite values are ignored. A flat series is widened by 5% of its value (or by 1
/// around zero) so the range never collapses. With `begin_at_zero` the range always
/// includes zero.
pub fn value_range(values: &[f64], begin_at_zero: bool) -> (f64, f64) {
    let (mut min, mut max) = values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));

    if min > max {
        return (0.0, 1.0);
    }
    if begin_at_zero {
        min = min.min(0.0);
        max = max.max(0.0);
    }
    if min == max {
        let offset = if max == 0.0 { 1.0 } else { (max * 0.05).abs() };
        max += offset;
        if !begin_at_zero || min != 0.0 {
            min -= offset;
        }
    }
    (min, max)
}

fn nice_number(range: f64, round: bool) -> f64 {
    let exponent = range.log10().floor();
    let fraction = range / 10f64.powf(exponent);
    let nice = if round {
        match fraction {
            f if f < 1.5 => 1.0,
            f if f < 3.0 => 2.0,
            f if f < 7.0 => 5.0,
            _ => 10.0,
        }
    } else {
        match fraction {
            f if f <= 1.0 => 1.0,
            f if f <= 2.0 => 2.0,
            f if f <= 5.0 => 5.0,
            _ => 10.0,
        }
    };
    nice * 10f64.powf(exponent)
}

/// Evenly spaced "nice" ticks covering `[min, max]`. Requires `max > min`.
pub fn nice_ticks(min: f64, max: f64, max_ticks: usize) -> Vec<f64> {
    let max_ticks = max_ticks.max(2);
    let range = nice_number(max - min, false);
    let step = nice_number(range / (max_ticks - 1) as f64, true);
    let start = (min / step).floor() * step;
    let end = (max / step).ceil() * step;
    let count = ((end - start) / step).round() as usize;
    (0..=count).map(|i| start + i as f64 * step).collect()
}

/// Render `value` with as many decimals as the tick step needs.
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step > 0.0 && step.is_finite() {
        (-step.log10().floor()).clamp(0.0, 8.0) as usize
    } else {
        0
    };
    format!("{:.*}", decimals, value)
}

/// Show every `n`-th x label so labels of `slot_px` never overlap.
pub fn label_stride(count: usize, available_px: f64, slot_px: f64) -> usize {
    if count == 0 || slot_px <= 0.0 {
        return 1;
    }
    let slots = (available_px / slot_px).floor().max(1.0) as usize;
    count.div_ceil(slots).max(1)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn inside(width: f64, height: f64, insets: Insets) -> Self {
        Self {
            x: insets.left,
            y: insets.top,
            width: (width - insets.left - insets.right).max(1.0),
            height: (height - insets.top - insets.bottom).max(1.0),
        }
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }
}

/// Projection of `count` points onto a plot area over `[y_min, y_max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineLayout {
    pub area: PlotArea,
    pub y_min: f64,
    pub y_max: f64,
    pub count: usize,
}

impl LineLayout {
    pub fn new(area: PlotArea, count: usize, (y_min, y_max): (f64, f64)) -> Self {
        Self { area, y_min, y_max, count }
    }

    fn step(&self) -> f64 {
        if self.count > 1 { self.area.width / (self.count - 1) as f64 } else { 0.0 }
    }

    pub fn x_at(&self, index: usize) -> f64 {
        if self.count <= 1 {
            return self.area.x + self.area.width / 2.0;
        }
        self.area.x + index as f64 * self.step()
    }

    pub fn y_at(&self, value: f64) -> f64 {
        let span = self.y_max - self.y_min;
        let ratio = if span > 0.0 { (value - self.y_min) / span } else { 0.5 };
        self.area.y + self.area.height * (1.0 - ratio)
    }

    /// Index of the point closest to horizontal position `x`, clamped to the data.
    pub fn nearest_index(&self, x: f64) -> Option<usize> {
        match self.count {
            0 => None,
            1 => Some(0),
            count => {
                let raw = ((x - self.area.x) / self.step()).round();
                Some(raw.clamp(0.0, (count - 1) as f64) as usize)
            }
        }
    }
}
