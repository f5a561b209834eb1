use gloo::events::EventListener;
use std::cell::{Cell, RefCell};
use std::f64::consts::TAU;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use super::geometry::{
    LineLayout, MAX_Y_TICKS, PLOT_INSETS, PlotArea, X_LABEL_SLOT_PX, format_tick, label_stride,
    nice_ticks, value_range,
};
use crate::domain::{
    chart::{ChartConfig, ChartHandle, DatasetStyle, RenderingEngine},
    errors::{RenderError, RenderingResult},
    logging::LogComponent,
};
use crate::{log_debug, log_warn};

const DEFAULT_WIDTH: u32 = 800;
const DEFAULT_HEIGHT: u32 = 400;
const FONT: &str = "12px sans-serif";
const TEXT_COLOR: &str = "#666666";
const GRID_COLOR: &str = "rgba(0, 0, 0, 0.1)";

fn draw_err(err: JsValue) -> RenderError {
    RenderError::Draw(format!("{err:?}"))
}

/// Everything needed to repaint one chart.
struct Scene {
    width: f64,
    height: f64,
    labels: Vec<String>,
    values: Vec<f64>,
    dataset_label: String,
    style: DatasetStyle,
    ticks: Vec<f64>,
    layout: LineLayout,
    hover: Option<usize>,
}

impl Scene {
    fn new(width: u32, height: u32, config: &ChartConfig) -> Self {
        let (dataset_label, values, style) = match config.primary_dataset() {
            Some(dataset) => (dataset.label.clone(), dataset.data.clone(), dataset.style.clone()),
            None => (String::new(), Vec::new(), DatasetStyle::default()),
        };
        let (min, max) = value_range(&values, config.options.scales.y.begin_at_zero);
        let ticks = nice_ticks(min, max, MAX_Y_TICKS);
        let y_bounds = (
            ticks.first().copied().unwrap_or(min),
            ticks.last().copied().unwrap_or(max),
        );
        let area = PlotArea::inside(width as f64, height as f64, PLOT_INSETS);

        Self {
            width: width as f64,
            height: height as f64,
            labels: config.data.labels.clone(),
            layout: LineLayout::new(area, values.len(), y_bounds),
            values,
            dataset_label,
            style,
            ticks,
            hover: None,
        }
    }

    fn draw(&self, ctx: &CanvasRenderingContext2d) -> RenderingResult<()> {
        ctx.clear_rect(0.0, 0.0, self.width, self.height);
        ctx.set_font(FONT);
        self.draw_legend(ctx)?;
        self.draw_y_axis(ctx)?;
        self.draw_x_labels(ctx)?;
        self.draw_line(ctx);
        self.draw_points(ctx)?;
        self.draw_hover(ctx)
    }

    fn draw_legend(&self, ctx: &CanvasRenderingContext2d) -> RenderingResult<()> {
        let center = self.width / 2.0;
        ctx.set_fill_style_str(&self.style.border_color);
        ctx.fill_rect(center - 60.0, 8.0, 36.0, 12.0);
        ctx.set_fill_style_str(TEXT_COLOR);
        ctx.set_text_align("left");
        ctx.set_text_baseline("middle");
        ctx.fill_text(&self.dataset_label, center - 18.0, 14.0).map_err(draw_err)
    }

    fn draw_y_axis(&self, ctx: &CanvasRenderingContext2d) -> RenderingResult<()> {
        let area = self.layout.area;
        let step = match self.ticks.as_slice() {
            [first, second, ..] => second - first,
            _ => 1.0,
        };
        ctx.set_text_align("right");
        ctx.set_text_baseline("middle");
        ctx.set_line_width(1.0);
        for &tick in &self.ticks {
            let y = self.layout.y_at(tick);
            ctx.set_stroke_style_str(GRID_COLOR);
            ctx.begin_path();
            ctx.move_to(area.x, y);
            ctx.line_to(area.right(), y);
            ctx.stroke();
            ctx.set_fill_style_str(TEXT_COLOR);
            ctx.fill_text(&format_tick(tick, step), area.x - 8.0, y).map_err(draw_err)?;
        }
        Ok(())
    }

    fn draw_x_labels(&self, ctx: &CanvasRenderingContext2d) -> RenderingResult<()> {
        let area = self.layout.area;
        let stride = label_stride(self.labels.len(), area.width, X_LABEL_SLOT_PX);
        ctx.set_fill_style_str(TEXT_COLOR);
        ctx.set_text_align("center");
        ctx.set_text_baseline("top");
        for (index, label) in self.labels.iter().enumerate().step_by(stride) {
            ctx.fill_text(label, self.layout.x_at(index), area.bottom() + 8.0).map_err(draw_err)?;
        }
        Ok(())
    }

    fn draw_line(&self, ctx: &CanvasRenderingContext2d) {
        if self.values.len() < 2 {
            return;
        }
        ctx.set_stroke_style_str(&self.style.border_color);
        ctx.set_line_width(self.style.border_width as f64);
        ctx.set_line_join("round");
        ctx.begin_path();
        for (index, &value) in self.values.iter().enumerate() {
            let (x, y) = (self.layout.x_at(index), self.layout.y_at(value));
            if index == 0 { ctx.move_to(x, y) } else { ctx.line_to(x, y) }
        }
        ctx.stroke();
    }

    fn draw_points(&self, ctx: &CanvasRenderingContext2d) -> RenderingResult<()> {
        let radius = self.style.point_radius as f64;
        if radius <= 0.0 {
            return Ok(());
        }
        ctx.set_fill_style_str(&self.style.border_color);
        for (index, &value) in self.values.iter().enumerate() {
            ctx.begin_path();
            ctx.arc(self.layout.x_at(index), self.layout.y_at(value), radius, 0.0, TAU)
                .map_err(draw_err)?;
            ctx.fill();
        }
        Ok(())
    }

    fn draw_hover(&self, ctx: &CanvasRenderingContext2d) -> RenderingResult<()> {
        let Some(index) = self.hover else {
            return Ok(());
        };
        let Some(&value) = self.values.get(index) else {
            return Ok(());
        };
        let (x, y) = (self.layout.x_at(index), self.layout.y_at(value));

        ctx.set_fill_style_str(&self.style.point_hover_background_color);
        ctx.begin_path();
        ctx.arc(x, y, self.style.point_hover_radius as f64, 0.0, TAU).map_err(draw_err)?;
        ctx.fill();

        let label = self.labels.get(index).map(String::as_str).unwrap_or_default();
        let readout = format!("{label}  {value:.2}");
        ctx.set_fill_style_str(TEXT_COLOR);
        ctx.set_text_align(if x > self.width / 2.0 { "right" } else { "left" });
        ctx.set_text_baseline("bottom");
        let offset = if x > self.width / 2.0 { -10.0 } else { 10.0 };
        ctx.fill_text(&readout, x + offset, y - 8.0).map_err(draw_err)
    }
}

#[derive(Debug, Default)]
struct ChartTally {
    created: Cell<u64>,
    destroyed: Cell<u64>,
}

/// Line chart drawn with the 2D canvas API.
///
/// Clones share one tally of the charts they created and destroyed.
#[derive(Debug, Default, Clone)]
pub struct CanvasLineRenderer {
    tally: Rc<ChartTally>,
}

impl CanvasLineRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn created_count(&self) -> u64 {
        self.tally.created.get()
    }

    pub fn destroyed_count(&self) -> u64 {
        self.tally.destroyed.get()
    }

    /// Charts created and not yet destroyed.
    pub fn live_count(&self) -> u64 {
        self.created_count() - self.destroyed_count()
    }

    fn context_of(canvas: &HtmlCanvasElement) -> RenderingResult<CanvasRenderingContext2d> {
        canvas
            .get_context("2d")
            .map_err(|e| RenderError::ContextUnavailable(format!("{e:?}")))?
            .ok_or_else(|| {
                RenderError::ContextUnavailable("2d context is not supported".to_string())
            })?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| RenderError::ContextUnavailable("not a 2d context".to_string()))
    }

    /// Match the backing store to the laid-out size, falling back to 800x400.
    fn fit_canvas(canvas: &HtmlCanvasElement) -> (u32, u32) {
        let laid_out = |px: i32| u32::try_from(px).ok().filter(|px| *px > 0);
        let width = laid_out(canvas.client_width()).unwrap_or(DEFAULT_WIDTH);
        let height = laid_out(canvas.client_height()).unwrap_or(DEFAULT_HEIGHT);
        canvas.set_width(width);
        canvas.set_height(height);
        (width, height)
    }
}

impl RenderingEngine for CanvasLineRenderer {
    type Surface = HtmlCanvasElement;
    type Handle = CanvasLineChart;

    fn create(
        &self,
        canvas: &HtmlCanvasElement,
        config: &ChartConfig,
    ) -> RenderingResult<CanvasLineChart> {
        let context = Self::context_of(canvas)?;
        let (width, height) = Self::fit_canvas(canvas);
        let scene = Rc::new(RefCell::new(Scene::new(width, height, config)));
        scene.borrow().draw(&context)?;

        log_debug!(
            LogComponent::Infrastructure("CanvasLineRenderer"),
            "🎨 Drew {} points on {}x{} canvas",
            scene.borrow().values.len(),
            width,
            height
        );

        let on_move = {
            let scene = Rc::clone(&scene);
            let context = context.clone();
            EventListener::new(canvas, "mousemove", move |event| {
                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                let mut scene = scene.borrow_mut();
                let hover = scene.layout.nearest_index(event.offset_x() as f64);
                if hover != scene.hover {
                    scene.hover = hover;
                    repaint(&scene, &context);
                }
            })
        };
        let on_leave = {
            let scene = Rc::clone(&scene);
            let context = context.clone();
            EventListener::new(canvas, "mouseleave", move |_| {
                let mut scene = scene.borrow_mut();
                if scene.hover.take().is_some() {
                    repaint(&scene, &context);
                }
            })
        };

        self.tally.created.set(self.tally.created.get() + 1);
        Ok(CanvasLineChart {
            context,
            scene,
            listeners: vec![on_move, on_leave],
            tally: Rc::clone(&self.tally),
        })
    }
}

fn repaint(scene: &Scene, context: &CanvasRenderingContext2d) {
    if let Err(err) = scene.draw(context) {
        log_warn!(
            LogComponent::Infrastructure("CanvasLineRenderer"),
            "Hover repaint failed: {}",
            err
        );
    }
}

/// Chart bound to one canvas. Owns the canvas event listeners.
pub struct CanvasLineChart {
    context: CanvasRenderingContext2d,
    scene: Rc<RefCell<Scene>>,
    listeners: Vec<EventListener>,
    tally: Rc<ChartTally>,
}

impl CanvasLineChart {
    pub fn point_count(&self) -> usize {
        self.scene.borrow().values.len()
    }

    pub fn hovered_index(&self) -> Option<usize> {
        self.scene.borrow().hover
    }

    pub fn is_listening(&self) -> bool {
        !self.listeners.is_empty()
    }
}

impl ChartHandle for CanvasLineChart {
    fn destroy(&mut self) {
        if self.listeners.is_empty() {
            return;
        }
        // Dropping the listeners detaches them from the canvas.
        self.listeners.clear();
        let scene = self.scene.borrow();
        self.context.clear_rect(0.0, 0.0, scene.width, scene.height);
        self.tally.destroyed.set(self.tally.destroyed.get() + 1);
    }
}
