use crate::domain::chart::ChartConfig;
use crate::domain::errors::RenderingResult;

/// A live chart bound to a surface.
pub trait ChartHandle {
    /// Release the engine resources held for the surface.
    fn destroy(&mut self);
}

/// Engine that draws a [`ChartConfig`] onto a surface.
pub trait RenderingEngine {
    type Surface: ?Sized;
    type Handle: ChartHandle;

    fn create(
        &self,
        surface: &Self::Surface,
        config: &ChartConfig,
    ) -> RenderingResult<Self::Handle>;
}
