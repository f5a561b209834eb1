use crate::domain::chart::{ChartConfig, ChartHandle, RenderingEngine};
use crate::domain::errors::RenderingResult;
use crate::domain::logging::LogComponent;
use crate::{log_debug, log_trace};

/// Owned chart binding. Dropping it destroys the underlying handle exactly once.
pub struct BoundChart<H: ChartHandle> {
    handle: H,
}

impl<H: ChartHandle> BoundChart<H> {
    pub fn handle(&self) -> &H {
        &self.handle
    }
}

impl<H: ChartHandle> Drop for BoundChart<H> {
    fn drop(&mut self) {
        self.handle.destroy();
    }
}

/// Keeps at most one chart bound to the surface of one component.
///
/// The previous chart is always released before a new one is created, and whatever is
/// still bound is released when the manager itself is dropped.
pub struct ChartLifecycle<E: RenderingEngine> {
    engine: E,
    bound: Option<BoundChart<E::Handle>>,
    created: u64,
}

impl<E: RenderingEngine> ChartLifecycle<E> {
    pub fn new(engine: E) -> Self {
        Self { engine, bound: None, created: 0 }
    }

    /// Release the current chart, then bind a new one if a surface is present.
    ///
    /// A missing surface is not an error: nothing is created and `Ok(false)` returned.
    pub fn rebind(
        &mut self,
        surface: Option<&E::Surface>,
        config: &ChartConfig,
    ) -> RenderingResult<bool> {
        self.release();

        let Some(surface) = surface else {
            log_trace!(
                LogComponent::Application("ChartLifecycle"),
                "No surface mounted, skipping bind"
            );
            return Ok(false);
        };

        let handle = self.engine.create(surface, config)?;
        self.bound = Some(BoundChart { handle });
        self.created += 1;

        log_debug!(
            LogComponent::Application("ChartLifecycle"),
            "📈 Chart #{} bound ({} points)",
            self.created,
            config.primary_dataset().map_or(0, |d| d.data.len())
        );
        Ok(true)
    }

    /// Destroy the bound chart, if any. Returns whether something was released.
    pub fn release(&mut self) -> bool {
        self.bound.take().is_some()
    }

    pub fn is_bound(&self) -> bool {
        self.bound.is_some()
    }

    pub fn bound_handle(&self) -> Option<&E::Handle> {
        self.bound.as_ref().map(BoundChart::handle)
    }

    /// Number of charts created over the manager's lifetime.
    pub fn created_count(&self) -> u64 {
        self.created
    }
}
