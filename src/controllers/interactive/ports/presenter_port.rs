use crate::controllers::interactive::events::render_event::RenderEvent;

/// Receives every published frame and every failed pass.
pub trait InteractiveControllerPresenterPort: Send + Sync {
    fn present(&self, event: RenderEvent);
}
