use business::domain::item::lifecycle::{LifecycleObserver, LifecycleState};
use tracing::debug;

pub struct TracingLifecycleObserver;

impl LifecycleObserver for TracingLifecycleObserver {
    fn on_transition(&self, state: LifecycleState) {
        debug!(target: "Inventory -- lifecycle", state = %state, terminal = state.is_terminal());
    }
}
