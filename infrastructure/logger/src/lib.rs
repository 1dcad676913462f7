mod tracing_lifecycle;
mod tracing_logger;
mod tracing_notifier;

pub use tracing_lifecycle::TracingLifecycleObserver;
pub use tracing_logger::TracingLogger;
pub use tracing_notifier::TracingNotifier;
