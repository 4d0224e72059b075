pub mod app;
pub mod close;
pub mod error;
pub mod host;
pub mod pointer;
pub mod signals;
pub mod widget;

pub use app::{EventCore, KeyCode, channel};
pub use close::{CloseDecision, CloseGuard, CloseOutcome, CloseState};
pub use error::{CoreError, Result};
pub use host::Host;
pub use pointer::{PointerSample, PointerTracker};
pub use signals::{SignalBus, Subscription};
pub use widget::{WidgetId, WidgetNode};

pub fn init_logging() {
    env_logger::init();
}
