use std::collections::HashSet;

use crate::{
    host::Host,
    widget::{WidgetId, WidgetNode},
};

/// One (x, y) observation. Transient; only the latest one is kept.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PointerSample {
    pub x: u32,
    pub y: u32,
}

/// Extends move-tracking over a whole widget tree and keeps one shared
/// coordinate display current. Only the root is tracked by default on most
/// hosts, so without the initialization walk the display freezes the moment
/// the pointer crosses into a child widget.
#[derive(Default)]
pub struct PointerTracker {
    tracked: HashSet<WidgetId>,
    last: Option<PointerSample>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Walks `root` and every descendant, enabling move events on each and
    /// recording the set. Safe to re-run; the walk overwrites the set.
    pub fn initialize(&mut self, root: &WidgetNode, host: &mut dyn Host) {
        self.tracked.clear();
        self.walk(root, host);
        log::info!("move tracking enabled for {} widgets", self.tracked.len());
    }

    fn walk(&mut self, node: &WidgetNode, host: &mut dyn Host) {
        host.enable_move_tracking(node.id());
        self.tracked.insert(node.id());
        for child in node.children() {
            self.walk(child, host);
        }
    }

    /// Returns true when the sample was accepted. Moves for widgets outside
    /// the tracked set are dropped silently; enter/leave races make those
    /// routine, not errors.
    pub fn on_move(&mut self, widget: WidgetId, x: u32, y: u32, host: &mut dyn Host) -> bool {
        if !self.tracked.contains(&widget) {
            log::debug!("dropping move for untracked widget {widget:?}");
            return false;
        }

        self.last = Some(PointerSample { x, y });
        host.set_display_text(&format!("x: {x}, y: {y}"));
        true
    }

    pub fn last_sample(&self) -> Option<PointerSample> {
        self.last
    }

    pub fn is_tracked(&self, widget: WidgetId) -> bool {
        self.tracked.contains(&widget)
    }
}
