use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct WidgetId(u64);

static NEXT_WIDGET_ID: AtomicU64 = AtomicU64::new(0);
impl WidgetId {
    pub fn new() -> Self {
        Self(NEXT_WIDGET_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for WidgetId {
    fn default() -> Self {
        Self::new()
    }
}

/// One node of the host-owned widget tree, as handed to the pointer
/// coordinator. Parent/child back-references stay on the host side; this
/// mirror only carries identity and structure.
pub struct WidgetNode {
    id: WidgetId,
    children: Vec<WidgetNode>,
}

impl WidgetNode {
    pub fn new() -> Self {
        Self {
            id: WidgetId::new(),
            children: Vec::new(),
        }
    }

    pub fn child(mut self, child: WidgetNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    pub fn children(&self) -> &[WidgetNode] {
        &self.children
    }
}

impl Default for WidgetNode {
    fn default() -> Self {
        Self::new()
    }
}
