use crate::{close::CloseDecision, widget::WidgetId};

/// Presentation-layer seam. The host owns windows, menus, painting and the
/// process; the core only calls back through this trait.
pub trait Host {
    /// Update the shared coordinate label.
    fn set_display_text(&mut self, text: &str);

    /// Toggle the status element owned by the host's checkable menu entry.
    fn set_status_bar_visible(&mut self, visible: bool);

    /// Opt a widget into per-widget move events (the coordinator calls this
    /// for the whole tree at initialization).
    fn enable_move_tracking(&mut self, widget: WidgetId);

    /// Render a modal yes/no dialog and return the user's choice. A
    /// dismissed prompt may return `CloseDecision::Pending`; the close
    /// machine treats that as Cancelled.
    fn prompt_yes_no(&mut self, title: &str, message: &str) -> CloseDecision;

    /// Quit the whole process. Reached through the `quit` channel or a
    /// confirmed close.
    fn terminate_process(&mut self);
}
