use std::{cell::RefCell, process, rc::Rc};

use tela::{CloseDecision, EventCore, Host, KeyCode, Result, WidgetId, WidgetNode};

/// Stand-in presentation layer that prints instead of painting. A real host
/// would back these calls with its windowing toolkit.
struct TerminalHost {
    scripted_answer: CloseDecision,
}

impl Host for TerminalHost {
    fn set_display_text(&mut self, text: &str) {
        println!("[label] {text}");
    }

    fn set_status_bar_visible(&mut self, visible: bool) {
        println!("[status bar] visible = {visible}");
    }

    fn enable_move_tracking(&mut self, widget: WidgetId) {
        println!("[tracking] {widget:?}");
    }

    fn prompt_yes_no(&mut self, title: &str, message: &str) -> CloseDecision {
        println!("[dialog] {title}: {message} -> {:?}", self.scripted_answer);
        self.scripted_answer
    }

    fn terminate_process(&mut self) {
        println!("[quit] terminating");
        process::exit(0);
    }
}

fn main() -> Result<()> {
    tela::init_logging();

    let host = Rc::new(RefCell::new(TerminalHost {
        scripted_answer: CloseDecision::Cancelled,
    }));
    let mut core = EventCore::new(host);

    let lcd = WidgetNode::new();
    let slider = WidgetNode::new();
    let slider_id = slider.id();
    let window = WidgetNode::new().child(lcd).child(slider);
    let window_id = window.id();

    core.setup(&window)?;

    core.deliver_move(window_id, 120, 80);
    core.deliver_move(slider_id, 42, 17);

    // First close attempt is cancelled by the scripted answer.
    core.deliver_close_request()?;

    core.deliver_status_toggle(false)?;
    core.deliver_status_toggle(true)?;

    // Escape skips the dialog and exits the process.
    core.deliver_key(KeyCode::ESCAPE)?;
    Ok(())
}
