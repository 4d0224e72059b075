use std::{cell::RefCell, rc::Rc};

use tela::{CloseDecision, CloseOutcome, EventCore, Host, KeyCode, WidgetId, WidgetNode, channel};

/// Records every core-to-host call so the tests can assert on the exact
/// sequence a real presentation layer would observe.
#[derive(Default)]
struct RecordingHost {
    display: String,
    status_visible: Option<bool>,
    tracking_enabled: Vec<WidgetId>,
    prompt_answer: Option<CloseDecision>,
    prompts_shown: u32,
    terminations: u32,
}

impl Host for RecordingHost {
    fn set_display_text(&mut self, text: &str) {
        self.display = text.to_string();
    }

    fn set_status_bar_visible(&mut self, visible: bool) {
        self.status_visible = Some(visible);
    }

    fn enable_move_tracking(&mut self, widget: WidgetId) {
        self.tracking_enabled.push(widget);
    }

    fn prompt_yes_no(&mut self, title: &str, message: &str) -> CloseDecision {
        assert_eq!(title, "Message");
        assert_eq!(message, "Are you sure to quit?");
        self.prompts_shown += 1;
        self.prompt_answer.unwrap_or(CloseDecision::Pending)
    }

    fn terminate_process(&mut self) {
        self.terminations += 1;
    }
}

fn window_with_children() -> (WidgetNode, WidgetId, WidgetId) {
    let lcd = WidgetNode::new();
    let lcd_id = lcd.id();
    let slider = WidgetNode::new();
    let label = WidgetNode::new();
    let label_id = label.id();

    let root = WidgetNode::new().child(lcd).child(slider).child(label);
    (root, lcd_id, label_id)
}

fn new_core(answer: Option<CloseDecision>) -> (EventCore<RecordingHost>, Rc<RefCell<RecordingHost>>) {
    let host = Rc::new(RefCell::new(RecordingHost {
        prompt_answer: answer,
        ..Default::default()
    }));
    (EventCore::new(host.clone()), host)
}

#[test]
fn pointer_display_stays_continuous_across_child_widgets() {
    let (mut core, host) = new_core(None);
    let (root, lcd_id, label_id) = window_with_children();
    let root_id = root.id();
    core.setup(&root).unwrap();

    // Every widget in the tree was opted into move events.
    assert_eq!(host.borrow().tracking_enabled.len(), 4);

    assert!(core.deliver_move(root_id, 10, 20));
    assert_eq!(host.borrow().display, "x: 10, y: 20");

    // Crossing into children keeps the display moving.
    assert!(core.deliver_move(lcd_id, 42, 17));
    assert_eq!(host.borrow().display, "x: 42, y: 17");
    assert!(core.deliver_move(label_id, 0, 0));
    assert_eq!(host.borrow().display, "x: 0, y: 0");

    // A widget the walk never saw is dropped without touching the display.
    assert!(!core.deliver_move(WidgetId::new(), 7, 7));
    assert_eq!(host.borrow().display, "x: 0, y: 0");
}

#[test]
fn close_request_confirm_then_quit() {
    let (mut core, host) = new_core(Some(CloseDecision::Confirmed));
    core.setup(&WidgetNode::new()).unwrap();

    assert_eq!(core.deliver_close_request().unwrap(), CloseOutcome::Accepted);

    let host = host.borrow();
    assert_eq!(host.prompts_shown, 1);
    assert_eq!(host.terminations, 1);
}

#[test]
fn close_request_cancel_keeps_running_and_unlocks() {
    let (mut core, host) = new_core(Some(CloseDecision::Cancelled));
    core.setup(&WidgetNode::new()).unwrap();

    assert_eq!(core.deliver_close_request().unwrap(), CloseOutcome::Rejected);
    assert_eq!(host.borrow().terminations, 0);

    // The state machine returned to Idle, so the close button still works.
    assert_eq!(core.deliver_close_request().unwrap(), CloseOutcome::Rejected);
    assert_eq!(host.borrow().prompts_shown, 2);
}

#[test]
fn escape_terminates_without_a_prompt() {
    let (mut core, host) = new_core(Some(CloseDecision::Cancelled));
    core.setup(&WidgetNode::new()).unwrap();

    core.deliver_key(KeyCode::ESCAPE).unwrap();

    let host = host.borrow();
    assert_eq!(host.prompts_shown, 0);
    assert_eq!(host.terminations, 1);
}

#[test]
fn host_entry_points_share_the_quit_channel() {
    let (mut core, host) = new_core(None);
    core.setup(&WidgetNode::new()).unwrap();

    // A host-side quit button emits into the same channel the core wires.
    core.bus().emit(channel::QUIT, &()).unwrap();
    core.deliver_press().unwrap();

    assert_eq!(host.borrow().terminations, 2);
}

#[test]
fn status_bar_follows_the_menu_toggle() {
    let (mut core, host) = new_core(None);
    core.setup(&WidgetNode::new()).unwrap();

    core.deliver_status_toggle(false).unwrap();
    assert_eq!(host.borrow().status_visible, Some(false));

    core.deliver_status_toggle(true).unwrap();
    assert_eq!(host.borrow().status_visible, Some(true));
}
