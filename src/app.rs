use std::{cell::RefCell, rc::Rc};

use crate::{
    Result,
    close::{CloseGuard, CloseOutcome},
    host::Host,
    pointer::PointerTracker,
    signals::{SignalBus, Subscription},
    widget::{WidgetId, WidgetNode},
};

/// Channels wired by `EventCore::setup`. Hosts may emit into these from
/// their own entry points (menu items, buttons, shortcuts).
pub mod channel {
    /// Payload `()`. The single terminating subscriber lives here; every
    /// quit entry point emits into this channel instead of killing the
    /// process itself.
    pub const QUIT: &str = "quit";
    /// Payload `bool`: desired visibility of the host's status element.
    pub const STATUS_BAR: &str = "status-bar";
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct KeyCode(pub u32);

impl KeyCode {
    pub const ESCAPE: KeyCode = KeyCode(27);
}

struct PromptConfig {
    title: String,
    message: String,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            title: "Message".to_string(),
            message: "Are you sure to quit?".to_string(),
        }
    }
}

/// Front door for the host's raw events. Owns the bus, the pointer
/// coordinator and the close guard, and calls back into the host to mutate
/// visible state. Everything runs synchronously on the host's event thread.
pub struct EventCore<H: Host + 'static> {
    host: Rc<RefCell<H>>,
    bus: SignalBus,
    pointer: PointerTracker,
    close: CloseGuard,
    prompt: PromptConfig,
    quit_sub: Option<Subscription>,
    status_sub: Option<Subscription>,
}

impl<H: Host + 'static> EventCore<H> {
    pub fn new(host: Rc<RefCell<H>>) -> Self {
        Self {
            host,
            bus: SignalBus::new(),
            pointer: PointerTracker::new(),
            close: CloseGuard::new(),
            prompt: PromptConfig::default(),
            quit_sub: None,
            status_sub: None,
        }
    }

    pub fn with_prompt(mut self, title: impl Into<String>, message: impl Into<String>) -> Self {
        self.prompt.title = title.into();
        self.prompt.message = message.into();
        self
    }

    /// Registers the built-in channels and subscribers, then extends move
    /// tracking over `root` and all its descendants. Idempotent; rerunning
    /// re-walks the tree without duplicating subscribers.
    pub fn setup(&mut self, root: &WidgetNode) -> Result<()> {
        self.bus.register::<()>(channel::QUIT)?;
        self.bus.register::<bool>(channel::STATUS_BAR)?;

        if self.quit_sub.is_none() {
            let host = self.host.clone();
            self.quit_sub = Some(self.bus.subscribe(channel::QUIT, move |_: &()| {
                host.borrow_mut().terminate_process();
            })?);
        }
        if self.status_sub.is_none() {
            let host = self.host.clone();
            self.status_sub = Some(self.bus.subscribe(channel::STATUS_BAR, move |visible: &bool| {
                host.borrow_mut().set_status_bar_visible(*visible);
            })?);
        }

        self.pointer
            .initialize(root, &mut *self.host.borrow_mut());
        Ok(())
    }

    pub fn bus(&self) -> &SignalBus {
        &self.bus
    }

    /// Raw per-widget pointer move. Returns true when the sample was
    /// accepted into the display.
    pub fn deliver_move(&mut self, widget: WidgetId, x: u32, y: u32) -> bool {
        self.pointer
            .on_move(widget, x, y, &mut *self.host.borrow_mut())
    }

    /// Window-manager close request: ask the host, then accept or veto.
    /// A confirmed close emits `quit` exactly once.
    pub fn deliver_close_request(&mut self) -> Result<CloseOutcome> {
        self.close.request_close()?;

        let answer = {
            let mut host = self.host.borrow_mut();
            host.prompt_yes_no(&self.prompt.title, &self.prompt.message)
        };

        let outcome = self.close.resolve(answer);
        if outcome == CloseOutcome::Accepted {
            self.bus.emit(channel::QUIT, &())?;
        } else {
            log::debug!("close request vetoed");
        }
        Ok(outcome)
    }

    /// Escape quits immediately, without the confirmation dialog — the
    /// keyboard shortcut has always bypassed the guard in the original
    /// behavior, so the asymmetry is preserved here. Other keys are ignored.
    pub fn deliver_key(&mut self, code: KeyCode) -> Result<()> {
        if code == KeyCode::ESCAPE {
            self.bus.emit(channel::QUIT, &())?;
        }
        Ok(())
    }

    /// Pointer press anywhere in the window quits via the `quit` channel.
    pub fn deliver_press(&mut self) -> Result<()> {
        self.bus.emit(channel::QUIT, &())
    }

    /// Checkable menu entry toggled; forwarded through the status channel.
    pub fn deliver_status_toggle(&mut self, visible: bool) -> Result<()> {
        self.bus.emit(channel::STATUS_BAR, &visible)
    }
}
