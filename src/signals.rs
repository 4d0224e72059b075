use std::{
    any::{Any, TypeId, type_name},
    cell::RefCell,
    collections::HashMap,
    rc::Rc,
    sync::atomic::{AtomicU64, Ordering},
};

use crate::error::{CoreError, Result};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
struct SubscriptionId(u64);

static NEXT_SUBSCRIPTION_ID: AtomicU64 = AtomicU64::new(0);
impl SubscriptionId {
    fn new() -> Self {
        Self(NEXT_SUBSCRIPTION_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Handle returned by `SignalBus::subscribe`; pass it back to `unsubscribe`.
#[derive(Debug, Clone)]
pub struct Subscription {
    channel: &'static str,
    id: SubscriptionId,
}

type Callback = Rc<dyn Fn(&dyn Any)>;

struct ChannelInner {
    payload_type: TypeId,
    payload_name: &'static str,
    subscribers: Vec<(SubscriptionId, Callback)>,
}

/// Synchronous publish/subscribe dispatcher. One payload type per channel,
/// fixed at registration; callbacks run in registration order on the
/// caller's thread.
#[derive(Default)]
pub struct SignalBus {
    channels: RefCell<HashMap<&'static str, ChannelInner>>,
}

impl SignalBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<T: Any>(&self, channel: &'static str) -> Result<()> {
        let mut channels = self.channels.borrow_mut();
        if let Some(existing) = channels.get(channel) {
            if existing.payload_type != TypeId::of::<T>() {
                return Err(CoreError::ChannelTypeMismatch {
                    channel,
                    expected: existing.payload_name,
                    got: type_name::<T>(),
                });
            }
            return Ok(());
        }

        channels.insert(
            channel,
            ChannelInner {
                payload_type: TypeId::of::<T>(),
                payload_name: type_name::<T>(),
                subscribers: Vec::new(),
            },
        );
        Ok(())
    }

    pub fn subscribe<T: Any>(
        &self,
        channel: &'static str,
        callback: impl Fn(&T) + 'static,
    ) -> Result<Subscription> {
        let mut channels = self.channels.borrow_mut();
        let inner = channels
            .get_mut(channel)
            .ok_or(CoreError::UnknownChannel { channel })?;

        if inner.payload_type != TypeId::of::<T>() {
            return Err(CoreError::ChannelTypeMismatch {
                channel,
                expected: inner.payload_name,
                got: type_name::<T>(),
            });
        }

        let id = SubscriptionId::new();
        let cb: Callback = Rc::new(move |payload: &dyn Any| {
            if let Some(payload) = payload.downcast_ref::<T>() {
                callback(payload);
            }
        });
        inner.subscribers.push((id, cb));

        Ok(Subscription { channel, id })
    }

    /// Idempotent; removing a handle that is already gone is a no-op.
    pub fn unsubscribe(&self, sub: &Subscription) {
        if let Some(inner) = self.channels.borrow_mut().get_mut(sub.channel) {
            inner.subscribers.retain(|(id, _)| *id != sub.id);
        }
    }

    pub fn emit<T: Any>(&self, channel: &'static str, payload: &T) -> Result<()> {
        // Snapshot the list and release the borrow before invoking anything,
        // so callbacks may emit, subscribe or unsubscribe re-entrantly.
        let snapshot: Vec<Callback> = {
            let channels = self.channels.borrow();
            let inner = channels
                .get(channel)
                .ok_or(CoreError::UnknownChannel { channel })?;

            if inner.payload_type != TypeId::of::<T>() {
                return Err(CoreError::ChannelTypeMismatch {
                    channel,
                    expected: inner.payload_name,
                    got: type_name::<T>(),
                });
            }

            inner.subscribers.iter().map(|(_, cb)| cb.clone()).collect()
        };

        for cb in snapshot {
            cb(payload);
        }
        Ok(())
    }

    pub fn subscriber_count(&self, channel: &str) -> usize {
        self.channels
            .borrow()
            .get(channel)
            .map_or(0, |inner| inner.subscribers.len())
    }
}
