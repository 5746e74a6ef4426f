//! Bounded intent queue shared between the clock and its controllers.
//!
//! Built on `critical-section` and `heapless::Deque`, so intents can be
//! posted from interrupt handlers or other tasks while the clock drains them
//! from its own loop.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::intent_processor::ClockIntent;

/// Error returned when the queue is full. Carries the rejected intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrySendError(pub ClockIntent);

/// Fixed-capacity queue of [`ClockIntent`]s
pub struct IntentChannel<const SIZE: usize> {
    queue: Mutex<RefCell<Deque<ClockIntent, SIZE>>>,
}

impl<const SIZE: usize> IntentChannel<SIZE> {
    pub const fn new() -> Self {
        Self {
            queue: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Handle for posting intents
    pub const fn sender(&self) -> IntentSender<'_, SIZE> {
        IntentSender { channel: self }
    }

    /// Handle for draining intents
    pub const fn receiver(&self) -> IntentReceiver<'_, SIZE> {
        IntentReceiver { channel: self }
    }

    fn try_send(&self, intent: ClockIntent) -> Result<(), TrySendError> {
        critical_section::with(|cs| {
            self.queue
                .borrow(cs)
                .borrow_mut()
                .push_back(intent)
                .map_err(TrySendError)
        })
    }

    fn try_receive(&self) -> Option<ClockIntent> {
        critical_section::with(|cs| self.queue.borrow(cs).borrow_mut().pop_front())
    }
}

impl<const SIZE: usize> Default for IntentChannel<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy)]
pub struct IntentSender<'a, const SIZE: usize> {
    channel: &'a IntentChannel<SIZE>,
}

impl<const SIZE: usize> IntentSender<'_, SIZE> {
    /// Queue an intent without blocking
    pub fn try_send(&self, intent: ClockIntent) -> Result<(), TrySendError> {
        self.channel.try_send(intent)
    }
}

#[derive(Clone, Copy)]
pub struct IntentReceiver<'a, const SIZE: usize> {
    channel: &'a IntentChannel<SIZE>,
}

impl<const SIZE: usize> IntentReceiver<'_, SIZE> {
    /// Take the oldest queued intent, if any
    pub fn try_receive(&self) -> Option<ClockIntent> {
        self.channel.try_receive()
    }
}
