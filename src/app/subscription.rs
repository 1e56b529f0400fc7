//! Scoped key-event subscription handle.
//!
//! The component only reacts to navigation keys while the host holds a live
//! [`KeySubscription`]. The handle is acquired from
//! [`SearchBox::subscribe_keys`](crate::app::SearchBox::subscribe_keys) when
//! the component is activated (mounted, focused) and released deterministically
//! by dropping it, replacing the attach-listener/detach-listener pattern with
//! scoped acquisition and guaranteed release.

use std::cell::Cell;
use std::rc::Rc;

/// Shared registration state between the component and its subscription handles.
///
/// Each acquired handle gets a fresh generation number; key handling is live
/// while the registered generation is nonzero. Tracking the generation rather
/// than a plain boolean means dropping a stale handle cannot disarm a newer
/// live one.
#[derive(Debug, Default)]
pub(crate) struct KeyRegistration {
    /// Last generation number handed out.
    issued: Cell<u64>,

    /// Generation currently holding key handling, 0 when none.
    live: Cell<u64>,
}

impl KeyRegistration {
    /// Registers a new subscription generation and makes it the live one.
    fn acquire(&self) -> u64 {
        let generation = self.issued.get() + 1;
        self.issued.set(generation);
        self.live.set(generation);
        generation
    }

    /// Releases key handling if `generation` is still the live one.
    fn release(&self, generation: u64) {
        if self.live.get() == generation {
            tracing::debug!(generation, "key subscription released");
            self.live.set(0);
        }
    }

    /// Whether any subscription generation is live.
    pub(crate) fn is_live(&self) -> bool {
        self.live.get() != 0
    }
}

/// Guard representing an active key-event subscription.
///
/// While this handle is alive, `CursorDown`, `CursorUp`, and `Submit` events
/// are processed; once it is dropped they become guarded no-ops. Only one
/// subscription is live at a time: acquiring a new handle re-arms key handling
/// regardless of older handles, and dropping a superseded handle leaves the
/// newer one live.
///
/// # Example
///
/// ```
/// use fuzzbox::app::SearchBox;
///
/// let mut component = SearchBox::new(vec!["apple".to_string()]);
/// assert!(!component.keys_live());
/// {
///     let _keys = component.subscribe_keys();
///     assert!(component.keys_live());
/// }
/// assert!(!component.keys_live());
/// ```
#[derive(Debug)]
pub struct KeySubscription {
    registration: Rc<KeyRegistration>,
    generation: u64,
}

impl KeySubscription {
    pub(crate) fn new(registration: Rc<KeyRegistration>) -> Self {
        let generation = registration.acquire();
        Self {
            registration,
            generation,
        }
    }

    /// Whether this subscription is still the live one.
    ///
    /// A handle superseded by a later `subscribe_keys` call reports `false`
    /// even before it is dropped.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.registration.live.get() == self.generation
    }
}

impl Drop for KeySubscription {
    fn drop(&mut self) {
        self.registration.release(self.generation);
    }
}

#[cfg(test)]
mod tests {
    use crate::app::SearchBox;

    #[test]
    fn drop_releases_key_handling() {
        let mut component = SearchBox::new(vec![]);
        let keys = component.subscribe_keys();
        assert!(keys.is_active());
        assert!(component.keys_live());
        drop(keys);
        assert!(!component.keys_live());
    }

    #[test]
    fn resubscribing_rearms() {
        let mut component = SearchBox::new(vec![]);
        drop(component.subscribe_keys());
        assert!(!component.keys_live());
        let _keys = component.subscribe_keys();
        assert!(component.keys_live());
    }

    #[test]
    fn dropping_stale_handle_leaves_new_subscription_armed() {
        let mut component = SearchBox::new(vec![]);
        let old = component.subscribe_keys();
        let new = component.subscribe_keys();
        assert!(!old.is_active());
        assert!(new.is_active());

        drop(old);
        assert!(component.keys_live());
        assert!(new.is_active());

        drop(new);
        assert!(!component.keys_live());
    }
}
