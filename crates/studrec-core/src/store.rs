use crate::action::Action;
use crate::reducer::reduce;
use crate::state::AppState;

/// Opaque handle identifying a registered listener
///
/// Returned by [`Store::subscribe`]; pass it to [`Store::unsubscribe`] to
/// remove exactly that listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&AppState)>;

/// Single holder of the authoritative in-memory state
///
/// The Store owns the current [`AppState`] and an ordered list of listeners.
/// State changes follow a strict discipline: callers dispatch an [`Action`],
/// the reducer computes a fresh snapshot, and every listener is notified
/// synchronously in subscription order. Direct mutation from outside is not
/// possible; `state()` hands out a shared reference only.
///
/// Not thread-safe (no Arc/RwLock) - designed for single-threaded use, like
/// the form application it backs. Reentrant dispatch from inside a listener is
/// structurally impossible: `dispatch` holds `&mut self` while listeners only
/// receive `&AppState`.
pub struct Store {
    state: AppState,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener_id: u64,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    /// Create a Store holding the initial empty state
    pub fn new() -> Self {
        Self {
            state: AppState::new(),
            listeners: Vec::new(),
            next_listener_id: 0,
        }
    }

    /// Get the current state snapshot
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Apply an action and notify all listeners with the new state
    ///
    /// Never fails: the reducer is total over the action set. Listeners run
    /// synchronously in subscription order; a panicking listener unwinds out
    /// of `dispatch` (fail-fast, no isolation between listeners).
    pub fn dispatch(&mut self, action: Action) {
        tracing::debug!(?action, "dispatching action");
        self.state = reduce(&self.state, &action);
        for (_, listener) in &mut self.listeners {
            listener(&self.state);
        }
    }

    /// Register a listener; returns a handle for removal
    ///
    /// Listeners are invoked on every dispatch, in registration order, with a
    /// reference to the new state.
    pub fn subscribe(&mut self, listener: impl FnMut(&AppState) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove the listener registered under `id`
    ///
    /// Removing an already-removed listener is a no-op.
    pub fn unsubscribe(&mut self, id: ListenerId) {
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
    }

    /// Number of currently registered listeners
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}
