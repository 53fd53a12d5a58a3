//! One-shot re-entrancy guard for sorting an observed list.
//!
//! Sorting a list emits a change notification synchronously. A slot that
//! sorts on every notification would see its own sort and sort again. The
//! guard is armed immediately before the sort and consumed by the very next
//! notification, which is then ignored.

use parking_lot::Mutex;

/// State of a [`SortGuard`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GuardState {
    /// No sort pending; the next notification is an external change.
    #[default]
    Idle,
    /// A sort was started; the next notification is its echo.
    SortInFlight,
}

/// Two-state guard: `Idle -> SortInFlight` before sorting, back to `Idle`
/// on the next notification.
#[derive(Debug, Default)]
pub struct SortGuard {
    state: Mutex<GuardState>,
}

impl SortGuard {
    /// Create an idle guard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> GuardState {
        *self.state.lock()
    }

    /// Arm the guard. Must be called strictly before the sort.
    pub fn begin_sort(&self) {
        let mut state = self.state.lock();
        debug_assert_eq!(*state, GuardState::Idle, "sort started while another was in flight");
        *state = GuardState::SortInFlight;
    }

    /// Observe a notification.
    ///
    /// Returns `true` if the notification is the echo of our own sort (and
    /// resets the guard to `Idle`), `false` if it is an external change.
    pub fn consume_notification(&self) -> bool {
        let mut state = self.state.lock();
        match *state {
            GuardState::SortInFlight => {
                *state = GuardState::Idle;
                true
            }
            GuardState::Idle => false,
        }
    }
}
