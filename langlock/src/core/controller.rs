//! Lock controller.
//!
//! Owns the lock state and drives the native engine through the two
//! transitions of the state machine: a user-invoked toggle and a
//! startup-invoked restore. Every transition persists the resulting state,
//! so the store always mirrors what the engine holds.

use langlock_engine::{LanguageHandle, LockEngine};
use tracing::{debug, warn};

use super::state::LockState;
use super::store::StateStore;

/// The lock state machine.
///
/// Engine calls are synchronous direct OS calls; the engine holds a global
/// single-owner lock, so all access to a controller must stay on one thread
/// (in a plugin: the UI/event-dispatch thread). The controller never issues
/// `lock` while already locked, so a re-entrant native lock cannot occur.
pub struct LockController {
    engine: Box<dyn LockEngine>,
    store: Box<dyn StateStore>,
    state: LockState,
}

impl LockController {
    /// Create an unlocked controller.
    ///
    /// Call [`restore`](Self::restore) once afterwards to re-apply the
    /// persisted state from a previous session.
    pub fn new(engine: Box<dyn LockEngine>, store: Box<dyn StateStore>) -> Self {
        Self {
            engine,
            store,
            state: LockState::Unlocked,
        }
    }

    /// Whether the input language is currently locked.
    pub fn is_locked(&self) -> bool {
        self.state.is_locked()
    }

    /// The locked language, if any.
    pub fn locked_language(&self) -> Option<LanguageHandle> {
        self.state.language()
    }

    /// The current state.
    pub fn state(&self) -> LockState {
        self.state
    }

    /// Flip the lock state in response to a user action.
    ///
    /// Locking locks whatever language is currently active; the persisted
    /// handle is only consulted by [`restore`](Self::restore). A failed lock
    /// leaves the state unlocked, so the host's toggle button simply does
    /// not engage. Returns the new locked flag for button rendering.
    pub fn toggle(&mut self) -> bool {
        match self.state {
            LockState::Locked(_) => {
                self.engine.unlock();
                self.apply(LockState::Unlocked);
            }
            LockState::Unlocked => match self.engine.lock(None) {
                Some(locked) => self.apply(LockState::Locked(locked)),
                None => {
                    warn!("failed to lock the current input language");
                    self.apply(LockState::Unlocked);
                }
            },
        }
        self.is_locked()
    }

    /// Re-apply the persisted lock state. Invoked exactly once, at startup.
    ///
    /// A persisted language is re-locked rather than assumed: if the engine
    /// cannot lock it anymore (e.g. the layout was removed from the system),
    /// the state falls back to unlocked and the persisted value is reset.
    /// The engine may also reassign handles between sessions, so whatever it
    /// returns is what gets persisted.
    pub fn restore(&mut self) {
        match self.store.load() {
            None => {
                // Nothing was locked; release a possibly stale engine lock.
                self.engine.unlock();
                self.apply(LockState::Unlocked);
            }
            Some(persisted) => match self.engine.lock(Some(persisted)) {
                Some(locked) => self.apply(LockState::Locked(locked)),
                None => {
                    warn!("could not restore lock on language {}", persisted);
                    self.apply(LockState::Unlocked);
                }
            },
        }
    }

    fn apply(&mut self, next: LockState) {
        self.store.persist(next.language());
        if self.state != next {
            debug!("lock state: {:?} -> {:?}", self.state, next);
        }
        self.state = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{ScriptedEngine, SharedStore, handle};

    fn controller(
        persisted: i64,
        lock_results: impl IntoIterator<Item = i64>,
    ) -> (
        LockController,
        std::rc::Rc<std::cell::RefCell<crate::test_support::EngineLog>>,
        SharedStore,
    ) {
        let (engine, log) = ScriptedEngine::new(lock_results);
        let store = SharedStore::seeded(persisted);
        let controller = LockController::new(Box::new(engine), Box::new(store.clone()));
        (controller, log, store)
    }

    #[test]
    fn toggle_alternates_while_locking_succeeds() {
        let (mut c, _log, _store) = controller(0, [42, 43]);

        assert!(c.toggle());
        assert!(!c.toggle());
        assert!(c.toggle());
        assert_eq!(c.locked_language(), Some(handle(43)));
    }

    #[test]
    fn failed_lock_stays_unlocked() {
        let (mut c, log, store) = controller(0, [0]);

        assert!(!c.toggle());
        assert!(!c.is_locked());
        assert_eq!(store.persisted_raw(), 0);
        assert_eq!(log.borrow().lock_calls, vec![None]);
    }

    #[test]
    fn toggle_from_locked_unlocks_unconditionally() {
        let (mut c, log, store) = controller(0, [42]);

        c.toggle();
        assert!(c.is_locked());

        c.toggle();
        assert!(!c.is_locked());
        assert_eq!(log.borrow().unlock_calls, 1);
        assert_eq!(store.persisted_raw(), 0);
    }

    #[test]
    fn toggle_always_locks_the_current_language() {
        // The persisted handle is for restore only; a toggle must lock
        // whatever is active, i.e. call the engine with no language.
        let (mut c, log, _store) = controller(0, [42, 55]);

        c.toggle();
        c.toggle();
        c.toggle();
        assert_eq!(log.borrow().lock_calls, vec![None, None]);
    }

    #[test]
    fn fresh_start_toggle_and_back() {
        let (mut c, log, store) = controller(0, [42]);

        c.restore();
        assert!(!c.is_locked());

        assert!(c.toggle());
        assert_eq!(c.state(), LockState::Locked(handle(42)));
        assert_eq!(store.persisted_raw(), 42);

        assert!(!c.toggle());
        assert!(!c.is_locked());
        assert_eq!(log.borrow().unlock_calls, 2); // one defensive, one toggle
        assert_eq!(store.persisted_raw(), 0);
    }

    #[test]
    fn restore_relocks_the_persisted_language() {
        let (mut c, log, store) = controller(77, [77]);

        c.restore();
        assert_eq!(c.state(), LockState::Locked(handle(77)));
        assert_eq!(store.persisted_raw(), 77);
        assert_eq!(log.borrow().lock_calls, vec![Some(handle(77))]);
    }

    #[test]
    fn restore_falls_back_when_the_language_is_gone() {
        let (mut c, _log, store) = controller(77, [0]);

        c.restore();
        assert!(!c.is_locked());
        assert_eq!(store.persisted_raw(), 0);
    }

    #[test]
    fn restore_persists_a_reassigned_handle() {
        let (mut c, _log, store) = controller(77, [99]);

        c.restore();
        assert_eq!(c.state(), LockState::Locked(handle(99)));
        assert_eq!(store.persisted_raw(), 99);
    }

    #[test]
    fn restore_with_nothing_persisted_unlocks_defensively() {
        let (mut c, log, store) = controller(0, []);

        c.restore();
        assert!(!c.is_locked());
        assert_eq!(log.borrow().unlock_calls, 1);
        assert_eq!(log.borrow().lock_calls.len(), 0);
        assert_eq!(store.persisted_raw(), 0);
    }
}
