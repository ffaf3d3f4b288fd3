//! Scripted engine and shared store used by controller and FFI tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use langlock_engine::{LanguageHandle, LockEngine};

use crate::core::store::StateStore;

pub(crate) fn handle(raw: i64) -> LanguageHandle {
    LanguageHandle::from_raw(raw).expect("test handles are non-zero")
}

/// Call log of a [`ScriptedEngine`], shared with the test body.
#[derive(Debug, Default)]
pub(crate) struct EngineLog {
    pub lock_calls: Vec<Option<LanguageHandle>>,
    pub unlock_calls: usize,
}

/// Fake engine answering `lock` from a queue of raw results (0 = failure)
/// and recording every call. An exhausted queue answers failure.
pub(crate) struct ScriptedEngine {
    results: VecDeque<i64>,
    log: Rc<RefCell<EngineLog>>,
}

impl ScriptedEngine {
    pub fn new(results: impl IntoIterator<Item = i64>) -> (Self, Rc<RefCell<EngineLog>>) {
        let log = Rc::new(RefCell::new(EngineLog::default()));
        let engine = Self {
            results: results.into_iter().collect(),
            log: Rc::clone(&log),
        };
        (engine, log)
    }
}

impl LockEngine for ScriptedEngine {
    fn lock(&mut self, language: Option<LanguageHandle>) -> Option<LanguageHandle> {
        self.log.borrow_mut().lock_calls.push(language);
        let raw = self.results.pop_front().unwrap_or(0);
        LanguageHandle::from_raw(raw)
    }

    fn unlock(&mut self) {
        self.log.borrow_mut().unlock_calls += 1;
    }
}

/// Store whose persisted value is shared with the test body.
#[derive(Clone, Default)]
pub(crate) struct SharedStore {
    value: Rc<RefCell<Option<LanguageHandle>>>,
}

impl SharedStore {
    pub fn seeded(raw: i64) -> Self {
        Self {
            value: Rc::new(RefCell::new(LanguageHandle::from_raw(raw))),
        }
    }

    /// The persisted value in its raw form (0 = unlocked).
    pub fn persisted_raw(&self) -> i64 {
        self.value.borrow().map_or(0, LanguageHandle::raw)
    }
}

impl StateStore for SharedStore {
    fn load(&self) -> Option<LanguageHandle> {
        *self.value.borrow()
    }

    fn persist(&mut self, language: Option<LanguageHandle>) {
        *self.value.borrow_mut() = language;
    }
}
