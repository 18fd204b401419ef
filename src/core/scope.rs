//! Explicit scope stack for contextual log values
//!
//! This module provides:
//! - `ScopeStack`: an ordered stack of scope values owned by a logging context
//! - `ScopeGuard`: RAII guard that removes its scope when dropped
//!
//! Every thread has its own default stack (`ScopeStack::current`), so scopes
//! pushed by one unit of work never show up in another thread's events.
//!
//! Loggers snapshot the stack once per event, so later pushes and pops never
//! change an event that was already submitted.

use parking_lot::RwLock;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Debug)]
struct ScopeEntry {
    id: u64,
    value: Arc<str>,
}

#[derive(Debug, Default)]
struct ScopeState {
    entries: RwLock<Vec<ScopeEntry>>,
    next_id: AtomicU64,
}

thread_local! {
    static CURRENT: ScopeStack = ScopeStack::new();
}

/// Stack of scope values, outermost first.
///
/// Cloning is cheap and yields a handle to the same stack. Use a separate
/// stack per unit of work (request, job, thread) to keep their scopes apart.
///
/// # Example
///
/// ```
/// use rust_console_logger::core::ScopeStack;
///
/// let scopes = ScopeStack::new();
/// {
///     let _request = scopes.push("RequestId:42");
///     let _handler = scopes.push("Handler:orders");
///     assert_eq!(scopes.snapshot().len(), 2);
/// }
/// assert!(scopes.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScopeStack {
    state: Arc<ScopeState>,
}

impl ScopeStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// The calling thread's default stack
    pub fn current() -> Self {
        CURRENT.with(Clone::clone)
    }

    /// Push a scope value; it stays on the stack until the guard is dropped
    #[must_use = "the scope is removed as soon as the guard is dropped"]
    pub fn push<T: fmt::Display>(&self, value: T) -> ScopeGuard {
        let id = self.state.next_id.fetch_add(1, Ordering::Relaxed);
        self.state.entries.write().push(ScopeEntry {
            id,
            value: Arc::from(value.to_string()),
        });
        ScopeGuard {
            state: Arc::clone(&self.state),
            id,
        }
    }

    /// Copy the current scopes, outer to inner
    pub fn snapshot(&self) -> Vec<Arc<str>> {
        self.state
            .entries
            .read()
            .iter()
            .map(|entry| Arc::clone(&entry.value))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.state.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.entries.read().is_empty()
    }
}

/// Removes its scope from the stack when dropped.
///
/// Guards may be dropped out of order; each removes only its own entry.
pub struct ScopeGuard {
    state: Arc<ScopeState>,
    id: u64,
}

impl Drop for ScopeGuard {
    fn drop(&mut self) {
        let mut entries = self.state.entries.write();
        if let Some(pos) = entries.iter().rposition(|entry| entry.id == self.id) {
            entries.remove(pos);
        }
    }
}
