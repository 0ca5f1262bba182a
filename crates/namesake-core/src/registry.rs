//! Disposable registrations with a single teardown point
//!
//! Host-facing registrations (commands, action providers) are handed back as
//! disposable handles and collected in one place, so deactivation is a
//! single `dispose_all` rather than ambient global state.

use std::collections::HashSet;
use std::sync::{Arc, Mutex};

/// A handle that undoes one registration when disposed.
pub trait Disposable: Send {
    fn dispose(&mut self);
}

/// Every live registration of the process, torn down once at deactivation.
#[derive(Default)]
pub struct Subscriptions {
    items: Vec<Box<dyn Disposable>>,
}

impl Subscriptions {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, item: Box<dyn Disposable>) {
        self.items.push(item);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Dispose every collected registration, in registration order.
    pub fn dispose_all(&mut self) {
        for item in &mut self.items {
            item.dispose();
        }
        self.items.clear();
    }
}

impl Drop for Subscriptions {
    fn drop(&mut self) {
        self.dispose_all();
    }
}

/// Names of commands currently registered with the host.
///
/// Cloning shares the underlying set, so dispatch and registration can live
/// on different sides of the server.
#[derive(Clone, Default)]
pub struct CommandRegistry {
    commands: Arc<Mutex<HashSet<String>>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command id; disposing the returned handle deregisters it.
    pub fn register(&self, id: impl Into<String>) -> CommandRegistration {
        let id = id.into();
        self.lock().insert(id.clone());
        CommandRegistration {
            id,
            commands: Arc::clone(&self.commands),
        }
    }

    pub fn is_registered(&self, id: &str) -> bool {
        self.lock().contains(id)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashSet<String>> {
        self.commands.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Live command registration; disposing removes the command from dispatch.
pub struct CommandRegistration {
    id: String,
    commands: Arc<Mutex<HashSet<String>>>,
}

impl Disposable for CommandRegistration {
    fn dispose(&mut self) {
        self.commands
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .remove(&self.id);
    }
}
