//! In-memory entity store.
//!
//! Each entity kind owns a `(counter, map)` pair behind its own mutex,
//! so id assignment and insertion happen atomically per kind and the
//! store is safe under the multi-threaded runtime. No lock is ever held
//! across an await point; the one operation that spans two kinds (the
//! payment cascade) takes both locks in a fixed order inside a single
//! critical section.
//!
//! Contents live for the lifetime of the process only. Ids restart at 1
//! on every boot.

pub mod appointments;
pub mod contact_messages;
pub mod payments;
pub mod users;

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use thiserror::Error;

use crate::models::{Appointment, ContactMessage, Payment, User};

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., duplicate username).
    #[error("conflict: {0}")]
    Conflict(String),
}

/// One entity kind's rows plus its id counter.
///
/// `BTreeMap` keyed by the monotonically increasing id keeps iteration
/// in insertion order.
#[derive(Debug)]
struct Table<T> {
    next_id: i64,
    rows: BTreeMap<i64, T>,
}

impl<T: Clone> Table<T> {
    const fn new() -> Self {
        Self {
            next_id: 1,
            rows: BTreeMap::new(),
        }
    }

    /// Assign the next id and insert the row built from it.
    fn insert_with(&mut self, build: impl FnOnce(i64) -> T) -> T {
        let id = self.next_id;
        self.next_id += 1;
        let row = build(id);
        self.rows.insert(id, row.clone());
        row
    }

    fn get(&self, id: i64) -> Option<T> {
        self.rows.get(&id).cloned()
    }

    fn get_mut(&mut self, id: i64) -> Option<&mut T> {
        self.rows.get_mut(&id)
    }

    fn values(&self) -> impl Iterator<Item = &T> {
        self.rows.values()
    }

    fn all(&self) -> Vec<T> {
        self.rows.values().cloned().collect()
    }
}

#[derive(Debug)]
struct Tables {
    users: Mutex<Table<User>>,
    contact_messages: Mutex<Table<ContactMessage>>,
    appointments: Mutex<Table<Appointment>>,
    payments: Mutex<Table<Payment>>,
}

/// Handle to the in-memory repository. Cheap to clone; all clones share
/// the same tables.
#[derive(Debug, Clone)]
pub struct Store {
    tables: Arc<Tables>,
}

impl Store {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tables: Arc::new(Tables {
                users: Mutex::new(Table::new()),
                contact_messages: Mutex::new(Table::new()),
                appointments: Mutex::new(Table::new()),
                payments: Mutex::new(Table::new()),
            }),
        }
    }

    fn users(&self) -> MutexGuard<'_, Table<User>> {
        lock(&self.tables.users)
    }

    fn contact_messages_table(&self) -> MutexGuard<'_, Table<ContactMessage>> {
        lock(&self.tables.contact_messages)
    }

    fn appointments_table(&self) -> MutexGuard<'_, Table<Appointment>> {
        lock(&self.tables.appointments)
    }

    fn payments_table(&self) -> MutexGuard<'_, Table<Payment>> {
        lock(&self.tables.payments)
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

/// Recover the guard from a poisoned lock. The tables hold plain data
/// and remain structurally valid even if a writer panicked mid-call.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
