use super::backend::{StorageBackend, Tables};
use crate::error::{FolioError, Result};
use std::cell::RefCell;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since folio is single-threaded.
/// This keeps the `StorageBackend` trait on `&self` for all methods.
#[derive(Default)]
pub struct MemBackend {
    tables: RefCell<Tables>,
    simulate_write_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }
}

impl StorageBackend for MemBackend {
    fn load(&self) -> Result<Tables> {
        Ok(self.tables.borrow().clone())
    }

    fn save(&self, tables: &Tables) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(FolioError::Store("Simulated write error".to_string()));
        }
        *self.tables.borrow_mut() = tables.clone();
        Ok(())
    }
}
