//! checkride-store — In-memory session storage.
//!
//! The store owns identifier lookup and input validation for the data the
//! core grading logic operates on. Consistency is the caller's concern
//! (single-writer local usage); the HTTP layer wraps one store in a lock.

mod error;
mod store;

pub use error::StoreError;
pub use store::SessionStore;
