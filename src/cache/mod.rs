// Cache module for session-scoped response caching.
// Stores student API responses for the lifetime of the running session.

pub mod keys;
pub mod store;

pub use keys::{STUDENTS_KEY, evaluation_key};
pub use store::{MemoryStore, SessionCache, SessionStore};
