//! Service layer for libris
//!
//! Business logic on top of the in-memory store. Adding and listing books or
//! members is plain collection work handled by the store itself; the service
//! layer carries the logic that spans both collections.

pub mod circulation;

pub use circulation::CirculationService;
