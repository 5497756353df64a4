//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `Clock` - Source of the local calendar date
//! - `CycleProfileRepository` - Per-user profile persistence
//! - `EventPublisher` - Publishing domain events

mod clock;
mod cycle_profile_repository;
mod event_publisher;

pub use clock::Clock;
pub use cycle_profile_repository::{CycleProfileRepository, ProfileRepositoryError};
pub use event_publisher::EventPublisher;
