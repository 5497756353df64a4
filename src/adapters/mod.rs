//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `clock` - System and fixed clocks
//! - `events` - Event bus implementations
//! - `storage` - Cycle profile persistence

pub mod clock;
pub mod events;
pub mod storage;

pub use clock::{FixedClock, SystemClock};
pub use events::InMemoryEventBus;
pub use storage::InMemoryCycleProfileRepository;
