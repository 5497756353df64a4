//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, error types and event plumbing
//! that form the vocabulary of the Clove domain.

mod calendar_date;
mod command;
mod errors;
mod events;
mod ids;
mod percentage;
mod timestamp;

pub use calendar_date::CalendarDate;
pub use command::CommandMetadata;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use events::{
    domain_event, DomainEvent, EventEnvelope, EventId, EventMetadata, SerializableDomainEvent,
};
pub use ids::UserId;
pub use percentage::Percentage;
pub use timestamp::Timestamp;
