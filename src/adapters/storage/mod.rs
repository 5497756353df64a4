//! Storage adapters for cycle profiles.

mod in_memory_cycle_profile_repository;

pub use in_memory_cycle_profile_repository::InMemoryCycleProfileRepository;
