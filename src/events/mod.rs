//! Event system foundation: a broadcast publisher for booking lifecycle
//! events, consumed by in-process observers (projections, metrics, audit).

pub mod publisher;

pub use publisher::{EventPublisher, LifecycleEvent, PublishError};
