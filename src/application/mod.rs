//! Application layer: use cases built on the domain abstractions.

pub mod services;
