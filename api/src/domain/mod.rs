//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Domain models representing core business concepts
//! - `validation`: Field rules for employee records
//! - `salary`: Prorated pay computation
//! - `ports`: Trait definitions for external dependencies

pub mod entities;
pub mod ports;
pub mod salary;
pub mod validation;
