// sitepatch-core/src/lib.rs

// 1. Documentation
#![allow(missing_docs)]

// 2. Memory safety
#![deny(unsafe_code)]
// 3. Robustness
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
// 4. Performance
#![warn(clippy::perf)]

// --- HEXAGONAL MODULES ---

// 1. Ports (Interfaces / Traits)
// Contracts for the host-controlled collaborators (docs viewer/builder).
pub mod ports;

// 2. Domain (pure logic)
// Markup tree, pattern catalog, validation, rewriting, template context.
// Depends on nothing else (no infra, no app).
pub mod domain;

// 3. Infrastructure (Adapters)
// Filesystem, backups, config files, Jinja, system viewer.
// Depends on Domain and Ports.
pub mod infrastructure;

// 4. Application (Use Cases)
// Orchestration (patch pipeline, check, restore, fmt).
// Depends on Domain, Infra and Ports.
pub mod application;

// --- GLOBAL ERROR HANDLING ---
pub mod error;

// --- RE-EXPORTS (FACADE) ---
// use sitepatch_core::SitePatchError;
pub use error::{ErrorKind, SitePatchError};
