//! Domain logic for the mathmotion video service.
//!
//! This crate holds everything that does not touch the database or HTTP:
//! shared types, the domain error enum, filename conventions, playback URL
//! derivation, rating validation, and the generation invoker that runs the
//! external rendering script.
//!
//! Zero internal dependencies: `db` and `api` both depend on this crate,
//! never the other way around.

pub mod error;
pub mod feedback;
pub mod generation;
pub mod naming;
pub mod types;
pub mod video_paths;
