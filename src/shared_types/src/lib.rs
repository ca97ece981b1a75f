//! Foreign type definitions for the foco-core shells.
//!
//! The generated sources are written to `generated/` by the build script.
