//! Unit tests mirroring the `src` tree, one file per source file

mod configuration;
mod error;
mod math;
mod spatial;
