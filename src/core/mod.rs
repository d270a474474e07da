//! Core modules for directory enumeration and output

pub mod color;
pub mod entries;
pub mod error;
pub mod lister;
pub mod render;
