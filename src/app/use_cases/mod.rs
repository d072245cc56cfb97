//! Use-Cases der Application-Layer-Orchestrierung.

pub mod annotation;
pub mod file_io;
pub mod gesture;
pub mod history;
pub mod labels;
pub mod navigation;
pub mod session;
pub mod viewport;
