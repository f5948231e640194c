//! Presentation layer: the MVI engine and the two screens built on it.

pub mod menu_list;
pub mod mvi;
pub mod summary;
