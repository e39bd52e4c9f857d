//! Main module for markup-tree library functionality

pub mod ast;
pub mod formats;
pub mod lifecycle;
pub mod testing;
