//! # rompatch-core
//!
//! Core library for the rompatch ROM patching tool.
//!
//! This crate provides:
//! - Exact byte-pattern search with a 4-byte scan stride
//! - Find-and-replace sessions over an in-memory ROM image
//! - Pointer relocation for base-relative 32-bit pointers
//! - Load/store abstraction and JSON session reports

pub mod config;
pub mod error;
pub mod patch;
pub mod pointer;
pub mod report;
pub mod scan;
pub mod storage;

pub use config::PatchConfig;
pub use error::{Error, Result};
pub use patch::Patcher;
pub use pointer::{PointerBase, Relocation, relocate_pointer};
pub use report::PatchReport;
pub use scan::{
    MatchList, SCAN_STRIDE, find_and_replace_all, format_pattern, parse_pattern, search,
    search_byte, search_strided,
};
pub use storage::{RomFile, RomStorage};
