//! Core domain types and storage contracts for birthday records.
//!
//! This crate is pure: it defines what a birthday is and what a storage
//! backend must be able to do with one, without performing any I/O.

pub mod birthday;
pub mod storage;
