//! Core domain types
//!
//! Work items as returned by the status API and the fixed verdict table
//! used to describe them to a human.

pub mod homework;
