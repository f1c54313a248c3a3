//! Application layer: drives a payphone session line by line.
//!
//! This module defines `PayphoneService`, which owns the `Machine` and records
//! every command it handles through the `SessionJournal` port.

pub mod payphone;
