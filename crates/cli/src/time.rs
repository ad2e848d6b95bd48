// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run tag construction.

use chrono::{DateTime, Local, TimeZone};

/// Tag for the current run, e.g. `20260312_144502`.
///
/// Embedded in every artifact filename so repeated runs in the same workdir
/// never collide.
pub fn now_tag() -> String {
    tag_at(&Local::now())
}

/// Tag for an explicit instant.
pub fn tag_at<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%Y%m%d_%H%M%S").to_string()
}

#[cfg(test)]
#[path = "time_tests.rs"]
mod tests;
