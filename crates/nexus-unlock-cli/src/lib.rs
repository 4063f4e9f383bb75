// crates/nexus-unlock-cli/src/lib.rs
// ============================================================================
// Module: Nexus Unlock CLI Library
// Description: Shared CLI support code for the nexus-unlock binary.
// Purpose: Host the i18n catalog behind the binary entry point.
// Dependencies: standard library
// ============================================================================

//! ## Overview
//! Library half of the `nexus-unlock` binary. All user-facing strings live in
//! the [`i18n`] message catalog and are rendered through the [`t!`](crate::t)
//! macro so the transcript and summary output stay consistent across locales.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod i18n;
