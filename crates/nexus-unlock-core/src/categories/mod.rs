// crates/nexus-unlock-core/src/categories/mod.rs
// ============================================================================
// Module: Nexus Unlock Category Routines
// Description: One validation routine per functional area of the dashboard.
// Purpose: Group the six category sweeps behind a uniform signature.
// Dependencies: crate::endpoint, crate::interfaces, crate::result
// ============================================================================

//! ## Overview
//! Each category routine calls one or more endpoints, extracts named fields
//! with defaults, evaluates fixed thresholds, records one result per
//! sub-check through the shared ledger, and returns its aggregate boolean.
//! Categories are independent; the orchestrator fixes their order.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod command_engine;
pub mod market;
pub mod modules;
pub mod optimization;
pub mod sovereign;
pub mod ui;

// ============================================================================
// SECTION: Routine Signature
// ============================================================================

use crate::endpoint::EndpointClient;
use crate::interfaces::TranscriptSink;
use crate::result::TestLedger;

/// Uniform signature shared by every category routine.
pub type CategoryRoutine =
    fn(&EndpointClient, &mut TestLedger, &dyn TranscriptSink) -> bool;
