//! Consent workflow: decides when staged customer inputs become durable.
//!
//! Inputs are persisted immediately on submission and treated as pending
//! until a consent decision arrives for their dialogue. Positive consent
//! keeps the staged rows exactly as inserted; negative consent purges them.
//! Resolution is one-shot per dialogue: once resolved, no staged rows remain
//! to match, so a second decision reports an unknown dialogue.
//!
//! There is no cross-request locking here. A consent decision racing with a
//! late submission for the same dialogue resolves at the store level
//! (last writer observed); the background job driving this API serializes
//! per-dialogue traffic in practice.

use rusqlite::Connection;
use serde::Serialize;

use crate::errors::AppError;
use crate::models::customer_input::{self, CompleteCustomerInput, StoredRecord};

/// Outcome of a consent decision.
#[derive(Debug, Serialize)]
pub struct Resolution {
    pub consent: bool,
    pub dialogue_id: i64,
    #[serde(skip)]
    pub purged: usize,
}

/// Stage a customer input for its dialogue. The row is durable from this
/// point on but only survives a negative consent decision by never getting
/// one.
pub fn submit_input(
    conn: &Connection,
    input: &CompleteCustomerInput,
) -> Result<StoredRecord, AppError> {
    let stored = customer_input::insert(conn, input)?;
    log::debug!(
        "staged input {} for dialogue {}",
        stored.id,
        stored.dialogue_id
    );
    Ok(stored)
}

/// Resolve the consent decision for a dialogue.
///
/// Requires at least one staged row for `dialogue_id`; otherwise the
/// dialogue is unknown (never submitted, or already resolved) and no state
/// is mutated.
pub fn resolve(
    conn: &Connection,
    dialogue_id: i64,
    consent: bool,
) -> Result<Resolution, AppError> {
    let staged = customer_input::count_by_dialogue_id(conn, dialogue_id)?;
    if staged == 0 {
        return Err(AppError::UnknownDialogue(dialogue_id));
    }

    let purged = if consent {
        log::info!("dialogue {dialogue_id}: consent granted, keeping {staged} input(s)");
        0
    } else {
        let removed = customer_input::delete_by_dialogue_id(conn, dialogue_id)?;
        log::info!("dialogue {dialogue_id}: consent refused, purged {removed} input(s)");
        removed
    };

    Ok(Resolution {
        consent,
        dialogue_id,
        purged,
    })
}
