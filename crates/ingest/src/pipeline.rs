//! Fetch → normalize → load, committed once per run.
//!
//! ```text
//! NotStarted --fetch ok--> Ingesting --commit--> Done
//! NotStarted --fetch failed--> Aborted
//! ```
//!
//! There is no retry and no resumption: a failed run leaves the database as
//! it was before the run started.

use framedata_core::Payload;
use framedata_storage::{Storage, StorageError};
use serde::Serialize;

use crate::error::IngestError;
use crate::source::PayloadSource;

/// Where a run currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IngestState {
    NotStarted,
    Ingesting,
    Done,
    Aborted,
}

impl IngestState {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::Ingesting => "ingesting",
            Self::Done => "done",
            Self::Aborted => "aborted",
        }
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Done | Self::Aborted)
    }
}

impl std::fmt::Display for IngestState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What one completed run wrote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IngestReport {
    pub fighters: usize,
    pub characters_inserted: usize,
    pub characters_existing: usize,
    pub moves_inserted: usize,
}

/// Terminal result of [`run`].
#[derive(Debug)]
pub enum IngestOutcome {
    Done(IngestReport),
    /// The payload could not be obtained; nothing was written.
    Aborted(IngestError),
}

impl IngestOutcome {
    #[must_use]
    pub const fn state(&self) -> IngestState {
        match self {
            Self::Done(_) => IngestState::Done,
            Self::Aborted(_) => IngestState::Aborted,
        }
    }

    #[must_use]
    pub const fn report(&self) -> Option<&IngestReport> {
        match self {
            Self::Done(report) => Some(report),
            Self::Aborted(_) => None,
        }
    }
}

fn transition(from: IngestState, to: IngestState) -> IngestState {
    tracing::debug!(%from, %to, terminal = to.is_terminal(), "Ingestion state change");
    to
}

/// Write every fighter of `payload` in one transaction.
///
/// Characters are insert-or-ignore (first write wins); moves are always
/// appended under the resolved character id. Nothing is committed unless
/// the whole payload was written.
///
/// # Errors
/// Returns error on the first failed write; the transaction is rolled back.
pub fn load(storage: &mut Storage, payload: &Payload) -> Result<IngestReport, StorageError> {
    let batch = storage.begin()?;
    let mut report = IngestReport::default();

    for fighter in payload.fighters() {
        let character = batch.insert_character(&fighter.character)?;
        if character.is_new() {
            report.characters_inserted += 1;
        } else {
            report.characters_existing += 1;
        }

        for mv in &fighter.moves {
            batch.insert_move(character.id(), mv)?;
        }
        report.moves_inserted += fighter.moves.len();
        report.fighters += 1;

        tracing::info!(
            fighter = %fighter.key,
            name = %fighter.character.name,
            char_id = %character.id(),
            new = character.is_new(),
            moves = fighter.moves.len(),
            "Fighter loaded"
        );
    }

    batch.commit()?;
    Ok(report)
}

/// Run one ingestion: fetch from `source`, then [`load`] into `storage`.
///
/// A fetch failure ([`IngestError::is_fetch_failure`]) is not an error of the
/// run: it is logged and reported as [`IngestOutcome::Aborted`] with the
/// database untouched.
///
/// # Errors
/// Returns error if the source fails for any other reason, or if writing to
/// storage fails; the run is rolled back.
pub async fn run<S>(source: &S, storage: &mut Storage) -> Result<IngestOutcome, IngestError>
where
    S: PayloadSource + ?Sized,
{
    let state = IngestState::NotStarted;
    tracing::info!(source = %source.describe(), "Fetching frame data");

    let payload = match source.fetch_payload().await {
        Ok(payload) => payload,
        Err(e) if e.is_fetch_failure() => {
            transition(state, IngestState::Aborted);
            tracing::error!(error = %e, "Failed to fetch frame data, nothing written");
            return Ok(IngestOutcome::Aborted(e));
        },
        Err(e) => return Err(e),
    };

    let state = transition(state, IngestState::Ingesting);
    tracing::info!(
        fighters = payload.fighters().len(),
        moves = payload.move_count(),
        "Payload fetched"
    );

    let report = load(storage, &payload)?;

    transition(state, IngestState::Done);
    tracing::info!(
        characters_inserted = report.characters_inserted,
        characters_existing = report.characters_existing,
        moves_inserted = report.moves_inserted,
        "Ingestion committed"
    );
    Ok(IngestOutcome::Done(report))
}
