use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stockroom_core::{Aggregate, AggregateRoot, DomainError, Entity, LocationId, LocationRecord};

/// Stocktake session identifier (e.g. `"2026-Q4 floor count"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StocktakeId(pub String);

impl core::fmt::Display for StocktakeId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// What a worker recorded for one location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StocktakingEntry {
    pub actual_quantity: u32,
    pub notes: String,
    pub verified_by: String,
    pub verification_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerificationState {
    Pending,
    Verified(StocktakingEntry),
}

impl VerificationState {
    pub fn is_verified(&self) -> bool {
        matches!(self, VerificationState::Verified(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StocktakeCommand {
    /// Pending -> Verified.
    Verify {
        location_id: LocationId,
        actual_quantity: u32,
        notes: String,
    },
    /// Verified -> Pending; the stored entry is discarded.
    Edit { location_id: LocationId },
    /// Every location back to Pending.
    Reset,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StocktakeEvent {
    LocationVerified {
        location_id: LocationId,
        entry: StocktakingEntry,
    },
    VerificationReopened {
        location_id: LocationId,
    },
    SessionReset {
        cleared: usize,
    },
}

/// Verification state for every location, keyed by location id.
///
/// Locations absent from the map are pending. `verified_by` and
/// `verification_date` are session-wide and stamped onto each entry when it
/// is verified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StocktakingSession {
    id: StocktakeId,
    entries: BTreeMap<LocationId, StocktakingEntry>,
    verified_by: String,
    verification_date: NaiveDate,
    version: u64,
}

impl StocktakingSession {
    pub fn new(
        id: StocktakeId,
        verified_by: impl Into<String>,
        verification_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            entries: BTreeMap::new(),
            verified_by: verified_by.into(),
            verification_date,
            version: 0,
        }
    }

    pub fn verified_by(&self) -> &str {
        &self.verified_by
    }

    pub fn set_verified_by(&mut self, verified_by: impl Into<String>) {
        self.verified_by = verified_by.into();
    }

    pub fn verification_date(&self) -> NaiveDate {
        self.verification_date
    }

    pub fn set_verification_date(&mut self, date: NaiveDate) {
        self.verification_date = date;
    }

    pub fn state(&self, location_id: &LocationId) -> VerificationState {
        match self.entries.get(location_id) {
            Some(entry) => VerificationState::Verified(entry.clone()),
            None => VerificationState::Pending,
        }
    }

    pub fn entry(&self, location_id: &LocationId) -> Option<&StocktakingEntry> {
        self.entries.get(location_id)
    }

    pub fn is_verified(&self, location_id: &LocationId) -> bool {
        self.entries.contains_key(location_id)
    }

    pub fn verified_count(&self) -> usize {
        self.entries.len()
    }

    /// Value to pre-fill the count input with: the system quantity while
    /// pending, the recorded count once verified.
    pub fn suggested_quantity(&self, record: &LocationRecord) -> u32 {
        self.entries
            .get(record.location_id())
            .map_or(record.quantity(), |e| e.actual_quantity)
    }

    /// Records of `in_scope` still waiting for a count, in input order.
    pub fn pending<'a>(&self, in_scope: &'a [LocationRecord]) -> Vec<&'a LocationRecord> {
        in_scope
            .iter()
            .filter(|r| !self.entries.contains_key(r.location_id()))
            .collect()
    }

    /// Record a physical count for a pending location.
    ///
    /// The id is not checked against any record set; use [`Self::verify_in`]
    /// when counts come from a filtered view. Verifying an already verified
    /// location is rejected with [`DomainError::InvalidTransition`]; the stored
    /// entry is left untouched.
    pub fn verify(
        &mut self,
        location_id: LocationId,
        actual_quantity: u32,
        notes: impl Into<String>,
    ) -> Result<VerificationState, DomainError> {
        let cmd = StocktakeCommand::Verify {
            location_id: location_id.clone(),
            actual_quantity,
            notes: notes.into(),
        };
        self.execute(&cmd)?;
        Ok(self.state(&location_id))
    }

    /// [`Self::verify`] restricted to locations present in `in_scope`.
    ///
    /// Unknown ids fail with [`DomainError::InvalidId`] and nothing is recorded.
    pub fn verify_in(
        &mut self,
        in_scope: &[LocationRecord],
        location_id: LocationId,
        actual_quantity: u32,
        notes: impl Into<String>,
    ) -> Result<VerificationState, DomainError> {
        if !in_scope.iter().any(|r| r.id() == &location_id) {
            return Err(DomainError::invalid_id(format!(
                "location {location_id} is not part of this stocktake"
            )));
        }
        self.verify(location_id, actual_quantity, notes)
    }

    /// Reopen a verified location. Editing a pending location is rejected.
    pub fn edit(&mut self, location_id: LocationId) -> Result<VerificationState, DomainError> {
        let cmd = StocktakeCommand::Edit {
            location_id: location_id.clone(),
        };
        self.execute(&cmd)?;
        Ok(self.state(&location_id))
    }

    /// Clear every verification. Returns how many entries were dropped.
    pub fn reset(&mut self) -> Result<usize, DomainError> {
        let events = self.execute(&StocktakeCommand::Reset)?;
        Ok(events
            .iter()
            .map(|e| match e {
                StocktakeEvent::SessionReset { cleared } => *cleared,
                _ => 0,
            })
            .sum())
    }
}

impl AggregateRoot for StocktakingSession {
    type Id = StocktakeId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

impl Aggregate for StocktakingSession {
    type Command = StocktakeCommand;
    type Event = StocktakeEvent;
    type Error = DomainError;

    fn apply(&mut self, event: &Self::Event) {
        match event {
            StocktakeEvent::LocationVerified { location_id, entry } => {
                tracing::info!(
                    session = %self.id,
                    location_id = %location_id,
                    actual = entry.actual_quantity,
                    "location verified"
                );
                self.entries.insert(location_id.clone(), entry.clone());
            }
            StocktakeEvent::VerificationReopened { location_id } => {
                tracing::info!(session = %self.id, location_id = %location_id, "verification reopened");
                self.entries.remove(location_id);
            }
            StocktakeEvent::SessionReset { cleared } => {
                tracing::info!(session = %self.id, cleared, "stocktake reset");
                self.entries.clear();
            }
        }

        self.version += 1;
    }

    fn handle(&self, command: &Self::Command) -> Result<Vec<Self::Event>, Self::Error> {
        match command {
            StocktakeCommand::Verify {
                location_id,
                actual_quantity,
                notes,
            } => {
                if self.entries.contains_key(location_id) {
                    return Err(DomainError::invalid_transition(
                        location_id,
                        "already verified",
                    ));
                }
                Ok(vec![StocktakeEvent::LocationVerified {
                    location_id: location_id.clone(),
                    entry: StocktakingEntry {
                        actual_quantity: *actual_quantity,
                        notes: notes.clone(),
                        verified_by: self.verified_by.clone(),
                        verification_date: self.verification_date,
                    },
                }])
            }
            StocktakeCommand::Edit { location_id } => {
                if !self.entries.contains_key(location_id) {
                    return Err(DomainError::invalid_transition(location_id, "still pending"));
                }
                Ok(vec![StocktakeEvent::VerificationReopened {
                    location_id: location_id.clone(),
                }])
            }
            StocktakeCommand::Reset => Ok(vec![StocktakeEvent::SessionReset {
                cleared: self.entries.len(),
            }]),
        }
    }
}
