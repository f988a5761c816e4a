//! Views derived from a session joined against the record set.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stockroom_core::{LocationId, LocationRecord};

use crate::session::StocktakingSession;

/// One verified location: system vs counted quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StocktakeReportRow {
    pub location_id: LocationId,
    pub zone: String,
    pub product_type: String,
    pub location_type: String,
    pub system_quantity: u32,
    pub actual_quantity: u32,
    /// `actual - system`; negative means stock is missing.
    pub difference: i64,
    pub notes: String,
    pub verification_date: NaiveDate,
    pub verified_by: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
    pub pct: f64,
}

impl StocktakingSession {
    /// Verified locations present in `records`, in record order.
    ///
    /// Entries whose location is not in `records` are left out.
    pub fn report(&self, records: &[LocationRecord]) -> Vec<StocktakeReportRow> {
        records
            .iter()
            .filter_map(|r| {
                let entry = self.entry(r.location_id())?;
                Some(StocktakeReportRow {
                    location_id: r.location_id().clone(),
                    zone: r.zone().to_string(),
                    product_type: r.product_type().to_string(),
                    location_type: r.location_type().to_string(),
                    system_quantity: r.quantity(),
                    actual_quantity: entry.actual_quantity,
                    difference: i64::from(entry.actual_quantity) - i64::from(r.quantity()),
                    notes: entry.notes.clone(),
                    verification_date: entry.verification_date,
                    verified_by: entry.verified_by.clone(),
                })
            })
            .collect()
    }

    /// Report rows where the count disagrees with the system.
    pub fn discrepancies(&self, records: &[LocationRecord]) -> Vec<StocktakeReportRow> {
        self.report(records)
            .into_iter()
            .filter(|row| row.difference != 0)
            .collect()
    }

    /// Completion over the caller's scope (already filtered by zone/product).
    pub fn progress(&self, in_scope: &[LocationRecord]) -> Progress {
        let completed = in_scope
            .iter()
            .filter(|r| self.is_verified(r.location_id()))
            .count();
        let total = in_scope.len();
        Progress {
            completed,
            total,
            pct: if total == 0 {
                0.0
            } else {
                completed as f64 / total as f64 * 100.0
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{StocktakeId, VerificationState};
    use stockroom_layout::{WarehouseLayout, generate_with_seed};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    fn setup() -> (StocktakingSession, Vec<LocationRecord>) {
        let records = generate_with_seed(&WarehouseLayout::clothing(), 12).unwrap();
        let session = StocktakingSession::new(StocktakeId("weekly".to_string()), "kim", date());
        (session, records)
    }

    #[test]
    fn report_joins_verified_locations() {
        let (mut s, records) = setup();
        let target = records.iter().find(|r| r.quantity() >= 2).unwrap();
        s.verify(target.location_id().clone(), target.quantity() - 2, "short")
            .unwrap();

        let report = s.report(&records);
        assert_eq!(report.len(), 1);
        let row = &report[0];
        assert_eq!(&row.location_id, target.location_id());
        assert_eq!(row.zone, target.zone());
        assert_eq!(row.system_quantity, target.quantity());
        assert_eq!(row.difference, -2);
        assert_eq!(row.verified_by, "kim");
        assert_eq!(s.discrepancies(&records).len(), 1);
    }

    #[test]
    fn verify_then_edit_leaves_report_empty() {
        let (mut s, records) = setup();
        let id = records[0].location_id().clone();
        s.verify(id.clone(), 3, "").unwrap();
        assert_eq!(s.edit(id.clone()).unwrap(), VerificationState::Pending);
        assert!(s.report(&records).iter().all(|r| r.location_id != id));
        assert!(s.report(&records).is_empty());
    }

    #[test]
    fn matching_counts_are_not_discrepancies() {
        let (mut s, records) = setup();
        for r in records.iter().take(4) {
            s.verify(r.location_id().clone(), r.quantity(), "").unwrap();
        }
        assert_eq!(s.report(&records).len(), 4);
        assert!(s.discrepancies(&records).is_empty());
    }

    #[test]
    fn progress_counts_only_scope() {
        let (mut s, records) = setup();
        let zone_a: Vec<_> = records.iter().filter(|r| r.zone() == "A").cloned().collect();
        s.verify(zone_a[0].location_id().clone(), 1, "").unwrap();
        s.verify(records.last().unwrap().location_id().clone(), 0, "").unwrap();

        let p = s.progress(&zone_a);
        assert_eq!((p.completed, p.total), (1, 120));
        assert!((p.pct - 100.0 / 120.0).abs() < 1e-9);

        assert_eq!(s.pending(&zone_a).len(), 119);
        assert_eq!(s.suggested_quantity(&zone_a[0]), 1);
        assert_eq!(s.suggested_quantity(&zone_a[1]), zone_a[1].quantity());
    }

    #[test]
    fn empty_scope_has_zero_progress() {
        let (s, _) = setup();
        let p = s.progress(&[]);
        assert_eq!((p.completed, p.total, p.pct), (0, 0, 0.0));
    }

    #[test]
    fn unknown_locations_are_left_out_of_report() {
        let (mut s, records) = setup();
        s.verify(LocationId::new("Z-99-99-9"), 5, "").unwrap();
        assert!(s.report(&records).is_empty());
    }
}
