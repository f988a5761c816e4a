//! Mark construction for the 2D floor map and the 3D rack view.

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::Serialize;

use stockroom_core::{DOCK_ZONE, LocationId, LocationRecord};

use crate::style::{FLAT_MARK_SIZE, HighlightConfig, hover_text, mark_size_3d, resolve_color};

const EMPTY_OPACITY: f64 = 0.5;
const FILLED_OPACITY: f64 = 1.0;
/// Height of 3D zone labels above the zone's tallest slot.
const LABEL_LIFT: f64 = 2.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyledMark {
    pub location_id: LocationId,
    pub x: f64,
    pub y: f64,
    /// `None` for 2D marks.
    pub z: Option<f64>,
    /// `rgb(r, g, b)`.
    pub color: String,
    pub size: f64,
    pub opacity: f64,
    pub hover_text: String,
    pub group_key: String,
}

/// One legend series: the empty or the occupied slots of a zone.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkGroup {
    pub name: String,
    pub marks: Vec<StyledMark>,
}

/// Non-interactive zone caption at the centroid of the zone's records.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ZoneLabel {
    pub zone: String,
    pub x: f64,
    pub y: f64,
    pub z: Option<f64>,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MarkSet {
    pub groups: Vec<MarkGroup>,
    pub labels: Vec<ZoneLabel>,
}

impl MarkSet {
    pub fn marks(&self) -> impl Iterator<Item = &StyledMark> {
        self.groups.iter().flat_map(|g| g.marks.iter())
    }

    pub fn mark_count(&self) -> usize {
        self.groups.iter().map(|g| g.marks.len()).sum()
    }

    pub fn group(&self, name: &str) -> Option<&MarkGroup> {
        self.groups.iter().find(|g| g.name == name)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum View {
    Flat,
    Spatial,
}

/// Top-down floor map. Slots sharing a footprint (same zone, same x/y, any
/// depth) collapse into one mark; the first record wins.
pub fn build_marks_2d(records: &[LocationRecord], cfg: &HighlightConfig) -> MarkSet {
    let mut seen = HashSet::new();
    let footprint: Vec<&LocationRecord> = records
        .iter()
        .filter(|r| seen.insert((r.zone(), r.x().to_bits(), r.y().to_bits())))
        .collect();

    MarkSet {
        groups: build_groups(&footprint, cfg, View::Flat),
        labels: zone_labels(records, View::Flat),
    }
}

/// 3D rack view: one mark per slot, depth included.
pub fn build_marks_3d(records: &[LocationRecord], cfg: &HighlightConfig) -> MarkSet {
    let all: Vec<&LocationRecord> = records.iter().collect();
    MarkSet {
        groups: build_groups(&all, cfg, View::Spatial),
        labels: zone_labels(records, View::Spatial),
    }
}

#[derive(Default)]
struct ZoneBucket {
    empty: Vec<StyledMark>,
    filled: Vec<StyledMark>,
    filled_label: Option<String>,
}

fn build_groups(records: &[&LocationRecord], cfg: &HighlightConfig, view: View) -> Vec<MarkGroup> {
    // Zones keep the order in which they first appear.
    let mut order: Vec<&str> = Vec::new();
    let mut buckets: HashMap<&str, ZoneBucket> = HashMap::new();

    for r in records {
        let bucket = buckets.entry(r.zone()).or_insert_with(|| {
            order.push(r.zone());
            ZoneBucket::default()
        });
        let group_key = if r.is_empty() {
            format!("Zone {} - Empty", r.zone())
        } else {
            let label = bucket
                .filled_label
                .get_or_insert_with(|| r.product_type().to_string());
            format!("Zone {} - {label}", r.zone())
        };

        let mark = style_mark(r, cfg, view, group_key);
        if r.is_empty() {
            bucket.empty.push(mark);
        } else {
            bucket.filled.push(mark);
        }
    }

    let mut groups = Vec::new();
    for zone in order {
        let Some(bucket) = buckets.remove(zone) else {
            continue;
        };
        for marks in [bucket.empty, bucket.filled] {
            if let Some(first) = marks.first() {
                groups.push(MarkGroup {
                    name: first.group_key.clone(),
                    marks,
                });
            }
        }
    }

    tracing::debug!(
        groups = groups.len(),
        marks = groups.iter().map(|g| g.marks.len()).sum::<usize>(),
        ?view,
        "built marks"
    );
    groups
}

fn style_mark(r: &LocationRecord, cfg: &HighlightConfig, view: View, group_key: String) -> StyledMark {
    let (z, size) = match view {
        View::Flat => (None, FLAT_MARK_SIZE),
        View::Spatial => (Some(r.z()), mark_size_3d(r.quantity())),
    };
    StyledMark {
        location_id: r.location_id().clone(),
        x: r.x(),
        y: r.y(),
        z,
        color: resolve_color(r, cfg).css(),
        size,
        opacity: if r.is_empty() {
            EMPTY_OPACITY
        } else {
            FILLED_OPACITY
        },
        hover_text: hover_text(r, cfg),
        group_key,
    }
}

fn zone_labels(records: &[LocationRecord], view: View) -> Vec<ZoneLabel> {
    let mut zones: BTreeMap<&str, (f64, f64, f64, usize)> = BTreeMap::new();
    for r in records.iter().filter(|r| r.zone() != DOCK_ZONE) {
        let acc = zones
            .entry(r.zone())
            .or_insert((0.0, 0.0, f64::NEG_INFINITY, 0));
        acc.0 += r.x();
        acc.1 += r.y();
        acc.2 = acc.2.max(r.z());
        acc.3 += 1;
    }

    zones
        .into_iter()
        .map(|(zone, (sx, sy, max_z, n))| {
            let n = n as f64;
            ZoneLabel {
                zone: zone.to_string(),
                x: sx / n,
                y: sy / n,
                z: (view == View::Spatial).then_some(max_z + LABEL_LIFT),
                text: zone.to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::{NewLocation, Rgb};
    use stockroom_layout::{WarehouseLayout, generate_with_seed};

    fn rec(id: &str, zone: &str, depth: u32, qty: u32, x: f64, y: f64) -> LocationRecord {
        LocationRecord::new(NewLocation {
            location_id: LocationId::new(id),
            zone: zone.to_string(),
            row: 1,
            column: 1,
            depth,
            location_type: "Folded Shelves".to_string(),
            product_type: "Jeans".to_string(),
            product_id: (qty > 0).then(|| "Jea-Bla-S".to_string()),
            quantity: qty,
            x,
            y,
            z: f64::from(depth) * 1.5,
            color: Rgb::new(0, 0, 200),
            depth_info: String::new(),
        })
        .unwrap()
    }

    #[test]
    fn stacked_depths_collapse_in_2d_only() {
        let records = vec![
            rec("B-01-01-1", "B", 1, 4, 11.5, 62.0),
            rec("B-01-01-2", "B", 2, 0, 11.5, 62.0),
        ];
        let flat = build_marks_2d(&records, &HighlightConfig::default());
        assert_eq!(flat.mark_count(), 1);
        let mark = flat.marks().next().unwrap();
        assert_eq!(mark.location_id.as_str(), "B-01-01-1");
        assert_eq!(mark.z, None);
        assert_eq!(mark.size, 10.0);

        let spatial = build_marks_3d(&records, &HighlightConfig::default());
        assert_eq!(spatial.mark_count(), 2);
        assert!(spatial.marks().all(|m| m.z.is_some()));
    }

    #[test]
    fn groups_split_zone_by_occupancy() {
        let records = vec![
            rec("B1", "B", 1, 4, 11.5, 62.0),
            rec("A1", "A", 1, 0, 11.5, 72.0),
            rec("B2", "B", 1, 0, 13.0, 62.0),
            rec("B3", "B", 1, 9, 14.5, 62.0),
        ];
        let set = build_marks_3d(&records, &HighlightConfig::default());
        let names: Vec<_> = set.groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, ["Zone B - Empty", "Zone B - Jeans", "Zone A - Empty"]);
        assert_eq!(set.group("Zone B - Jeans").unwrap().marks.len(), 2);
        assert!(set.marks().all(|m| set.group(&m.group_key).is_some()));
    }

    #[test]
    fn empty_marks_are_faded_and_fixed_size() {
        let records = vec![rec("A1", "A", 1, 0, 11.5, 72.0), rec("A2", "A", 1, 20, 13.0, 72.0)];
        let set = build_marks_3d(&records, &HighlightConfig::default());
        let empty = &set.group("Zone A - Empty").unwrap().marks[0];
        assert_eq!((empty.size, empty.opacity), (8.0, 0.5));
        assert_eq!(empty.color, "rgb(220, 220, 220)");
        let full = &set.group("Zone A - Jeans").unwrap().marks[0];
        assert_eq!((full.size, full.opacity), (10.0, 1.0));
        assert_eq!(full.color, "rgb(0, 0, 200)");
    }

    #[test]
    fn labels_sit_at_zone_centroid_and_skip_dock() {
        let records = vec![
            rec("A1", "A", 1, 3, 10.0, 70.0),
            rec("A2", "A", 3, 3, 14.0, 74.0),
            rec("DOCK-1", DOCK_ZONE, 1, 0, 2.0, 35.0),
        ];
        let set = build_marks_3d(&records, &HighlightConfig::default());
        assert_eq!(set.labels.len(), 1);
        let label = &set.labels[0];
        assert_eq!((label.x, label.y), (12.0, 72.0));
        assert_eq!(label.z, Some(4.5 + 2.0));
        assert_eq!(label.text, "A");

        let flat = build_marks_2d(&records, &HighlightConfig::default());
        assert_eq!(flat.labels[0].z, None);
    }

    #[test]
    fn generated_layout_maps_every_slot_in_3d() {
        let records = generate_with_seed(&WarehouseLayout::clothing(), 4).unwrap();
        let cfg = HighlightConfig {
            highlight_understock: true,
            highlight_overstock: true,
            ..HighlightConfig::default()
        };
        let spatial = build_marks_3d(&records, &cfg);
        assert_eq!(spatial.mark_count(), records.len());
        // 19 zones get labels, the dock does not.
        assert_eq!(spatial.labels.len(), 19);

        let flat = build_marks_2d(&records, &cfg);
        assert!(flat.mark_count() < records.len());
        let zone_a_footprints = 2 * 20;
        let zone_a_marks = flat
            .groups
            .iter()
            .filter(|g| g.name.starts_with("Zone A -"))
            .map(|g| g.marks.len())
            .sum::<usize>();
        assert_eq!(zone_a_marks, zone_a_footprints);
    }

    #[test]
    fn nothing_in_nothing_out() {
        let set = build_marks_2d(&[], &HighlightConfig::default());
        assert_eq!(set, MarkSet::default());
    }
}
