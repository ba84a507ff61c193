//! Legend ordering and id assignment.
//!
//! Ids follow the order a reader scans the legend: quadrants in traversal order, rings
//! inner to outer, labels alphabetically within a ring. Building the legend first and
//! numbering along it keeps both in lockstep.

use serde::Serialize;

use super::{Entry, EntryGroups};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendSection {
    pub quadrant: usize,
    pub rings: Vec<LegendRing>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendRing {
    pub ring: usize,
    /// Indices into the layout's entries, sorted by label.
    pub entries: Vec<usize>,
}

pub fn build_legend(entries: &[Entry], groups: &EntryGroups, order: &[usize]) -> Vec<LegendSection> {
    order
        .iter()
        .map(|&quadrant| LegendSection {
            quadrant,
            rings: (0..groups.ring_count())
                .map(|ring| {
                    let mut members = groups.get(quadrant, ring).to_vec();
                    // Stable: equal labels keep input order.
                    members.sort_by(|&a, &b| entries[a].label.cmp(&entries[b].label));
                    LegendRing { ring, entries: members }
                })
                .collect(),
        })
        .collect()
}

/// Number entries `1..=N` along the legend.
pub fn assign_ids(entries: &mut [Entry], legend: &[LegendSection]) {
    let mut next = 1usize;
    for section in legend {
        for ring in &section.rings {
            for &idx in &ring.entries {
                entries[idx].id = next.to_string();
                next += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EntryInput;
    use crate::layout::SegmentId;

    fn entries(rows: &[(&str, usize, usize)]) -> Vec<Entry> {
        rows
            .iter()
            .map(|&(label, q, r)| Entry::unplaced(label, q, r, SegmentId(0)))
            .collect()
    }

    fn inputs(rows: &[(&str, usize, usize)]) -> Vec<EntryInput> {
        rows.iter().map(|&(label, q, r)| EntryInput::new(label, q, r)).collect()
    }

    #[test]
    fn test_ids_follow_quadrant_order_then_ring_then_label() {
        let rows = [
            ("Zig", 0, 0),
            ("Ada", 2, 1),
            ("Go", 2, 0),
            ("C", 2, 0),
            ("Rust", 3, 3),
            ("Kotlin", 1, 0),
        ];
        let mut list = entries(&rows);
        let groups = EntryGroups::from_entries(&inputs(&rows), 4, 4);
        let legend = build_legend(&list, &groups, &[2, 3, 1, 0]);
        assign_ids(&mut list, &legend);

        let ids: Vec<&str> = list.iter().map(|e| e.id.as_str()).collect();
        // Quadrant 2: ring 0 C, Go; ring 1 Ada. Quadrant 3: Rust. Quadrant 1: Kotlin. Quadrant 0: Zig.
        assert_eq!(ids, vec!["6", "3", "2", "1", "4", "5"]);
    }

    #[test]
    fn test_equal_labels_keep_input_order() {
        let rows = [("Same", 0, 0), ("Same", 0, 0), ("Alpha", 0, 0)];
        let mut list = entries(&rows);
        let groups = EntryGroups::from_entries(&inputs(&rows), 2, 4);
        let legend = build_legend(&list, &groups, &[1, 0]);
        assert_eq!(legend[1].rings[0].entries, vec![2, 0, 1]);
        assign_ids(&mut list, &legend);
        assert_eq!(list[0].id, "2");
        assert_eq!(list[1].id, "3");
        assert_eq!(list[2].id, "1");
    }

    #[test]
    fn test_legend_lists_empty_rings() {
        let rows = [("A", 0, 0)];
        let list = entries(&rows);
        let groups = EntryGroups::from_entries(&inputs(&rows), 3, 5);
        let legend = build_legend(&list, &groups, &[1, 2, 0]);
        assert_eq!(legend.len(), 3);
        assert!(legend.iter().all(|s| s.rings.len() == 5));
        assert_eq!(legend[2].rings[0].entries, vec![0]);
    }
}
