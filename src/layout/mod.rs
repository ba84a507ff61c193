// Radar layout pipeline.
//
// Goals:
// - Deterministic: a pure function of (config, entries, seed)
// - Every entry ends inside its (quadrant, ring) segment
// - Entries in crowded segments do not overlap
//
// Steps:
// 1. validate the config (nothing below re-checks indices)
// 2. generate quadrant windows, traversal order and ring radii
// 3. bucket entries per (quadrant, ring); build one segment per non-empty group
// 4. grid placement inside each segment
// 5. legend ordering + sequential ids
// 6. adaptive collision radius per group
// 7. collision pass, re-clamping into segments after every step
//
// Submodules:
// - placement: initial grid placement
// - sizing: adaptive collision radius
// - legend: legend ordering + id assignment
// - collision: decluttering simulation
// - spatial_grid / diagnostics: overlap reporting
//
// Output:
// - RadarLayout with entries (in input order), segments, legend, and a resumable
//   simulation for renderers that keep stepping.

use serde::Serialize;

use crate::config::{validate, EntryInput, Moved, RadarConfig};
use crate::error::LayoutError;
use crate::geometry::{
    generate_quadrants, generate_ring_radii, quadrant_order, Padding, Point, Quadrant, Segment,
};
use crate::rng::SeededRng;

pub mod collision;
pub mod diagnostics;
pub mod legend;
pub mod placement;
pub mod sizing;
mod spatial_grid;

pub use collision::{CollisionParams, Simulation};
pub use diagnostics::{diagnose, Diagnostics};
pub use legend::{LegendRing, LegendSection};

/// Index of a segment in [`RadarLayout::segments`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SegmentId(pub usize);

#[derive(Debug, Clone, Serialize)]
pub struct Ring {
    pub name: String,
    pub color: String,
    pub radius: i32,
}

/// A placed entry.
#[derive(Debug, Clone, Serialize)]
pub struct Entry {
    pub label: String,
    pub quadrant: usize,
    pub ring: usize,
    pub active: bool,
    pub moved: Moved,
    /// Chart-centered position.
    pub x: f64,
    pub y: f64,
    /// Sequential, 1-based.
    pub id: String,
    pub color: String,
    pub collision_radius: f64,
    pub segment: SegmentId,
    /// Position after the most recent clamp into the segment.
    pub stable_x: f64,
    pub stable_y: f64,
}

impl Entry {
    pub fn unplaced(label: impl Into<String>, quadrant: usize, ring: usize, segment: SegmentId) -> Self {
        Self {
            label: label.into(),
            quadrant,
            ring,
            active: true,
            moved: Moved::None,
            x: 0.0,
            y: 0.0,
            id: String::new(),
            color: String::new(),
            collision_radius: 0.0,
            segment,
            stable_x: 0.0,
            stable_y: 0.0,
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    fn set_position(&mut self, p: Point) {
        self.x = p.x;
        self.y = p.y;
        self.stable_x = p.x;
        self.stable_y = p.y;
    }
}

/// Entry indices bucketed per (quadrant, ring), input order preserved.
#[derive(Debug, Clone)]
pub struct EntryGroups {
    ring_count: usize,
    cells: Vec<Vec<usize>>,
}

impl EntryGroups {
    pub fn from_entries(entries: &[EntryInput], quadrant_count: usize, ring_count: usize) -> Self {
        let mut cells = vec![Vec::new(); quadrant_count * ring_count];
        for (idx, e) in entries.iter().enumerate() {
            cells[e.quadrant * ring_count + e.ring].push(idx);
        }
        Self { ring_count, cells }
    }

    pub fn ring_count(&self) -> usize {
        self.ring_count
    }

    pub fn get(&self, quadrant: usize, ring: usize) -> &[usize] {
        &self.cells[quadrant * self.ring_count + ring]
    }

    /// Non-empty groups, quadrant-major.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &[usize])> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, members)| !members.is_empty())
            .map(|(i, members)| (i / self.ring_count, i % self.ring_count, members.as_slice()))
    }
}

/// Segments built on first use, one per (quadrant, ring).
#[derive(Debug, Clone)]
struct SegmentTable {
    ring_count: usize,
    index: Vec<Option<SegmentId>>,
    segments: Vec<Segment>,
}

impl SegmentTable {
    fn new(quadrant_count: usize, ring_count: usize) -> Self {
        Self {
            ring_count,
            index: vec![None; quadrant_count * ring_count],
            segments: Vec::new(),
        }
    }

    fn get_or_build(
        &mut self,
        quadrant: usize,
        ring: usize,
        quadrants: &[Quadrant],
        ring_radii: &[i32],
        padding: Padding,
    ) -> SegmentId {
        let slot = quadrant * self.ring_count + ring;
        if let Some(id) = self.index[slot] {
            return id;
        }
        let id = SegmentId(self.segments.len());
        self.segments.push(Segment::new(quadrant, ring, quadrants, ring_radii, padding));
        self.index[slot] = Some(id);
        id
    }
}

#[derive(Debug, Clone)]
pub struct RadarLayout {
    pub quadrant_names: Vec<String>,
    pub quadrants: Vec<Quadrant>,
    /// Legend / id traversal order of quadrant indices.
    pub quadrant_order: Vec<usize>,
    pub rings: Vec<Ring>,
    /// In input order.
    pub entries: Vec<Entry>,
    pub legend: Vec<LegendSection>,
    segments: SegmentTable,
    padding: Padding,
    simulation: Simulation,
    rng: SeededRng,
}

impl RadarLayout {
    pub fn segments(&self) -> &[Segment] {
        &self.segments.segments
    }

    pub fn segment(&self, id: SegmentId) -> &Segment {
        &self.segments.segments[id.0]
    }

    /// The segment of a (quadrant, ring) pair, if any entry lives there.
    pub fn segment_for(&self, quadrant: usize, ring: usize) -> Option<&Segment> {
        if quadrant >= self.quadrants.len() || ring >= self.rings.len() {
            return None;
        }
        self.segments.index[quadrant * self.segments.ring_count + ring].map(|id| self.segment(id))
    }

    /// Segment geometry for any (quadrant, ring) pair, including empty ones.
    pub fn build_segment(&self, quadrant: usize, ring: usize) -> Option<Segment> {
        if quadrant >= self.quadrants.len() || ring >= self.rings.len() {
            return None;
        }
        let radii: Vec<i32> = self.rings.iter().map(|r| r.radius).collect();
        Some(Segment::new(quadrant, ring, &self.quadrants, &radii, self.padding))
    }

    pub fn clamp(&self, id: SegmentId, p: Point) -> Point {
        self.segment(id).clamp(p)
    }

    /// Random point inside a segment, drawn from the layout's own generator.
    pub fn random_point(&mut self, id: SegmentId) -> Point {
        let segment = &self.segments.segments[id.0];
        segment.random_point(&mut self.rng)
    }

    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }

    /// One more collision step, for renderers that animate past the initial pass.
    pub fn tick(&mut self) {
        self.simulation
            .tick(&mut self.entries, &self.segments.segments, &mut self.rng);
    }

    pub fn entry_by_id(&self, id: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }
}

/// Lay out a radar. Fails only on structural config errors; no partial layout is produced.
pub fn layout_radar(config: &RadarConfig) -> Result<RadarLayout, LayoutError> {
    validate(config)?;

    let opts = &config.options;
    let quadrant_count = config.quadrants.len();
    let ring_count = config.rings.len();

    let quadrants = generate_quadrants(quadrant_count);
    let order = quadrant_order(quadrant_count);
    let ring_radii = generate_ring_radii(ring_count, opts.radius);
    log::debug!(
        "layout_radar(): {} quadrants (order {:?}), ring radii {:?}, {} entries",
        quadrant_count,
        order,
        ring_radii,
        config.entries.len()
    );

    let padding = Padding { radial: opts.radial_padding, angular: opts.angular_padding };
    let groups = EntryGroups::from_entries(&config.entries, quadrant_count, ring_count);

    // Segment + color per entry.
    let mut segments = SegmentTable::new(quadrant_count, ring_count);
    let mut entries: Vec<Entry> = config
        .entries
        .iter()
        .map(|input| {
            let segment = segments.get_or_build(input.quadrant, input.ring, &quadrants, &ring_radii, padding);
            let color = if input.active || opts.print_layout {
                config.rings[input.ring].color.clone()
            } else {
                opts.inactive_color.clone()
            };
            Entry {
                active: input.active,
                moved: input.moved,
                color,
                ..Entry::unplaced(input.label.clone(), input.quadrant, input.ring, segment)
            }
        })
        .collect();

    let mut rng = SeededRng::new(opts.seed);

    for (_, _, members) in groups.iter() {
        let segment = &segments.segments[entries[members[0]].segment.0];
        let points = placement::place_group(segment, members.len(), opts.collision_radius, &mut rng);
        for (&idx, p) in members.iter().zip(points) {
            entries[idx].set_position(p);
        }
    }

    let legend = legend::build_legend(&entries, &groups, &order);
    legend::assign_ids(&mut entries, &legend);

    for (_, _, members) in groups.iter() {
        let segment = &segments.segments[entries[members[0]].segment.0];
        let radius = sizing::collision_radius(segment, members.len(), quadrant_count);
        for &idx in members {
            entries[idx].collision_radius = radius;
        }
    }

    let mut simulation = Simulation::new(CollisionParams::default(), entries.len());
    simulation.run(&mut entries, &segments.segments, &mut rng);

    Ok(RadarLayout {
        quadrant_names: config.quadrants.iter().map(|q| q.name.clone()).collect(),
        quadrants,
        quadrant_order: order,
        rings: config
            .rings
            .iter()
            .zip(&ring_radii)
            .map(|(def, &radius)| Ring { name: def.name.clone(), color: def.color.clone(), radius })
            .collect(),
        entries,
        legend,
        segments,
        padding,
        simulation,
        rng,
    })
}
