// Spatial hash grid for circle proximity queries.
//
// Instead of checking every pair of entries, items are bucketed into square cells at least
// as wide as the largest query distance, so only the 3x3 neighbourhood of a cell needs to
// be looked at.

use crate::geometry::Point;
use std::collections::HashMap;

/// A spatial hash grid over indexed points.
#[derive(Debug, Clone)]
pub struct SpatialGrid {
    /// Size of each cell in the grid.
    cell_size: f64,
    /// Map from cell coordinates to the indices of the points in that cell.
    cells: HashMap<(i64, i64), Vec<usize>>,
}

impl SpatialGrid {
    /// Create a new grid. Cell size should be at least the largest distance ever queried.
    pub fn new(cell_size: f64) -> Self {
        Self {
            cell_size: if cell_size.is_finite() && cell_size > 0.0 { cell_size } else { 1.0 },
            cells: HashMap::new(),
        }
    }

    fn cell_of(&self, p: Point) -> (i64, i64) {
        (
            (p.x / self.cell_size).floor() as i64,
            (p.y / self.cell_size).floor() as i64,
        )
    }

    pub fn insert(&mut self, index: usize, p: Point) {
        let cell = self.cell_of(p);
        self.cells.entry(cell).or_default().push(index);
    }

    /// Indices of points in the cell containing `p` and its eight neighbours.
    /// May include false positives; caller should do the exact distance check.
    pub fn query(&self, p: Point) -> Vec<usize> {
        let (cx, cy) = self.cell_of(p);
        let mut result = Vec::new();
        for dx in -1..=1 {
            for dy in -1..=1 {
                if let Some(items) = self.cells.get(&(cx + dx, cy + dy)) {
                    result.extend_from_slice(items);
                }
            }
        }
        result.sort_unstable();
        result
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.cells.values().map(Vec::len).sum()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_query() {
        let mut grid = SpatialGrid::new(100.0);
        grid.insert(0, Point::new(10.0, 10.0));
        grid.insert(1, Point::new(250.0, 250.0));
        grid.insert(2, Point::new(-20.0, 60.0));

        let nearby = grid.query(Point::new(30.0, 30.0));
        assert_eq!(nearby, vec![0, 2]);
        assert_eq!(grid.len(), 3);
    }

    #[test]
    fn test_neighbour_cells_found_across_boundary() {
        let mut grid = SpatialGrid::new(10.0);
        grid.insert(7, Point::new(9.9, 0.0));
        assert_eq!(grid.query(Point::new(10.1, 0.0)), vec![7]);
        assert!(grid.query(Point::new(40.0, 0.0)).is_empty());
    }

    #[test]
    fn test_degenerate_cell_size() {
        let grid = SpatialGrid::new(0.0);
        assert!(grid.is_empty());
        assert!(grid.query(Point::new(0.0, 0.0)).is_empty());
    }
}
