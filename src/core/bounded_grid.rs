use crate::core::models::Coordinate;

/// Row-major grid addressed by `(x, y)` with the origin at the top left.
/// Rows may differ in length; a position past the end of its own row is
/// outside the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoundedGrid<T> {
    rows: Vec<Vec<T>>,
}

impl<T> BoundedGrid<T> {
    pub fn new(rows: Vec<Vec<T>>) -> Self {
        BoundedGrid { rows }
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Vec<T>] {
        &self.rows
    }

    pub fn get(&self, pos: &Coordinate) -> Option<&T> {
        let (row, column) = self.index_of(pos)?;
        Some(&self.rows[row][column])
    }

    pub fn get_mut(&mut self, pos: &Coordinate) -> Option<&mut T> {
        let (row, column) = self.index_of(pos)?;
        Some(&mut self.rows[row][column])
    }

    /// Every cell with its position, scanning rows top to bottom and each row
    /// left to right.
    pub fn iter(&self) -> impl Iterator<Item = (Coordinate, &T)> {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, cell)| (Coordinate::new(x as i32, y as i32), cell))
        })
    }

    // the only place (x, y) becomes (row, column)
    fn index_of(&self, pos: &Coordinate) -> Option<(usize, usize)> {
        let x = usize::try_from(pos.x).ok()?;
        let y = usize::try_from(pos.y).ok()?;
        let row = self.rows.get(y)?;
        (x < row.len()).then_some((y, x))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn ragged() -> BoundedGrid<char> {
        BoundedGrid::new(vec![
            vec!['a', 'b', 'c', 'd'],
            vec!['e', 'f'],
            vec!['g', 'h', 'i'],
        ])
    }

    #[test]
    fn get_reads_row_by_y_and_column_by_x() {
        let grid = ragged();
        assert_eq!(grid.get(&Coordinate::new(3, 0)), Some(&'d'));
        assert_eq!(grid.get(&Coordinate::new(0, 2)), Some(&'g'));
        assert_eq!(grid.get(&Coordinate::new(1, 1)), Some(&'f'));
    }

    #[test]
    fn positions_outside_rows_are_out_of_bounds() {
        let grid = ragged();
        assert!(grid.get(&Coordinate::new(-1, 0)).is_none());
        assert!(grid.get(&Coordinate::new(0, -1)).is_none());
        assert!(grid.get(&Coordinate::new(0, 3)).is_none());
        assert!(grid.get(&Coordinate::new(2, 1)).is_none());
        assert!(grid.get(&Coordinate::new(2, 2)).is_some());
    }

    #[test]
    fn get_mut_writes_in_place() {
        let mut grid = ragged();
        if let Some(cell) = grid.get_mut(&Coordinate::new(1, 2)) {
            *cell = 'z';
        }
        assert_eq!(grid.rows()[2], vec!['g', 'z', 'i']);
        assert!(grid.get_mut(&Coordinate::new(5, 5)).is_none());
    }

    #[test]
    fn iter_scans_row_major() {
        let grid = ragged();
        let order: String = grid.iter().map(|(_, &c)| c).collect();
        assert_eq!(order, "abcdefghi");
        let (pos, _) = grid.iter().nth(5).unwrap();
        assert_eq!(pos, Coordinate::new(1, 1));
    }
}
