use rand::Rng;

use crate::core::error::{check_len, Result};

/// Row-major dense storage for a layer's edge weights.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<f32>,
}

impl Matrix {
    pub fn new(rows: usize, cols: usize, val: f32) -> Matrix {
        let data = vec![val; rows * cols];
        Matrix { rows, cols, data }
    }

    /// Builds a matrix from nested rows, rejecting ragged input.
    pub fn from_rows(rows: &[Vec<f32>], cols: usize) -> Result<Matrix> {
        let mut data = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            check_len(cols, row.len())?;
            data.extend_from_slice(row);
        }
        Ok(Matrix {
            rows: rows.len(),
            cols,
            data,
        })
    }

    pub fn to_rows(&self) -> Vec<Vec<f32>> {
        if self.cols == 0 {
            return vec![Vec::new(); self.rows];
        }
        self.data.chunks(self.cols).map(|row| row.to_vec()).collect()
    }

    pub fn row(&self, row: usize) -> &[f32] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    pub fn row_mut(&mut self, row: usize) -> &mut [f32] {
        let start = row * self.cols;
        &mut self.data[start..start + self.cols]
    }

    /// Fills every entry with an independent draw from `[-1, 1)`.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.data.iter_mut().for_each(|v| {
            *v = rng.gen_range(-1.0..1.0);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::NetError;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn randomize_stays_in_unit_interval() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut m = Matrix::new(8, 8, 0.0);
        m.randomize(&mut rng);
        assert!(m.data.iter().all(|v| (-1.0..1.0).contains(v)));
    }

    #[test]
    fn randomize_is_reproducible_with_same_seed() {
        let mut a = Matrix::new(3, 4, 0.0);
        let mut b = Matrix::new(3, 4, 0.0);
        a.randomize(&mut StdRng::seed_from_u64(42));
        b.randomize(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn from_rows_rejects_ragged_input() {
        let rows = vec![vec![1.0, 2.0], vec![3.0]];
        assert_eq!(
            Matrix::from_rows(&rows, 2),
            Err(NetError::ShapeMismatch {
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn rows_view_row_major_storage() {
        let mut m = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]], 2).unwrap();
        assert_eq!(m.data, vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(m.row(1), &[3.0, 4.0]);

        m.row_mut(0)[1] = -2.0;
        assert_eq!(m.to_rows(), vec![vec![1.0, -2.0], vec![3.0, 4.0]]);
    }
}
