//! Sparse feature vectors.

use serde::{Deserialize, Serialize};

/// A sparse vector with entries sorted by index and no explicit zeros.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SparseVector {
    dimension: usize,
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    /// An all-zero vector.
    pub fn zeros(dimension: usize) -> Self {
        Self {
            dimension,
            entries: Vec::new(),
        }
    }

    /// Build a vector from `(index, value)` pairs. Duplicate indices are
    /// summed, zeros and out-of-range indices dropped.
    pub fn from_pairs<I>(dimension: usize, pairs: I) -> Self
    where
        I: IntoIterator<Item = (usize, f64)>,
    {
        let mut entries: Vec<(usize, f64)> =
            pairs.into_iter().filter(|&(i, _)| i < dimension).collect();
        entries.sort_by_key(|&(i, _)| i);

        let mut merged: Vec<(usize, f64)> = Vec::with_capacity(entries.len());
        for (index, value) in entries {
            match merged.last_mut() {
                Some(last) if last.0 == index => last.1 += value,
                _ => merged.push((index, value)),
            }
        }
        merged.retain(|&(_, v)| v != 0.0);

        Self {
            dimension,
            entries: merged,
        }
    }

    /// Number of columns.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of non-zero entries.
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Whether every entry is zero.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Non-zero entries in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.entries.iter().copied()
    }

    /// Value at `index`.
    pub fn get(&self, index: usize) -> f64 {
        self.entries
            .binary_search_by_key(&index, |&(i, _)| i)
            .map(|pos| self.entries[pos].1)
            .unwrap_or(0.0)
    }

    /// Dot product with a dense vector. Entries beyond `dense` count as zero.
    pub fn dot(&self, dense: &[f64]) -> f64 {
        self.entries
            .iter()
            .filter_map(|&(i, v)| dense.get(i).map(|w| v * w))
            .sum()
    }

    /// Multiply every entry by `factor`.
    pub fn scale(&mut self, factor: f64) {
        for entry in &mut self.entries {
            entry.1 *= factor;
        }
    }

    /// Apply `f` to every non-zero entry.
    pub fn map_values<F: Fn(usize, f64) -> f64>(&mut self, f: F) {
        for entry in &mut self.entries {
            entry.1 = f(entry.0, entry.1);
        }
        self.entries.retain(|&(_, v)| v != 0.0);
    }

    /// Sum of absolute values.
    pub fn l1_norm(&self) -> f64 {
        self.entries.iter().map(|&(_, v)| v.abs()).sum()
    }

    /// Euclidean length.
    pub fn l2_norm(&self) -> f64 {
        self.entries.iter().map(|&(_, v)| v * v).sum::<f64>().sqrt()
    }

    /// Append `other` after this vector's columns.
    pub fn concat(&mut self, other: &SparseVector) {
        let offset = self.dimension;
        self.entries
            .extend(other.entries.iter().map(|&(i, v)| (i + offset, v)));
        self.dimension += other.dimension;
    }
}
