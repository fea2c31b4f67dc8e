use std::fmt;

use sigma_core::{ErrorInfo, SigmaError};
use tracing::debug;

use crate::{Family, Subset};

const WORD_BITS: usize = 64;

/// Finite universe with a fixed element order.
///
/// Elements are stored sorted, so an element's index is its rank and is the
/// same for every logically equal universe.
#[derive(Clone, PartialEq, Eq)]
pub struct Universe<T> {
    elements: Vec<T>,
}

impl<T: fmt::Debug> fmt::Debug for Universe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.elements.iter()).finish()
    }
}

impl<T: Ord + Clone> Universe<T> {
    /// Builds a universe from a set of elements.
    pub fn from_set(set: &Subset<T>) -> Self {
        Self {
            elements: set.iter().cloned().collect(),
        }
    }

    /// Number of elements in the universe.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true when the universe has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Elements in index order.
    pub fn elements(&self) -> &[T] {
        &self.elements
    }

    /// Returns the element stored at `index`.
    pub fn element(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }

    /// Returns the index assigned to `element`, if it belongs to the universe.
    pub fn index_of(&self, element: &T) -> Option<usize> {
        self.elements.binary_search(element).ok()
    }

    /// Returns the universe as a set.
    pub fn to_set(&self) -> Subset<T> {
        self.elements.iter().cloned().collect()
    }

    /// Materializes the subset made of the elements at `indices`.
    pub fn subset_from_indices<'a>(&self, indices: impl IntoIterator<Item = &'a usize>) -> Subset<T> {
        indices
            .into_iter()
            .filter_map(|&idx| self.elements.get(idx).cloned())
            .collect()
    }
}

/// Dense 0/1 membership matrix with one packed bit row per family member.
#[derive(Clone, PartialEq, Eq)]
pub struct MembershipMatrix {
    num_rows: usize,
    num_cols: usize,
    words_per_row: usize,
    bits: Vec<u64>,
}

impl fmt::Debug for MembershipMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<String> = (0..self.num_rows)
            .map(|row| {
                (0..self.num_cols)
                    .map(|col| if self.get(row, col) { '1' } else { '0' })
                    .collect()
            })
            .collect();
        f.debug_struct("MembershipMatrix")
            .field("num_rows", &self.num_rows)
            .field("num_cols", &self.num_cols)
            .field("rows", &rows)
            .finish()
    }
}

impl MembershipMatrix {
    /// Creates an all-zero matrix of the given shape.
    pub fn zeros(num_rows: usize, num_cols: usize) -> Self {
        let words_per_row = num_cols.div_ceil(WORD_BITS);
        Self {
            num_rows,
            num_cols,
            words_per_row,
            bits: vec![0u64; num_rows * words_per_row],
        }
    }

    /// Builds a matrix from explicit 0/1 rows. Every row must have `num_cols` entries.
    pub fn from_rows(num_cols: usize, rows: &[Vec<bool>]) -> Self {
        let mut matrix = Self::zeros(rows.len(), num_cols);
        for (row, values) in rows.iter().enumerate() {
            for (col, &value) in values.iter().enumerate().take(num_cols) {
                if value {
                    matrix.set(row, col);
                }
            }
        }
        matrix
    }

    /// Number of rows (family members).
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Number of columns (universe elements).
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Marks element `col` as a member of row `row`.
    pub fn set(&mut self, row: usize, col: usize) {
        debug_assert!(row < self.num_rows && col < self.num_cols);
        let word = row * self.words_per_row + col / WORD_BITS;
        self.bits[word] |= 1u64 << (col % WORD_BITS);
    }

    /// Returns whether element `col` belongs to row `row`.
    pub fn get(&self, row: usize, col: usize) -> bool {
        if row >= self.num_rows || col >= self.num_cols {
            return false;
        }
        let word = row * self.words_per_row + col / WORD_BITS;
        (self.bits[word] >> (col % WORD_BITS)) & 1 == 1
    }

    /// Packs column `col` into words indexed by row.
    pub(crate) fn column_words(&self, col: usize) -> Vec<u64> {
        let mut words = vec![0u64; self.num_rows.div_ceil(WORD_BITS)];
        for row in 0..self.num_rows {
            if self.get(row, col) {
                words[row / WORD_BITS] |= 1u64 << (row % WORD_BITS);
            }
        }
        words
    }
}

/// Result of encoding a family: the matrix, the resolved universe and the row order.
#[derive(Debug, Clone)]
pub struct Encoding<T> {
    /// Membership matrix with one row per family member.
    pub matrix: MembershipMatrix,
    /// Universe whose index order defines the matrix columns.
    pub universe: Universe<T>,
    /// Family members in matrix row order.
    pub rows: Vec<Subset<T>>,
}

/// Resolves the universe of a family, validating an explicit one.
///
/// Without an explicit universe the union of all members is used.
pub fn resolve_universe<T>(
    family: &Family<T>,
    universe: Option<&Subset<T>>,
) -> Result<Subset<T>, SigmaError>
where
    T: Ord + Clone + fmt::Debug,
{
    match universe {
        None => Ok(family.iter().flatten().cloned().collect()),
        Some(universe) => {
            if let Some(subset) = family.iter().find(|subset| !subset.is_subset(universe)) {
                let info = ErrorInfo::new(
                    "subset-not-in-universe",
                    "family member is not a subset of the universe",
                )
                .with_context("subset", format!("{:?}", subset))
                .with_context("universe", format!("{:?}", universe));
                return Err(SigmaError::Validation(info));
            }
            Ok(universe.clone())
        }
    }
}

/// Encodes `family` as a membership matrix over the resolved universe.
pub fn encode<T>(family: &Family<T>, universe: Option<&Subset<T>>) -> Result<Encoding<T>, SigmaError>
where
    T: Ord + Clone + fmt::Debug,
{
    let universe = Universe::from_set(&resolve_universe(family, universe)?);
    let rows: Vec<Subset<T>> = family.iter().cloned().collect();
    let mut matrix = MembershipMatrix::zeros(rows.len(), universe.len());
    for (row, subset) in rows.iter().enumerate() {
        for element in subset {
            if let Some(col) = universe.index_of(element) {
                matrix.set(row, col);
            }
        }
    }
    debug!(
        rows = matrix.num_rows(),
        columns = matrix.num_cols(),
        "encoded family as membership matrix"
    );
    Ok(Encoding {
        matrix,
        universe,
        rows,
    })
}
