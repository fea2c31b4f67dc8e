use std::collections::BTreeMap;
use std::fmt;

use crate::encode::MembershipMatrix;

/// Bit pattern of one matrix column, packed by row.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ColumnPattern(Box<[u64]>);

impl fmt::Debug for ColumnPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ColumnPattern").field(&self.0).finish()
    }
}

/// Partition of the column indices into classes of identical columns.
///
/// Two universe elements share a class iff every family member contains both
/// or neither. Classes are ordered by their smallest index and every index
/// belongs to exactly one class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquivalenceClasses {
    classes: Vec<(ColumnPattern, Vec<usize>)>,
    class_of: Vec<usize>,
}

impl EquivalenceClasses {
    /// Number of classes `k`.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Returns true when there are no classes (empty universe).
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Number of column indices covered by the partition.
    pub fn num_indices(&self) -> usize {
        self.class_of.len()
    }

    /// Column indices belonging to class `class`.
    pub fn members(&self, class: usize) -> &[usize] {
        self.classes
            .get(class)
            .map(|(_, members)| members.as_slice())
            .unwrap_or(&[])
    }

    /// Class holding column `index`.
    pub fn class_of(&self, index: usize) -> Option<usize> {
        self.class_of.get(index).copied()
    }

    /// Iterates over `(pattern, members)` pairs in class order.
    pub fn iter(&self) -> impl Iterator<Item = (&ColumnPattern, &[usize])> + '_ {
        self.classes
            .iter()
            .map(|(pattern, members)| (pattern, members.as_slice()))
    }
}

/// Groups the matrix columns by bit pattern.
pub fn partition_columns(matrix: &MembershipMatrix) -> EquivalenceClasses {
    let mut groups: BTreeMap<ColumnPattern, Vec<usize>> = BTreeMap::new();
    for col in 0..matrix.num_cols() {
        let pattern = ColumnPattern(matrix.column_words(col).into_boxed_slice());
        groups.entry(pattern).or_default().push(col);
    }

    let mut classes: Vec<(ColumnPattern, Vec<usize>)> = groups.into_iter().collect();
    classes.sort_by_key(|(_, members)| members[0]);

    let mut class_of = vec![0usize; matrix.num_cols()];
    for (class, (_, members)) in classes.iter().enumerate() {
        for &col in members {
            class_of[col] = class;
        }
    }

    EquivalenceClasses { classes, class_of }
}
