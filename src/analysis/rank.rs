//! Size filtering and deterministic ordering.

use serde::{Deserialize, Serialize};

use super::extract::FunctionRecord;

/// The ordered output of one analysis run.
///
/// Records are sorted by line count descending; records of equal size
/// keep their source-appearance order. Serializes as a plain JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultSet {
    records: Vec<FunctionRecord>,
}

impl ResultSet {
    pub fn records(&self) -> &[FunctionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a FunctionRecord;
    type IntoIter = std::slice::Iter<'a, FunctionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Keep records of at least `min_lines` lines (inclusive) and order
/// them largest first.
///
/// `sort_by` is stable, so functions of equal size retain the order
/// they appear in the source file.
pub fn rank(records: Vec<FunctionRecord>, min_lines: usize) -> ResultSet {
    let mut kept: Vec<FunctionRecord> = records
        .into_iter()
        .filter(|record| record.line_count >= min_lines)
        .collect();

    kept.sort_by(|a, b| b.line_count.cmp(&a.line_count));

    ResultSet { records: kept }
}
