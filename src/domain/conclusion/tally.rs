//! Opinion aggregation over accepted members.

use serde::Serialize;
use std::collections::BTreeSet;

use crate::domain::foundation::{ConclusionId, Username};

use super::Opinion;

/// Support/oppose counts for one conclusion.
///
/// Only opinions of currently accepted members are counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OpinionTally {
    pub supports: usize,
    pub opposes: usize,
}

impl OpinionTally {
    pub fn of(
        conclusion_id: &ConclusionId,
        opinions: &[Opinion],
        accepted: &BTreeSet<Username>,
    ) -> Self {
        opinions
            .iter()
            .filter(|o| o.conclusion_id() == conclusion_id && accepted.contains(o.author()))
            .fold(Self::default(), |mut tally, o| {
                if o.stance().is_support() {
                    tally.supports += 1;
                } else {
                    tally.opposes += 1;
                }
                tally
            })
    }

    /// Support minus opposition.
    pub fn net(&self) -> i64 {
        self.supports as i64 - self.opposes as i64
    }
}
