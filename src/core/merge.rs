use std::cmp::Ordering;

use tracing::debug;

use crate::core::drive::DriveRecord;
use crate::error::{DriveChartError, DriveChartResult};

/// Merges two chronologically ordered per-team drive sequences into one
/// game-wide sequence ordered by elapsed game seconds.
///
/// Equal-elapsed pairs are resolved by drive duration: a zero-duration
/// administrative row sorts ahead of the real drive it abuts (first sequence
/// winning when both are zero-duration). Two simultaneous drives that both
/// consumed clock have no defensible order and abort the merge.
pub fn merge_drive_sequences(
    first: &[DriveRecord],
    second: &[DriveRecord],
) -> DriveChartResult<Vec<DriveRecord>> {
    let mut merged = Vec::with_capacity(first.len() + second.len());
    let mut i = 0;
    let mut j = 0;

    while i < first.len() && j < second.len() {
        let a = &first[i];
        let b = &second[j];
        match a.elapsed_game_seconds.cmp(&b.elapsed_game_seconds) {
            Ordering::Less => {
                merged.push(a.clone());
                i += 1;
            }
            Ordering::Greater => {
                merged.push(b.clone());
                j += 1;
            }
            Ordering::Equal => {
                if a.duration.is_zero() {
                    merged.push(a.clone());
                    i += 1;
                } else if b.duration.is_zero() {
                    merged.push(b.clone());
                    j += 1;
                } else {
                    return Err(DriveChartError::AmbiguousSimultaneousDrives {
                        elapsed_seconds: a.elapsed_game_seconds,
                    });
                }
            }
        }
    }

    merged.extend_from_slice(&first[i..]);
    merged.extend_from_slice(&second[j..]);

    debug!(count = merged.len(), "merged drive sequences");
    Ok(merged)
}
