use serde::{Deserialize, Serialize};

/// Position of one guesser's dot inside its score column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Slot {
    /// Draw index of the guesser, `0..N`.
    pub guesser: usize,
    /// Bucket index, equal to the outcome value.
    pub bucket: u32,
    /// Height of the dot in its column, `0` at the baseline.
    pub stack: usize,
}

/// Assigns each outcome, in draw order, the next free stack position in its
/// bucket. Returns the slots alongside the final per-bucket counts.
///
/// Outcomes above `bucket_count - 1` grow the counter table instead of
/// panicking; callers built from validated params never hit that path.
pub fn assign_slots(outcomes: &[u32], bucket_count: usize) -> (Vec<Slot>, Vec<usize>) {
    let mut counts = vec![0usize; bucket_count];
    let mut slots = Vec::with_capacity(outcomes.len());

    for (guesser, &k) in outcomes.iter().enumerate() {
        let bucket = k as usize;
        if bucket >= counts.len() {
            counts.resize(bucket + 1, 0);
        }
        slots.push(Slot {
            guesser,
            bucket: k,
            stack: counts[bucket],
        });
        counts[bucket] += 1;
    }

    (slots, counts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stacks_follow_arrival_order() {
        let (slots, counts) = assign_slots(&[5, 3, 5, 5, 3], 11);
        let stacks: Vec<usize> = slots.iter().map(|s| s.stack).collect();
        assert_eq!(stacks, vec![0, 0, 1, 2, 1]);
        assert_eq!(counts[5], 3);
        assert_eq!(counts[3], 2);
        assert_eq!(counts.iter().sum::<usize>(), 5);
    }

    #[test]
    fn empty_input_yields_zero_counts() {
        let (slots, counts) = assign_slots(&[], 11);
        assert!(slots.is_empty());
        assert_eq!(counts, vec![0; 11]);
    }
}
