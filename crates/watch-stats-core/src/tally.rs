use std::collections::HashMap;
use std::hash::Hash;

/// Counts keys and remembers the order in which each key was first seen.
///
/// Rankings sort by count descending, then first-seen order ascending, so ties
/// go to whichever key showed up first in the input.
#[derive(Debug, Clone)]
pub struct Tally<K> {
    counts: HashMap<K, Slot>,
    next_seq: usize,
}

#[derive(Debug, Clone, Copy)]
struct Slot {
    count: usize,
    first_seen: usize,
}

impl<K: Eq + Hash + Clone> Tally<K> {
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
            next_seq: 0,
        }
    }

    pub fn add(&mut self, key: K) {
        let seq = self.next_seq;
        let slot = self.counts.entry(key).or_insert_with(|| Slot {
            count: 0,
            first_seen: seq,
        });
        if slot.count == 0 {
            self.next_seq += 1;
        }
        slot.count += 1;
    }

    pub fn count(&self, key: &K) -> usize {
        self.counts.get(key).map(|slot| slot.count).unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn ranked(&self) -> Vec<(K, usize)> {
        let mut slots: Vec<(&K, &Slot)> = self.counts.iter().collect();
        slots.sort_by(|(_, a), (_, b)| {
            b.count
                .cmp(&a.count)
                .then(a.first_seen.cmp(&b.first_seen))
        });
        slots
            .into_iter()
            .map(|(key, slot)| (key.clone(), slot.count))
            .collect()
    }

    pub fn top(&self, n: usize) -> Vec<(K, usize)> {
        let mut ranked = self.ranked();
        ranked.truncate(n);
        ranked
    }

    pub fn leader(&self) -> Option<(K, usize)> {
        self.ranked().into_iter().next()
    }

    /// Keys with their counts, in first-seen order
    pub fn in_first_seen_order(&self) -> Vec<(K, usize)> {
        let mut slots: Vec<(&K, &Slot)> = self.counts.iter().collect();
        slots.sort_by_key(|(_, slot)| slot.first_seen);
        slots
            .into_iter()
            .map(|(key, slot)| (key.clone(), slot.count))
            .collect()
    }
}

impl<K: Eq + Hash + Clone> Default for Tally<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Running rating means per key, ranked like [`Tally`] but by mean.
#[derive(Debug, Clone)]
pub struct RatingTally<K> {
    sums: HashMap<K, RatingSlot>,
    next_seq: usize,
}

#[derive(Debug, Clone, Copy)]
struct RatingSlot {
    total: f64,
    count: usize,
    first_seen: usize,
}

/// One row of a mean ranking
#[derive(Debug, Clone, PartialEq)]
pub struct RankedMean<K> {
    pub key: K,
    pub mean: f64,
    pub count: usize,
}

impl<K: Eq + Hash + Clone> RatingTally<K> {
    pub fn new() -> Self {
        Self {
            sums: HashMap::new(),
            next_seq: 0,
        }
    }

    pub fn add(&mut self, key: K, rating: f64) {
        let seq = self.next_seq;
        let slot = self.sums.entry(key).or_insert_with(|| RatingSlot {
            total: 0.0,
            count: 0,
            first_seen: seq,
        });
        if slot.count == 0 {
            self.next_seq += 1;
        }
        slot.total += rating;
        slot.count += 1;
    }

    /// Keys with at least `min_count` ratings, highest mean first
    pub fn ranked_by_mean(&self, min_count: usize) -> Vec<RankedMean<K>> {
        let mut rows: Vec<(usize, RankedMean<K>)> = self
            .sums
            .iter()
            .filter(|(_, slot)| slot.count >= min_count.max(1))
            .map(|(key, slot)| {
                (
                    slot.first_seen,
                    RankedMean {
                        key: key.clone(),
                        mean: slot.total / slot.count as f64,
                        count: slot.count,
                    },
                )
            })
            .collect();
        rows.sort_by(|(seq_a, a), (seq_b, b)| {
            b.mean.total_cmp(&a.mean).then(seq_a.cmp(seq_b))
        });
        rows.into_iter().map(|(_, row)| row).collect()
    }
}

impl<K: Eq + Hash + Clone> Default for RatingTally<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_ranks_by_count_then_first_seen() {
        let mut tally = Tally::new();
        for key in ["drama", "comedy", "horror", "comedy", "drama", "horror"] {
            tally.add(key);
        }
        tally.add("western");

        let ranked = tally.ranked();
        assert_eq!(
            ranked,
            vec![("drama", 2), ("comedy", 2), ("horror", 2), ("western", 1)]
        );
        assert_eq!(tally.leader(), Some(("drama", 2)));
        assert_eq!(tally.top(1), vec![("drama", 2)]);
        assert_eq!(tally.count(&"comedy"), 2);
        assert_eq!(tally.count(&"musical"), 0);
    }

    #[test]
    fn test_tally_first_seen_order() {
        let mut tally = Tally::new();
        for key in [3, 1, 3, 2, 1, 3] {
            tally.add(key);
        }
        assert_eq!(tally.in_first_seen_order(), vec![(3, 3), (1, 2), (2, 1)]);
    }

    #[test]
    fn test_empty_tally() {
        let tally: Tally<String> = Tally::new();
        assert!(tally.is_empty());
        assert_eq!(tally.leader(), None);
        assert!(tally.ranked().is_empty());
    }

    #[test]
    fn test_rating_tally_mean_ranking() {
        let mut tally = RatingTally::new();
        tally.add("a", 4.0);
        tally.add("b", 5.0);
        tally.add("a", 5.0);
        tally.add("c", 4.5);
        tally.add("b", 4.0);

        let ranked = tally.ranked_by_mean(1);
        let keys: Vec<_> = ranked.iter().map(|row| row.key).collect();
        // a and b tie at 4.5 with c; first seen wins
        assert_eq!(keys, vec!["a", "b", "c"]);
        assert_eq!(ranked[0].count, 2);

        let qualified = tally.ranked_by_mean(2);
        assert_eq!(qualified.len(), 2);
    }
}
