//! Best-play heuristic: partition a hand into objective-satisfying groups.
//!
//! Each `group_by_*` function proposes a handful of candidate groups for one
//! objective kind, largest first. `best_play` combines them for a whole
//! phase. For two-objective phases it enumerates every pair of
//! (candidate for objective 1, candidate for objective 2 drawn from the
//! remaining cards), so objectives that compete for the same wilds are
//! resolved jointly without searching every subset of the hand.
//!
//! All functions are deterministic: ties keep the earlier candidate.

use rustc_hash::FxHashMap;

use crate::cards::{Card, Color, MAX_RANK, MIN_RANK};

use super::catalog::{Objective, ObjectiveKind, Phase};
use super::verify::verify;

/// Candidate sets: numbered cards bucketed by rank, wilds spread over them.
///
/// A wild goes to the largest bucket still short of `min_len`; once every
/// bucket is long enough, to the largest bucket overall.
#[must_use]
pub fn group_by_set(hand: &[Card], min_len: usize) -> Vec<Vec<Card>> {
    let mut buckets: FxHashMap<u8, Vec<Card>> = FxHashMap::default();
    for card in hand {
        if let Some(rank) = card.rank() {
            buckets.entry(rank).or_default().push(*card);
        }
    }
    let mut groups = into_sorted_groups(buckets);

    for wild in hand.iter().filter(|c| c.is_wild()) {
        let short = first_longest(&groups, |g| (1..min_len).contains(&g.len()));
        let Some(target) = short.or_else(|| first_longest(&groups, |_| true)) else {
            break;
        };
        groups[target].push(*wild);
    }

    sort_longest_first(&mut groups);
    groups
}

/// Candidate runs, one per distinct rank used as a starting point.
///
/// Only one card per rank is considered. Gaps are bridged with wilds while
/// supply lasts; leftover wilds extend the run upward to 12, then downward
/// to 1.
#[must_use]
pub fn group_by_run(hand: &[Card]) -> Vec<Vec<Card>> {
    let numbered = unique_ranks(hand);
    let wilds: Vec<Card> = hand.iter().filter(|c| c.is_wild()).copied().collect();

    let mut runs = Vec::with_capacity(numbered.len());
    for (start, &(first_rank, first_card)) in numbered.iter().enumerate() {
        let mut supply = wilds.clone();
        let mut run = vec![first_card];
        let mut low = first_rank;
        let mut high = first_rank;

        for &(rank, card) in &numbered[start + 1..] {
            let missing = usize::from(rank - high - 1);
            if missing > supply.len() {
                break;
            }
            run.extend(supply.drain(supply.len() - missing..));
            run.push(card);
            high = rank;
        }

        while let Some(wild) = supply.pop() {
            if high < MAX_RANK {
                run.push(wild);
                high += 1;
            } else if low > MIN_RANK {
                run.insert(0, wild);
                low -= 1;
            } else {
                break;
            }
        }

        runs.push(run);
    }

    sort_longest_first(&mut runs);
    runs
}

/// Candidate color groups; every wild joins the largest color bucket.
#[must_use]
pub fn group_by_color(hand: &[Card]) -> Vec<Vec<Card>> {
    let mut buckets: FxHashMap<Color, Vec<Card>> = FxHashMap::default();
    for card in hand {
        if let Some(color) = card.color() {
            buckets.entry(color).or_default().push(*card);
        }
    }
    let mut groups = into_sorted_groups(buckets);

    if let Some(target) = first_longest(&groups, |_| true) {
        groups[target].extend(hand.iter().filter(|c| c.is_wild()).copied());
    }

    sort_longest_first(&mut groups);
    groups
}

/// Candidate groups for a single objective.
#[must_use]
pub fn candidates(objective: &Objective, hand: &[Card]) -> Vec<Vec<Card>> {
    match objective.kind {
        ObjectiveKind::Set => group_by_set(hand, objective.required_length),
        ObjectiveKind::Run => group_by_run(hand),
        ObjectiveKind::Color => group_by_color(hand),
    }
}

/// Best arrangement of `hand` for `phase`: one group per objective, in
/// objective order. Groups are disjoint and may be empty.
#[must_use]
pub fn best_play(hand: &[Card], phase: &Phase) -> Vec<Vec<Card>> {
    match phase.objectives {
        [only] => {
            let top = candidates(only, hand).into_iter().next().unwrap_or_default();
            vec![top]
        }
        [first, second] => {
            let (a, b) = best_pair(hand, first, second);
            vec![a, b]
        }
        other => other.iter().map(|_| Vec::new()).collect(),
    }
}

fn best_pair(hand: &[Card], first: &Objective, second: &Objective) -> (Vec<Card>, Vec<Card>) {
    let mut best: Option<(bool, usize, Vec<Card>, Vec<Card>)> = None;

    for g1 in or_empty(candidates(first, hand)) {
        let rest: Vec<Card> = hand
            .iter()
            .filter(|c| !g1.iter().any(|g| g.id == c.id))
            .copied()
            .collect();

        for g2 in or_empty(candidates(second, &rest)) {
            let satisfied = verify(first.kind, &g1, first.required_length)
                && verify(second.kind, &g2, second.required_length);
            let count = g1.len() + g2.len();

            let better = match &best {
                None => true,
                Some((best_satisfied, best_count, _, _)) => {
                    !best_satisfied && (satisfied || count > *best_count)
                }
            };
            if better {
                tracing::trace!(satisfied, count, "best_play candidate pair");
                best = Some((satisfied, count, g1.clone(), g2));
            }
        }
    }

    best.map(|(_, _, a, b)| (a, b)).unwrap_or_default()
}

fn or_empty(groups: Vec<Vec<Card>>) -> Vec<Vec<Card>> {
    if groups.is_empty() {
        vec![Vec::new()]
    } else {
        groups
    }
}

/// One card per rank, ascending, keeping the first copy seen in `hand`.
fn unique_ranks(hand: &[Card]) -> Vec<(u8, Card)> {
    let mut seen: FxHashMap<u8, Card> = FxHashMap::default();
    for card in hand {
        if let Some(rank) = card.rank() {
            seen.entry(rank).or_insert(*card);
        }
    }
    let mut numbered: Vec<(u8, Card)> = seen.into_iter().collect();
    numbered.sort_by_key(|(rank, _)| *rank);
    numbered
}

fn into_sorted_groups<K: Ord>(buckets: FxHashMap<K, Vec<Card>>) -> Vec<Vec<Card>> {
    let mut keyed: Vec<(K, Vec<Card>)> = buckets.into_iter().collect();
    keyed.sort_by(|(a, _), (b, _)| a.cmp(b));
    keyed.into_iter().map(|(_, group)| group).collect()
}

/// Index of the longest group accepted by `filter`; earliest wins ties.
fn first_longest(groups: &[Vec<Card>], filter: impl Fn(&Vec<Card>) -> bool) -> Option<usize> {
    let mut best: Option<(usize, usize)> = None;
    for (i, group) in groups.iter().enumerate().filter(|(_, g)| filter(g)) {
        if best.map_or(true, |(_, len)| group.len() > len) {
            best = Some((i, group.len()));
        }
    }
    best.map(|(i, _)| i)
}

fn sort_longest_first(groups: &mut [Vec<Card>]) {
    groups.sort_by(|a, b| b.len().cmp(&a.len()));
}
