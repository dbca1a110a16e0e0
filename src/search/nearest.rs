//! Nearest-candidate selection by edit distance.

use super::distance::levenshtein;

/// Position and distance of the winning candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Closest {
    pub index: usize,
    pub distance: usize,
}

/// Scan `candidates` in order and return the first one achieving the
/// minimum case-insensitive distance to `query`. Ties resolve to the
/// earliest index; an empty iterator yields `None` and callers must guard.
pub fn closest<'a, I>(query: &str, candidates: I) -> Option<Closest>
where
    I: IntoIterator<Item = &'a str>,
{
    let folded_query = query.to_lowercase();
    let mut best: Option<Closest> = None;
    for (index, candidate) in candidates.into_iter().enumerate() {
        let distance = levenshtein(&folded_query, &candidate.to_lowercase());
        if best.map(|b| distance < b.distance).unwrap_or(true) {
            best = Some(Closest { index, distance });
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_minimum_distance() {
        let found = closest("ana", ["anna", "hannah", "anne"].into_iter()).unwrap();
        assert_eq!(found.index, 0);
        assert_eq!(found.distance, 1);
    }

    #[test]
    fn ties_resolve_to_earliest_index() {
        // "anna" and "anne" are both distance 1 from "ann".
        let found = closest("ann", ["anna", "anne"].into_iter()).unwrap();
        assert_eq!(found.index, 0);
        let reversed = closest("ann", ["anne", "anna"].into_iter()).unwrap();
        assert_eq!(reversed.index, 0);
    }

    #[test]
    fn distance_ignores_case() {
        let found = closest("ANNA", ["hannah", "anna"].into_iter()).unwrap();
        assert_eq!(found.index, 1);
        assert_eq!(found.distance, 0);
    }

    #[test]
    fn empty_candidates_yield_none() {
        assert_eq!(closest("anna", std::iter::empty()), None);
    }
}
