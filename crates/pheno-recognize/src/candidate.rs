//! Candidate matches and longest-match overlap resolution.

use std::cmp::Ordering;

use tracing::trace;

use pheno_model::PhenotypeAnnotation;

/// Where a candidate came from. Also the tie-break rank for equal lengths:
/// custom-dictionary matches are preferred over catalog matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatchSource {
    CustomDictionary,
    Catalog,
}

/// A span of one chunk claimed by one or more terms.
///
/// `start` and `end` are inclusive byte offsets into the lowercased chunk.
/// A custom-dictionary snippet mapped to several labels yields a single
/// candidate carrying all of them, accepted or rejected as a unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateMatch {
    pub terms: Vec<PhenotypeAnnotation>,
    pub start: usize,
    pub end: usize,
    pub source: MatchSource,
}

impl CandidateMatch {
    /// Candidate covering `len` bytes from `start`. `len` must be non-zero.
    pub fn new(
        terms: Vec<PhenotypeAnnotation>,
        start: usize,
        len: usize,
        source: MatchSource,
    ) -> Self {
        Self {
            terms,
            start,
            end: start + len.max(1) - 1,
            source,
        }
    }

    pub fn length(&self) -> usize {
        self.end - self.start + 1
    }

    /// True if the two spans share any position.
    pub fn overlaps(&self, other: &CandidateMatch) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    fn first_id(&self) -> Option<&str> {
        self.terms.first().map(|term| term.id().as_str())
    }

    /// Deterministic acceptance order: longer spans first, then
    /// custom-dictionary before catalog, then earlier start, then term id.
    fn priority(&self, other: &Self) -> Ordering {
        other
            .length()
            .cmp(&self.length())
            .then_with(|| self.source.cmp(&other.source))
            .then_with(|| self.start.cmp(&other.start))
            .then_with(|| self.first_id().cmp(&other.first_id()))
    }
}

/// Greedy longest-match-wins selection.
///
/// Candidates are considered longest first; each one is accepted only if it
/// overlaps none of the already accepted spans. The accepted candidates are
/// returned in span order.
pub fn resolve_overlaps(mut candidates: Vec<CandidateMatch>) -> Vec<CandidateMatch> {
    candidates.sort_by(CandidateMatch::priority);
    let mut accepted: Vec<CandidateMatch> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if accepted.iter().any(|kept| kept.overlaps(&candidate)) {
            trace!(
                start = candidate.start,
                end = candidate.end,
                term = ?candidate.first_id(),
                "rejected overlapping candidate"
            );
            continue;
        }
        accepted.push(candidate);
    }
    accepted.sort_by_key(|candidate| candidate.start);
    accepted
}
