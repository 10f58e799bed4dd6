use itertools::Itertools;

/// Tuning for "Did you mean" suggestions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SuggestionPolicy {
    /// Candidates must score strictly above this similarity.
    pub threshold: f64,
    /// At most this many candidates are returned.
    pub limit: usize,
}

impl Default for SuggestionPolicy {
    fn default() -> Self {
        Self {
            threshold: 0.6,
            limit: 3,
        }
    }
}

/// Levenshtein edit distance over Unicode scalar values.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j] + cost).min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

/// Normalized, case-insensitive similarity in `[0, 1]`:
/// `(longest - distance) / longest`. Two empty strings are identical.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return 1.0;
    }
    let distance = levenshtein(&a, &b);
    (longest - distance) as f64 / longest as f64
}

/// Ranks `vocabulary` against `input` and keeps the best matches.
///
/// Candidates scoring above the policy threshold are sorted by similarity,
/// highest first; ties keep vocabulary order. The result is truncated to the
/// policy limit.
pub fn suggest<'a, I>(input: &str, vocabulary: I, policy: SuggestionPolicy) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    vocabulary
        .into_iter()
        .map(|candidate| (candidate, similarity(input, candidate)))
        .filter(|(_, score)| *score > policy.threshold)
        .sorted_by(|(_, a), (_, b)| b.total_cmp(a))
        .take(policy.limit)
        .map(|(candidate, _)| candidate)
        .collect()
}
