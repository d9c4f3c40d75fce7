// Ordering and overlap suppression of rule matches.
//
// Rules run independently and may report matches on overlapping text. These
// helpers use the profile's priorities to decide which match is shown. Equal
// priorities keep the order the matches were reported in.

use crate::language::Language;
use crate::priority::Priority;
use crate::rule::RuleMatch;

fn priority(language: &dyn Language, m: &RuleMatch) -> Priority {
    language.rule_priority(&m.rule_id, &m.category_id)
}

/// Sort matches by priority, highest first. The sort is stable.
pub fn rank_matches(language: &dyn Language, matches: &mut [RuleMatch]) {
    matches.sort_by_cached_key(|m| std::cmp::Reverse(priority(language, m)));
}

/// Keep matches greedily from highest priority down, dropping each match
/// that overlaps a higher-priority match that was kept.
///
/// A match that only overlaps an already dropped match survives. Between overlapping matches of equal priority the one reported first is
/// kept. The survivors are returned ordered by span start; matches with the
/// same start keep their input order.
pub fn resolve_overlaps(language: &dyn Language, matches: Vec<RuleMatch>) -> Vec<RuleMatch> {
    let mut ranked: Vec<(usize, Priority, RuleMatch)> = matches
        .into_iter()
        .enumerate()
        .map(|(i, m)| (i, priority(language, &m), m))
        .collect();
    ranked.sort_by_key(|&(i, p, _)| (std::cmp::Reverse(p), i));

    let mut kept: Vec<(usize, RuleMatch)> = Vec::with_capacity(ranked.len());
    for (i, _, m) in ranked {
        if kept.iter().all(|(_, k)| !k.overlaps(&m)) {
            kept.push((i, m));
        }
    }
    kept.sort_by_key(|(i, m)| (m.start, *i));
    kept.into_iter().map(|(_, m)| m).collect()
}

/// Rewrite the message and suggestions of each match with the profile's
/// typography.
pub fn apply_typography(language: &dyn Language, matches: &mut [RuleMatch]) {
    for m in matches {
        m.message = language.to_advanced_typography(&m.message);
        for suggestion in &mut m.suggestions {
            *suggestion = language.to_advanced_typography(suggestion);
        }
    }
}
