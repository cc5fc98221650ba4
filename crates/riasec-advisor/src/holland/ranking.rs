use super::domain::{CategoryScores, ProfileEntry, ScoreBucket, TopProfile, PROFILE_CAPACITY};

/// A leading tie this wide says nothing about the student's preferences.
const UNINFORMATIVE_TIE_WIDTH: usize = 4;

/// Group the six scores into buckets of equal value, highest score first.
///
/// Inside a bucket categories keep the canonical R, I, A, S, E, C order.
pub fn score_buckets(scores: &CategoryScores) -> Vec<ScoreBucket> {
    let mut entries = scores.entries();
    // stable sort keeps canonical order within ties
    entries.sort_by(|left, right| right.1.cmp(&left.1));

    let mut buckets: Vec<ScoreBucket> = Vec::new();
    for (code, score) in entries {
        match buckets.last_mut() {
            Some(bucket) if bucket.score == score => bucket.categories.push(code),
            _ => buckets.push(ScoreBucket {
                score,
                categories: vec![code],
            }),
        }
    }

    buckets
}

/// Resolve the top personality types from the category tallies.
///
/// Whole buckets are taken in score order while they fit in the three available
/// slots. A bucket that does not fit is skipped and lower buckets are still
/// considered until the slots are full. A leading tie of four or more types
/// (including the all-equal case) yields an empty profile.
pub fn resolve_top_profile(scores: &CategoryScores) -> TopProfile {
    let buckets = score_buckets(scores);

    let Some(max_bucket) = buckets.first() else {
        return TopProfile::empty();
    };

    if max_bucket.len() >= UNINFORMATIVE_TIE_WIDTH || buckets.len() == 1 {
        return TopProfile::empty();
    }

    let mut entries = Vec::with_capacity(PROFILE_CAPACITY);
    for bucket in &buckets {
        if entries.len() >= PROFILE_CAPACITY {
            break;
        }
        if entries.len() + bucket.len() > PROFILE_CAPACITY {
            continue;
        }

        entries.extend(bucket.categories.iter().map(|&code| ProfileEntry {
            code,
            score: bucket.score,
        }));
    }

    TopProfile::from_resolved(entries)
}
