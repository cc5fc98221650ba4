use super::domain::{normalize_group_code, Major, TopProfile};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::BTreeSet;

/// Tuning knobs for the major filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOptions {
    /// Order matches by how many profile types they share instead of catalog order.
    pub rank_by_overlap: bool,
}

/// Majors reachable through a selected exam group that share a type with the profile.
///
/// Group codes are compared after normalisation on both sides. An empty profile
/// matches nothing. A major without exam groups or types can never match. Catalog
/// order is preserved.
pub fn filter_compatible_majors(
    profile: &TopProfile,
    selected_groups: &BTreeSet<String>,
    catalog: &[Major],
) -> Vec<Major> {
    let selected: BTreeSet<String> = selected_groups
        .iter()
        .map(|group| normalize_group_code(group))
        .filter(|group| !group.is_empty())
        .collect();
    if profile.is_empty() || selected.is_empty() {
        return Vec::new();
    }

    catalog
        .iter()
        .filter(|major| major.offers_any_group(&selected) && major.shares_category(profile))
        .cloned()
        .collect()
}

/// Stable re-ordering that puts majors sharing more profile types first.
pub fn rank_by_category_overlap(profile: &TopProfile, mut majors: Vec<Major>) -> Vec<Major> {
    majors.sort_by_key(|major| Reverse(major.matched_category_count(profile)));
    majors
}

pub(crate) fn match_majors(
    profile: &TopProfile,
    selected_groups: &BTreeSet<String>,
    catalog: &[Major],
    options: MatchOptions,
) -> Vec<Major> {
    let matches = filter_compatible_majors(profile, selected_groups, catalog);
    if options.rank_by_overlap {
        rank_by_category_overlap(profile, matches)
    } else {
        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::holland::domain::{HollandCode, ProfileEntry};

    fn major(id: &str, groups: &[&str], codes: &[HollandCode]) -> Major {
        Major {
            id: id.to_string(),
            name: format!("Major {id}"),
            description: String::new(),
            exam_groups: groups.iter().map(|group| group.to_string()).collect(),
            categories: codes.to_vec(),
            characteristics: None,
        }
    }

    fn groups(codes: &[&str]) -> BTreeSet<String> {
        codes.iter().map(|code| code.to_string()).collect()
    }

    fn profile(entries: &[(HollandCode, u32)]) -> TopProfile {
        TopProfile::try_from_entries(
            entries
                .iter()
                .map(|&(code, score)| ProfileEntry { code, score })
                .collect(),
        )
        .expect("valid profile")
    }

    #[test]
    fn major_matching_group_and_type_is_compatible() {
        let profile = profile(&[
            (HollandCode::Investigative, 8),
            (HollandCode::Conventional, 6),
        ]);
        let catalog = vec![major(
            "it",
            &["A00", "B00"],
            &[HollandCode::Investigative, HollandCode::Realistic],
        )];

        let matches = filter_compatible_majors(&profile, &groups(&["A00"]), &catalog);

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].id, "it");
    }

    #[test]
    fn both_conditions_are_required() {
        let profile = profile(&[(HollandCode::Social, 7)]);
        let catalog = vec![
            major("wrong-group", &["C00"], &[HollandCode::Social]),
            major("wrong-type", &["D01"], &[HollandCode::Realistic]),
            major("no-groups", &[], &[HollandCode::Social]),
            major("no-types", &["D01"], &[]),
            major("match", &["D01"], &[HollandCode::Social]),
        ];

        let matches = filter_compatible_majors(&profile, &groups(&["D01"]), &catalog);

        let ids: Vec<_> = matches.iter().map(|major| major.id.as_str()).collect();
        assert_eq!(ids, vec!["match"]);
    }

    #[test]
    fn selected_group_codes_are_normalized() {
        let profile = profile(&[(HollandCode::Investigative, 4)]);
        let catalog = vec![major("it", &["A00"], &[HollandCode::Investigative])];

        let matches = filter_compatible_majors(&profile, &groups(&[" a00 "]), &catalog);

        assert_eq!(matches.len(), 1);
    }

    #[test]
    fn empty_profile_matches_nothing() {
        let catalog = vec![major(
            "any",
            &["A00"],
            &HollandCode::ordered(),
        )];

        let matches = filter_compatible_majors(&TopProfile::empty(), &groups(&["A00"]), &catalog);

        assert!(matches.is_empty());
    }

    #[test]
    fn catalog_order_is_preserved_and_overlap_ranking_is_stable() {
        let profile = profile(&[
            (HollandCode::Enterprising, 5),
            (HollandCode::Conventional, 4),
        ]);
        let catalog = vec![
            major("single-a", &["A00"], &[HollandCode::Enterprising]),
            major(
                "double",
                &["A01"],
                &[HollandCode::Conventional, HollandCode::Enterprising],
            ),
            major("single-b", &["A00"], &[HollandCode::Conventional]),
        ];
        let selected = groups(&["A00", "A01"]);

        let plain = match_majors(&profile, &selected, &catalog, MatchOptions::default());
        let ranked = match_majors(
            &profile,
            &selected,
            &catalog,
            MatchOptions {
                rank_by_overlap: true,
            },
        );

        let ids = |majors: &[Major]| majors.iter().map(|m| m.id.clone()).collect::<Vec<_>>();
        assert_eq!(ids(&plain), vec!["single-a", "double", "single-b"]);
        assert_eq!(ids(&ranked), vec!["double", "single-a", "single-b"]);
    }
}
