//! Relevance scoring: weighted field matching plus the fuzzy fallback.
//!
//! Weighted scoring is the primary tier — per-token substring tests against
//! each profile field with fixed additive weights, a fixed synonym table as
//! a small bonus, and an editorial top-ranked boost. The fuzzy tier only
//! runs when weighted scoring matched nothing; it tolerates a single
//! same-position character difference so one-typo queries still surface
//! something.

use crate::models::ProfileCard;

// Field weights, additive per token. Exact username is the single
// highest-weight signal: it models direct navigation intent and outranks any
// one field-substring hit.
const DISPLAY_NAME_WEIGHT: u32 = 10;
const USERNAME_EXACT_WEIGHT: u32 = 15;
const TITLE_WEIGHT: u32 = 8;
const SKILLS_WEIGHT: u32 = 7;
const SERVICES_WEIGHT: u32 = 5;
const COMPANY_WEIGHT: u32 = 4;
const BIO_WEIGHT: u32 = 3;

/// Bonus per synonym-table hit, applied independently for title and skills.
const SYNONYM_BONUS: u32 = 2;

/// Flat boost for editorially promoted cards, once per candidate. Applied
/// only when the candidate already matched at least one token, so unmatched
/// top-ranked cards still fall through to the fuzzy and default tiers.
const TOP_RANKED_BOOST: u32 = 5;

/// Tokens shorter than this never fuzzy-match (too noisy).
const FUZZY_MIN_TOKEN_LEN: usize = 3;
/// Maximum tolerated same-position character mismatches.
const FUZZY_MAX_MISMATCHES: usize = 1;

/// Canonical keyword → synonyms. A token equal to the key or to any synonym
/// earns the bonus when the candidate's title or skills contain the key, so
/// a query for "coder" surfaces a profile titled "developer".
static SYNONYMS: &[(&str, &[&str])] = &[
    ("website", &["web", "site", "template", "theme", "ui"]),
    ("developer", &["coder", "engineer", "programmer", "dev"]),
    ("designer", &["artist", "creative", "ui", "ux"]),
    ("business", &["company", "corporate", "agency", "office"]),
];

/// Lowercased field text for one candidate, computed once per scoring call.
/// Missing optional fields collapse to empty strings.
struct FieldText {
    display_name: String,
    username: String,
    title: String,
    bio: String,
    skills: String,
    services: String,
    company: String,
}

impl FieldText {
    fn of(profile: &ProfileCard) -> Self {
        let business = profile.business.as_ref();
        Self {
            display_name: profile.display_name.to_lowercase(),
            username: profile.username.to_lowercase(),
            title: profile.title.as_deref().unwrap_or("").to_lowercase(),
            bio: profile.bio.to_lowercase(),
            skills: business
                .map(|b| b.skills.join(" ").to_lowercase())
                .unwrap_or_default(),
            services: business
                .map(|b| b.services.join(" ").to_lowercase())
                .unwrap_or_default(),
            company: business
                .and_then(|b| b.company_name.as_deref())
                .unwrap_or("")
                .to_lowercase(),
        }
    }
}

/// Weighted relevance score for one candidate. A token can match multiple
/// fields; all hits are additive. Zero means the candidate is excluded from
/// the weighted tier.
pub fn weighted_score(profile: &ProfileCard, tokens: &[String]) -> u32 {
    let text = FieldText::of(profile);
    let mut score = 0;

    for token in tokens {
        let token = token.as_str();
        if text.display_name.contains(token) {
            score += DISPLAY_NAME_WEIGHT;
        }
        if text.username == token {
            score += USERNAME_EXACT_WEIGHT;
        }
        if text.title.contains(token) {
            score += TITLE_WEIGHT;
        }
        if text.skills.contains(token) {
            score += SKILLS_WEIGHT;
        }
        if text.services.contains(token) {
            score += SERVICES_WEIGHT;
        }
        if text.company.contains(token) {
            score += COMPANY_WEIGHT;
        }
        if text.bio.contains(token) {
            score += BIO_WEIGHT;
        }

        for (key, synonyms) in SYNONYMS {
            if token == *key || synonyms.contains(&token) {
                if text.title.contains(key) {
                    score += SYNONYM_BONUS;
                }
                if text.skills.contains(key) {
                    score += SYNONYM_BONUS;
                }
            }
        }
    }

    if score > 0 && profile.is_top_ranked {
        score += TOP_RANKED_BOOST;
    }

    score
}

/// Fuzzy fallback score: +1 per token that approximately matches the
/// candidate's display name, title, or username.
pub fn fuzzy_score(profile: &ProfileCard, tokens: &[String]) -> u32 {
    let haystack = fuzzy_haystack(profile);
    tokens
        .iter()
        .filter(|token| is_fuzzy_match(token, &haystack))
        .count() as u32
}

/// The fields a one-typo query is most plausibly aiming at, joined and
/// lowercased. A missing title leaves a doubled space, which is harmless to
/// the substring and position-wise tests below.
fn fuzzy_haystack(profile: &ProfileCard) -> String {
    format!(
        "{} {} {}",
        profile.display_name,
        profile.title.as_deref().unwrap_or(""),
        profile.username
    )
    .to_lowercase()
}

/// A token matches if it is a literal substring of the haystack, or (for
/// tokens of 3+ chars) differs from the haystack in at most one position
/// when compared character-by-character up to the shorter length.
fn is_fuzzy_match(token: &str, haystack: &str) -> bool {
    if haystack.contains(token) {
        return true;
    }
    if token.chars().count() < FUZZY_MIN_TOKEN_LEN {
        return false;
    }
    let mismatches = token
        .chars()
        .zip(haystack.chars())
        .filter(|(a, b)| a != b)
        .count();
    mismatches <= FUZZY_MAX_MISMATCHES
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BusinessInfo;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn full_card() -> ProfileCard {
        ProfileCard {
            display_name: "Mia Chen".into(),
            username: "mia".into(),
            title: Some("Senior Developer".into()),
            bio: "Building web apps since 2015".into(),
            business: Some(BusinessInfo {
                company_name: Some("Chen Studio".into()),
                skills: vec!["React".into(), "TypeScript".into()],
                services: vec!["Consulting".into()],
            }),
            is_top_ranked: false,
        }
    }

    // ── weighted_score ───────────────────────────────────────────

    #[test]
    fn display_name_substring_scores_ten() {
        let card = ProfileCard::new("Mia Chen", "someone");
        assert_eq!(weighted_score(&card, &tokens(&["mia"])), 10);
    }

    #[test]
    fn exact_username_scores_fifteen() {
        let card = ProfileCard::new("Someone Else", "mia");
        assert_eq!(weighted_score(&card, &tokens(&["mia"])), 15);
    }

    #[test]
    fn username_substring_does_not_count() {
        let card = ProfileCard::new("Someone Else", "miamaker");
        assert_eq!(weighted_score(&card, &tokens(&["mia"])), 0);
    }

    #[test]
    fn all_field_weights_are_additive() {
        let card = full_card();
        // "chen" hits display_name (10) and company (4).
        assert_eq!(weighted_score(&card, &tokens(&["chen"])), 14);
        // "react" hits skills (7) only.
        assert_eq!(weighted_score(&card, &tokens(&["react"])), 7);
        // "consulting" hits services (5) only.
        assert_eq!(weighted_score(&card, &tokens(&["consulting"])), 5);
        // "web" hits bio (3) and the website synonym rule misses (no
        // "website" in title or skills).
        assert_eq!(weighted_score(&card, &tokens(&["web"])), 3);
        // "developer" hits title (8) plus its own synonym-key bonus for the
        // title containing "developer" (2).
        assert_eq!(weighted_score(&card, &tokens(&["developer"])), 10);
    }

    #[test]
    fn multiple_tokens_accumulate() {
        let card = full_card();
        let single = weighted_score(&card, &tokens(&["react"]));
        let double = weighted_score(&card, &tokens(&["react", "consulting"]));
        assert_eq!(double, single + 5);
    }

    #[test]
    fn synonym_bridges_token_to_title() {
        let card = ProfileCard {
            title: Some("Senior Developer".into()),
            ..ProfileCard::new("Quiet Name", "quiet")
        };
        // "coder" matches no field directly; the developer synonym rule
        // fires against the title.
        assert_eq!(weighted_score(&card, &tokens(&["coder"])), 2);
    }

    #[test]
    fn synonym_bonus_applies_to_title_and_skills_independently() {
        let card = ProfileCard {
            title: Some("Designer at large".into()),
            business: Some(BusinessInfo {
                skills: vec!["designer tools".into()],
                ..BusinessInfo::default()
            }),
            ..ProfileCard::new("Quiet Name", "quiet")
        };
        // "artist": +2 for title containing "designer", +2 for skills.
        assert_eq!(weighted_score(&card, &tokens(&["artist"])), 4);
    }

    #[test]
    fn no_overlap_scores_zero() {
        let card = full_card();
        assert_eq!(weighted_score(&card, &tokens(&["zebra"])), 0);
    }

    #[test]
    fn top_ranked_boost_requires_a_match() {
        let mut card = full_card();
        card.is_top_ranked = true;
        assert_eq!(weighted_score(&card, &tokens(&["react"])), 7 + 5);
        // No token match: stays at zero so the fallback tiers can run.
        assert_eq!(weighted_score(&card, &tokens(&["zebra"])), 0);
    }

    #[test]
    fn top_ranked_boost_is_per_candidate_not_per_token() {
        let mut card = full_card();
        card.is_top_ranked = true;
        assert_eq!(
            weighted_score(&card, &tokens(&["react", "consulting"])),
            7 + 5 + 5
        );
    }

    #[test]
    fn missing_optional_fields_are_tolerated() {
        // No title, bio, or business fields: only the exact-username weight
        // can fire.
        let card = ProfileCard::new("Just Name", "solo");
        assert_eq!(weighted_score(&card, &tokens(&["solo"])), 15);
        assert_eq!(weighted_score(&card, &tokens(&["anything"])), 0);
    }

    #[test]
    fn empty_token_list_scores_zero() {
        let mut card = full_card();
        card.is_top_ranked = true;
        assert_eq!(weighted_score(&card, &[]), 0);
    }

    // ── fuzzy_score ──────────────────────────────────────────────

    #[test]
    fn fuzzy_substring_matches() {
        let card = ProfileCard::new("Jonathan Price", "jprice");
        assert_eq!(fuzzy_score(&card, &tokens(&["nathan"])), 1);
    }

    #[test]
    fn fuzzy_tolerates_one_position_mismatch() {
        let card = ProfileCard::new("Jonathan Price", "jprice");
        // "janathan" vs "jonathan price jprice": one mismatch at index 1.
        assert_eq!(fuzzy_score(&card, &tokens(&["janathan"])), 1);
        // Two mismatches within the compared prefix: no match.
        assert_eq!(fuzzy_score(&card, &tokens(&["jemethan"])), 0);
    }

    #[test]
    fn fuzzy_short_tokens_need_exact_substring() {
        let card = ProfileCard::new("Jonathan Price", "jprice");
        // "jo" is a substring: matches.
        assert_eq!(fuzzy_score(&card, &tokens(&["jo"])), 1);
        // "jx" is under the length floor and not a substring: no match.
        assert_eq!(fuzzy_score(&card, &tokens(&["jx"])), 0);
    }

    #[test]
    fn fuzzy_compares_against_the_joined_haystack() {
        // The position-wise comparison runs against the concatenation of
        // display name, title and username, anchored at position zero.
        let card = ProfileCard {
            title: Some("Editor".into()),
            ..ProfileCard::new("Ana Li", "anali")
        };
        assert_eq!(fuzzy_score(&card, &tokens(&["anx"])), 1);
    }

    #[test]
    fn fuzzy_counts_one_point_per_matching_token() {
        let card = ProfileCard::new("Jonathan Price", "jprice");
        assert_eq!(fuzzy_score(&card, &tokens(&["jonathan", "price", "zzz"])), 2);
    }

    #[test]
    fn fuzzy_missing_title_is_fine() {
        let card = ProfileCard::new("Ana Li", "anali");
        assert_eq!(fuzzy_score(&card, &tokens(&["ana"])), 1);
    }
}
