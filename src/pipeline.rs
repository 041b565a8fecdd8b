use crate::api::models::Match;

/// Fold a combined match list down to structurally distinct matches, keeping
/// the first occurrence of each. Equality is over every field, not just the
/// match ID, so two fetches of the same ID that decoded differently both
/// survive.
pub fn combine_matches(all_matches: Vec<Match>) -> Vec<Match> {
    let mut unique: Vec<Match> = Vec::new();
    for m in all_matches {
        if !unique.contains(&m) {
            unique.push(m);
        }
    }
    unique
}
