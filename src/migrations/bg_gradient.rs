use crate::config::UserConfig;
use ironframe_core::{Candidate, ParseCandidate, PrintCandidate};

const LEGACY_PREFIX: &str = "bg-gradient-to-";
const CANONICAL_PREFIX: &str = "bg-linear-to-";
const DIRECTIONS: [&str; 8] = ["t", "tr", "r", "br", "b", "bl", "l", "tl"];

/// Rewrites `bg-gradient-to-{dir}` to `bg-linear-to-{dir}`.
///
/// Only static candidates count. A legacy root with an unknown direction does
/// not end the search; a later interpretation of the same class may still
/// match. Anything else comes back unchanged.
pub fn migrate_bg_gradient<D>(design_system: &D, _config: &UserConfig, raw: &str) -> String
where
    D: ParseCandidate + PrintCandidate + ?Sized,
{
    for candidate in design_system.parse_candidate(raw) {
        let Candidate::Static { root, .. } = &candidate else {
            continue;
        };
        let Some(direction) = root.strip_prefix(LEGACY_PREFIX) else {
            continue;
        };
        if !DIRECTIONS.contains(&direction) {
            continue;
        }

        let migrated = candidate.with_root(format!("{}{}", CANONICAL_PREFIX, direction));
        return design_system.print_candidate(&migrated);
    }

    raw.to_string()
}
