//! Class migrations, each scoped to one legacy pattern.

mod bg_gradient;

pub use bg_gradient::migrate_bg_gradient;

use crate::config::UserConfig;
use ironframe_core::DesignSystem;

/// Maps one raw class to its migrated form, or returns it unchanged.
pub type Migration = fn(&DesignSystem, &UserConfig, &str) -> String;

/// Applied in order; each sees the output of the previous one.
pub const MIGRATIONS: &[Migration] = &[migrate_bg_gradient::<DesignSystem>];

pub fn migrate_candidate(design_system: &DesignSystem, config: &UserConfig, raw: &str) -> String {
    let migrated = MIGRATIONS.iter().fold(raw.to_string(), |current, migration| {
        migration(design_system, config, &current)
    });
    if migrated != raw {
        tracing::debug!(from = raw, to = %migrated, "migrated candidate");
    }
    migrated
}

/// Migrates every class in a whitespace separated list. Whitespace is kept
/// exactly as it was.
pub fn migrate_class_list(
    design_system: &DesignSystem,
    config: &UserConfig,
    classes: &str,
) -> String {
    let mut out = String::with_capacity(classes.len());
    let mut token_start: Option<usize> = None;

    for (idx, ch) in classes.char_indices() {
        if ch.is_ascii_whitespace() {
            if let Some(start) = token_start.take() {
                out.push_str(&migrate_candidate(design_system, config, &classes[start..idx]));
            }
            out.push(ch);
        } else if token_start.is_none() {
            token_start = Some(idx);
        }
    }
    if let Some(start) = token_start {
        out.push_str(&migrate_candidate(design_system, config, &classes[start..]));
    }

    out
}
