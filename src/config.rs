use ironframe_core::{DesignSystem, VariantKind};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Project settings read from `ironframe.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct UserConfig {
    #[serde(default)]
    pub prefix: Option<String>,
    #[serde(default)]
    pub utilities: UtilityConfig,
    #[serde(default)]
    pub variants: VariantConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct UtilityConfig {
    #[serde(default, rename = "static")]
    pub static_roots: Vec<String>,
    #[serde(default, rename = "functional")]
    pub functional_roots: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct VariantConfig {
    #[serde(default, rename = "static")]
    pub static_roots: Vec<String>,
    #[serde(default, rename = "functional")]
    pub functional_roots: Vec<String>,
    #[serde(default, rename = "compound")]
    pub compound_roots: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub message: String,
}

pub fn load(path: &Path) -> Result<UserConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|err| ConfigError {
        message: format!("failed to read config {}: {}", path.display(), err),
    })?;
    let config: UserConfig = toml::from_str(&text).map_err(|err| ConfigError {
        message: format!("failed to parse config {}: {}", path.display(), err),
    })?;
    validate(&config).map_err(|message| ConfigError {
        message: format!("invalid config {}: {}", path.display(), message),
    })?;
    tracing::debug!(path = %path.display(), prefix = ?config.prefix, "loaded config");
    Ok(config)
}

fn validate(config: &UserConfig) -> Result<(), String> {
    if config.prefix.as_deref().is_some_and(str::is_empty) {
        return Err("prefix must not be empty".to_string());
    }

    let names = [
        ("utilities.static", &config.utilities.static_roots),
        ("utilities.functional", &config.utilities.functional_roots),
        ("variants.static", &config.variants.static_roots),
        ("variants.functional", &config.variants.functional_roots),
        ("variants.compound", &config.variants.compound_roots),
    ];
    for (key, roots) in names {
        if let Some(root) = roots.iter().find(|root| !is_valid_root(root)) {
            return Err(format!("{} contains an invalid name {:?}", key, root));
        }
    }
    Ok(())
}

fn is_valid_root(root: &str) -> bool {
    !root.is_empty()
        && !root
            .chars()
            .any(|ch| ch.is_whitespace() || matches!(ch, ':' | '/' | '[' | ']' | '(' | ')' | '!'))
}

/// The built-in design system extended with the project's own utilities and
/// variants.
pub fn design_system(config: &UserConfig) -> DesignSystem {
    let mut design_system = DesignSystem::default();
    if let Some(prefix) = &config.prefix {
        design_system = design_system.with_prefix(prefix.clone());
    }

    for root in &config.utilities.static_roots {
        design_system.register_static_utility(root.clone());
    }
    for root in &config.utilities.functional_roots {
        design_system.register_functional_utility(root.clone());
    }
    for root in &config.variants.static_roots {
        design_system.register_variant(root.clone(), VariantKind::Static);
    }
    for root in &config.variants.functional_roots {
        design_system.register_variant(root.clone(), VariantKind::Functional);
    }
    for root in &config.variants.compound_roots {
        design_system.register_variant(root.clone(), VariantKind::Compound);
    }

    design_system
}
