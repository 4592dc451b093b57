use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UtilityKind {
    Static,
    Functional,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantKind {
    /// `hover`, `md`
    Static,
    /// `data-*`, `min-*`
    Functional,
    /// `group-*`, wrapping another variant
    Compound,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct UtilityEntry {
    is_static: bool,
    is_functional: bool,
}

/// Registry of known utilities and variants, plus the optional class prefix.
///
/// A root can be registered as both a static and a functional utility, which
/// is where ambiguous parses come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesignSystem {
    prefix: Option<String>,
    utilities: BTreeMap<String, UtilityEntry>,
    variants: BTreeMap<String, VariantKind>,
}

const GRADIENT_SIDES: [&str; 8] = ["t", "tr", "r", "br", "b", "bl", "l", "tl"];

const STATIC_UTILITIES: &[&str] = &[
    "block",
    "inline",
    "inline-block",
    "flex",
    "inline-flex",
    "grid",
    "inline-grid",
    "contents",
    "hidden",
    "table",
    "flow-root",
    "italic",
    "not-italic",
    "underline",
    "uppercase",
    "lowercase",
    "capitalize",
    "truncate",
    "antialiased",
    "bg-none",
    "bg-radial",
    "shadow",
    "rounded",
    "border",
    "transition",
];

const FUNCTIONAL_UTILITIES: &[&str] = &[
    "bg",
    "bg-linear",
    "-bg-linear",
    "bg-radial",
    "bg-conic",
    "-bg-conic",
    "from",
    "via",
    "to",
    "text",
    "font",
    "p",
    "px",
    "py",
    "m",
    "-m",
    "mx",
    "my",
    "w",
    "h",
    "size",
    "gap",
    "border",
    "rounded",
    "shadow",
    "opacity",
    "fill",
    "stroke",
    "outline",
    "ring",
    "transition",
    "duration",
    "z",
];

const STATIC_VARIANTS: &[&str] = &[
    "hover",
    "focus",
    "focus-visible",
    "focus-within",
    "active",
    "visited",
    "disabled",
    "checked",
    "first",
    "last",
    "odd",
    "even",
    "before",
    "after",
    "placeholder",
    "dark",
    "print",
    "motion-safe",
    "motion-reduce",
    "sm",
    "md",
    "lg",
    "xl",
    "2xl",
];

const FUNCTIONAL_VARIANTS: &[&str] = &["data", "aria", "supports", "min", "max", "nth"];

const COMPOUND_VARIANTS: &[&str] = &["group", "peer", "not", "has", "in"];

impl DesignSystem {
    /// An empty design system that recognizes nothing.
    pub fn new() -> Self {
        Self {
            prefix: None,
            utilities: BTreeMap::new(),
            variants: BTreeMap::new(),
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    pub fn register_static_utility(&mut self, root: impl Into<String>) {
        self.utilities.entry(root.into()).or_default().is_static = true;
    }

    pub fn register_functional_utility(&mut self, root: impl Into<String>) {
        self.utilities.entry(root.into()).or_default().is_functional = true;
    }

    pub fn register_variant(&mut self, root: impl Into<String>, kind: VariantKind) {
        self.variants.insert(root.into(), kind);
    }

    pub fn has_utility(&self, root: &str, kind: UtilityKind) -> bool {
        self.utilities.get(root).is_some_and(|entry| match kind {
            UtilityKind::Static => entry.is_static,
            UtilityKind::Functional => entry.is_functional,
        })
    }

    pub fn variant_kind(&self, root: &str) -> Option<VariantKind> {
        self.variants.get(root).copied()
    }
}

impl Default for DesignSystem {
    /// The built-in utilities and variants.
    fn default() -> Self {
        let mut design_system = Self::new();

        for root in STATIC_UTILITIES {
            design_system.register_static_utility(*root);
        }
        for side in GRADIENT_SIDES {
            design_system.register_static_utility(format!("bg-gradient-to-{}", side));
            design_system.register_static_utility(format!("bg-linear-to-{}", side));
        }
        for root in FUNCTIONAL_UTILITIES {
            design_system.register_functional_utility(*root);
        }

        for root in STATIC_VARIANTS {
            design_system.register_variant(*root, VariantKind::Static);
        }
        for root in FUNCTIONAL_VARIANTS {
            design_system.register_variant(*root, VariantKind::Functional);
        }
        for root in COMPOUND_VARIANTS {
            design_system.register_variant(*root, VariantKind::Compound);
        }

        design_system
    }
}
