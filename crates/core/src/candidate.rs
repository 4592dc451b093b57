use crate::design_system::{DesignSystem, UtilityKind, VariantKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateKind {
    Static,
    Functional,
    Arbitrary,
}

/// One interpretation of a raw class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Candidate {
    /// A utility without a value, e.g. `flex` or `bg-gradient-to-r`.
    Static {
        root: String,
        variants: Vec<Variant>,
        important: bool,
        raw: String,
    },
    /// A utility root followed by a value, e.g. `bg-red-500` or `w-[10px]`.
    Functional {
        root: String,
        value: Option<CandidateValue>,
        modifier: Option<CandidateModifier>,
        variants: Vec<Variant>,
        important: bool,
        raw: String,
    },
    /// An arbitrary property, e.g. `[mask-type:luminance]`.
    Arbitrary {
        property: String,
        value: String,
        modifier: Option<CandidateModifier>,
        variants: Vec<Variant>,
        important: bool,
        raw: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateValue {
    Named {
        value: String,
        /// `1/2` for `w-1/2`.
        fraction: Option<String>,
    },
    Arbitrary {
        data_type: Option<String>,
        value: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateModifier {
    Named { value: String },
    Arbitrary { value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Variant {
    Static {
        root: String,
    },
    Functional {
        root: String,
        value: Option<VariantValue>,
        modifier: Option<CandidateModifier>,
    },
    Compound {
        root: String,
        modifier: Option<CandidateModifier>,
        variant: Box<Variant>,
    },
    Arbitrary {
        selector: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariantValue {
    Named { value: String },
    Arbitrary { value: String },
}

impl Candidate {
    pub fn kind(&self) -> CandidateKind {
        match self {
            Candidate::Static { .. } => CandidateKind::Static,
            Candidate::Functional { .. } => CandidateKind::Functional,
            Candidate::Arbitrary { .. } => CandidateKind::Arbitrary,
        }
    }

    /// Utility root. Arbitrary properties have none.
    pub fn root(&self) -> Option<&str> {
        match self {
            Candidate::Static { root, .. } | Candidate::Functional { root, .. } => Some(root),
            Candidate::Arbitrary { .. } => None,
        }
    }

    pub fn variants(&self) -> &[Variant] {
        match self {
            Candidate::Static { variants, .. }
            | Candidate::Functional { variants, .. }
            | Candidate::Arbitrary { variants, .. } => variants,
        }
    }

    pub fn important(&self) -> bool {
        match self {
            Candidate::Static { important, .. }
            | Candidate::Functional { important, .. }
            | Candidate::Arbitrary { important, .. } => *important,
        }
    }

    /// The class this candidate was parsed from.
    pub fn raw(&self) -> &str {
        match self {
            Candidate::Static { raw, .. }
            | Candidate::Functional { raw, .. }
            | Candidate::Arbitrary { raw, .. } => raw,
        }
    }

    /// Copy of this candidate with its root replaced. Arbitrary properties are
    /// returned unchanged.
    pub fn with_root(&self, root: impl Into<String>) -> Candidate {
        let mut next = self.clone();
        match &mut next {
            Candidate::Static { root: current, .. }
            | Candidate::Functional { root: current, .. } => *current = root.into(),
            Candidate::Arbitrary { .. } => {}
        }
        next
    }
}

pub(crate) fn parse_candidate(design_system: &DesignSystem, input: &str) -> Vec<Candidate> {
    parse_candidate_parts(design_system, input).unwrap_or_default()
}

fn parse_candidate_parts(design_system: &DesignSystem, input: &str) -> Option<Vec<Candidate>> {
    let mut segments = segment(input, ':');
    let base = segments.pop()?;

    if let Some(prefix) = design_system.prefix() {
        if segments.first().copied() != Some(prefix) {
            return None;
        }
        segments.remove(0);
    }

    let variants = segments
        .into_iter()
        .map(|variant| parse_variant(design_system, variant))
        .collect::<Option<Vec<_>>>()?;

    let (base, important) = strip_important_modifier(base);
    if base.is_empty() {
        return None;
    }

    if base.starts_with('[') {
        let candidate = parse_arbitrary_property(base, variants, important, input)?;
        return Some(vec![candidate]);
    }

    let parts = segment(base, '/');
    if parts.len() > 2 {
        return None;
    }
    let base_without_modifier = parts[0];
    let modifier_segment = parts.get(1).copied();
    let modifier = match modifier_segment {
        Some(raw) => Some(parse_modifier(raw)?),
        None => None,
    };

    let mut candidates = Vec::new();

    if modifier_segment.is_none()
        && !base_without_modifier.contains('[')
        && design_system.has_utility(base_without_modifier, UtilityKind::Static)
    {
        candidates.push(Candidate::Static {
            root: base_without_modifier.to_string(),
            variants: variants.clone(),
            important,
            raw: input.to_string(),
        });
    }

    if let Some((root, value)) = split_arbitrary_value(base_without_modifier) {
        if !design_system.has_utility(root, UtilityKind::Functional) {
            return Some(candidates);
        }
        candidates.push(Candidate::Functional {
            root: root.to_string(),
            value: Some(value),
            modifier,
            variants,
            important,
            raw: input.to_string(),
        });
        return Some(candidates);
    }

    if base_without_modifier.ends_with(']') || base_without_modifier.ends_with(')') {
        return Some(candidates);
    }

    let roots = find_roots(base_without_modifier, |root| {
        design_system.has_utility(root, UtilityKind::Functional)
    });
    for (root, value) in roots {
        let value = match value {
            Some(value) => {
                if !is_valid_named_value(value) {
                    continue;
                }
                Some(CandidateValue::Named {
                    value: value.to_string(),
                    fraction: fraction_for(value, modifier.as_ref()),
                })
            }
            None => None,
        };
        candidates.push(Candidate::Functional {
            root: root.to_string(),
            value,
            modifier: modifier.clone(),
            variants: variants.clone(),
            important,
            raw: input.to_string(),
        });
    }

    Some(candidates)
}

fn parse_arbitrary_property(
    base: &str,
    variants: Vec<Variant>,
    important: bool,
    raw: &str,
) -> Option<Candidate> {
    let parts = segment(base, '/');
    if parts.len() > 2 {
        return None;
    }
    let body = parts[0].strip_prefix('[')?.strip_suffix(']')?;
    let (property, value) = body.split_once(':')?;
    if !is_valid_property_name(property) || value.is_empty() {
        return None;
    }
    let modifier = match parts.get(1) {
        Some(raw) => Some(parse_modifier(raw)?),
        None => None,
    };

    Some(Candidate::Arbitrary {
        property: property.to_string(),
        value: decode_arbitrary_value(value),
        modifier,
        variants,
        important,
        raw: raw.to_string(),
    })
}

/// Splits `bg-[#fff]` and `bg-(--brand)` into the root and the arbitrary value.
fn split_arbitrary_value(base: &str) -> Option<(&str, CandidateValue)> {
    if base.ends_with(']') {
        let idx = base.find("-[")?;
        let inner = &base[idx + 2..base.len() - 1];
        let (data_type, value) = split_data_type(inner);
        if value.is_empty() || idx == 0 {
            return None;
        }
        return Some((
            &base[..idx],
            CandidateValue::Arbitrary {
                data_type: data_type.map(str::to_string),
                value: decode_arbitrary_value(value),
            },
        ));
    }

    if base.ends_with(')') {
        let idx = base.find("-(")?;
        let inner = &base[idx + 2..base.len() - 1];
        let (data_type, value) = split_data_type(inner);
        if !value.starts_with("--") || value.len() == 2 || idx == 0 {
            return None;
        }
        return Some((
            &base[..idx],
            CandidateValue::Arbitrary {
                data_type: data_type.map(str::to_string),
                value: format!("var({})", decode_arbitrary_value(value)),
            },
        ));
    }

    None
}

fn split_data_type(inner: &str) -> (Option<&str>, &str) {
    if let Some((hint, value)) = inner.split_once(':') {
        if !hint.is_empty() && hint.chars().all(|ch| ch.is_ascii_lowercase() || ch == '-') {
            return (Some(hint), value);
        }
    }
    (None, inner)
}

fn parse_modifier(raw: &str) -> Option<CandidateModifier> {
    if let Some(inner) = raw.strip_prefix('[').and_then(|v| v.strip_suffix(']')) {
        if inner.is_empty() {
            return None;
        }
        return Some(CandidateModifier::Arbitrary {
            value: decode_arbitrary_value(inner),
        });
    }
    if let Some(inner) = raw.strip_prefix('(').and_then(|v| v.strip_suffix(')')) {
        if !inner.starts_with("--") || inner.len() == 2 {
            return None;
        }
        return Some(CandidateModifier::Arbitrary {
            value: format!("var({})", decode_arbitrary_value(inner)),
        });
    }
    if raw.is_empty()
        || !raw
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | '.' | '%'))
    {
        return None;
    }
    Some(CandidateModifier::Named {
        value: raw.to_string(),
    })
}

fn fraction_for(value: &str, modifier: Option<&CandidateModifier>) -> Option<String> {
    let Some(CandidateModifier::Named { value: denominator }) = modifier else {
        return None;
    };
    if is_numeric(value) && is_numeric(denominator) {
        Some(format!("{}/{}", value, denominator))
    } else {
        None
    }
}

fn is_numeric(raw: &str) -> bool {
    !raw.is_empty()
        && raw.chars().all(|ch| ch.is_ascii_digit() || ch == '.')
        && raw.chars().any(|ch| ch.is_ascii_digit())
}

fn is_valid_named_value(value: &str) -> bool {
    !value
        .chars()
        .any(|ch| matches!(ch, '[' | ']' | '(' | ')' | '/' | ':') || ch.is_whitespace())
}

fn is_valid_property_name(property: &str) -> bool {
    if let Some(custom) = property.strip_prefix("--") {
        return !custom.is_empty();
    }
    !property.is_empty()
        && !property.starts_with('-')
        && property
            .chars()
            .all(|ch| ch.is_ascii_lowercase() || ch == '-')
}

fn parse_variant(design_system: &DesignSystem, variant: &str) -> Option<Variant> {
    if variant.starts_with('[') {
        let selector = variant.strip_prefix('[')?.strip_suffix(']')?;
        if selector.is_empty() {
            return None;
        }
        return Some(Variant::Arbitrary {
            selector: decode_arbitrary_value(selector),
        });
    }

    let parts = segment(variant, '/');
    if parts.len() > 2 {
        return None;
    }
    let variant_without_modifier = parts[0];
    let modifier = match parts.get(1) {
        Some(raw) => Some(parse_modifier(raw)?),
        None => None,
    };

    let roots = find_roots(variant_without_modifier, |root| {
        design_system.variant_kind(root).is_some()
    });
    for (root, value) in roots {
        let Some(kind) = design_system.variant_kind(root) else {
            continue;
        };
        match kind {
            VariantKind::Static => {
                if value.is_some() || modifier.is_some() {
                    return None;
                }
                return Some(Variant::Static {
                    root: root.to_string(),
                });
            }
            VariantKind::Functional => {
                let value = match value {
                    Some(value) => Some(parse_variant_value(value)?),
                    None => None,
                };
                return Some(Variant::Functional {
                    root: root.to_string(),
                    value,
                    modifier,
                });
            }
            VariantKind::Compound => {
                let Some(value) = value else {
                    return None;
                };
                let Some(inner) = parse_variant(design_system, value) else {
                    continue;
                };
                return Some(Variant::Compound {
                    root: root.to_string(),
                    modifier,
                    variant: Box::new(inner),
                });
            }
        }
    }

    None
}

fn parse_variant_value(raw: &str) -> Option<VariantValue> {
    if let Some(inner) = raw.strip_prefix('[').and_then(|v| v.strip_suffix(']')) {
        if inner.is_empty() {
            return None;
        }
        return Some(VariantValue::Arbitrary {
            value: decode_arbitrary_value(inner),
        });
    }
    if let Some(inner) = raw.strip_prefix('(').and_then(|v| v.strip_suffix(')')) {
        if !inner.starts_with("--") || inner.len() == 2 {
            return None;
        }
        return Some(VariantValue::Arbitrary {
            value: format!("var({})", inner),
        });
    }
    if !is_valid_named_value(raw) {
        return None;
    }
    Some(VariantValue::Named {
        value: raw.to_string(),
    })
}

fn strip_important_modifier(base: &str) -> (&str, bool) {
    if base.len() > 1 {
        if let Some(stripped) = base.strip_suffix('!') {
            return (stripped, true);
        }
        // Legacy position.
        if let Some(stripped) = base.strip_prefix('!') {
            return (stripped, true);
        }
    }
    (base, false)
}

/// Every way to split `input` into a registered root and a value, longest
/// root first. The whole input counts as a root without a value.
fn find_roots<'a>(input: &'a str, exists: impl Fn(&str) -> bool) -> Vec<(&'a str, Option<&'a str>)> {
    let mut roots = Vec::new();
    if exists(input) {
        roots.push((input, None));
    }

    let mut end = input.len();
    while let Some(idx) = input[..end].rfind('-') {
        if idx == 0 {
            break;
        }
        let root = &input[..idx];
        if exists(root) {
            let value = &input[idx + 1..];
            if value.is_empty() {
                break;
            }
            roots.push((root, Some(value)));
        }
        end = idx;
    }

    roots
}

/// Splits on `separator` outside of brackets and parentheses. Always returns
/// at least one segment.
pub(crate) fn segment(input: &str, separator: char) -> Vec<&str> {
    let mut paren_depth = 0usize;
    let mut bracket_depth = 0usize;
    let mut parts = Vec::new();
    let mut start = 0usize;

    for (idx, ch) in input.char_indices() {
        match ch {
            '(' => paren_depth += 1,
            ')' => paren_depth = paren_depth.saturating_sub(1),
            '[' => bracket_depth += 1,
            ']' => bracket_depth = bracket_depth.saturating_sub(1),
            _ if ch == separator && paren_depth == 0 && bracket_depth == 0 => {
                parts.push(&input[start..idx]);
                start = idx + ch.len_utf8();
            }
            _ => {}
        }
    }
    parts.push(&input[start..]);
    parts
}

/// `_` becomes a space, `\_` a literal underscore. `url(...)` is kept as is.
pub(crate) fn decode_arbitrary_value(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut idx = 0usize;

    while idx < input.len() {
        let rest = &input[idx..];
        if rest.starts_with("url(") {
            if let Some(close) = find_matching_paren(input, idx + 3) {
                out.push_str(&input[idx..=close]);
                idx = close + 1;
                continue;
            }
        }
        if rest.starts_with("\\_") {
            out.push('_');
            idx += 2;
            continue;
        }
        let Some(ch) = rest.chars().next() else {
            break;
        };
        out.push(if ch == '_' { ' ' } else { ch });
        idx += ch.len_utf8();
    }

    out
}

pub(crate) fn encode_arbitrary_value(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut idx = 0usize;

    while idx < input.len() {
        let rest = &input[idx..];
        if rest.starts_with("url(") {
            if let Some(close) = find_matching_paren(input, idx + 3) {
                out.push_str(&input[idx..=close]);
                idx = close + 1;
                continue;
            }
        }
        let Some(ch) = rest.chars().next() else {
            break;
        };
        match ch {
            '_' => out.push_str("\\_"),
            ' ' => out.push('_'),
            _ => out.push(ch),
        }
        idx += ch.len_utf8();
    }

    out
}

fn find_matching_paren(input: &str, open_idx: usize) -> Option<usize> {
    if !input[open_idx..].starts_with('(') {
        return None;
    }

    let mut depth = 0usize;
    let mut in_string: Option<char> = None;
    let mut escaped = false;
    for (rel_idx, ch) in input[open_idx..].char_indices() {
        let idx = open_idx + rel_idx;
        if let Some(quote) = in_string {
            if escaped {
                escaped = false;
                continue;
            }
            if ch == '\\' {
                escaped = true;
                continue;
            }
            if ch == quote {
                in_string = None;
            }
            continue;
        }

        if ch == '\'' || ch == '"' {
            in_string = Some(ch);
            continue;
        }

        match ch {
            '(' => depth += 1,
            ')' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(idx);
                }
            }
            _ => {}
        }
    }
    None
}
