use crate::candidate::{
    Candidate, CandidateModifier, CandidateValue, Variant, VariantValue, encode_arbitrary_value,
};
use crate::design_system::DesignSystem;

pub(crate) fn print_candidate(design_system: &DesignSystem, candidate: &Candidate) -> String {
    let mut parts = Vec::with_capacity(candidate.variants().len() + 2);
    if let Some(prefix) = design_system.prefix() {
        parts.push(prefix.to_string());
    }
    parts.extend(candidate.variants().iter().map(print_variant));

    let mut base = String::new();
    match candidate {
        Candidate::Static { root, .. } => base.push_str(root),
        Candidate::Functional {
            root,
            value,
            modifier,
            ..
        } => {
            base.push_str(root);
            if let Some(value) = value {
                base.push('-');
                base.push_str(&print_candidate_value(value));
            }
            if let Some(modifier) = modifier {
                base.push_str(&print_modifier(modifier));
            }
        }
        Candidate::Arbitrary {
            property,
            value,
            modifier,
            ..
        } => {
            base.push_str(&format!("[{}:{}]", property, encode_arbitrary_value(value)));
            if let Some(modifier) = modifier {
                base.push_str(&print_modifier(modifier));
            }
        }
    }
    if candidate.important() {
        base.push('!');
    }

    parts.push(base);
    parts.join(":")
}

fn print_candidate_value(value: &CandidateValue) -> String {
    match value {
        CandidateValue::Named { value, .. } => value.clone(),
        CandidateValue::Arbitrary { data_type, value } => {
            let hint = data_type
                .as_deref()
                .map(|data_type| format!("{}:", data_type))
                .unwrap_or_default();
            match var_shorthand(value) {
                Some(variable) => format!("({}{})", hint, variable),
                None => format!("[{}{}]", hint, encode_arbitrary_value(value)),
            }
        }
    }
}

fn print_modifier(modifier: &CandidateModifier) -> String {
    match modifier {
        CandidateModifier::Named { value } => format!("/{}", value),
        CandidateModifier::Arbitrary { value } => match var_shorthand(value) {
            Some(variable) => format!("/({})", variable),
            None => format!("/[{}]", encode_arbitrary_value(value)),
        },
    }
}

fn print_variant(variant: &Variant) -> String {
    match variant {
        Variant::Static { root } => root.clone(),
        Variant::Functional {
            root,
            value,
            modifier,
        } => {
            let mut out = root.clone();
            match value {
                Some(VariantValue::Named { value }) => {
                    out.push('-');
                    out.push_str(value);
                }
                Some(VariantValue::Arbitrary { value }) => match var_shorthand(value) {
                    Some(variable) => out.push_str(&format!("-({})", variable)),
                    None => out.push_str(&format!("-[{}]", encode_arbitrary_value(value))),
                },
                None => {}
            }
            if let Some(modifier) = modifier {
                out.push_str(&print_modifier(modifier));
            }
            out
        }
        Variant::Compound {
            root,
            modifier,
            variant,
        } => {
            let mut out = format!("{}-{}", root, print_variant(variant));
            if let Some(modifier) = modifier {
                out.push_str(&print_modifier(modifier));
            }
            out
        }
        Variant::Arbitrary { selector } => format!("[{}]", encode_arbitrary_value(selector)),
    }
}

/// `var(--brand)` prints as `(--brand)`.
fn var_shorthand(value: &str) -> Option<&str> {
    let inner = value.strip_prefix("var(")?.strip_suffix(')')?;
    if inner.starts_with("--") && !inner.contains(',') && !inner.contains('(') {
        Some(inner)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::print_candidate;
    use crate::candidate::{Candidate, parse_candidate};
    use crate::design_system::DesignSystem;
    use rstest::rstest;

    fn round_trip(design_system: &DesignSystem, input: &str) -> Vec<String> {
        parse_candidate(design_system, input)
            .iter()
            .map(|candidate| print_candidate(design_system, candidate))
            .collect()
    }

    #[rstest]
    #[case("flex")]
    #[case("hover:flex")]
    #[case("md:hover:bg-gradient-to-r!")]
    #[case("bg-red-500/50")]
    #[case("bg-red-500/[0.5]")]
    #[case("bg-red-500/(--alpha)")]
    #[case("w-1/2")]
    #[case("bg-[url('/what_a_rush.png')]")]
    #[case("bg-linear-[25deg,red_5%,yellow_60%]")]
    #[case("bg-(image:--my-image)")]
    #[case("bg-linear-(--my-gradient)")]
    #[case("text-[color:red]")]
    #[case("[mask-type:luminance]")]
    #[case("[--scroll-offset:56px]/50")]
    #[case("data-[state=open]:flex")]
    #[case("data-active:flex")]
    #[case("supports-(--test):flex")]
    #[case("group-hover/item:flex")]
    #[case("not-data-[state=open]:flex")]
    #[case("[&_p]:flex")]
    #[case("bg-[a\\_b]")]
    fn prints_canonical_input_unchanged(#[case] input: &str) {
        let design_system = DesignSystem::default();
        let printed = round_trip(&design_system, input);
        assert!(!printed.is_empty(), "{input:?} did not parse");
        for output in printed {
            assert_eq!(output, input);
        }
    }

    #[test]
    fn prints_important_in_trailing_position() {
        let design_system = DesignSystem::default();
        assert_eq!(round_trip(&design_system, "!hover:flex"), Vec::<String>::new());
        assert_eq!(round_trip(&design_system, "hover:!flex"), vec!["hover:flex!"]);
    }

    #[test]
    fn prints_variable_values_in_shorthand() {
        let design_system = DesignSystem::default();
        assert_eq!(
            round_trip(&design_system, "text-[var(--brand)]"),
            vec!["text-(--brand)"]
        );
        assert_eq!(
            round_trip(&design_system, "text-[color:var(--brand)]"),
            vec!["text-(color:--brand)"]
        );
        assert_eq!(
            round_trip(&design_system, "text-[var(--a,var(--b))]"),
            vec!["text-[var(--a,var(--b))]"]
        );
    }

    #[test]
    fn prints_prefix_first() {
        let design_system = DesignSystem::default().with_prefix("tw");
        assert_eq!(
            round_trip(&design_system, "tw:hover:bg-gradient-to-r"),
            vec!["tw:hover:bg-gradient-to-r", "tw:hover:bg-gradient-to-r"]
        );
    }

    #[test]
    fn prints_rewritten_root() {
        let design_system = DesignSystem::default();
        let candidates = parse_candidate(&design_system, "focus:bg-gradient-to-tl!");
        let Candidate::Static { .. } = &candidates[0] else {
            panic!("expected static candidate");
        };
        let rewritten = candidates[0].with_root("bg-linear-to-tl");
        assert_eq!(
            print_candidate(&design_system, &rewritten),
            "focus:bg-linear-to-tl!"
        );
    }
}
