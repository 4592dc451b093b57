//! Candidate model for ironframe utility classes.
//!
//! A raw class such as `md:hover:bg-red-500/50!` is parsed against a
//! [`DesignSystem`] into zero or more [`Candidate`] values. A class can be
//! ambiguous (`bg-gradient-to-r` is both a static utility and the functional
//! `bg` utility with the value `gradient-to-r`), so parsing yields every
//! interpretation in a stable order. Printing turns a candidate back into its
//! canonical class string.

pub mod candidate;
pub mod design_system;
mod print;

pub use candidate::{
    Candidate, CandidateKind, CandidateModifier, CandidateValue, Variant, VariantValue,
};
pub use design_system::{DesignSystem, UtilityKind, VariantKind};

/// Turns a raw class into its candidate interpretations.
pub trait ParseCandidate {
    /// Candidates in priority order. Empty when the class is not recognized.
    fn parse_candidate(&self, raw: &str) -> Vec<Candidate>;
}

/// Turns a candidate back into a class string.
pub trait PrintCandidate {
    fn print_candidate(&self, candidate: &Candidate) -> String;
}

impl ParseCandidate for DesignSystem {
    fn parse_candidate(&self, raw: &str) -> Vec<Candidate> {
        candidate::parse_candidate(self, raw)
    }
}

impl PrintCandidate for DesignSystem {
    fn print_candidate(&self, candidate: &Candidate) -> String {
        print::print_candidate(self, candidate)
    }
}

impl<T: ParseCandidate + ?Sized> ParseCandidate for &T {
    fn parse_candidate(&self, raw: &str) -> Vec<Candidate> {
        (**self).parse_candidate(raw)
    }
}

impl<T: PrintCandidate + ?Sized> PrintCandidate for &T {
    fn print_candidate(&self, candidate: &Candidate) -> String {
        (**self).print_candidate(candidate)
    }
}
