//! The sixteen Boolean functions of two inputs.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// # Overview
///
/// A two-input Boolean function, identified by its truth table.
///
/// Variants are ordered by their code `8*f(0,0) + 4*f(0,1) + 2*f(1,0) +
/// f(1,1)`, so the discriminant is the code itself.
///
/// ```text
///        b
///      0   1
///    +---+---+
///   0|   |   |
/// a  +---+---+
///   1|   |   |
///    +---+---+
/// ```
///
/// # Examples
///
/// ```
/// use beuron::BooleanFunction;
///
/// let xor = BooleanFunction::ExclusiveDisjunction;
/// assert_eq!(xor.eval([0, 1]), 1);
/// assert_eq!(xor.eval([1, 1]), 0);
/// assert_eq!(BooleanFunction::from_code(6), xor);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum BooleanFunction {
    /// 0 0 / 0 0
    Contradiction = 0,
    /// 0 0 / 0 1
    Conjunction = 1,
    /// 0 0 / 1 0
    MaterialNonimplication = 2,
    /// 0 0 / 1 1
    ProjectionA = 3,
    /// 0 1 / 0 0
    ConverseNonimplication = 4,
    /// 0 1 / 0 1
    ProjectionB = 5,
    /// 0 1 / 1 0
    ExclusiveDisjunction = 6,
    /// 0 1 / 1 1
    Disjunction = 7,
    /// 1 0 / 0 0
    Nor = 8,
    /// 1 0 / 0 1
    Biconditional = 9,
    /// 1 0 / 1 0
    NegationB = 10,
    /// 1 0 / 1 1
    ConverseImplication = 11,
    /// 1 1 / 0 0
    NegationA = 12,
    /// 1 1 / 0 1
    MaterialImplication = 13,
    /// 1 1 / 1 0
    Nand = 14,
    /// 1 1 / 1 1
    Tautology = 15
}

impl BooleanFunction {
    /// All functions in code order.
    pub const ALL: [Self; 16] = [
        Self::Contradiction,
        Self::Conjunction,
        Self::MaterialNonimplication,
        Self::ProjectionA,
        Self::ConverseNonimplication,
        Self::ProjectionB,
        Self::ExclusiveDisjunction,
        Self::Disjunction,
        Self::Nor,
        Self::Biconditional,
        Self::NegationB,
        Self::ConverseImplication,
        Self::NegationA,
        Self::MaterialImplication,
        Self::Nand,
        Self::Tautology
    ];

    /// # Overview
    ///
    /// Function with the given truth-table code. Only the low four bits are
    /// used.
    #[inline]
    #[must_use]
    pub const fn from_code(code: u8) -> Self {
        Self::ALL[(code & 0x0f) as usize]
    }

    /// # Overview
    ///
    /// Builds the function whose output for `[a, b]` is `outputs[2*a + b]`.
    #[inline]
    #[must_use]
    pub fn from_outputs(outputs: [u8; 4]) -> Self {
        let code = outputs
            .iter()
            .fold(0u8, |acc, &bit| (acc << 1) | u8::from(bit == 1));
        Self::from_code(code)
    }

    #[inline]
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// # Overview
    ///
    /// Evaluates the function. A bit reads as 1 only when it equals 1.
    #[inline]
    #[must_use]
    pub const fn eval(self, input: [u8; 2]) -> u8 {
        let row = (((input[0] == 1) as u8) << 1) | ((input[1] == 1) as u8);
        (self.code() >> (3 - row)) & 1
    }

    /// # Overview
    ///
    /// Conventional name of the operation.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Contradiction => "contradiction",
            Self::Conjunction => "logical conjunction",
            Self::MaterialNonimplication => "material nonimplication",
            Self::ProjectionA => "projection a",
            Self::ConverseNonimplication => "converse nonimplication",
            Self::ProjectionB => "projection b",
            Self::ExclusiveDisjunction => "exclusive disjunction",
            Self::Disjunction => "logical disjunction",
            Self::Nor => "logical nor",
            Self::Biconditional => "logical biconditional",
            Self::NegationB => "negation b",
            Self::ConverseImplication => "converse implication",
            Self::NegationA => "negation a",
            Self::MaterialImplication => "material implication",
            Self::Nand => "logical nand",
            Self::Tautology => "tautology"
        }
    }
}

impl fmt::Display for BooleanFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
