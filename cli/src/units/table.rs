use crate::units::types::Unit;
use crate::units::validation::ValidationResult;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

const UNIT_COUNT: usize = Unit::ALL.len();

/// Which set of constants backs the conversion table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FactorSet {
    /// Rounded literals as shipped in the original app (1 mi = 1609.34 m)
    #[default]
    Legacy,
    /// Derived from the international definitions (1 mi = 1609.344 m, 1 ft = 0.3048 m)
    Exact,
}

impl FactorSet {
    pub fn table(self) -> &'static ConversionTable {
        match self {
            FactorSet::Legacy => &LEGACY_TABLE,
            FactorSet::Exact => &*EXACT_TABLE,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FactorSet::Legacy => "legacy",
            FactorSet::Exact => "exact",
        }
    }
}

/// Multiplicative factors between every ordered pair of units.
///
/// `factors[source][target]` satisfies `amount_in_target = amount_in_source * factor`.
/// Rows and columns follow [`Unit::index`].
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionTable {
    set: FactorSet,
    factors: [[f64; UNIT_COUNT]; UNIT_COUNT],
}

pub static LEGACY_TABLE: ConversionTable = ConversionTable {
    set: FactorSet::Legacy,
    factors: [
        // Metre
        [1.0, 1000.0, 0.000621371, 3.28084],
        // Millimetre
        [0.001, 1.0, 6.2137e-7, 0.00328084],
        // Mile
        [1609.34, 1_609_340.0, 1.0, 5280.0],
        // Foot
        [0.3048, 304.8, 0.000189394, 1.0],
    ],
};

lazy_static! {
    pub static ref EXACT_TABLE: ConversionTable =
        ConversionTable::from_ratios(FactorSet::Exact, Unit::metres);
}

impl ConversionTable {
    /// Build a table from each unit's length in a common reference unit.
    /// Diagonal entries are exactly 1.
    pub fn from_ratios(set: FactorSet, ratio: impl Fn(Unit) -> f64) -> Self {
        let mut factors = [[1.0; UNIT_COUNT]; UNIT_COUNT];
        for source in Unit::ALL {
            for target in Unit::ALL {
                if source != target {
                    factors[source.index()][target.index()] = ratio(source) / ratio(target);
                }
            }
        }
        Self { set, factors }
    }

    pub fn set(&self) -> FactorSet {
        self.set
    }

    pub fn factor(&self, source: Unit, target: Unit) -> f64 {
        self.factors[source.index()][target.index()]
    }

    /// All 16 (source, target, factor) entries, row by row
    pub fn entries(&self) -> impl Iterator<Item = (Unit, Unit, f64)> + '_ {
        Unit::ALL.into_iter().flat_map(move |source| {
            Unit::ALL
                .into_iter()
                .map(move |target| (source, target, self.factor(source, target)))
        })
    }

    /// Check the table invariants without enforcing them.
    ///
    /// Non-finite or non-positive factors and diagonal entries other than 1 are errors.
    /// A chain `a -> b -> c` whose composed factor differs from `factor(a, c)` by more
    /// than `tolerance` (relative) is a warning; with `c == a` this is the round trip.
    pub fn validate(&self, tolerance: f64) -> ValidationResult {
        let mut result = ValidationResult::new();

        for (source, target, factor) in self.entries() {
            let location = Some(format!("{} -> {}", source, target));
            if !factor.is_finite() || factor <= 0.0 {
                result.add_error(
                    format!("factor {} is not a positive finite number", factor),
                    location,
                );
            } else if source == target && factor != 1.0 {
                result.add_error(format!("self-factor is {}, expected 1", factor), location);
            }
        }

        if !result.is_valid() {
            return result;
        }

        for a in Unit::ALL {
            for b in Unit::ALL {
                for c in Unit::ALL {
                    if a == b || b == c {
                        continue;
                    }
                    let composed = self.factor(a, b) * self.factor(b, c);
                    let direct = self.factor(a, c);
                    let drift = (composed - direct).abs() / direct;
                    if drift > tolerance {
                        result.add_warning(
                            format!(
                                "composed factor {} differs from {} by {:e} (relative)",
                                composed, direct, drift
                            ),
                            Some(format!("{} -> {} -> {}", a, b, c)),
                        );
                    }
                }
            }
        }

        result
    }
}
