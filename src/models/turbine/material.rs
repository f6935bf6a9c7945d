use crate::support::constraint::{ConstraintResult, NonNegative};

/// Coefficients describing how a coil material behaves.
///
/// All three coefficients are guaranteed to be non-negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoilMaterial {
    efficiency: f64,
    bonus: f64,
    extraction_rate: f64,
}

impl CoilMaterial {
    /// A material that contributes nothing to the coil.
    ///
    /// This is what [`MaterialCatalog::lookup`] yields for an unknown name.
    pub const NONE: Self = Self::from_table(0.0, 0.0, 0.0);

    /// Constructs validated coil coefficients.
    ///
    /// # Errors
    ///
    /// Returns an error if any coefficient is negative or `NaN`.
    pub fn new(efficiency: f64, bonus: f64, extraction_rate: f64) -> ConstraintResult<Self> {
        Ok(Self {
            efficiency: NonNegative::new(efficiency)?.into_inner(),
            bonus: NonNegative::new(bonus)?.into_inner(),
            extraction_rate: NonNegative::new(extraction_rate)?.into_inner(),
        })
    }

    const fn from_table(efficiency: f64, bonus: f64, extraction_rate: f64) -> Self {
        Self {
            efficiency,
            bonus,
            extraction_rate,
        }
    }

    /// Energy yield multiplier.
    #[must_use]
    pub fn efficiency(&self) -> f64 {
        self.efficiency
    }

    /// Exponent applied to the induction torque when computing energy.
    #[must_use]
    pub fn bonus(&self) -> f64 {
        self.bonus
    }

    /// Drag contributed by one coil block next to the rotor shaft.
    #[must_use]
    pub fn extraction_rate(&self) -> f64 {
        self.extraction_rate
    }
}

/// The coil materials available in game, keyed by name.
///
/// # Examples
///
/// ```
/// use turbine_models::models::turbine::{CoilMaterial, MaterialCatalog};
///
/// let gold = MaterialCatalog::lookup("Gold");
/// assert_eq!(gold.extraction_rate(), 0.175);
///
/// // Unknown names degrade to a coil that does nothing.
/// assert_eq!(MaterialCatalog::lookup("Cheese"), CoilMaterial::NONE);
/// assert!(MaterialCatalog::get("Cheese").is_none());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MaterialCatalog;

const MATERIALS: [(&str, CoilMaterial); 14] = [
    ("Iron", CoilMaterial::from_table(0.33, 1.0, 0.1)),
    ("Copper", CoilMaterial::from_table(0.396, 1.0, 0.12)),
    ("Osmium", CoilMaterial::from_table(0.462, 1.0, 0.12)),
    ("Steel", CoilMaterial::from_table(0.495, 1.0, 0.13)),
    ("Invar", CoilMaterial::from_table(0.495, 1.0, 0.14)),
    ("Silver", CoilMaterial::from_table(0.561, 1.0, 0.15)),
    ("Gold", CoilMaterial::from_table(0.66, 1.0, 0.175)),
    ("Electrum", CoilMaterial::from_table(0.825, 1.0, 0.2)),
    ("Platinum", CoilMaterial::from_table(0.99, 1.0, 0.25)),
    ("Enderium", CoilMaterial::from_table(0.99, 1.02, 0.3)),
    ("Ludicrite", CoilMaterial::from_table(1.15, 1.02, 0.35)),
    ("AllTheModium", CoilMaterial::from_table(1.2, 1.02, 0.4)),
    ("Vibranium", CoilMaterial::from_table(1.35, 1.04, 0.5)),
    ("Unobtanium", CoilMaterial::from_table(1.5, 1.06, 0.7)),
];

impl MaterialCatalog {
    /// Returns the named material, or [`CoilMaterial::NONE`] if the name is unknown.
    ///
    /// Names are case-sensitive.
    #[must_use]
    pub fn lookup(name: &str) -> CoilMaterial {
        Self::get(name).unwrap_or(CoilMaterial::NONE)
    }

    /// Returns the named material if it exists.
    #[must_use]
    pub fn get(name: &str) -> Option<CoilMaterial> {
        MATERIALS
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, material)| *material)
    }

    /// Iterates over all materials in catalog order.
    pub fn iter() -> impl Iterator<Item = (&'static str, CoilMaterial)> {
        MATERIALS.iter().copied()
    }
}
