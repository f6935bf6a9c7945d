use thiserror::Error;

/// Outer dimensions of a turbine, in blocks.
///
/// Turbines have a square footprint, so the depth always equals the width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Geometry {
    /// Outer height, including the top and bottom casing.
    pub height: u32,

    /// Outer width (and depth), including the casing on both sides.
    pub width: u32,
}

impl Geometry {
    /// Smallest outer height that can hold a rotor and a coil.
    pub const MIN_HEIGHT: u32 = 4;

    /// Smallest outer width that leaves room for blades around the shaft.
    pub const MIN_WIDTH: u32 = 5;

    #[must_use]
    pub const fn new(height: u32, width: u32) -> Self {
        Self { height, width }
    }

    /// Outer depth, always equal to the width.
    #[must_use]
    pub const fn depth(&self) -> u32 {
        self.width
    }

    /// Checks that a turbine of this size can hold `coil_layers` coil layers.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule, checked in this order: odd width,
    /// coil layers fitting below the rotor, minimum size, at least one coil layer.
    pub fn validate(&self, coil_layers: u32) -> Result<Interior, GeometryError> {
        if self.width % 2 == 0 {
            return Err(GeometryError::WidthMustBeOdd { width: self.width });
        }
        if i64::from(coil_layers) > i64::from(self.height) - 3 {
            return Err(GeometryError::TooManyCoilLayers {
                coil_layers,
                height: self.height,
            });
        }
        if self.height < Self::MIN_HEIGHT || self.width < Self::MIN_WIDTH {
            return Err(GeometryError::TooSmall {
                height: self.height,
                width: self.width,
            });
        }
        if coil_layers < 1 {
            return Err(GeometryError::NoCoilLayers);
        }

        Ok(Interior {
            width: self.width - 2,
            height: self.height - 2,
            depth: self.depth() - 2,
        })
    }
}

/// Interior dimensions of a turbine: the outer size minus one casing block on each face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interior {
    pub width: u32,
    pub height: u32,
    pub depth: u32,
}

impl Interior {
    /// Number of interior blocks in one horizontal layer.
    #[must_use]
    pub fn cross_section(&self) -> i64 {
        i64::from(self.width) * i64::from(self.depth)
    }

    /// Total number of interior blocks.
    #[must_use]
    pub fn volume(&self) -> i64 {
        self.cross_section() * i64::from(self.height)
    }

    /// Blade length that reaches from the shaft to the casing.
    #[must_use]
    pub fn full_blade_length(&self) -> u32 {
        self.width / 2
    }
}

/// Reasons a turbine geometry cannot be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// The interior needs a center column for the rotor shaft.
    #[error("turbine width must be odd, got {width}")]
    WidthMustBeOdd { width: u32 },

    /// Coil layers must leave at least one rotor layer inside the casing.
    #[error("turbine of height {height} cannot hold {coil_layers} coil layers")]
    TooManyCoilLayers { coil_layers: u32, height: u32 },

    /// The turbine is below the minimum outer size.
    #[error("turbine cannot be {height} high and {width} wide")]
    TooSmall { height: u32, width: u32 },

    /// A turbine without coils cannot generate energy.
    #[error("turbine needs at least one coil layer")]
    NoCoilLayers,
}
