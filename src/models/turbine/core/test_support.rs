use crate::models::turbine::{Geometry, MaterialCatalog, Turbine, TurbineConfig};

/// A standard iron-coiled turbine with default constants.
pub(super) fn iron_turbine(height: u32, width: u32, coil_layers: u32) -> Turbine {
    Turbine::new(
        Geometry::new(height, width),
        coil_layers,
        &MaterialCatalog::lookup("Iron"),
        &TurbineConfig::default(),
    )
    .expect("test geometry should be valid")
}

/// The smallest buildable turbine: 4 high, 5 wide, one iron coil layer.
pub(super) fn small_iron_turbine() -> Turbine {
    iron_turbine(4, 5, 1)
}
