use crate::models::turbine::CoilMaterial;

use super::{Interior, TurbineConfig};

/// Coil blocks placed around the rotor shaft, with their summed coefficients.
///
/// Blocks are placed on a horizontal grid centered on the shaft. Drag falls
/// off with the ring a block sits on: blocks touching the shaft extract the
/// material's full rate, and a block on ring `d` extracts `2 / (d + 1)` of it.
///
/// # Examples
///
/// ```
/// use turbine_models::models::turbine::{CoilLayout, MaterialCatalog};
///
/// let iron = MaterialCatalog::lookup("Iron");
/// let mut coil = CoilLayout::new();
/// coil.place(1, 0, &iron);
/// coil.place(-1, 1, &iron);
/// assert_eq!(coil.blocks(), 2);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CoilLayout {
    blocks: i64,
    efficiency_sum: f64,
    bonus_sum: f64,
    drag_sum: f64,
}

impl CoilLayout {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A layout with `layers` full layers covering the whole interior cross-section.
    #[must_use]
    pub fn full(interior: &Interior, layers: u32, material: &CoilMaterial) -> Self {
        let mut layout = Self::new();
        layout.fill_layers(interior, layers, material);
        layout
    }

    /// Places a single coil block at offset `(x, y)` from the shaft.
    pub fn place(&mut self, x: i32, y: i32, material: &CoilMaterial) {
        let distance = f64::from(x.unsigned_abs().max(y.unsigned_abs()));
        let falloff = if distance < 1.0 {
            1.0
        } else {
            2.0 / (distance + 1.0)
        };

        self.blocks += 1;
        self.efficiency_sum += material.efficiency();
        self.bonus_sum += material.bonus();
        self.drag_sum += material.extraction_rate() * falloff;
    }

    /// Fills `layers` horizontal layers around the shaft, ring by ring.
    ///
    /// Ring `i` (starting at 0 next to the shaft) holds `8 * (i + 1)` blocks per layer.
    pub fn fill_layers(&mut self, interior: &Interior, layers: u32, material: &CoilMaterial) {
        for ring in 0..interior.width / 2 {
            let blocks = i64::from(ring + 1) * 2 * 4 * i64::from(layers);
            #[allow(clippy::cast_precision_loss)]
            let weight = blocks as f64;
            let falloff = 2.0 / (f64::from(ring) + 2.0);

            self.blocks += blocks;
            self.efficiency_sum += material.efficiency() * weight;
            self.bonus_sum += material.bonus() * weight;
            self.drag_sum += material.extraction_rate() * weight * falloff;
        }
    }

    /// Number of coil blocks placed so far.
    #[must_use]
    pub fn blocks(&self) -> i64 {
        self.blocks
    }

    /// Averages the summed coefficients over the coil blocks.
    ///
    /// Every coefficient is zero when there are no blocks.
    pub(super) fn normalize(&self, config: &TurbineConfig) -> CoilStats {
        if self.blocks <= 0 {
            return CoilStats::default();
        }

        #[allow(clippy::cast_precision_loss)]
        let blocks = self.blocks as f64;

        CoilStats {
            blocks: self.blocks,
            efficiency: self.efficiency_sum / blocks,
            bonus: self.bonus_sum / blocks,
            drag_coefficient: self.drag_sum * config.coil_drag_multiplier / blocks,
        }
    }
}

/// Per-block coil coefficients used by the simulation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(super) struct CoilStats {
    pub(super) blocks: i64,
    pub(super) efficiency: f64,
    pub(super) bonus: f64,
    pub(super) drag_coefficient: f64,
}
