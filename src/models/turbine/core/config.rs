/// How the induction energy exponent is evaluated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PowMode {
    /// Truncated Taylor expansion, see [`approx_pow`](super::approx_pow).
    ///
    /// Several times cheaper than `powf`, with a small relative error when
    /// the exponent is close to one.
    #[default]
    Approximate,

    /// Exact `f64::powf`.
    Exact,
}

/// Physical constants of the turbine model.
///
/// The defaults reproduce the in-game values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurbineConfig {
    /// Maximum flow rate contributed by one interior cross-section block, in mB/t.
    pub flow_rate_per_block: i64,

    /// Energy released per mB of working fluid, before the turbine multiplier.
    pub latent_heat: f64,

    /// Multiplier applied to the energy released by the working fluid.
    pub turbine_multiplier: f64,

    /// Fluid processed per kilometre of blade length swept per revolution.
    pub fluid_per_blade_linear_km: f64,

    /// Axial mass contributed by each rotor shaft.
    pub rotor_axial_mass_per_shaft: f64,

    /// Axial mass contributed by each unit of blade length.
    pub rotor_axial_mass_per_blade: f64,

    /// Multiplier applied to the mean inductor drag coefficient.
    pub coil_drag_multiplier: f64,

    /// Internal battery size per coil block.
    pub battery_size_per_coil_block: f64,

    /// Fluid tank volume per free interior block.
    pub tank_volume_per_block: f64,

    /// Grid frequency the coils resonate with.
    pub effective_grid_frequency: f64,

    /// Number of resonance peaks in the coil efficiency curve below peak RPM.
    pub efficiency_peaks: f64,

    /// Friction drag scale applied to RPM.
    pub friction_drag_multiplier: f64,

    /// Aerodynamic drag scale applied to RPM.
    pub aerodynamic_drag_multiplier: f64,

    /// Induction energy exponent evaluation.
    pub pow_mode: PowMode,
}

impl Default for TurbineConfig {
    fn default() -> Self {
        Self {
            flow_rate_per_block: 5000,
            latent_heat: 4.0,
            turbine_multiplier: 2.5,
            fluid_per_blade_linear_km: 20.0,
            rotor_axial_mass_per_shaft: 100.0,
            rotor_axial_mass_per_blade: 100.0,
            coil_drag_multiplier: 10.0,
            battery_size_per_coil_block: 300_000.0,
            tank_volume_per_block: 10_000.0,
            effective_grid_frequency: 30.0,
            efficiency_peaks: 2.0,
            friction_drag_multiplier: 5.0e-4,
            aerodynamic_drag_multiplier: 5.0e-4,
            pow_mode: PowMode::Approximate,
        }
    }
}

impl TurbineConfig {
    /// Rotor energy gained per mB of effective flow.
    #[must_use]
    pub fn energy_per_flow(&self) -> f64 {
        self.latent_heat * self.turbine_multiplier
    }

    /// Rotor speed at which coils resonate fully with the grid.
    #[must_use]
    pub fn peak_rpm(&self) -> f64 {
        self.effective_grid_frequency * 60.0
    }

    /// Ratio between peak RPM and the start of the resonance region.
    #[must_use]
    pub fn min_efficiency_scale(&self) -> f64 {
        2_f64.powf(self.efficiency_peaks - 0.5)
    }

    /// Rotor speed below which coils run at the flat floor efficiency.
    #[must_use]
    pub fn min_rpm(&self) -> f64 {
        self.peak_rpm() / self.min_efficiency_scale()
    }

    pub(super) fn ln_peak_rpm(&self) -> f64 {
        self.peak_rpm().ln()
    }

    /// Evaluates `x^y` according to [`pow_mode`](Self::pow_mode).
    #[must_use]
    pub fn pow(&self, x: f64, y: f64) -> f64 {
        match self.pow_mode {
            PowMode::Approximate => super::approx_pow(x, y),
            PowMode::Exact => x.powf(y),
        }
    }
}
