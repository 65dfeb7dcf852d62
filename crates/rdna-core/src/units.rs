// rdna-core/src/units.rs

use uom::si::f64::{
    Pressure as UomPressure, ThermodynamicTemperature as UomThermodynamicTemperature,
};

// Public canonical unit types (SI, f64)
pub type Pressure = UomPressure;
pub type Temperature = UomThermodynamicTemperature;

/// Pascals per bar.
pub const PA_PER_BAR: f64 = 1.0e5;

/// Offset between the Celsius and Kelvin scales.
pub const CELSIUS_OFFSET_K: f64 = 273.15;

#[inline]
pub fn pa(v: f64) -> Pressure {
    use uom::si::pressure::pascal;
    Pressure::new::<pascal>(v)
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

/// Pressure from a bar reading: `bar * 1e5` Pa.
#[inline]
pub fn bar(v: f64) -> Pressure {
    pa(v * PA_PER_BAR)
}

/// Temperature from a Celsius reading: `celsius + 273.15` K.
#[inline]
pub fn degc(v: f64) -> Temperature {
    k(v + CELSIUS_OFFSET_K)
}

#[inline]
pub fn pa_of(p: Pressure) -> f64 {
    use uom::si::pressure::pascal;
    p.get::<pascal>()
}

#[inline]
pub fn k_of(t: Temperature) -> f64 {
    use uom::si::thermodynamic_temperature::kelvin;
    t.get::<kelvin>()
}

#[inline]
pub fn bar_of(p: Pressure) -> f64 {
    pa_of(p) / PA_PER_BAR
}

#[inline]
pub fn degc_of(t: Temperature) -> f64 {
    k_of(t) - CELSIUS_OFFSET_K
}
