#![allow(non_upper_case_globals)]

//! Physical constants and conversion between the energy units in which a
//! potential may be reported.
//!
//! Concrete physical constants are taken from NIST. All potential energies are
//! computed internally in electron-volts.

use std::{ fmt, f64::consts::PI, str::FromStr };
use serde::{ Deserialize, Serialize };
use crate::error::UnitError;

/// electric permittivity in vacuum (F m^-1)
pub const e0: f64 = 8.854187817e-12;
//              +/- 0.000000013e-12

/// elementary charge (C)
pub const e: f64 = 1.602176634e-19;
//             +/- 0 (exact)

/// Coulomb constant 1 / (4π ε₀) (N m^2 C^-2)
pub const k: f64 = 1.0 / (4.0 * PI * e0);

/// one electron-volt (J)
pub const eV: f64 = e;
//              +/- 0 (exact)

/// Unit in which energies are reported.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[derive(Serialize, Deserialize)]
pub enum EnergyUnit {
    /// Electron-volts; the unit in which potentials are computed.
    #[default]
    #[serde(rename = "eV")]
    EV,
    /// Joules.
    #[serde(rename = "J")]
    J,
}

impl EnergyUnit {
    /// Return the unit's tag.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::EV => "eV",
            Self::J => "J",
        }
    }

    /// Return the number of joules per one of `self`.
    pub fn joules(&self) -> f64 {
        match self {
            Self::EV => eV,
            Self::J => 1.0,
        }
    }

    /// Convert a quantity with dimensions of energy in electron-volts to
    /// `self`.
    ///
    /// Works for scalars as well as arrays.
    pub fn from_ev<T, U>(&self, x: T) -> U
    where T: std::ops::Mul<f64, Output = U>
    {
        match self {
            Self::EV => x * 1.0,
            Self::J => x * eV,
        }
    }

    /// Convert a quantity with dimensions of energy in `self` to
    /// electron-volts.
    pub fn to_ev<T, U>(&self, x: T) -> U
    where T: std::ops::Mul<f64, Output = U>
    {
        match self {
            Self::EV => x * 1.0,
            Self::J => x * eV.recip(),
        }
    }
}

impl fmt::Display for EnergyUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for EnergyUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "eV" => Ok(Self::EV),
            "J" => Ok(Self::J),
            _ => Err(UnitError(s.to_string())),
        }
    }
}

/// Convert an energy in electron-volts to the unit named by `unit`, which must
/// be `"eV"` or `"J"`.
///
/// ```
/// use stairpot::units::convert_energy;
///
/// assert_eq!(convert_energy(1.0, "eV").unwrap(), 1.0);
/// assert!(convert_energy(1.0, "xyz").is_err());
/// ```
pub fn convert_energy(val: f64, unit: &str) -> Result<f64, UnitError> {
    let unit: EnergyUnit = unit.parse()?;
    Ok(unit.from_ev(val))
}
