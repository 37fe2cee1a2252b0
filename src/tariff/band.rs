//! Tariff bands and the rate rule each one applies.

use serde::Serialize;

/// Rate rule applied to the production of an installation within a band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Rate {
    /// Every kWh bought at the same price.
    Flat {
        /// Buyback price (€/kWh).
        eur_per_kwh: f64,
    },
    /// Production up to `yield_cap_kwh_per_kwc × kWc` bought at
    /// `eur_per_kwh`, the remainder at `excess_eur_per_kwh`.
    Degressive {
        /// Price of the capped production (€/kWh).
        eur_per_kwh: f64,
        /// Specific yield above which the reduced price applies (kWh/kWc).
        yield_cap_kwh_per_kwc: f64,
        /// Price of the production above the cap (€/kWh).
        excess_eur_per_kwh: f64,
    },
}

impl Rate {
    /// Annual revenue (€) of `annual_kwh` produced by `installed_kwc`.
    ///
    /// `installed_kwc` must be positive; band selection guarantees it.
    pub fn revenue(&self, annual_kwh: f64, installed_kwc: f64) -> f64 {
        match *self {
            Self::Flat { eur_per_kwh } => annual_kwh * eur_per_kwh,
            Self::Degressive {
                eur_per_kwh,
                yield_cap_kwh_per_kwc,
                excess_eur_per_kwh,
            } => {
                let specific_yield = annual_kwh / installed_kwc;
                if specific_yield < yield_cap_kwh_per_kwc {
                    annual_kwh * eur_per_kwh
                } else {
                    let capped_kwh = yield_cap_kwh_per_kwc * installed_kwc;
                    capped_kwh * eur_per_kwh + (annual_kwh - capped_kwh) * excess_eur_per_kwh
                }
            }
        }
    }

    /// Price of the first kWh (€/kWh).
    pub fn base_eur_per_kwh(&self) -> f64 {
        match *self {
            Self::Flat { eur_per_kwh } | Self::Degressive { eur_per_kwh, .. } => eur_per_kwh,
        }
    }
}

/// A capacity band of the schedule: installations up to `max_kwc`
/// (inclusive) are paid with `rate`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TariffBand {
    /// Inclusive upper bound on installed capacity (kWc).
    pub max_kwc: f64,
    /// Rate rule of the band.
    pub rate: Rate,
}

impl TariffBand {
    /// Band paying every kWh at `eur_per_kwh`.
    pub const fn flat(max_kwc: f64, eur_per_kwh: f64) -> Self {
        Self {
            max_kwc,
            rate: Rate::Flat { eur_per_kwh },
        }
    }

    /// Band with a reduced price above a specific-yield cap.
    pub const fn degressive(
        max_kwc: f64,
        eur_per_kwh: f64,
        yield_cap_kwh_per_kwc: f64,
        excess_eur_per_kwh: f64,
    ) -> Self {
        Self {
            max_kwc,
            rate: Rate::Degressive {
                eur_per_kwh,
                yield_cap_kwh_per_kwc,
                excess_eur_per_kwh,
            },
        }
    }

    /// Returns `true` if an installation of `installed_kwc` falls in this band.
    pub fn covers(&self, installed_kwc: f64) -> bool {
        installed_kwc <= self.max_kwc
    }
}
