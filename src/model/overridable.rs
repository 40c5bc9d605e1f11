use crate::util::round_to_step;

/// Rounding applied to the resolved value of a pilot/database pair.
/// The stored components are never rounded.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Rounding {
    None,
    NearestTen,
    NearestUnit,
}

impl Rounding {
    pub fn apply(&self, value: f64) -> f64 {
        match self {
            Rounding::None => value,
            Rounding::NearestTen => round_to_step(value, 10.0),
            Rounding::NearestUnit => round_to_step(value, 1.0),
        }
    }
}

/// A value that may be entered by the pilot or supplied by the navigation
/// database. The pilot entry, when present, always wins. Unset is a distinct
/// state, never a sentinel number.
#[derive(Clone, PartialEq, Debug)]
pub struct OverridableValue {
    pilot: Option<f64>,
    default: Option<f64>,
    rounding: Rounding,
}

impl OverridableValue {
    pub fn new(rounding: Rounding) -> Self {
        Self {
            pilot: None,
            default: None,
            rounding,
        }
    }

    pub fn with_default(rounding: Rounding, default: f64) -> Self {
        Self {
            pilot: None,
            default: Some(default),
            rounding,
        }
    }

    pub fn get_pilot(&self) -> Option<f64> {
        self.pilot
    }

    pub fn get_default(&self) -> Option<f64> {
        self.default
    }

    pub fn set_pilot(&mut self, value: Option<f64>) {
        self.pilot = value;
    }

    pub fn set_default(&mut self, value: Option<f64>) {
        self.default = value;
    }

    // The resolved value: pilot entry if present, otherwise the database
    // value, rounded per the family policy. None when both are unset.
    pub fn get_effective(&self) -> Option<f64> {
        self.pilot.or(self.default).map(|v| self.rounding.apply(v))
    }

    pub fn is_pilot_entered(&self) -> bool {
        self.pilot.is_some()
    }
}
