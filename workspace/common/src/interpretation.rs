use serde::{Deserialize, Serialize};

/// Unit suffix appended to every rendered irradiance value.
pub const IRRADIANCE_UNIT: &str = "W/m²";

/// Qualitative band for a predicted irradiance value.
///
/// Bands are checked in ascending order with strict `<` comparisons, so a
/// value sitting exactly on a boundary lands in the upper band. Zero is the
/// only exact match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interpretation {
    NoIrradiance,
    VeryLow,
    Low,
    Moderate,
    Good,
    Excellent,
}

impl Interpretation {
    pub fn from_irradiance(value: f64) -> Self {
        if value == 0.0 {
            Interpretation::NoIrradiance
        } else if value < 100.0 {
            Interpretation::VeryLow
        } else if value < 300.0 {
            Interpretation::Low
        } else if value < 600.0 {
            Interpretation::Moderate
        } else if value < 800.0 {
            Interpretation::Good
        } else {
            Interpretation::Excellent
        }
    }

    /// Short band name.
    pub fn label(&self) -> &'static str {
        match self {
            Interpretation::NoIrradiance => "no irradiance / nighttime",
            Interpretation::VeryLow => "very low",
            Interpretation::Low => "low",
            Interpretation::Moderate => "moderate",
            Interpretation::Good => "good",
            Interpretation::Excellent => "excellent",
        }
    }

    /// Sentence shown under the value.
    pub fn description(&self) -> &'static str {
        match self {
            Interpretation::NoIrradiance => {
                "No solar irradiance detected. This is typical for nighttime or very low light conditions."
            }
            Interpretation::VeryLow => {
                "Very low solar irradiance. Conditions are heavily overcast or it's early morning/late evening."
            }
            Interpretation::Low => {
                "Low solar irradiance. Cloudy conditions are significantly reducing solar energy availability."
            }
            Interpretation::Moderate => {
                "Moderate solar irradiance. Partly cloudy conditions with reasonable solar energy potential."
            }
            Interpretation::Good => {
                "Good solar irradiance. Mostly clear sky with strong solar energy generation potential."
            }
            Interpretation::Excellent => {
                "Excellent solar irradiance. Clear sky conditions with optimal solar energy generation."
            }
        }
    }
}

/// `750.0` becomes `"750 W/m²"`, `412.37` becomes `"412.37 W/m²"`.
pub fn format_irradiance(value: f64) -> String {
    // Negative zero prints as "-0".
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{} {}", value, IRRADIANCE_UNIT)
}

/// A successful prediction, ready for the result area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedPrediction {
    pub irradiance: f64,
    pub value_text: String,
    pub interpretation: Interpretation,
}

impl RenderedPrediction {
    pub fn new(irradiance: f64) -> Self {
        Self {
            irradiance,
            value_text: format_irradiance(irradiance),
            interpretation: Interpretation::from_irradiance(irradiance),
        }
    }

    pub fn interpretation_text(&self) -> &'static str {
        self.interpretation.description()
    }
}
