use crate::domain::errors::ThresholdError;
use serde::{Serialize, Serializer};

/// Ordinal severity bucket derived from the regression score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SeverityClass {
    None = 0,
    Mild = 1,
    Moderate = 2,
    Severe = 3,
}

impl SeverityClass {
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            SeverityClass::None => "none",
            SeverityClass::Mild => "mild",
            SeverityClass::Moderate => "moderate",
            SeverityClass::Severe => "severe",
        }
    }
}

impl From<SeverityClass> for u8 {
    fn from(class: SeverityClass) -> Self {
        class.as_u8()
    }
}

// On the wire the class is the bare integer 0-3.
impl Serialize for SeverityClass {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_u8())
    }
}

/// Cut points splitting the score line into four half-open intervals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdSet {
    cuts: [f64; 3],
}

impl ThresholdSet {
    /// Cut points the deployed model was tuned against.
    pub const STANDARD: ThresholdSet = ThresholdSet {
        cuts: [0.5, 1.5, 2.5],
    };

    /// Custom cut points; they must be finite and strictly increasing.
    pub fn new(cuts: [f64; 3]) -> Result<Self, ThresholdError> {
        for (index, value) in cuts.iter().copied().enumerate() {
            if !value.is_finite() {
                return Err(ThresholdError::NonFinite { index, value });
            }
            if index > 0 && cuts[index - 1] >= value {
                return Err(ThresholdError::NotIncreasing {
                    index,
                    previous: cuts[index - 1],
                    value,
                });
            }
        }
        Ok(Self { cuts })
    }

    pub fn cuts(&self) -> [f64; 3] {
        self.cuts
    }

    /// Map a raw score to its class.
    ///
    /// Returns `None` for NaN. Infinities land in the outermost classes.
    pub fn classify(&self, score: f64) -> Option<SeverityClass> {
        if score.is_nan() {
            return None;
        }

        let [low, mid, high] = self.cuts;
        let class = if score < low {
            SeverityClass::None
        } else if score < mid {
            SeverityClass::Mild
        } else if score < high {
            SeverityClass::Moderate
        } else {
            SeverityClass::Severe
        };
        Some(class)
    }
}

impl Default for ThresholdSet {
    fn default() -> Self {
        Self::STANDARD
    }
}
