use std::{error::Error, fmt};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColourMapError {
    ValueOutOfRange { value: f64 },
}

impl fmt::Display for ColourMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ValueOutOfRange { value } => {
                write!(f, "palette input {} is outside [0, 1]", value)
            }
        }
    }
}

impl Error for ColourMapError {}

pub(crate) fn check_unit_interval(value: f64) -> Result<f64, ColourMapError> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(ColourMapError::ValueOutOfRange { value })
    }
}
