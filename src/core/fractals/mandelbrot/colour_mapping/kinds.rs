use std::error::Error;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownColourMapError {
    pub name: String,
}

impl fmt::Display for UnknownColourMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown palette '{}', expected one of: {}",
            self.name,
            MandelbrotColourMapKinds::names().collect::<Vec<_>>().join(", ")
        )
    }
}

impl Error for UnknownColourMapError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MandelbrotColourMapKinds {
    #[default]
    Rainbow,
    Grayscale,
    Fire,
}

impl MandelbrotColourMapKinds {
    pub const ALL: &'static [Self] = &[Self::Rainbow, Self::Grayscale, Self::Fire];

    /// Registry key used by the palette selector.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rainbow => "default",
            Self::Grayscale => "grayscale",
            Self::Fire => "fire",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Rainbow => "Rainbow",
            Self::Grayscale => "Grayscale",
            Self::Fire => "Fire",
        }
    }

    pub fn names() -> impl Iterator<Item = &'static str> {
        Self::ALL.iter().map(|kind| kind.name())
    }
}

impl FromStr for MandelbrotColourMapKinds {
    type Err = UnknownColourMapError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| UnknownColourMapError {
                name: name.to_owned(),
            })
    }
}

impl fmt::Display for MandelbrotColourMapKinds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_the_registry_keys() {
        let names: Vec<&str> = MandelbrotColourMapKinds::names().collect();

        assert_eq!(names, vec!["default", "grayscale", "fire"]);
    }

    #[test]
    fn from_str_round_trips_every_name() {
        for &kind in MandelbrotColourMapKinds::ALL {
            assert_eq!(kind.name().parse::<MandelbrotColourMapKinds>(), Ok(kind));
        }
    }

    #[test]
    fn from_str_rejects_unknown_names() {
        let result = "plasma".parse::<MandelbrotColourMapKinds>();

        assert_eq!(
            result,
            Err(UnknownColourMapError {
                name: "plasma".to_owned()
            })
        );
        assert_eq!(
            result.unwrap_err().to_string(),
            "unknown palette 'plasma', expected one of: default, grayscale, fire"
        );
    }

    #[test]
    fn default_is_the_rainbow_palette() {
        assert_eq!(MandelbrotColourMapKinds::default().name(), "default");
    }
}
