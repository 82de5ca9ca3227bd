#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Mean channel value below which a pixel counts as a live automaton cell.
pub const LUMINANCE_ALIVE_THRESHOLD: u16 = 128;

impl Colour {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };
    pub const WHITE: Self = Self {
        r: 255,
        g: 255,
        b: 255,
    };

    #[must_use]
    pub const fn grey(level: u8) -> Self {
        Self {
            r: level,
            g: level,
            b: level,
        }
    }

    /// Mean of the three channels, `(r + g + b) / 3`.
    #[must_use]
    pub fn luminance(&self) -> f64 {
        f64::from(self.channel_sum()) / 3.0
    }

    /// `luminance() < 128` evaluated in integers: `r + g + b < 384`.
    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.channel_sum() < LUMINANCE_ALIVE_THRESHOLD * 3
    }

    fn channel_sum(&self) -> u16 {
        u16::from(self.r) + u16::from(self.g) + u16::from(self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luminance_is_channel_mean() {
        let colour = Colour { r: 30, g: 60, b: 90 };

        assert_eq!(colour.luminance(), 60.0);
    }

    #[test]
    fn test_is_dark_threshold_boundary() {
        // 127 + 128 + 128 = 383 -> mean 127.67
        assert!(Colour { r: 127, g: 128, b: 128 }.is_dark());
        // 128 * 3 = 384 -> mean exactly 128
        assert!(!Colour::grey(128).is_dark());
        assert!(Colour::BLACK.is_dark());
        assert!(!Colour::WHITE.is_dark());
    }

    #[test]
    fn test_is_dark_agrees_with_luminance() {
        for level in [0u8, 64, 127, 128, 200, 255] {
            let colour = Colour {
                r: level,
                g: level / 2,
                b: 255 - level,
            };

            assert_eq!(colour.is_dark(), colour.luminance() < 128.0);
        }
    }
}
