//! Layer display colours.

use rand::Rng;

/// Lowest channel value a random layer colour may take.
///
/// Keeps layers from rendering as near-black on the dim background.
pub const MIN_CHANNEL: u8 = 50;

/// An 8-bit RGB colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Construct a colour from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Draw a colour with every channel uniform in `[MIN_CHANNEL, 255]`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            r: rng.random_range(MIN_CHANNEL..=u8::MAX),
            g: rng.random_range(MIN_CHANNEL..=u8::MAX),
            b: rng.random_range(MIN_CHANNEL..=u8::MAX),
        }
    }

    /// Channels scaled to `[0, 1]`, in `[r, g, b]` order.
    pub fn to_unit(self) -> [f64; 3] {
        [
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        ]
    }
}
