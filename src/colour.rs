/// An 8-bit RGBA colour, used both for the ink and for the page background.
/// Channels are straight (not premultiplied) alpha.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new colour from its four channels, each ranging from 0 to 255
    pub const fn new_rgba(r: u8, g: u8, b: u8, a: u8) -> Colour {
        Colour { r, g, b, a }
    }

    /// Create a new fully opaque colour
    pub const fn new_rgb(r: u8, g: u8, b: u8) -> Colour {
        Colour { r, g, b, a: 255 }
    }

    /// Whether the colour lets anything underneath show through
    pub fn is_translucent(&self) -> bool {
        self.a < 255
    }
}

impl From<(u8, u8, u8, u8)> for Colour {
    fn from(c: (u8, u8, u8, u8)) -> Self {
        Colour::new_rgba(c.0, c.1, c.2, c.3)
    }
}

impl From<[u8; 4]> for Colour {
    fn from(c: [u8; 4]) -> Self {
        let [r, g, b, a] = c;
        Colour::new_rgba(r, g, b, a)
    }
}

impl From<(u8, u8, u8)> for Colour {
    fn from(c: (u8, u8, u8)) -> Self {
        Colour::new_rgb(c.0, c.1, c.2)
    }
}

impl From<Colour> for image::Rgba<u8> {
    fn from(c: Colour) -> Self {
        image::Rgba([c.r, c.g, c.b, c.a])
    }
}

impl From<Colour> for tiny_skia::Color {
    fn from(c: Colour) -> Self {
        tiny_skia::Color::from_rgba8(c.r, c.g, c.b, c.a)
    }
}

/// A list of pre-defined colour constants
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour::new_rgb(0, 0, 0);
    pub const WHITE: Colour = Colour::new_rgb(255, 255, 255);
    pub const RED: Colour = Colour::new_rgb(255, 0, 0);
    pub const BLUE: Colour = Colour::new_rgb(0, 0, 255);
    pub const TRANSPARENT: Colour = Colour::new_rgba(0, 0, 0, 0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tuples_and_arrays_convert() {
        assert_eq!(Colour::from((0, 0, 255, 255)), colours::BLUE);
        assert_eq!(Colour::from([255, 255, 255, 255]), colours::WHITE);
        assert_eq!(Colour::from((255, 0, 0)), colours::RED);
        assert!(colours::TRANSPARENT.is_translucent());
        assert!(!colours::BLACK.is_translucent());
    }

    #[test]
    fn converts_to_image_pixel() {
        let px: image::Rgba<u8> = Colour::new_rgba(1, 2, 3, 4).into();
        assert_eq!(px.0, [1, 2, 3, 4]);
    }
}
