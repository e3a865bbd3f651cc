/// RGBA color, 8 bits per channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color(pub u8, pub u8, pub u8, pub u8);

impl Color {
    pub const TRANSPARENT: Color = Color(0, 0, 0, 0);
    pub const BLACK: Color = Color(0, 0, 0, 255);
    pub const WHITE: Color = Color(255, 255, 255, 255);

    /// The stock highlight green, `#55ff55`.
    pub const HIGHLIGHT: Color = Color(0x55, 0xff, 0x55, 255);

    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Color(r, g, b, 255)
    }

    pub fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color(r, g, b, a)
    }
}

/// An opaque renderable visual.
///
/// The state-table engine never looks inside a layer; the decorator only
/// builds and stacks them. `Stack` is the composite: base first, overlay
/// drawn on top, and composites nest freely.
#[derive(Clone, Debug, PartialEq)]
pub enum Layer {
    /// Solid fill.
    Solid(Color),
    /// Stroked rectangle outline — the classic highlight frame.
    Frame {
        width: f32,
        color: Color,
        radius: f32,
    },
    /// Bitmap content, referenced by an opaque resource id the host toolkit
    /// resolves.
    Image(u32),
    /// `base` with `overlay` stacked on top.
    Stack(Box<Layer>, Box<Layer>),
}

impl Layer {
    pub fn stacked(base: Layer, overlay: Layer) -> Layer {
        Layer::Stack(Box::new(base), Box::new(overlay))
    }
}
