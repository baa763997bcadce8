/// Measured size of a single line of text, in whole pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TextExtent {
    pub width: i32,
    pub height: i32,
}

impl TextExtent {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub(crate) fn from_f32(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0).ceil() as i32,
            height: height.max(0.0).ceil() as i32,
        }
    }
}

/// Anything that can measure a line of text set in one face at one size.
pub trait TextMetrics {
    fn measure(&mut self, text: &str) -> TextExtent;
}

impl<F> TextMetrics for F
where
    F: FnMut(&str) -> TextExtent,
{
    fn measure(&mut self, text: &str) -> TextExtent {
        self(text)
    }
}
