//! Wide-channel color and its packed-ARGB form.

/// A color with 16 bits per channel, the form callers hand to constructors.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Color {
    /// Alpha channel.
    pub alpha: u16,
    /// Red channel.
    pub red: u16,
    /// Green channel.
    pub green: u16,
    /// Blue channel.
    pub blue: u16,
}

impl Color {
    /// Build a color from its four 16-bit channels.
    pub fn new(alpha: u16, red: u16, green: u16, blue: u16) -> Self {
        Self {
            alpha,
            red,
            green,
            blue,
        }
    }

    /// Pack into one ARGB 8888 word by channel truncation.
    ///
    /// Alpha and red keep their high bytes; green contributes its own bits
    /// 8..=15 unshifted; blue keeps its high byte in the low bits. Downstream
    /// consumers depend on this exact layout, so it is preserved bit for bit.
    pub fn to_packed_argb(self) -> u32 {
        (u32::from(self.alpha >> 8) << 24)
            | (u32::from(self.red >> 8) << 16)
            | u32::from(self.green & 0xff00)
            | u32::from(self.blue >> 8)
    }
}
