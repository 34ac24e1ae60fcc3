// Simple color struct, created from an unsigned 32 representing RRGGBBAA
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const AMBER: Color = Color {
        r: 0xf5,
        g: 0x9e,
        b: 0x0b,
        a: 0xff,
    };

    pub fn from_u32(num: u32) -> Color {
        let r = (num >> 24) as u8;
        let g = (num >> 16) as u8;
        let b = (num >> 8) as u8;
        let a = num as u8;

        Color { r, g, b, a }
    }

    // CSS rgba() string using `alpha` (0.0 - 1.0) instead of the stored alpha byte
    pub fn to_css_with_alpha(&self, alpha: f64) -> String {
        format!("rgba({},{},{},{})", self.r, self.g, self.b, alpha)
    }

    pub fn to_css(&self) -> String {
        self.to_css_with_alpha(self.a as f64 / 255.0)
    }
}
