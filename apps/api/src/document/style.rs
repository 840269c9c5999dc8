//! Formatting primitives shared by paragraphs, runs and named styles.

/// Twentieths of a point, the native unit of WordprocessingML lengths.
const TWIPS_PER_POINT: f32 = 20.0;
const TWIPS_PER_INCH: f32 = 1440.0;

// ────────────────────────────────────────────────────────────────────────────
// Colour
// ────────────────────────────────────────────────────────────────────────────

/// 24-bit RGB colour token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb(r, g, b)
    }

    /// Upper-case hex without a leading `#`, e.g. `2563EB`.
    pub fn hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Lengths
// ────────────────────────────────────────────────────────────────────────────

/// A physical length, stored in twips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Length(i32);

impl Length {
    pub fn pt(points: f32) -> Self {
        Length((points * TWIPS_PER_POINT).round() as i32)
    }

    pub fn inches(inches: f32) -> Self {
        Length((inches * TWIPS_PER_INCH).round() as i32)
    }

    pub fn twips(&self) -> i32 {
        self.0
    }

    pub fn as_inches(&self) -> f32 {
        self.0 as f32 / TWIPS_PER_INCH
    }
}

/// A font size in points. Serialized as half-points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pt(pub f32);

impl Pt {
    pub fn half_points(&self) -> usize {
        (self.0 * 2.0).round().max(0.0) as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alignment {
    Left,
    Center,
    Right,
    Justify,
}

// ────────────────────────────────────────────────────────────────────────────
// Page geometry
// ────────────────────────────────────────────────────────────────────────────

/// Section margins. Constructor argument order is top, bottom, left, right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMargins {
    pub top: Length,
    pub bottom: Length,
    pub left: Length,
    pub right: Length,
}

impl PageMargins {
    pub fn inches(top: f32, bottom: f32, left: f32, right: f32) -> Self {
        PageMargins {
            top: Length::inches(top),
            bottom: Length::inches(bottom),
            left: Length::inches(left),
            right: Length::inches(right),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Named paragraph style
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Font {
    pub name: Option<String>,
    pub size: Option<Pt>,
    pub bold: Option<bool>,
    pub color: Option<Rgb>,
}

/// A reusable paragraph style. Every property is optional; unset properties
/// inherit from the document defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct ParagraphStyle {
    name: String,
    pub font: Font,
    pub space_before: Option<Length>,
    pub space_after: Option<Length>,
    pub alignment: Option<Alignment>,
}

impl ParagraphStyle {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        ParagraphStyle {
            name: name.into(),
            font: Font::default(),
            space_before: None,
            space_after: None,
            alignment: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Identifier used inside the package: the name with whitespace removed.
    pub fn id(&self) -> String {
        self.name.split_whitespace().collect()
    }

    pub fn font_name(&mut self, name: &str) -> &mut Self {
        self.font.name = Some(name.to_string());
        self
    }

    pub fn font_size(&mut self, size: f32) -> &mut Self {
        self.font.size = Some(Pt(size));
        self
    }

    pub fn bold(&mut self, bold: bool) -> &mut Self {
        self.font.bold = Some(bold);
        self
    }

    pub fn color(&mut self, color: Rgb) -> &mut Self {
        self.font.color = Some(color);
        self
    }

    pub fn space_before(&mut self, points: f32) -> &mut Self {
        self.space_before = Some(Length::pt(points));
        self
    }

    pub fn space_after(&mut self, points: f32) -> &mut Self {
        self.space_after = Some(Length::pt(points));
        self
    }

    pub fn align(&mut self, alignment: Alignment) -> &mut Self {
        self.alignment = Some(alignment);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_hex_is_zero_padded_upper_case() {
        assert_eq!(Rgb::new(37, 99, 235).hex(), "2563EB");
        assert_eq!(Rgb::new(0, 51, 102).hex(), "003366");
    }

    #[test]
    fn test_length_conversions() {
        assert_eq!(Length::inches(1.0).twips(), 1440);
        assert_eq!(Length::inches(0.25).twips(), 360);
        assert_eq!(Length::pt(6.0).twips(), 120);
        assert!((Length::inches(0.7).as_inches() - 0.7).abs() < 0.001);
    }

    #[test]
    fn test_font_size_half_points() {
        assert_eq!(Pt(11.0).half_points(), 22);
        assert_eq!(Pt(28.0).half_points(), 56);
    }

    #[test]
    fn test_style_id_strips_whitespace() {
        let style = ParagraphStyle::new("Modern Name Enhanced");
        assert_eq!(style.id(), "ModernNameEnhanced");
        assert_eq!(style.name(), "Modern Name Enhanced");
    }

    #[test]
    fn test_style_setters_chain() {
        let mut style = ParagraphStyle::new("Body");
        style
            .font_name("Arial")
            .font_size(10.0)
            .bold(true)
            .space_after(4.0)
            .align(Alignment::Center);
        assert_eq!(style.font.name.as_deref(), Some("Arial"));
        assert_eq!(style.font.bold, Some(true));
        assert_eq!(style.space_after, Some(Length::pt(4.0)));
        assert_eq!(style.alignment, Some(Alignment::Center));
    }
}
