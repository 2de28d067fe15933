//! Static layout configuration for the rendered card template.
//!
//! The card image is generated server-side at a fixed 500x315 resolution, so
//! every digit slot has a known anchor point. Anchors name the top-left pixel
//! of the 16-wide sample window for that slot.

/// Logical image width of the rendered card, in pixels.
pub const CARD_IMAGE_WIDTH: usize = 500;

/// Scan line offsets, relative to a slot's anchor y, at which the three
/// sample rows are read.
pub const MIDDLE_LINE_OFFSET: usize = 4;
pub const LOW_LINE_OFFSET: usize = 13;

/// One logical output field of the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Pan,
    Month,
    Year,
    Cvv,
}

impl Field {
    /// The digit slots composing this field, in output order.
    pub fn keys(self) -> &'static [CoordinateKey] {
        use CoordinateKey::*;
        match self {
            Field::Pan => &[
                Pan0, Pan1, Pan2, Pan3, Pan4, Pan5, Pan6, Pan7, Pan8, Pan9, Pan10, Pan11,
                Pan12, Pan13, Pan14, Pan15,
            ],
            Field::Month => &[Month0, Month1],
            Field::Year => &[Year0, Year1],
            Field::Cvv => &[Cvv0, Cvv1, Cvv2],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Field::Pan => "PAN",
            Field::Month => "expiry month",
            Field::Year => "expiry year",
            Field::Cvv => "CVV",
        }
    }
}

/// Identifier for one digit slot on the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoordinateKey {
    Pan0,
    Pan1,
    Pan2,
    Pan3,
    Pan4,
    Pan5,
    Pan6,
    Pan7,
    Pan8,
    Pan9,
    Pan10,
    Pan11,
    Pan12,
    Pan13,
    Pan14,
    Pan15,
    Month0,
    Month1,
    Year0,
    Year1,
    Cvv0,
    Cvv1,
    Cvv2,
}

impl CoordinateKey {
    /// The fixed (x, y) anchor of this slot in the card image. The PAN is
    /// rendered in four groups of four with a wider gap between groups,
    /// which is why the x step is not uniform.
    pub fn anchor(self) -> (usize, usize) {
        use CoordinateKey::*;
        match self {
            Pan0 => (29, 101),
            Pan1 => (45, 101),
            Pan2 => (61, 101),
            Pan3 => (77, 101),
            Pan4 => (127, 101),
            Pan5 => (143, 101),
            Pan6 => (159, 101),
            Pan7 => (175, 101),
            Pan8 => (226, 101),
            Pan9 => (242, 101),
            Pan10 => (258, 101),
            Pan11 => (274, 101),
            Pan12 => (324, 101),
            Pan13 => (340, 101),
            Pan14 => (356, 101),
            Pan15 => (372, 101),
            Month0 => (29, 245),
            Month1 => (45, 245),
            Year0 => (77, 245),
            Year1 => (93, 245),
            Cvv0 => (149, 245),
            Cvv1 => (165, 245),
            Cvv2 => (181, 245),
        }
    }

    pub fn field(self) -> Field {
        use CoordinateKey::*;
        match self {
            Pan0 | Pan1 | Pan2 | Pan3 | Pan4 | Pan5 | Pan6 | Pan7 | Pan8 | Pan9 | Pan10
            | Pan11 | Pan12 | Pan13 | Pan14 | Pan15 => Field::Pan,
            Month0 | Month1 => Field::Month,
            Year0 | Year1 => Field::Year,
            Cvv0 | Cvv1 | Cvv2 => Field::Cvv,
        }
    }
}
