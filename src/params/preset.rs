use glam::Vec2;

use super::ParamId;

/// The square parameters, in preset order.
pub const SQUARES: [ParamId; 3] =
    [ParamId::Square1, ParamId::Square2, ParamId::Square3];

/// A named arrangement of the three squares.
///
/// `Swapped` exchanges the two diagonal squares; the middle one stays put.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutPreset {
    /// Square 1 top-left, square 3 bottom-right.
    Default,
    /// Square 1 bottom-right, square 3 top-left.
    Swapped,
}

impl LayoutPreset {
    /// Square centers for this preset, in [`SQUARES`] order.
    #[must_use]
    pub const fn positions(self) -> [Vec2; 3] {
        match self {
            Self::Default => [
                Vec2::new(-0.2, 0.2),
                Vec2::new(0.0, 0.0),
                Vec2::new(0.2, -0.2),
            ],
            Self::Swapped => [
                Vec2::new(0.2, -0.2),
                Vec2::new(0.0, 0.0),
                Vec2::new(-0.2, 0.2),
            ],
        }
    }

    /// The other preset.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Default => Self::Swapped,
            Self::Swapped => Self::Default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swapped_exchanges_outer_squares() {
        let [d1, d2, d3] = LayoutPreset::Default.positions();
        let [s1, s2, s3] = LayoutPreset::Swapped.positions();
        assert_eq!(s1, d3);
        assert_eq!(s3, d1);
        assert_eq!(s2, d2);
    }

    #[test]
    fn opposite_is_an_involution() {
        for preset in [LayoutPreset::Default, LayoutPreset::Swapped] {
            assert_ne!(preset.opposite(), preset);
            assert_eq!(preset.opposite().opposite(), preset);
        }
    }
}
