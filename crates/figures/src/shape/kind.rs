use std::fmt;
use std::str::FromStr;

/// Discriminant of the closed shape family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Trapezoid,
    Rhombus,
    Pentagon,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [Self::Trapezoid, Self::Rhombus, Self::Pentagon];

    /// Fixed vertex count of this kind.
    #[inline]
    pub const fn vertex_count(self) -> usize {
        match self {
            Self::Trapezoid | Self::Rhombus => 4,
            Self::Pentagon => 5,
        }
    }

    /// Display name used in the text format (`"Trapezoid"`, ...).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Trapezoid => "Trapezoid",
            Self::Rhombus => "Rhombus",
            Self::Pentagon => "Pentagon",
        }
    }

    /// Lowercase name used in messages and on the command line.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Trapezoid => "trapezoid",
            Self::Rhombus => "rhombus",
            Self::Pentagon => "pentagon",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown shape name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownKind(pub String);

impl fmt::Display for UnknownKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown shape kind {:?} (expected trapezoid, rhombus or pentagon)",
            self.0
        )
    }
}

impl std::error::Error for UnknownKind {}

impl FromStr for ShapeKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShapeKind::ALL
            .into_iter()
            .find(|k| k.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}
