use std::ops::{Add, Sub};

/// A point on the arena plane, in arena units.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn lerp(self, to: Self, t: f32) -> Self {
        Self {
            x: crate::lerp(self.x, to.x, t),
            y: crate::lerp(self.y, to.y, t),
        }
    }

    /// Angle in degrees of the vector from `self` to `other`, measured with `atan2(dy, dx)`.
    ///
    /// Coincident points yield `0.0`.
    pub fn angle_to(self, other: Self) -> f32 {
        let d = other - self;
        if d.x == 0.0 && d.y == 0.0 {
            return 0.0;
        }
        d.y.atan2(d.x).to_degrees()
    }

    pub fn distance(self, other: Self) -> f32 {
        let d = other - self;
        (d.x * d.x + d.y * d.y).sqrt()
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Position {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Position {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<[f32; 2]> for Position {
    fn from([x, y]: [f32; 2]) -> Self {
        Self::new(x, y)
    }
}

#[cfg(feature = "glam")]
impl From<Position> for glam::Vec2 {
    fn from(p: Position) -> Self {
        glam::Vec2::new(p.x, p.y)
    }
}

#[cfg(feature = "glam")]
impl From<glam::Vec2> for Position {
    fn from(v: glam::Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}
