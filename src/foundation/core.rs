//! Id newtypes, frame rate, color, and geometry primitives.

use crate::foundation::error::{KinegraphError, KinegraphResult};

pub use kurbo::{Point, Size, Vec2};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
/// Identity of a root graph; one animator exists per root graph.
pub struct GraphId(pub u64);

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
/// Stable node key, unique within one animation's lifetime.
pub struct NodeId(pub u64);

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
/// Stable edge key, unique within one animation's lifetime.
pub struct EdgeId(pub u64);

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
/// Stable annotation key, minted once per annotation and carried through
/// every frame referencing it (never an identity hash).
pub struct AnnotationId(pub u64);

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
/// Mints monotonically increasing ids for entities that have no natural key.
///
/// Capture hosts mint an [`AnnotationId`] the first time an annotation is
/// seen and reuse it for every subsequent frame.
pub struct IdMinter {
    next: u64,
}

impl IdMinter {
    /// Create a minter starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint the next id, never reusing a previous one.
    pub fn mint(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Whole frames per second driving tick cadence and default step counts.
pub struct Fps(u32);

/// Default playback rate, matching the default per-key step count.
pub const DEFAULT_FPS: Fps = Fps(30);

impl Fps {
    /// Validated constructor; zero frames per second is rejected.
    pub fn new(fps: u32) -> KinegraphResult<Self> {
        if fps == 0 {
            return Err(KinegraphError::validation("Fps must be > 0"));
        }
        Ok(Self(fps))
    }

    /// Frames per second as a plain integer.
    pub fn get(self) -> u32 {
        self.0
    }

    /// Tick period, `1000 / fps` milliseconds, floored at one
    /// millisecond so rates above 1000 fps cannot yield a zero period.
    pub fn period(self) -> std::time::Duration {
        std::time::Duration::from_millis((1000 / u64::from(self.0)).max(1))
    }
}

impl Default for Fps {
    fn default() -> Self {
        DEFAULT_FPS
    }
}

/// Straight-alpha RGBA8 color (channels not premultiplied).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel; 255 is fully opaque.
    pub a: u8,
}

impl Rgba {
    /// Construct from explicit channels.
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque color.
    pub fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Fully transparent black.
    pub fn transparent() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 0,
        }
    }

    /// Same color with a replaced alpha channel.
    pub fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// A point in 3D view space; the z axis is retained for hosts that track it.
pub struct Point3 {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
    /// Depth coordinate; zero for purely 2D views.
    pub z: f64,
}

impl Point3 {
    /// Origin.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Construct from explicit coordinates.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
