//! Desktop environment provider.
//!
//! The behavior engine asks two questions of its surroundings: "where is
//! an icon?" and "what are the screen bounds?". The [`DesktopEnvironment`]
//! trait answers them, and is injected into the engine at construction so
//! replacing the desktop with a mock in tests is trivial.
//!
//! [`DesktopLayout`] is the serializable description of a desktop (bounds
//! plus icon slots) and [`StaticDesktop`] implements the trait over one.

use crate::error::{Error, Result};
use crate::pet::Point;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Screen bounds in screen units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Screen width.
    pub width: f64,
    /// Screen height.
    pub height: f64,
}

impl Bounds {
    /// Create new bounds.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Answers positional queries about the desktop.
///
/// Implementations may degrade: a desktop with no icons configured
/// returns `None` from [`random_icon_position`](Self::random_icon_position)
/// and the engine falls back to random in-bounds destinations.
pub trait DesktopEnvironment: Send {
    /// A randomly chosen icon position, or `None` if no icons exist.
    fn random_icon_position(&mut self) -> Option<Point>;

    /// The screen bounds.
    fn screen_bounds(&self) -> Bounds;
}

/// A desktop icon slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IconSlot {
    /// Display name of the icon.
    pub name: String,
    /// Horizontal position.
    pub x: f64,
    /// Vertical position.
    pub y: f64,
}

impl IconSlot {
    /// The slot's position as a point.
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// A serializable desktop description: screen bounds plus icon slots.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesktopLayout {
    /// The screen bounds.
    pub screen: Bounds,
    /// The icon slots on the desktop.
    pub icons: Vec<IconSlot>,
}

impl DesktopLayout {
    /// Create a layout with the given bounds and no icons.
    pub fn new(screen: Bounds) -> Self {
        Self {
            screen,
            icons: Vec::new(),
        }
    }

    /// Add an icon slot.
    pub fn icon(mut self, name: impl Into<String>, x: f64, y: f64) -> Self {
        self.icons.push(IconSlot {
            name: name.into(),
            x,
            y,
        });
        self
    }

    /// Load a layout from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `Error::LayoutRead` if the file cannot be read and
    /// `Error::LayoutParse` if the JSON is invalid.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| Error::LayoutRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| Error::LayoutParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save the layout to a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `Error::LayoutWrite` if the file cannot be written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = serde_json::to_string_pretty(self).map_err(|source| Error::LayoutParse {
            path: path.to_path_buf(),
            source,
        })?;
        std::fs::write(path, content).map_err(|source| Error::LayoutWrite {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// A [`DesktopEnvironment`] over a fixed [`DesktopLayout`].
#[derive(Debug)]
pub struct StaticDesktop {
    layout: DesktopLayout,
    rng: StdRng,
}

impl StaticDesktop {
    /// Create a provider over the given layout.
    pub fn new(layout: DesktopLayout) -> Self {
        Self {
            layout,
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a provider with a deterministic icon-picking sequence.
    pub fn with_seed(layout: DesktopLayout, seed: u64) -> Self {
        Self {
            layout,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// The underlying layout.
    pub fn layout(&self) -> &DesktopLayout {
        &self.layout
    }
}

impl DesktopEnvironment for StaticDesktop {
    fn random_icon_position(&mut self) -> Option<Point> {
        if self.layout.icons.is_empty() {
            return None;
        }
        let index = self.rng.gen_range(0..self.layout.icons.len());
        Some(self.layout.icons[index].position())
    }

    fn screen_bounds(&self) -> Bounds {
        self.layout.screen
    }
}
