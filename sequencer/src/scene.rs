//! Scene records and the scene deck.
//!
//! DESIGN
//! ======
//! Scenes are immutable display records. The built-in deck is `const` data so
//! the client can render it without allocation at startup; decks loaded from
//! JSON carry owned strings through the same `Cow` fields.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use std::borrow::Cow;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::DeckError;

/// Backdrop color every scene gradient fades into.
pub const BASE_BACKDROP: &str = "#0a0a0a";

/// One timed slide of promotional content.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    pub id: u32,
    pub title: Cow<'static, str>,
    pub subtitle: Cow<'static, str>,
    pub description: Cow<'static, str>,
    pub background: Background,
}

/// Radial gradient drawn behind a scene. Opaque to the sequencer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Background {
    pub focus_x_pct: u8,
    pub focus_y_pct: u8,
    pub inner: Cow<'static, str>,
    pub outer: Cow<'static, str>,
}

impl Background {
    /// CSS `background` value for this gradient.
    #[must_use]
    pub fn css(&self) -> String {
        format!(
            "radial-gradient(circle at {}% {}%, {} 0%, {} 100%)",
            self.focus_x_pct, self.focus_y_pct, self.inner, self.outer
        )
    }
}

const fn radial(focus_x_pct: u8, focus_y_pct: u8, inner: &'static str) -> Background {
    Background {
        focus_x_pct,
        focus_y_pct,
        inner: Cow::Borrowed(inner),
        outer: Cow::Borrowed(BASE_BACKDROP),
    }
}

const fn scene(
    id: u32,
    title: &'static str,
    subtitle: &'static str,
    description: &'static str,
    background: Background,
) -> Scene {
    Scene {
        id,
        title: Cow::Borrowed(title),
        subtitle: Cow::Borrowed(subtitle),
        description: Cow::Borrowed(description),
        background,
    }
}

const SPRING_2025: [Scene; 3] = [
    scene(
        1,
        "ELEGANCE",
        "Redefined",
        "Exquisite craftsmanship meets timeless design",
        radial(30, 50, "#2d1810"),
    ),
    scene(
        2,
        "NEW COLLECTION",
        "Coming Soon",
        "Discover the art of luxury jewelry",
        radial(70, 50, "#1a1a2e"),
    ),
    scene(
        3,
        "UNVEILING",
        "Spring 2025",
        "Where brilliance meets beauty",
        radial(50, 50, "#1e1a1a"),
    ),
];

/// Ordered, id-unique list of scenes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SceneDeck {
    scenes: Vec<Scene>,
}

impl SceneDeck {
    /// Build a deck, rejecting duplicate scene ids.
    ///
    /// # Errors
    ///
    /// Returns `DeckError::DuplicateSceneId` for the first repeated id.
    pub fn new(scenes: Vec<Scene>) -> Result<Self, DeckError> {
        let mut seen = HashSet::with_capacity(scenes.len());
        for scene in &scenes {
            if !seen.insert(scene.id) {
                return Err(DeckError::DuplicateSceneId(scene.id));
            }
        }
        Ok(Self { scenes })
    }

    /// Parse a deck from a JSON array of scenes.
    ///
    /// # Errors
    ///
    /// Returns `DeckError::Parse` for malformed input and
    /// `DeckError::DuplicateSceneId` when two scenes share an id.
    pub fn from_json(raw: &str) -> Result<Self, DeckError> {
        let scenes = serde_json::from_str::<Vec<Scene>>(raw)?;
        Self::new(scenes)
    }

    /// The Spring 2025 collection teaser.
    #[must_use]
    pub fn spring_2025() -> Self {
        Self { scenes: SPRING_2025.to_vec() }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Scene> {
        self.scenes.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Scene> {
        self.scenes.iter()
    }
}
