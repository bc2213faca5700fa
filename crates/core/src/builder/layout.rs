//! Ordered home page sections.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A home page section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionId {
    Header,
    Hero,
    Categories,
    Featured,
    Newsletter,
    Footer,
}

impl SectionId {
    /// Default render order.
    pub const ALL: [Self; 6] = [
        Self::Header,
        Self::Hero,
        Self::Categories,
        Self::Featured,
        Self::Newsletter,
        Self::Footer,
    ];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Header => "header",
            Self::Hero => "hero",
            Self::Categories => "categories",
            Self::Featured => "featured",
            Self::Newsletter => "newsletter",
            Self::Footer => "footer",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }

    /// Arabic display name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Header => "الترويسة",
            Self::Hero => "الشرائح الرئيسية",
            Self::Categories => "الأقسام",
            Self::Featured => "منتجات مميزة",
            Self::Newsletter => "النشرة البريدية",
            Self::Footer => "التذييل",
        }
    }
}

/// One entry in the layout list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutComponent {
    pub id: SectionId,
    pub name: String,
}

impl From<SectionId> for LayoutComponent {
    fn from(id: SectionId) -> Self {
        Self {
            id,
            name: id.display_name().to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("index {index} out of range for {len} sections")]
    OutOfRange { index: usize, len: usize },
    #[error("unknown section id: {0}")]
    UnknownSection(String),
    #[error("submitted order is not a permutation of the current sections")]
    NotAPermutation,
    #[error("section {0:?} appears more than once")]
    Duplicate(SectionId),
    #[error("section {0:?} is missing from the layout")]
    MissingSection(SectionId),
}

/// Ordered section list; order is render order.
///
/// The set of ids is fixed at construction. [`reorder`](Self::reorder) and
/// [`apply_order`](Self::apply_order) only permute it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Layout(Vec<LayoutComponent>);

impl Default for Layout {
    fn default() -> Self {
        Self(SectionId::ALL.into_iter().map(LayoutComponent::from).collect())
    }
}

impl<'de> Deserialize<'de> for Layout {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let components = Vec::<LayoutComponent>::deserialize(deserializer)?;
        Self::from_components(components).map_err(serde::de::Error::custom)
    }
}

impl Layout {
    /// Build from components naming every section exactly once.
    ///
    /// # Errors
    ///
    /// Returns `LayoutError::Duplicate` if a section appears twice and
    /// `LayoutError::MissingSection` if one is left out.
    pub fn from_components(components: Vec<LayoutComponent>) -> Result<Self, LayoutError> {
        let mut seen = Vec::with_capacity(components.len());
        for component in &components {
            if seen.contains(&component.id) {
                return Err(LayoutError::Duplicate(component.id));
            }
            seen.push(component.id);
        }
        if let Some(missing) = SectionId::ALL.into_iter().find(|id| !seen.contains(id)) {
            return Err(LayoutError::MissingSection(missing));
        }
        Ok(Self(components))
    }

    #[must_use]
    pub fn components(&self) -> &[LayoutComponent] {
        &self.0
    }

    /// Section ids in render order.
    pub fn ids(&self) -> impl Iterator<Item = SectionId> + '_ {
        self.0.iter().map(|c| c.id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn position(&self, id: SectionId) -> Option<usize> {
        self.0.iter().position(|c| c.id == id)
    }

    /// Move the section at `from` so it ends up at `to`.
    ///
    /// Same semantics as a drag-and-drop drop: remove then insert.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if either index is past the end; the layout is
    /// unchanged.
    pub fn reorder(&mut self, from: usize, to: usize) -> Result<(), LayoutError> {
        let len = self.0.len();
        for index in [from, to] {
            if index >= len {
                return Err(LayoutError::OutOfRange { index, len });
            }
        }
        let moved = self.0.remove(from);
        self.0.insert(to, moved);
        Ok(())
    }

    /// Replace the order with a full list of section keys.
    ///
    /// # Errors
    ///
    /// Returns an error unless `keys` names every current section exactly
    /// once; the layout is unchanged.
    pub fn apply_order<S: AsRef<str>>(&mut self, keys: &[S]) -> Result<(), LayoutError> {
        if keys.len() != self.0.len() {
            return Err(LayoutError::NotAPermutation);
        }
        let mut reordered = Vec::with_capacity(keys.len());
        for key in keys {
            let key = key.as_ref().trim();
            let id = SectionId::from_key(key)
                .ok_or_else(|| LayoutError::UnknownSection(key.to_owned()))?;
            if reordered.iter().any(|c: &LayoutComponent| c.id == id) {
                return Err(LayoutError::Duplicate(id));
            }
            let component = self
                .0
                .iter()
                .find(|c| c.id == id)
                .ok_or(LayoutError::NotAPermutation)?;
            reordered.push(component.clone());
        }
        self.0 = reordered;
        Ok(())
    }
}
