//! Ordered registry of the page's scroll-addressable sections.

use heapless::Vec;

/// Upper bound on registered sections. The reveal bitmask in the app state
/// relies on this staying at or below 16.
pub const MAX_SECTIONS: usize = 12;

/// One named scrollable region of the page. The id doubles as the document
/// anchor and as the key the navigation surface highlights by.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Section {
    pub id: &'static str,
    pub label: &'static str,
}

impl Section {
    pub const fn new(id: &'static str, label: &'static str) -> Self {
        Self { id, label }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RegistryError {
    DuplicateId(&'static str),
    TooManySections,
}

/// Fixed, ordered section list supplied once at mount. Sequence order
/// defines navigation order only; it never decides which section is active.
#[derive(Clone, Debug, Default)]
pub struct SectionRegistry {
    sections: Vec<Section, MAX_SECTIONS>,
}

impl SectionRegistry {
    pub fn from_sections(sections: &[Section]) -> Result<Self, RegistryError> {
        let mut registry = Self::default();

        for section in sections {
            if registry.index_of(section.id).is_some() {
                return Err(RegistryError::DuplicateId(section.id));
            }
            registry
                .sections
                .push(*section)
                .map_err(|_| RegistryError::TooManySections)?;
        }

        Ok(registry)
    }

    pub fn len(&self) -> u16 {
        self.sections.len() as u16
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn get(&self, index: u16) -> Option<&Section> {
        self.sections.get(index as usize)
    }

    pub fn index_of(&self, id: &str) -> Option<u16> {
        self.sections
            .iter()
            .position(|section| section.id == id)
            .map(|index| index as u16)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }
}
