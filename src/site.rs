//! Static site payload: the section registry and the contact address.
//!
//! Content lives in `site/index.html`; this module only names the regions
//! the tracker observes and the navigation renders.

use portico_core::sections::{RegistryError, Section, SectionRegistry};

pub const EMAIL: &str = "hello@alexmoreno.dev";

const SECTIONS: [Section; 7] = [
    Section::new("about", "About"),
    Section::new("skills", "Skills"),
    Section::new("projects", "Projects"),
    Section::new("experience", "Experience"),
    Section::new("leadership", "Leadership"),
    Section::new("profiles", "Profiles"),
    Section::new("contact", "Contact"),
];

pub fn registry() -> Result<SectionRegistry, RegistryError> {
    SectionRegistry::from_sections(&SECTIONS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn site_registry_is_valid_and_ordered() {
        let registry = registry().unwrap();

        assert_eq!(registry.len(), 7);
        assert_eq!(registry.get(0).unwrap().id, "about");
        assert_eq!(registry.get(6).unwrap().id, "contact");
    }
}
