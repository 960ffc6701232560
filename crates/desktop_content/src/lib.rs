//! The fixed content registry backing the portfolio desktop shell.
//!
//! The registry is the external collaborator of the window manager: an
//! ordered, compile-time-fixed list of desktop items, each carrying a stable
//! id, a display title, an opaque icon asset path, and an opaque renderable
//! payload. The window manager never inspects payload internals; it renders
//! [`render_content`] verbatim inside a window body.

use serde::{Deserialize, Serialize};
use thiserror::Error;

mod payloads;

pub use payloads::render_content;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
/// Identifier of a registry item. Ids form a closed set; there is no dynamic
/// registration.
pub enum ContentId {
    /// Personal bio page.
    AboutMe,
    /// Project portfolio page.
    MyProjects,
    /// Skill overview page.
    MySkills,
    /// Contact links page.
    Contact,
}

impl ContentId {
    /// Stable string form used in launch links and DOM ids.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AboutMe => "about_me",
            Self::MyProjects => "my_projects",
            Self::MySkills => "my_skills",
            Self::Contact => "contact",
        }
    }

    /// Parses the stable string form back into an id.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownContentId`] when the slug does not name a registry
    /// item.
    pub fn from_slug(raw: &str) -> Result<Self, UnknownContentId> {
        match raw.trim() {
            "about_me" => Ok(Self::AboutMe),
            "my_projects" => Ok(Self::MyProjects),
            "my_skills" => Ok(Self::MySkills),
            "contact" => Ok(Self::Contact),
            other => Err(UnknownContentId(other.to_string())),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown content id `{0}`")]
/// A slug that does not name any registry item.
pub struct UnknownContentId(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Display metadata for one registry item.
pub struct ContentDescriptor {
    /// Item identifier.
    pub id: ContentId,
    /// Window and taskbar title.
    pub title: &'static str,
    /// Opaque icon asset path, resolved by the host image pipeline.
    pub icon_src: &'static str,
}

const CONTENT_REGISTRY: [ContentDescriptor; 4] = [
    ContentDescriptor {
        id: ContentId::AboutMe,
        title: "About Me",
        icon_src: "/icons/notepad.png",
    },
    ContentDescriptor {
        id: ContentId::MyProjects,
        title: "My Projects",
        icon_src: "/icons/projects.png",
    },
    ContentDescriptor {
        id: ContentId::MySkills,
        title: "Skills",
        icon_src: "/icons/skills.png",
    },
    ContentDescriptor {
        id: ContentId::Contact,
        title: "Contact",
        icon_src: "/icons/phone.png",
    },
];

/// The full registry in its fixed insertion order.
pub fn registry() -> &'static [ContentDescriptor] {
    &CONTENT_REGISTRY
}

/// Registry entries shown as desktop icons and launcher items, as an owned
/// list for reactive iteration.
pub fn registry_items() -> Vec<ContentDescriptor> {
    CONTENT_REGISTRY.to_vec()
}

/// Display metadata for `id`.
pub fn descriptor(id: ContentId) -> &'static ContentDescriptor {
    CONTENT_REGISTRY
        .iter()
        .find(|entry| entry.id == id)
        .expect("every content id has a registry entry")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn registry_preserves_fixed_order() {
        let ids: Vec<ContentId> = registry().iter().map(|entry| entry.id).collect();
        assert_eq!(
            ids,
            vec![
                ContentId::AboutMe,
                ContentId::MyProjects,
                ContentId::MySkills,
                ContentId::Contact,
            ]
        );
    }

    #[test]
    fn slugs_round_trip() {
        for entry in registry() {
            assert_eq!(ContentId::from_slug(entry.id.as_str()), Ok(entry.id));
        }
    }

    #[test]
    fn unknown_slug_is_an_error() {
        let err = ContentId::from_slug("solitaire").expect_err("closed registry");
        assert_eq!(err, UnknownContentId("solitaire".to_string()));
    }

    #[test]
    fn descriptors_resolve_for_every_id() {
        assert_eq!(descriptor(ContentId::Contact).title, "Contact");
        assert_eq!(descriptor(ContentId::AboutMe).icon_src, "/icons/notepad.png");
    }
}
