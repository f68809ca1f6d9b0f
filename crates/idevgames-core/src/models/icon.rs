use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Icons a snippet may carry. Each one corresponds to a file served
/// under `/icons`; the serialized form is that file name.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Icon {
    #[serde(rename = "blender.png")]
    Blender3D,
    #[serde(rename = "deepnight.png")]
    Deepnight,
    #[serde(rename = "ferris-happy.svg")]
    Ferris,
    #[serde(rename = "gamasutra.ico")]
    Gamasutra,
    #[serde(rename = "gdc.svg")]
    Gdc,
    #[serde(rename = "github.png")]
    Github,
    #[serde(rename = "godot.png")]
    Godot,
    #[serde(rename = "itchio.png")]
    ItchIo,
    #[default]
    #[serde(rename = "safari.png")]
    Safari,
    #[serde(rename = "swiftlang.svg")]
    Swift,
    #[serde(rename = "youtube.svg")]
    YouTube,
}

impl Icon {
    /// Every icon, ordered by file name.
    pub const ALL: [Icon; 11] = [
        Icon::Blender3D,
        Icon::Deepnight,
        Icon::Ferris,
        Icon::Gamasutra,
        Icon::Gdc,
        Icon::Github,
        Icon::Godot,
        Icon::ItchIo,
        Icon::Safari,
        Icon::Swift,
        Icon::YouTube,
    ];

    pub fn all() -> &'static [Icon] {
        &Self::ALL
    }

    pub fn file(self) -> &'static str {
        match self {
            Icon::Blender3D => "blender.png",
            Icon::Deepnight => "deepnight.png",
            Icon::Ferris => "ferris-happy.svg",
            Icon::Gamasutra => "gamasutra.ico",
            Icon::Gdc => "gdc.svg",
            Icon::Github => "github.png",
            Icon::Godot => "godot.png",
            Icon::ItchIo => "itchio.png",
            Icon::Safari => "safari.png",
            Icon::Swift => "swiftlang.svg",
            Icon::YouTube => "youtube.svg",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Icon::Blender3D => "Blender3D",
            Icon::Deepnight => "Deepnight",
            Icon::Ferris => "Ferris",
            Icon::Gamasutra => "Gamasutra",
            Icon::Gdc => "GDC",
            Icon::Github => "Github",
            Icon::Godot => "Godot",
            Icon::ItchIo => "Itch.io",
            Icon::Safari => "Safari",
            Icon::Swift => "Swift",
            Icon::YouTube => "YouTube",
        }
    }

    /// Public path of the icon image.
    pub fn path(self) -> String {
        format!("/icons/{}", self.file())
    }

    pub fn from_file(file: &str) -> Result<Icon, CoreError> {
        Self::ALL
            .into_iter()
            .find(|icon| icon.file() == file)
            .ok_or_else(|| CoreError::UnknownIcon(file.to_string()))
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Accepts either the file name or the display name (case-insensitive).
impl FromStr for Icon {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::from_file(s).or_else(|_| {
            Self::ALL
                .into_iter()
                .find(|icon| icon.display_name().eq_ignore_ascii_case(s))
                .ok_or_else(|| CoreError::UnknownIcon(s.to_string()))
        })
    }
}
