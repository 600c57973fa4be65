//! Feature set data model.
//!
//! [`FeatureSet`] is a plain `Copy` value. Parsing builds a new one and
//! nothing mutates it after it has been handed out.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Cursor shape requested by the shell integration scripts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CursorShape {
    /// Leave the cursor alone.
    Disabled,
    #[default]
    Bar,
    Block,
    Underline,
}

impl CursorShape {
    /// Name table, indexed by discriminant. Used for both parsing and formatting.
    pub const NAMES: [(Self, &'static str); 4] = [
        (Self::Disabled, "disabled"),
        (Self::Bar, "bar"),
        (Self::Block, "block"),
        (Self::Underline, "underline"),
    ];

    pub fn name(self) -> &'static str {
        Self::NAMES[self as usize].1
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::NAMES
            .iter()
            .find(|(_, candidate)| *candidate == name)
            .map(|(shape, _)| *shape)
    }
}

/// Blink behavior of the requested cursor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CursorStyle {
    /// No explicit preference. Rendered as blinking in env mode.
    #[default]
    Default,
    Blink,
    Steady,
}

impl CursorStyle {
    /// Name table, indexed by discriminant. Used for both parsing and formatting.
    pub const NAMES: [(Self, &'static str); 3] = [
        (Self::Default, "default"),
        (Self::Blink, "blink"),
        (Self::Steady, "steady"),
    ];

    pub fn name(self) -> &'static str {
        Self::NAMES[self as usize].1
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::NAMES
            .iter()
            .find(|(_, candidate)| *candidate == name)
            .map(|(style, _)| *style)
    }
}

/// Cursor shape plus blink style.
///
/// `style` is ignored whenever `shape` is [`CursorShape::Disabled`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Cursor {
    pub shape: CursorShape,
    pub style: CursorStyle,
}

impl Cursor {
    pub const DISABLED: Self = Self {
        shape: CursorShape::Disabled,
        style: CursorStyle::Default,
    };

    pub const fn new(shape: CursorShape, style: CursorStyle) -> Self {
        Self { shape, style }
    }

    pub fn is_enabled(&self) -> bool {
        self.shape != CursorShape::Disabled
    }

    /// DECSCUSR parameter for this cursor, or `None` when disabled.
    ///
    /// | shape     | blink | steady |
    /// |-----------|-------|--------|
    /// | block     | 1     | 2      |
    /// | underline | 3     | 4      |
    /// | bar       | 5     | 6      |
    ///
    /// [`CursorStyle::Default`] maps to the blinking code.
    pub fn decscusr_code(&self) -> Option<u8> {
        let blinking = match self.shape {
            CursorShape::Disabled => return None,
            CursorShape::Block => 1,
            CursorShape::Underline => 3,
            CursorShape::Bar => 5,
        };
        Some(match self.style {
            CursorStyle::Default | CursorStyle::Blink => blinking,
            CursorStyle::Steady => blinking + 1,
        })
    }
}

/// Everything the shell integration scripts can be asked to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FeatureSet {
    /// Cursor to request at the prompt.
    pub cursor: Cursor,
    /// Mark sudo sessions so the prompt can flag them.
    pub sudo: bool,
    /// Report the running command / directory as the window title.
    pub title: bool,
    /// Forward TERM and friends over SSH.
    pub ssh_env: bool,
    /// Install HumanSSH's terminfo entry on SSH hosts.
    pub ssh_terminfo: bool,
    /// Report the working directory (OSC 7).
    pub path: bool,
}

impl Default for FeatureSet {
    fn default() -> Self {
        Self {
            cursor: Cursor::default(),
            sudo: false,
            title: true,
            ssh_env: false,
            ssh_terminfo: false,
            path: true,
        }
    }
}

impl FeatureSet {
    /// Every feature on (with the default cursor) or every feature off.
    pub fn all(enabled: bool) -> Self {
        Self {
            cursor: if enabled {
                Cursor::default()
            } else {
                Cursor::DISABLED
            },
            sudo: enabled,
            title: enabled,
            ssh_env: enabled,
            ssh_terminfo: enabled,
            path: enabled,
        }
    }
}

impl Serialize for FeatureSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.setting())
    }
}

impl<'de> Deserialize<'de> for FeatureSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}
