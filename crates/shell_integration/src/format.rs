//! Rendering a [`FeatureSet`] back to text.

use std::fmt::{self, Write as _};

use crate::features::{Cursor, CursorStyle, FeatureSet};
use crate::schema::{FieldKind, SORTED_FIELDS};

/// Output flavor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RenderMode {
    /// Config file form: `cursor:<shape>[:<style>]`.
    #[default]
    Config,
    /// Environment variable form: `cursor:<DECSCUSR code>`.
    Env,
}

/// Display adapter that renders a feature set in a given mode.
///
/// Only enabled fields are written, comma separated, in [`SORTED_FIELDS`]
/// order. Disabled fields are simply left out.
#[derive(Clone, Copy, Debug)]
pub struct Rendered {
    features: FeatureSet,
    mode: RenderMode,
}

impl Rendered {
    fn write_cursor(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cursor = self.features.cursor;
        match self.mode {
            RenderMode::Config => write_cursor_names(f, cursor),
            RenderMode::Env => {
                let Some(code) = cursor.decscusr_code() else {
                    unreachable!("only enabled cursors are rendered");
                };
                write!(f, ":{code}")
            }
        }
    }
}

/// `:<shape>[:<style>]`, leaving out a default style.
fn write_cursor_names(f: &mut fmt::Formatter<'_>, cursor: Cursor) -> fmt::Result {
    write!(f, ":{}", cursor.shape.name())?;
    if cursor.style != CursorStyle::Default {
        write!(f, ":{}", cursor.style.name())?;
    }
    Ok(())
}

impl fmt::Display for Rendered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let enabled = SORTED_FIELDS
            .iter()
            .filter(|field| field.is_enabled(&self.features));

        for (index, field) in enabled.enumerate() {
            if index > 0 {
                f.write_char(',')?;
            }
            f.write_str(field.name)?;
            if let FieldKind::Cursor = field.kind {
                self.write_cursor(f)?;
            }
        }
        Ok(())
    }
}

/// Display adapter for the value stored in a config file.
///
/// Unlike [`RenderMode::Config`] output this parses back to the exact same
/// [`FeatureSet`]: default-on fields that are off are written as `no-<name>`,
/// a disabled cursor with a style as `cursor:disabled:<style>`, and a set with
/// everything off as `false`.
#[derive(Clone, Copy, Debug)]
pub struct Setting {
    features: FeatureSet,
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.features == FeatureSet::all(false) {
            return f.write_str("false");
        }

        let defaults = FeatureSet::default();
        let written = SORTED_FIELDS
            .iter()
            .filter(|field| field.is_enabled(&self.features) || field.is_enabled(&defaults));

        for (index, field) in written.enumerate() {
            if index > 0 {
                f.write_char(',')?;
            }
            let cursor = self.features.cursor;
            match field.kind {
                FieldKind::Cursor
                    if cursor.is_enabled() || cursor.style != CursorStyle::Default =>
                {
                    f.write_str(field.name)?;
                    write_cursor_names(f, cursor)?;
                }
                _ if field.is_enabled(&self.features) => f.write_str(field.name)?,
                _ => write!(f, "no-{}", field.name)?,
            }
        }
        Ok(())
    }
}

impl FeatureSet {
    /// Lossless form for persisting; see [`Setting`].
    pub fn setting(&self) -> Setting {
        Setting { features: *self }
    }

    pub fn rendered(&self, mode: RenderMode) -> Rendered {
        Rendered {
            features: *self,
            mode,
        }
    }

    pub fn render(&self, mode: RenderMode) -> String {
        self.rendered(mode).to_string()
    }
}

impl fmt::Display for FeatureSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.rendered(RenderMode::Config), f)
    }
}
