//! Parser for the `shell-integration-features` value.
//!
//! Grammar: either the whole value is `true` / `false`, or it is a comma
//! separated list of tokens applied left to right on top of the defaults:
//!
//! - `cursor[:shape[:style]]`, or the shorthands `cursor:blink` / `cursor:steady`
//! - `no-cursor`
//! - `<flag>` / `no-<flag>` for every boolean flag

use std::str::FromStr;

use thiserror::Error;
use tracing::{debug, trace};

use crate::features::{Cursor, CursorShape, CursorStyle, FeatureSet};
use crate::schema::{self, FieldKind};

/// Why a value could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No value at all was supplied (e.g. a bare `--shell-integration-features`).
    #[error("a value is required")]
    ValueRequired,
    #[error("invalid shell integration feature '{token}'")]
    InvalidValue { token: String },
}

impl ParseError {
    fn invalid(token: &str) -> Self {
        Self::InvalidValue {
            token: token.to_string(),
        }
    }
}

/// Parse a raw setting value. `None` means the value was missing entirely,
/// which differs from an empty string (an empty token list).
pub fn parse_cli(input: Option<&str>) -> Result<FeatureSet, ParseError> {
    let input = input.ok_or(ParseError::ValueRequired)?;

    match input.trim() {
        "true" => return Ok(FeatureSet::all(true)),
        "false" => return Ok(FeatureSet::all(false)),
        _ => {}
    }

    let mut features = FeatureSet::default();
    for token in input.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        if let Err(err) = apply_token(&mut features, token) {
            debug!(input, "rejected shell integration features: {err}");
            return Err(err);
        }
        trace!(token, "applied shell integration feature");
    }
    Ok(features)
}

fn apply_token(features: &mut FeatureSet, token: &str) -> Result<(), ParseError> {
    if token.starts_with("cursor") {
        features.cursor = parse_cursor(token)?;
        return Ok(());
    }

    if token == "no-cursor" {
        features.cursor.shape = CursorShape::Disabled;
        return Ok(());
    }

    let (name, enabled) = match token.strip_prefix("no-") {
        Some(name) => (name, false),
        None => (token, true),
    };
    match schema::flag_by_name(name).map(|field| field.kind) {
        Some(FieldKind::Flag { set, .. }) => {
            set(features, enabled);
            Ok(())
        }
        _ => Err(ParseError::invalid(token)),
    }
}

/// `cursor`, `cursor:<shape>`, `cursor:<shape>:<style>`, `cursor:blink`, `cursor:steady`.
fn parse_cursor(token: &str) -> Result<Cursor, ParseError> {
    let mut parts = token.split(':').skip(1);

    let Some(shape) = parts.next() else {
        return Ok(Cursor::default());
    };
    let shape = match shape {
        "blink" => return Ok(Cursor::new(CursorShape::Bar, CursorStyle::Blink)),
        "steady" => return Ok(Cursor::new(CursorShape::Bar, CursorStyle::Steady)),
        name => CursorShape::from_name(name).ok_or_else(|| ParseError::invalid(token))?,
    };

    let style = match parts.next() {
        Some(name) => CursorStyle::from_name(name).ok_or_else(|| ParseError::invalid(token))?,
        None => CursorStyle::Default,
    };

    if parts.next().is_some() {
        return Err(ParseError::invalid(token));
    }

    Ok(Cursor::new(shape, style))
}

impl FromStr for FeatureSet {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_cli(Some(s))
    }
}
