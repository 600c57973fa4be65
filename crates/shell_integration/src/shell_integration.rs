//! Shell integration feature flags for HumanSSH.
//!
//! The `shell-integration-features` setting controls what the bundled shell
//! integration scripts do: which cursor to request, and whether to report the
//! working directory, propagate the SSH environment, install terminfo on SSH
//! hosts, mark sudo sessions and report titles.
//!
//! The setting is parsed into a [`FeatureSet`] and rendered back out in one of
//! two forms (see [`RenderMode`]):
//! - `config`: human-readable, e.g. `cursor:block:blink,path,sudo,title`
//! - `env`: the `HUMANSSH_SHELL_FEATURES` value read by the scripts, e.g.
//!   `cursor:1,path,sudo,title`

pub mod features;
pub mod format;
pub mod parse;
pub mod schema;

pub use features::{Cursor, CursorShape, CursorStyle, FeatureSet};
pub use format::{RenderMode, Rendered, Setting};
pub use parse::{parse_cli, ParseError};
