//! End-to-end tests for the shell integration feature value.
//!
//! These go through the public API only: raw setting text in, rendered
//! config / env strings out, plus the serde form used by the config file.

use pretty_assertions::assert_eq;
use shell_integration::{
    parse_cli, Cursor, CursorShape, CursorStyle, FeatureSet, ParseError, RenderMode,
};

// ============================================================================
// Setting text -> rendered output
// ============================================================================

#[test]
fn config_value_to_env_value() {
    let features = parse_cli(Some("cursor:block:blink, sudo")).unwrap();
    assert_eq!(
        features.render(RenderMode::Config),
        "cursor:block:blink,path,sudo,title"
    );
    assert_eq!(features.render(RenderMode::Env), "cursor:1,path,sudo,title");
}

#[test]
fn disabling_defaults() {
    let features = parse_cli(Some("no-cursor,no-path,ssh-env")).unwrap();
    assert_eq!(features.render(RenderMode::Config), "ssh-env,title");
    assert_eq!(features.render(RenderMode::Env), "ssh-env,title");
}

#[test]
fn false_renders_nothing() {
    let features = parse_cli(Some("false")).unwrap();
    assert_eq!(features.render(RenderMode::Env), "");
}

#[test]
fn rendering_is_order_stable() {
    let a = parse_cli(Some("title,sudo,ssh-terminfo,cursor:underline:steady")).unwrap();
    let b = parse_cli(Some("cursor:underline:steady,ssh-terminfo,sudo")).unwrap();
    assert_eq!(a, b);
    assert_eq!(
        a.render(RenderMode::Config),
        "cursor:underline:steady,path,ssh-terminfo,sudo,title"
    );
    assert_eq!(
        a.render(RenderMode::Env),
        "cursor:4,path,ssh-terminfo,sudo,title"
    );
}

#[test]
fn config_round_trip_for_alternate_spellings() {
    for input in [
        "cursor:blink,sudo",
        "cursor:bar:blink, sudo ,path",
        "sudo,cursor:steady,cursor:blink",
    ] {
        let first = parse_cli(Some(input)).unwrap();
        let rendered = first.render(RenderMode::Config);
        let second = parse_cli(Some(&rendered)).unwrap();
        assert_eq!(second, first, "{input} -> {rendered}");
        assert_eq!(second.render(RenderMode::Config), rendered);
    }
}

#[test]
fn errors_are_classified() {
    assert_eq!(parse_cli(None), Err(ParseError::ValueRequired));
    assert!(matches!(
        parse_cli(Some("bogus")),
        Err(ParseError::InvalidValue { .. })
    ));
    assert!(matches!(
        parse_cli(Some("cursor:bogus")),
        Err(ParseError::InvalidValue { .. })
    ));
}

// ============================================================================
// Serde form
// ============================================================================

#[derive(Debug, serde::Deserialize, serde::Serialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
struct Wrapper {
    shell_integration_features: FeatureSet,
}

#[test]
fn deserializes_from_toml_string() {
    let wrapper: Wrapper =
        toml::from_str(r#"shell-integration-features = "cursor:steady,ssh-env""#).unwrap();
    assert_eq!(
        wrapper.shell_integration_features,
        FeatureSet {
            cursor: Cursor::new(CursorShape::Bar, CursorStyle::Steady),
            ssh_env: true,
            ..FeatureSet::default()
        }
    );
}

#[test]
fn invalid_toml_value_is_an_error() {
    let result: Result<Wrapper, _> = toml::from_str(r#"shell-integration-features = "nope""#);
    let err = result.unwrap_err().to_string();
    assert!(err.contains("invalid shell integration feature 'nope'"), "{err}");
}

#[test]
fn toml_round_trip_keeps_disabled_fields() {
    for features in [
        FeatureSet::all(false),
        FeatureSet {
            title: false,
            ..FeatureSet::default()
        },
        FeatureSet {
            cursor: Cursor::new(CursorShape::Disabled, CursorStyle::Blink),
            path: false,
            sudo: true,
            ..FeatureSet::default()
        },
    ] {
        let wrapper = Wrapper {
            shell_integration_features: features,
        };
        let text = toml::to_string(&wrapper).unwrap();
        let reloaded: Wrapper = toml::from_str(&text).unwrap();
        assert_eq!(reloaded, wrapper, "{text}");
    }
}

#[test]
fn no_title_serializes_explicitly() {
    let wrapper = Wrapper {
        shell_integration_features: FeatureSet {
            title: false,
            ..FeatureSet::default()
        },
    };
    let text = toml::to_string(&wrapper).unwrap();
    assert_eq!(
        text.trim(),
        r#"shell-integration-features = "cursor:bar,path,no-title""#
    );
}

#[test]
fn serializes_as_config_string() {
    let wrapper = Wrapper {
        shell_integration_features: FeatureSet::all(true),
    };
    let text = toml::to_string(&wrapper).unwrap();
    assert_eq!(
        text.trim(),
        r#"shell-integration-features = "cursor:bar,path,ssh-env,ssh-terminfo,sudo,title""#
    );
}
