//! Named fields of [`FeatureSet`].
//!
//! Both the parser and the formatter walk this table instead of naming struct
//! fields directly, so adding a flag only means adding a row here.

use crate::features::FeatureSet;

/// How a field is read and written.
#[derive(Clone, Copy)]
pub enum FieldKind {
    /// A plain on/off flag, spelled `<name>` or `no-<name>`.
    Flag {
        get: fn(&FeatureSet) -> bool,
        set: fn(&mut FeatureSet, bool),
    },
    /// The composite cursor field, which has its own token syntax.
    Cursor,
}

/// One named field of a [`FeatureSet`].
#[derive(Clone, Copy)]
pub struct Field {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl Field {
    /// Whether the field shows up in rendered output.
    pub fn is_enabled(&self, features: &FeatureSet) -> bool {
        match self.kind {
            FieldKind::Flag { get, .. } => get(features),
            FieldKind::Cursor => features.cursor.is_enabled(),
        }
    }
}

impl std::fmt::Debug for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field").field("name", &self.name).finish()
    }
}

macro_rules! flag_field {
    ($name:literal, $field:ident) => {
        Field {
            name: $name,
            kind: FieldKind::Flag {
                get: |features: &FeatureSet| features.$field,
                set: |features: &mut FeatureSet, enabled: bool| features.$field = enabled,
            },
        }
    };
}

const CURSOR: Field = Field {
    name: "cursor",
    kind: FieldKind::Cursor,
};
const SUDO: Field = flag_field!("sudo", sudo);
const TITLE: Field = flag_field!("title", title);
const SSH_ENV: Field = flag_field!("ssh-env", ssh_env);
const SSH_TERMINFO: Field = flag_field!("ssh-terminfo", ssh_terminfo);
const PATH: Field = flag_field!("path", path);

/// Fields in declaration order.
pub static FIELDS: [Field; 6] = [CURSOR, SUDO, TITLE, SSH_ENV, SSH_TERMINFO, PATH];

/// Fields sorted case-insensitively by name. This is the rendering order and
/// consumers of the rendered string rely on it.
pub static SORTED_FIELDS: [Field; 6] = [CURSOR, PATH, SSH_ENV, SSH_TERMINFO, SUDO, TITLE];

/// Look up a boolean flag by its exact (case-sensitive) name.
pub fn flag_by_name(name: &str) -> Option<&'static Field> {
    FIELDS
        .iter()
        .find(|field| matches!(field.kind, FieldKind::Flag { .. }) && field.name == name)
}

/// Names of every boolean flag, in declaration order.
pub fn flag_names() -> impl Iterator<Item = &'static str> {
    FIELDS
        .iter()
        .filter(|field| matches!(field.kind, FieldKind::Flag { .. }))
        .map(|field| field.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn names(fields: &[Field]) -> Vec<&'static str> {
        fields.iter().map(|field| field.name).collect()
    }

    #[test]
    fn sorted_fields_are_case_insensitive_alphabetical() {
        let mut expected = names(&FIELDS);
        expected.sort_by_key(|name| name.to_lowercase());
        assert_eq!(names(&SORTED_FIELDS), expected);
    }

    #[test]
    fn field_names_are_unique() {
        let mut all = names(&FIELDS);
        all.sort_unstable();
        all.dedup();
        assert_eq!(all.len(), FIELDS.len());
    }

    #[test]
    fn flag_names_exclude_cursor() {
        let flags: Vec<_> = flag_names().collect();
        assert_eq!(flags, vec!["sudo", "title", "ssh-env", "ssh-terminfo", "path"]);
    }

    #[test]
    fn flag_lookup_is_exact() {
        assert!(flag_by_name("ssh-env").is_some());
        assert!(flag_by_name("cursor").is_none());
        assert!(flag_by_name("Path").is_none());
        assert!(flag_by_name("ssh").is_none());
    }

    #[test]
    fn flag_accessors_target_their_own_field() {
        for field in &FIELDS {
            let FieldKind::Flag { get, set } = field.kind else {
                continue;
            };
            for enabled in [true, false] {
                let mut features = FeatureSet::default();
                set(&mut features, enabled);
                assert!(get(&features) == enabled, "{}", field.name);

                let others_changed = FIELDS
                    .iter()
                    .filter(|other| other.name != field.name)
                    .any(|other| {
                        other.is_enabled(&features) != other.is_enabled(&FeatureSet::default())
                    });
                assert!(!others_changed, "setting {} touched another field", field.name);
            }
        }
    }
}
