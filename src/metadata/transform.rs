//! Flatten per-operation permission lists into one permission map per table.

use crate::config::{Permission, TableConfig};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionKind {
    Select,
    Insert,
    Update,
    Delete,
}

impl PermissionKind {
    pub const ALL: [PermissionKind; 4] = [
        PermissionKind::Select,
        PermissionKind::Insert,
        PermissionKind::Update,
        PermissionKind::Delete,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PermissionKind::Select => "select",
            PermissionKind::Insert => "insert",
            PermissionKind::Update => "update",
            PermissionKind::Delete => "delete",
        }
    }

    /// The descriptor's list for this operation, if the descriptor carries one.
    fn rules(self, table: &TableConfig) -> Option<&Vec<Permission>> {
        match self {
            PermissionKind::Select => table.select_permissions.as_ref(),
            PermissionKind::Insert => table.insert_permissions.as_ref(),
            PermissionKind::Update => table.update_permissions.as_ref(),
            PermissionKind::Delete => table.delete_permissions.as_ref(),
        }
    }
}

/// Simplified table descriptor: schema, name, and permissions keyed by operation.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TransformedTable {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub permissions: BTreeMap<PermissionKind, Vec<Permission>>,
}

/// Transform table descriptors, preserving order. Only the permission lists present on a descriptor
/// become keys; everything else on the descriptor is dropped.
pub fn transform(tables: &[TableConfig]) -> Vec<TransformedTable> {
    tables.iter().map(transform_table).collect()
}

pub fn transform_table(table: &TableConfig) -> TransformedTable {
    let (schema, name) = match &table.table {
        Some(t) => (t.schema.clone(), t.name.clone()),
        None => (None, None),
    };
    TransformedTable {
        schema,
        name,
        permissions: transform_permissions(table),
    }
}

pub fn transform_permissions(table: &TableConfig) -> BTreeMap<PermissionKind, Vec<Permission>> {
    PermissionKind::ALL
        .into_iter()
        .filter_map(|kind| kind.rules(table).map(|rules| (kind, rules.clone())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PermissionColumns, PermissionRule, TableReference};
    use serde_json::json;

    fn rule(role: &str) -> Permission {
        Permission {
            role: role.to_string(),
            permission: PermissionRule {
                columns: PermissionColumns::List(vec!["id".into(), "title".into()]),
                filter: serde_json::Map::new(),
                check: None,
                extra: serde_json::Map::new(),
            },
            extra: serde_json::Map::new(),
        }
    }

    fn table(name: &str) -> TableConfig {
        TableConfig {
            table: Some(TableReference {
                schema: Some("public".into()),
                name: Some(name.into()),
            }),
            ..TableConfig::default()
        }
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert!(transform(&[]).is_empty());
    }

    #[test]
    fn keys_match_present_lists_for_every_subset() {
        for mask in 1u8..16 {
            let mut t = table("articles");
            if mask & 1 != 0 {
                t.select_permissions = Some(vec![rule("user")]);
            }
            if mask & 2 != 0 {
                t.insert_permissions = Some(vec![rule("user")]);
            }
            if mask & 4 != 0 {
                t.update_permissions = Some(vec![rule("editor")]);
            }
            if mask & 8 != 0 {
                t.delete_permissions = Some(vec![rule("admin")]);
            }
            let out = transform_table(&t);
            let expected: Vec<PermissionKind> = PermissionKind::ALL
                .into_iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, k)| k)
                .collect();
            let keys: Vec<PermissionKind> = out.permissions.keys().copied().collect();
            assert_eq!(keys, expected, "mask {mask:#06b}");
        }
    }

    #[test]
    fn preserves_order_and_rules() {
        let mut users = table("users");
        users.select_permissions = Some(vec![rule("user"), rule("admin")]);
        let out = transform(&[table("a"), users.clone(), table("c")]);
        let names: Vec<_> = out.iter().map(|t| t.name.as_deref().unwrap()).collect();
        assert_eq!(names, ["a", "users", "c"]);
        assert_eq!(out[1].permissions[&PermissionKind::Select], users.select_permissions.unwrap());
    }

    #[test]
    fn missing_table_reference_yields_absent_names() {
        let out = transform_table(&TableConfig::default());
        assert_eq!(out.schema, None);
        assert_eq!(out.name, None);
        assert!(out.permissions.is_empty());
        assert_eq!(serde_json::to_value(&out).unwrap(), json!({ "permissions": {} }));
    }

    #[test]
    fn serializes_with_lowercase_operation_keys() {
        let mut t = table("posts");
        t.delete_permissions = Some(vec![rule("admin")]);
        t.select_permissions = Some(vec![]);
        let value = serde_json::to_value(transform_table(&t)).unwrap();
        assert_eq!(value["schema"], "public");
        assert_eq!(value["name"], "posts");
        let keys: Vec<&String> = value["permissions"].as_object().unwrap().keys().collect();
        assert_eq!(keys, ["delete", "select"]);
        assert_eq!(value["permissions"]["delete"][0]["role"], "admin");
    }
}
