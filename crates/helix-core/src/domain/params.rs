//! The parameter record every template in a generation pass renders against.
//!
//! A [`ParameterRecord`] is built once per command invocation and then only
//! ever read. The generator holds it behind an `Arc`, so parallel workers
//! all see the same snapshot.

use std::{collections::BTreeMap, fmt, str::FromStr};

use serde::Serialize;

use super::{DomainError, NamingVariants};

/// Persistence driver selected for generated repositories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Driver {
    /// Type-safe ORM.
    #[default]
    Ent,
    /// Raw SQL.
    Pgx,
}

impl Driver {
    pub const ALL: [Driver; 2] = [Driver::Ent, Driver::Pgx];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ent => "ent",
            Self::Pgx => "pgx",
        }
    }
}

impl fmt::Display for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Driver {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ent" => Ok(Self::Ent),
            "pgx" => Ok(Self::Pgx),
            other => Err(DomainError::UnknownDriver {
                value: other.to_owned(),
            }),
        }
    }
}

/// Network ports baked into generated config files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct PortAllocation {
    pub app_port: u16,
    pub grpc_port: u16,
    pub db_port: u16,
    pub db_dev_port: u16,
}

/// Values exposed to template bodies.
///
/// Serialises flat: `{{ entity_name }}`, `{{ app_port }}`, `{{ driver }}`
/// and any `extra` key all live in the top-level template namespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterRecord {
    project_name: String,
    module_path: String,
    #[serde(flatten)]
    ports: PortAllocation,
    /// Pascal form.
    entity_name: String,
    entity_name_camel: String,
    entity_name_lower: String,
    entity_plural_lower: String,
    entity_file_name: String,
    driver: Driver,
    #[serde(flatten)]
    extra: BTreeMap<String, String>,
}

impl ParameterRecord {
    pub fn builder() -> ParameterRecordBuilder {
        ParameterRecordBuilder::default()
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn module_path(&self) -> &str {
        &self.module_path
    }

    pub fn ports(&self) -> PortAllocation {
        self.ports
    }

    pub fn entity_name(&self) -> &str {
        &self.entity_name
    }

    pub fn entity_name_camel(&self) -> &str {
        &self.entity_name_camel
    }

    pub fn entity_name_lower(&self) -> &str {
        &self.entity_name_lower
    }

    pub fn entity_plural_lower(&self) -> &str {
        &self.entity_plural_lower
    }

    pub fn entity_file_name(&self) -> &str {
        &self.entity_file_name
    }

    pub fn driver(&self) -> Driver {
        self.driver
    }

    pub fn extra(&self, key: &str) -> Option<&str> {
        self.extra.get(key).map(String::as_str)
    }
}

/// Names serialised by [`ParameterRecord`] itself.
pub const BUILTIN_FIELDS: [&str; 12] = [
    "project_name",
    "module_path",
    "app_port",
    "grpc_port",
    "db_port",
    "db_dev_port",
    "entity_name",
    "entity_name_camel",
    "entity_name_lower",
    "entity_plural_lower",
    "entity_file_name",
    "driver",
];

/// Builder for [`ParameterRecord`].
///
/// `module_path` and `entity` are required; everything else has a zero
/// value, matching what a template sees when a command has no use for it
/// (e.g. `new entity` knows no ports).
#[derive(Debug, Default)]
pub struct ParameterRecordBuilder {
    project_name: Option<String>,
    module_path: Option<String>,
    ports: PortAllocation,
    entity: Option<NamingVariants>,
    driver: Driver,
    extra: BTreeMap<String, String>,
}

impl ParameterRecordBuilder {
    pub fn project_name(mut self, name: impl Into<String>) -> Self {
        self.project_name = Some(name.into());
        self
    }

    pub fn module_path(mut self, path: impl Into<String>) -> Self {
        self.module_path = Some(path.into());
        self
    }

    pub fn ports(mut self, ports: PortAllocation) -> Self {
        self.ports = ports;
        self
    }

    pub fn entity(mut self, names: NamingVariants) -> Self {
        self.entity = Some(names);
        self
    }

    pub fn driver(mut self, driver: Driver) -> Self {
        self.driver = driver;
        self
    }

    /// Add a command-specific value such as a consumer's `topic`.
    ///
    /// Keys must not shadow a built-in field; [`build`](Self::build)
    /// rejects them.
    pub fn extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> Result<ParameterRecord, DomainError> {
        let module_path = self
            .module_path
            .ok_or(DomainError::MissingParameter { field: "module_path" })?;
        let entity = self
            .entity
            .ok_or(DomainError::MissingParameter { field: "entity" })?;
        if let Some(key) = self.extra.keys().find(|k| BUILTIN_FIELDS.contains(&k.as_str())) {
            return Err(DomainError::ReservedParameter { key: key.clone() });
        }

        Ok(ParameterRecord {
            project_name: self.project_name.unwrap_or_default(),
            module_path,
            ports: self.ports,
            entity_name: entity.pascal().to_owned(),
            entity_name_camel: entity.camel().to_owned(),
            entity_name_lower: entity.flat_lower().to_owned(),
            entity_plural_lower: entity.plural_lower().to_owned(),
            entity_file_name: entity.file_safe().to_owned(),
            driver: self.driver,
            extra: self.extra,
        })
    }
}
