//! Bundled templates, embedded at compile time.

use std::collections::BTreeMap;

use helix_core::{
    application::{ApplicationError, ports::TemplateSource},
    domain::LogicalPath,
    error::HelixResult,
};

macro_rules! bundled {
    ($($path:literal),* $(,)?) => {
        &[$(
            (
                concat!("templates/", $path),
                include_str!(concat!("../../templates/", $path)),
            )
        ),*]
    };
}

/// `(logical path, content)` for every file shipped with Helix.
pub static BUNDLED_TEMPLATES: &[(&str, &str)] = bundled![
    ".env",
    ".github/workflows/ci.yml",
    "Dockerfile.tmpl",
    "Makefile",
    "app/cmd/server/main.go.tmpl",
    "app/go.mod.tmpl",
    "app/internal/pkg/config/config.go.tmpl",
    "app/migrations/.keep",
    "cache/cache.go.tmpl",
    "consumer/consumer.go.tmpl",
    "docker-compose.yml",
    "entity/dto.go.tmpl",
    "entity/ent_schema.go.tmpl",
    "entity/entity.go.tmpl",
    "entity/handler_impl.go.tmpl",
    "entity/port_repository.go.tmpl",
    "entity/port_service.go.tmpl",
    "entity/repo_impl.go.tmpl",
    "entity/service_impl.go.tmpl",
];

/// Read-only source over a static table.
#[derive(Debug, Clone)]
pub struct EmbeddedTemplateSource {
    files: BTreeMap<&'static str, &'static str>,
}

impl EmbeddedTemplateSource {
    /// The set shipped with this binary.
    pub fn new() -> Self {
        Self::from_static(BUNDLED_TEMPLATES)
    }

    /// Any static table; used by tests to stand in for the bundled set.
    pub fn from_static(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self {
            files: entries.iter().copied().collect(),
        }
    }

    pub fn contains(&self, path: &LogicalPath) -> bool {
        self.files.contains_key(path.as_str())
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl Default for EmbeddedTemplateSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateSource for EmbeddedTemplateSource {
    fn read(&self, path: &LogicalPath) -> HelixResult<Vec<u8>> {
        self.files
            .get(path.as_str())
            .map(|content| content.as_bytes().to_vec())
            .ok_or_else(|| {
                ApplicationError::TemplateNotFound {
                    logical_path: path.to_string(),
                }
                .into()
            })
    }

    fn walk(
        &self,
        root: &str,
        visit: &mut dyn FnMut(&LogicalPath) -> HelixResult<()>,
    ) -> HelixResult<()> {
        for raw in self.files.keys() {
            let path = LogicalPath::parse(*raw)?;
            if path.is_under(root) {
                visit(&path)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use helix_core::error::HelixError;

    fn collect(source: &EmbeddedTemplateSource, root: &str) -> Vec<String> {
        let mut out = Vec::new();
        source
            .walk(root, &mut |p| {
                out.push(p.to_string());
                Ok(())
            })
            .unwrap();
        out
    }

    #[test]
    fn every_bundled_path_is_a_valid_logical_path() {
        for (path, _) in BUNDLED_TEMPLATES {
            assert!(LogicalPath::parse(*path).is_ok(), "{path}");
        }
    }

    #[test]
    fn bundled_set_has_project_and_entity_templates() {
        let source = EmbeddedTemplateSource::new();
        let lp = |s: &str| LogicalPath::parse(s).unwrap();
        assert!(source.contains(&lp("templates/app/go.mod.tmpl")));
        assert!(source.contains(&lp("templates/entity/entity.go.tmpl")));
        assert!(source.contains(&lp("templates/app/migrations/.keep")));
    }

    #[test]
    fn walk_is_sorted_and_scoped() {
        let source = EmbeddedTemplateSource::new();
        let entity = collect(&source, "templates/entity");

        assert_eq!(entity.len(), 8);
        assert!(entity.iter().all(|p| p.starts_with("templates/entity/")));
        let mut sorted = entity.clone();
        sorted.sort();
        assert_eq!(entity, sorted);

        assert_eq!(collect(&source, "templates").len(), source.len());
        assert!(collect(&source, "templates/nope").is_empty());
    }

    #[test]
    fn walk_stops_on_visitor_error() {
        let source = EmbeddedTemplateSource::new();
        let mut seen = 0;
        let result = source.walk("templates", &mut |_| {
            seen += 1;
            Err(HelixError::Internal {
                message: "stop".into(),
            })
        });
        assert!(result.is_err());
        assert_eq!(seen, 1);
    }

    #[test]
    fn read_missing_names_the_path() {
        let source = EmbeddedTemplateSource::from_static(&[]);
        let err = source
            .read(&LogicalPath::parse("templates/y.tmpl").unwrap())
            .unwrap_err();
        assert!(err.to_string().contains("templates/y.tmpl"));
    }
}
