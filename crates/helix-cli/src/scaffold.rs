//! Generation plans and the caller-side rules around them.
//!
//! Each command maps bundled logical paths to destinations under a root
//! directory. Destinations within one plan are pairwise distinct.

use std::{
    fs,
    path::{Path, PathBuf},
};

use helix_core::domain::{GenerationPlan, NamingVariants, PortAllocation};
use helix_core::error::HelixResult;
use rand::Rng;

use crate::error::{CliError, CliResult};

pub const SERVICE_PREFIX: &str = "svc-";

/// Entity names that collide with generated package or directory names.
pub const RESERVED_NAMES: [&str; 6] = ["ent", "entity", "internal", "pkg", "app", "go"];

pub const FALLBACK_MODULE_PATH: &str = "github.com/godamri/unknown";

/// `order` → `svc-order`; names already carrying the prefix, or `keep_name`,
/// pass through untouched.
pub fn service_name(raw: &str, keep_name: bool) -> String {
    if keep_name || raw.starts_with(SERVICE_PREFIX) {
        raw.to_owned()
    } else {
        format!("{SERVICE_PREFIX}{raw}")
    }
}

/// Lower-case kebab identifiers starting with a letter.
pub fn validate_name(name: &str) -> CliResult<()> {
    let invalid = |reason: &str| {
        Err(CliError::InvalidName {
            name: name.to_owned(),
            reason: reason.to_owned(),
        })
    };

    let Some(first) = name.chars().next() else {
        return invalid("name is empty");
    };
    if !first.is_ascii_lowercase() {
        return invalid("must start with a lower-case letter");
    }
    if let Some(c) = name
        .chars()
        .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-'))
    {
        return invalid(&format!("unexpected character '{c}'"));
    }
    if name.ends_with('-') || name.contains("--") {
        return invalid("hyphens must separate words");
    }
    Ok(())
}

pub fn check_reserved(entity: &str) -> CliResult<()> {
    if RESERVED_NAMES.contains(&entity) {
        return Err(CliError::ReservedName {
            name: entity.to_owned(),
        });
    }
    Ok(())
}

/// Draw fresh ports: app/grpc from 30000..40000, db from 40000..50000,
/// dev db from 50000..60000.
pub fn allocate_ports<R: Rng>(rng: &mut R) -> PortAllocation {
    PortAllocation {
        app_port: rng.gen_range(30000..40000),
        grpc_port: rng.gen_range(30000..40000),
        db_port: rng.gen_range(40000..50000),
        db_dev_port: rng.gen_range(50000..60000),
    }
}

/// The `module` line of `<dir>/go.mod`, or [`FALLBACK_MODULE_PATH`].
pub fn read_module_path(dir: &Path) -> String {
    fs::read_to_string(dir.join("go.mod"))
        .ok()
        .and_then(|content| {
            content.lines().find_map(|line| {
                line.strip_prefix("module ")
                    .and_then(|rest| rest.split_whitespace().next())
                    .map(str::to_owned)
            })
        })
        .unwrap_or_else(|| FALLBACK_MODULE_PATH.to_owned())
}

/// Entity files, relative to a project root. Shared by `init` and `new entity`.
fn entity_entries(root: &Path, file: &str) -> [(&'static str, PathBuf); 8] {
    let internal = root.join("internal");
    [
        (
            "templates/entity/entity.go.tmpl",
            internal.join("core").join("entity").join(format!("{file}.go")),
        ),
        (
            "templates/entity/dto.go.tmpl",
            internal.join("core").join("dto").join("v1").join(format!("{file}.go")),
        ),
        (
            "templates/entity/port_service.go.tmpl",
            internal.join("core").join("port").join(format!("{file}_service.go")),
        ),
        (
            "templates/entity/port_repository.go.tmpl",
            internal.join("core").join("port").join(format!("{file}_repository.go")),
        ),
        (
            "templates/entity/service_impl.go.tmpl",
            internal.join("core").join("service").join(format!("{file}_service.go")),
        ),
        (
            "templates/entity/repo_impl.go.tmpl",
            internal.join("adapter").join("repository").join(format!("{file}_repository.go")),
        ),
        (
            "templates/entity/handler_impl.go.tmpl",
            internal
                .join("adapter")
                .join("handler")
                .join("v1")
                .join(format!("{file}_handler.go")),
        ),
        (
            "templates/entity/ent_schema.go.tmpl",
            root.join("ent").join("schema").join(format!("{file}.go")),
        ),
    ]
}

/// Full service skeleton plus its first entity.
pub fn project_plan(root: &Path, names: &NamingVariants) -> HelixResult<GenerationPlan> {
    let mut plan = GenerationPlan::new();

    plan.insert("templates/Makefile", root.join("Makefile"))?
        .insert("templates/Dockerfile.tmpl", root.join("Dockerfile"))?
        .insert("templates/.env", root.join(".env"))?
        .insert("templates/docker-compose.yml", root.join("docker-compose.yml"))?
        .insert(
            "templates/.github/workflows/ci.yml",
            root.join(".github").join("workflows").join("ci.yml"),
        )?
        .insert("templates/app/go.mod.tmpl", root.join("go.mod"))?
        .insert(
            "templates/app/cmd/server/main.go.tmpl",
            root.join("cmd").join("server").join("main.go"),
        )?
        .insert(
            "templates/app/internal/pkg/config/config.go.tmpl",
            root.join("internal").join("pkg").join("config").join("config.go"),
        )?
        .insert(
            "templates/app/migrations/.keep",
            root.join("migrations").join(".keep"),
        )?;

    for (source, dest) in entity_entries(root, names.file_safe()) {
        plan.insert(source, dest)?;
    }
    Ok(plan)
}

pub fn entity_plan(root: &Path, names: &NamingVariants) -> HelixResult<GenerationPlan> {
    let mut plan = GenerationPlan::new();
    for (source, dest) in entity_entries(root, names.file_safe()) {
        plan.insert(source, dest)?;
    }
    Ok(plan)
}

pub fn cache_plan(root: &Path, names: &NamingVariants) -> HelixResult<GenerationPlan> {
    let file = format!("{}_cache.go", names.file_safe().to_lowercase());
    Ok(GenerationPlan::new().with(
        "templates/cache/cache.go.tmpl",
        root.join("internal").join("adapter").join("cache").join(file),
    )?)
}

pub fn consumer_plan(root: &Path, names: &NamingVariants) -> HelixResult<GenerationPlan> {
    let file = format!("consumer_{}.go", names.file_safe().to_lowercase());
    Ok(GenerationPlan::new().with(
        "templates/consumer/consumer.go.tmpl",
        root.join("internal").join("adapter").join("worker").join(file),
    )?)
}

/// Go snippet for wiring a freshly generated entity into `main.go`.
pub fn wiring_instructions(names: &NamingVariants, ent_driver: bool) -> String {
    let name = names.pascal();
    let camel = names.camel();
    let db = if ent_driver { "entClient" } else { "stdMainDB" };
    format!(
        "// Imports\n\
         import handlerV1 \".../internal/adapter/handler/v1\"\n\
         \n\
         // Repository\n\
         repo{name} := repository.New{name}Repository({db})\n\
         svc{name} := service.New{name}Service(repo{name})\n\
         \n\
         // Handler (V1)\n\
         h{name}V1 := handlerV1.New{name}Handler(svc{name})\n\
         r.Route(\"/v1/{camel}s\", func(r chi.Router) {{\n\
         \tr.Post(\"/\", h{name}V1.Create)\n\
         \tr.Get(\"/{{id}}\", h{name}V1.GetByID)\n\
         }})\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use helix_adapters::EmbeddedTemplateSource;
    use helix_core::domain::LogicalPath;
    use rand::{SeedableRng, rngs::StdRng};
    use std::collections::HashSet;
    use tempfile::TempDir;

    #[test]
    fn service_prefix_is_added_once() {
        assert_eq!(service_name("order", false), "svc-order");
        assert_eq!(service_name("svc-order", false), "svc-order");
        assert_eq!(service_name("billing", true), "billing");
    }

    #[test]
    fn name_validation() {
        assert!(validate_name("order-item").is_ok());
        assert!(validate_name("v2-orders").is_ok());
        for bad in ["", "Order", "1order", "order_item", "order-", "a--b", "ord er"] {
            assert!(
                matches!(validate_name(bad), Err(CliError::InvalidName { .. })),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn reserved_names_are_rejected() {
        for name in RESERVED_NAMES {
            assert!(matches!(
                check_reserved(name),
                Err(CliError::ReservedName { .. })
            ));
        }
        assert!(check_reserved("order").is_ok());
    }

    #[test]
    fn ports_stay_in_their_bands() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let p = allocate_ports(&mut rng);
            assert!((30000..40000).contains(&p.app_port));
            assert!((30000..40000).contains(&p.grpc_port));
            assert!((40000..50000).contains(&p.db_port));
            assert!((50000..60000).contains(&p.db_dev_port));
        }
    }

    #[test]
    fn module_path_from_go_mod() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("go.mod"),
            "// comment\nmodule github.com/acme/svc-orders\n\ngo 1.22\n",
        )
        .unwrap();
        assert_eq!(read_module_path(dir.path()), "github.com/acme/svc-orders");
    }

    #[test]
    fn module_path_falls_back_without_go_mod() {
        let dir = TempDir::new().unwrap();
        assert_eq!(read_module_path(dir.path()), FALLBACK_MODULE_PATH);
    }

    #[test]
    fn project_plan_uses_file_safe_entity_names() {
        let names = NamingVariants::derive("order-item");
        let plan = project_plan(Path::new("svc-order-item"), &names).unwrap();

        assert_eq!(plan.len(), 17);
        let dests: HashSet<_> = plan.destinations().collect();
        assert!(dests.contains(Path::new("svc-order-item/internal/core/entity/order_item.go")));
        assert!(dests.contains(Path::new("svc-order-item/ent/schema/order_item.go")));
        assert!(dests.contains(Path::new("svc-order-item/migrations/.keep")));
    }

    #[test]
    fn every_plan_source_is_bundled() {
        let bundled = EmbeddedTemplateSource::new();
        let names = NamingVariants::derive("user-created");
        let root = Path::new(".");
        let plans = [
            project_plan(root, &names).unwrap(),
            entity_plan(root, &names).unwrap(),
            cache_plan(root, &names).unwrap(),
            consumer_plan(root, &names).unwrap(),
        ];

        for plan in &plans {
            for entry in plan {
                assert!(bundled.contains(&entry.source), "{}", entry.source);
            }
        }
    }

    #[test]
    fn destinations_are_pairwise_distinct() {
        let plan = project_plan(Path::new("svc-x"), &NamingVariants::derive("x")).unwrap();
        let unique: HashSet<_> = plan.destinations().collect();
        assert_eq!(unique.len(), plan.len());
    }

    #[test]
    fn cache_and_consumer_file_names_are_lower_snake() {
        let names = NamingVariants::derive("User-Created");
        let cache = cache_plan(Path::new("r"), &names).unwrap();
        let consumer = consumer_plan(Path::new("r"), &names).unwrap();

        assert_eq!(
            cache.destinations().next().unwrap(),
            Path::new("r/internal/adapter/cache/user_created_cache.go")
        );
        assert_eq!(
            consumer.destinations().next().unwrap(),
            Path::new("r/internal/adapter/worker/consumer_user_created.go")
        );
        let source = consumer.entries().next().unwrap().source;
        assert_eq!(source, LogicalPath::parse("templates/consumer/consumer.go.tmpl").unwrap());
    }

    #[test]
    fn wiring_mentions_driver_specific_client() {
        let names = NamingVariants::derive("order-item");
        let ent = wiring_instructions(&names, true);
        assert!(ent.contains("repository.NewOrderItemRepository(entClient)"));
        assert!(ent.contains("\"/v1/orderItems\""));
        assert!(ent.contains("\"/{id}\""));
        assert!(wiring_instructions(&names, false).contains("(stdMainDB)"));
    }
}
