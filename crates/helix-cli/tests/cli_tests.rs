//! End-to-end tests for the `helix` binary.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Isolated sandbox: `work/` is the cwd, `overrides/` the override root,
/// `home/` stands in for the user's home and config dirs.
struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        for sub in ["work", "overrides", "home"] {
            fs::create_dir_all(dir.path().join(sub)).unwrap();
        }
        Self { dir }
    }

    fn work(&self) -> PathBuf {
        self.dir.path().join("work")
    }

    fn overrides(&self) -> PathBuf {
        self.dir.path().join("overrides")
    }

    fn home(&self) -> PathBuf {
        self.dir.path().join("home")
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("helix").unwrap();
        cmd.current_dir(self.work())
            .env_remove("RUST_LOG")
            .env("HOME", self.home())
            .env("XDG_CONFIG_HOME", self.home().join(".config"))
            .env("NO_COLOR", "1")
            .env("HELIX_TEMPLATES__OVERRIDE_DIR", self.overrides());
        cmd
    }

    fn override_template(&self, logical_path: &str, body: &str) {
        let path = self.overrides().join(logical_path);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, body).unwrap();
    }

    fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.work().join(rel)).unwrap()
    }

    fn exists(&self, rel: &str) -> bool {
        self.work().join(rel).exists()
    }
}

fn write_go_mod(dir: &Path, module: &str) {
    fs::write(dir.join("go.mod"), format!("module {module}\n\ngo 1.22\n")).unwrap();
}

// ── basics ────────────────────────────────────────────────────────────────────

#[test]
fn help_lists_subcommands() {
    Sandbox::new()
        .cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("templates"));
}

#[test]
fn version_flag() {
    Sandbox::new()
        .cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_driver_is_a_usage_error() {
    Sandbox::new()
        .cmd()
        .args(["init", "order", "--driver", "mysql"])
        .assert()
        .code(2);
}

#[test]
fn no_color_env_accepts_any_value() {
    for value in ["1", "yes", "true", ""] {
        Sandbox::new()
            .cmd()
            .env("NO_COLOR", value)
            .args(["templates", "path"])
            .assert()
            .success();
    }
}

#[test]
fn shell_completions() {
    Sandbox::new()
        .cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("helix"));
}

// ── init ──────────────────────────────────────────────────────────────────────

#[test]
fn init_creates_prefixed_project() {
    let sb = Sandbox::new();
    sb.cmd()
        .args(["init", "order"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created svc-order"));

    assert!(sb.read("svc-order/go.mod").starts_with("module github.com/godamri/svc-order\n"));
    assert!(sb.read("svc-order/go.mod").contains("entgo.io/ent"));
    assert_eq!(sb.read("svc-order/migrations/.keep"), "");
    assert!(sb.read("svc-order/internal/core/entity/order.go").contains("type Order struct"));
    assert!(sb.exists("svc-order/ent/schema/order.go"));
    assert!(sb.exists("svc-order/.github/workflows/ci.yml"));
    assert!(sb.read("svc-order/Makefile").contains("APP := svc-order"));
}

#[test]
fn init_with_pgx_sequentially() {
    let sb = Sandbox::new();
    sb.cmd()
        .env("HELIX_TEMPLATES__PARALLEL", "false")
        .args(["init", "svc-order-item", "--driver", "pgx"])
        .assert()
        .success();

    let go_mod = sb.read("svc-order-item/go.mod");
    assert!(go_mod.contains("github.com/jackc/pgx/v5"));
    assert!(!go_mod.contains("entgo.io"));
    assert!(sb.exists("svc-order-item/internal/core/entity/order_item.go"));
}

#[test]
fn init_keep_name_uses_name_verbatim() {
    let sb = Sandbox::new();
    sb.cmd()
        .args(["init", "billing", "--keep-name"])
        .assert()
        .success();
    assert!(sb.exists("billing/internal/core/entity/billing.go"));
    assert!(!sb.exists("svc-billing"));
}

#[test]
fn init_module_prefix_from_env() {
    let sb = Sandbox::new();
    sb.cmd()
        .env("HELIX_PROJECT__MODULE_PREFIX", "example.com/acme")
        .args(["init", "shop"])
        .assert()
        .success();
    assert!(sb.read("svc-shop/go.mod").starts_with("module example.com/acme/svc-shop\n"));
}

#[test]
fn init_rejects_reserved_entity() {
    let sb = Sandbox::new();
    sb.cmd()
        .args(["init", "ent"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("reserved"));
    assert!(!sb.exists("svc-ent"));
}

#[test]
fn init_rejects_invalid_name() {
    Sandbox::new()
        .cmd()
        .args(["init", "Order_Service"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid name"));
}

#[test]
fn init_refuses_existing_directory() {
    let sb = Sandbox::new();
    fs::create_dir_all(sb.work().join("svc-order")).unwrap();
    fs::write(sb.work().join("svc-order/notes.txt"), "mine").unwrap();

    sb.cmd()
        .args(["init", "order"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));
    assert_eq!(sb.read("svc-order/notes.txt"), "mine");
}

#[test]
fn init_uses_local_override() {
    let sb = Sandbox::new();
    sb.override_template(
        "templates/entity/entity.go.tmpl",
        "package entity\n\n// custom {{ entity_name }} for {{ project_name }}\n",
    );

    sb.cmd().args(["init", "order"]).assert().success();

    assert_eq!(
        sb.read("svc-order/internal/core/entity/order.go"),
        "package entity\n\n// custom Order for svc-order\n"
    );
    // everything else still comes from the bundled set
    assert!(sb.read("svc-order/internal/core/dto/v1/order.go").contains("github.com/godamri/svc-order"));
}

#[test]
fn broken_override_removes_partial_project() {
    let sb = Sandbox::new();
    sb.override_template("templates/Makefile", "APP := {{ no_such_field }}\n");

    sb.cmd()
        .args(["init", "order"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("templates/Makefile"));

    assert!(!sb.exists("svc-order"));
}

#[cfg(unix)]
#[test]
fn generated_files_are_world_readable() {
    use std::os::unix::fs::PermissionsExt;

    let sb = Sandbox::new();
    sb.cmd().args(["init", "order"]).assert().success();

    for rel in [
        "svc-order/Makefile",
        "svc-order/go.mod",
        "svc-order/migrations/.keep",
        "svc-order/cmd/server/main.go",
    ] {
        let mode = fs::metadata(sb.work().join(rel)).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644, "{rel}");
    }
}

#[test]
fn quiet_init_prints_nothing() {
    let sb = Sandbox::new();
    sb.cmd()
        .args(["--quiet", "init", "order"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    assert!(sb.exists("svc-order/go.mod"));
}

// ── new ───────────────────────────────────────────────────────────────────────

#[test]
fn new_entity_reads_module_from_go_mod() {
    let sb = Sandbox::new();
    write_go_mod(&sb.work(), "example.com/acme/svc-shop");

    sb.cmd()
        .args(["new", "entity", "order-item", "--driver", "pgx"])
        .assert()
        .success()
        .stdout(predicate::str::contains("NewOrderItemRepository(stdMainDB)"))
        .stdout(predicate::str::contains("/v1/orderItems"));

    assert!(sb.read("internal/core/entity/order_item.go").contains("type OrderItem struct"));
    assert!(sb.read("internal/core/dto/v1/order_item.go").contains("example.com/acme/svc-shop/internal/core/entity"));
    assert!(sb.exists("internal/adapter/handler/v1/order_item_handler.go"));
}

#[test]
fn new_entity_without_go_mod_uses_fallback_module() {
    let sb = Sandbox::new();
    sb.cmd().args(["new", "entity", "order"]).assert().success();
    assert!(sb.read("internal/core/dto/v1/order.go").contains("github.com/godamri/unknown"));
}

#[test]
fn new_entity_refuses_to_overwrite() {
    let sb = Sandbox::new();
    write_go_mod(&sb.work(), "example.com/shop");
    sb.cmd().args(["new", "entity", "order"]).assert().success();

    fs::write(sb.work().join("internal/core/entity/order.go"), "// edited\n").unwrap();
    sb.cmd()
        .args(["new", "entity", "order"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("overwrite"));
    assert_eq!(sb.read("internal/core/entity/order.go"), "// edited\n");
}

#[test]
fn failed_new_entity_removes_its_files() {
    let sb = Sandbox::new();
    sb.override_template("templates/entity/ent_schema.go.tmpl", "{% if %}\n");

    sb.cmd().args(["new", "entity", "order"]).assert().failure();

    assert!(!sb.exists("internal/core/entity/order.go"));
    assert!(!sb.exists("ent/schema/order.go"));
    // directories created by the failed run go too
    assert!(!sb.exists("internal"));
    assert!(!sb.exists("ent"));
}

#[test]
fn failed_new_entity_keeps_existing_directories() {
    let sb = Sandbox::new();
    fs::create_dir_all(sb.work().join("internal/core")).unwrap();
    fs::write(sb.work().join("internal/core/notes.md"), "mine").unwrap();
    sb.override_template("templates/entity/ent_schema.go.tmpl", "{% if %}\n");

    sb.cmd().args(["new", "entity", "order"]).assert().failure();

    assert_eq!(sb.read("internal/core/notes.md"), "mine");
    assert!(!sb.exists("internal/core/entity"));
    assert!(!sb.exists("internal/adapter"));
}

#[test]
fn new_cache_and_consumer() {
    let sb = Sandbox::new();
    write_go_mod(&sb.work(), "example.com/shop");

    sb.cmd().args(["new", "cache", "user-profile"]).assert().success();
    sb.cmd()
        .args(["new", "consumer", "user-created", "user.events.created"])
        .assert()
        .success();

    assert!(sb.read("internal/adapter/cache/user_profile_cache.go").contains("UserProfileCache"));
    assert!(sb.read("internal/adapter/worker/consumer_user_created.go").contains("\"user.events.created\""));
}

// ── templates ─────────────────────────────────────────────────────────────────

#[test]
fn templates_list_marks_overrides() {
    let sb = Sandbox::new();
    sb.override_template("templates/Makefile", "custom\n");

    sb.cmd()
        .args(["templates", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("* templates/Makefile (overridden)"))
        .stdout(predicate::str::contains("  templates/entity/entity.go.tmpl"));
}

#[test]
fn templates_list_with_prefix() {
    Sandbox::new()
        .cmd()
        .args(["templates", "list", "--prefix", "templates/entity"])
        .assert()
        .success()
        .stdout(predicate::str::contains("templates/entity/dto.go.tmpl"))
        .stdout(predicate::str::contains("Makefile").not());
}

#[test]
fn templates_show_prints_bundled_body() {
    Sandbox::new()
        .cmd()
        .args(["templates", "show", "templates/app/go.mod.tmpl"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("module {{ module_path }}"));
}

#[test]
fn templates_show_prefers_override() {
    let sb = Sandbox::new();
    sb.override_template("templates/Makefile", "APP := custom\n");

    sb.cmd()
        .args(["--quiet", "templates", "show", "templates/Makefile"])
        .assert()
        .success()
        .stdout("APP := custom\n");
}

#[test]
fn templates_show_unknown_path_is_not_found() {
    Sandbox::new()
        .cmd()
        .args(["templates", "show", "templates/nope.tmpl"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("templates/nope.tmpl"));
}

#[test]
fn templates_path_prints_override_root() {
    let sb = Sandbox::new();
    sb.cmd()
        .args(["templates", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(sb.overrides().display().to_string()));
}

// ── config ────────────────────────────────────────────────────────────────────

#[test]
fn config_show_prints_effective_toml() {
    Sandbox::new()
        .cmd()
        .env("HELIX_PROJECT__DEFAULT_DRIVER", "pgx")
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[project]"))
        .stdout(predicate::str::contains("default_driver = \"pgx\""));
}

#[test]
fn explicit_config_file_is_used() {
    let sb = Sandbox::new();
    let path = sb.home().join("helix.toml");
    fs::write(&path, "[project]\nmodule_prefix = \"git.example.org/team\"\n").unwrap();

    sb.cmd()
        .arg("--config")
        .arg(&path)
        .args(["init", "order"])
        .assert()
        .success();
    assert!(sb.read("svc-order/go.mod").starts_with("module git.example.org/team/svc-order\n"));
}

#[test]
fn invalid_config_exits_with_four() {
    let sb = Sandbox::new();
    let path = sb.home().join("helix.toml");
    fs::write(&path, "[project]\ndefault_driver = \"mysql\"\n").unwrap();

    sb.cmd()
        .arg("--config")
        .arg(&path)
        .args(["config", "show"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("default_driver"));
}

#[cfg(target_os = "linux")]
#[test]
fn config_init_writes_default_file() {
    let sb = Sandbox::new();
    sb.cmd()
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration created"));

    let written = sb.home().join(".config/helix/config.toml");
    assert!(fs::read_to_string(&written).unwrap().contains("module_prefix"));

    sb.cmd()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(written.display().to_string()));

    sb.cmd()
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}
