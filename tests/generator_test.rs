use modulegen::constants::TEMPLATES;
use modulegen::error::Error;
use modulegen::example::Example;
use modulegen::generator::{generate, next_steps, GeneratorConfig};
use modulegen::manifest::dependabot::DependabotConfig;
use modulegen::manifest::mkdocs::MkdocsConfig;
use modulegen::renderer::MiniJinjaRenderer;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const MKDOCS: &str = r#"site_name: Testcontainers for Go
nav:
  - Home: index.md
  - Examples:
      - examples/index.md
      - examples/nginx.md
      - examples/toxiproxy.md
extra:
  latest_version: v0.20.0
"#;

const DEPENDABOT: &str = r#"version: 2
updates:
  - package-ecosystem: gomod
    directory: /
    schedule:
      interval: weekly
  - package-ecosystem: gomod
    directory: /modules/compose
    schedule:
      interval: weekly
  - package-ecosystem: gomod
    directory: /examples/nginx
    schedule:
      interval: monthly
      day: sunday
  - package-ecosystem: gomod
    directory: /examples/toxiproxy
    schedule:
      interval: monthly
      day: sunday
"#;

fn template_content(template: &str) -> String {
    match template {
        "go.mod" => "module github.com/testcontainers/testcontainers-go/examples/{{ lower }}\n\n\
                     require github.com/testcontainers/testcontainers-go {{ tc_version }}\n"
            .to_string(),
        "example.go" => "package {{ lower }}\n\n\
                         // {{ lower_title }}Container represents the {{ title }} container\n\
                         type {{ lower_title }}Container struct{}\n\n\
                         const image = \"{{ image }}\"\n"
            .to_string(),
        other => format!("{other} for {{{{ title }}}}\n"),
    }
}

fn project() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    fs::write(root.join("mkdocs.yml"), MKDOCS).unwrap();
    fs::create_dir_all(root.join(".github")).unwrap();
    fs::write(root.join(".github/dependabot.yml"), DEPENDABOT).unwrap();

    let template_dir = root.join("examples/_template");
    fs::create_dir_all(&template_dir).unwrap();
    for template in TEMPLATES {
        fs::write(template_dir.join(format!("{template}.tmpl")), template_content(template))
            .unwrap();
    }

    temp_dir
}

fn run(root: &Path, example: &Example) -> modulegen::error::Result<Vec<std::path::PathBuf>> {
    generate(example, &GeneratorConfig::new(root), &MiniJinjaRenderer::new())
}

#[test_log::test]
fn test_generate_redis() {
    let temp_dir = project();
    let root = temp_dir.path();
    let example = Example::new("redis", None, "redis:latest");

    let written = run(root, &example).unwrap();

    let expected = [
        ".github/workflows/redis-example.yml",
        "docs/examples/redis.md",
        "examples/redis/redis_test.go",
        "examples/redis/redis.go",
        "examples/redis/go.mod",
        "examples/redis/go.sum",
        "examples/redis/Makefile",
        "examples/redis/tools/tools.go",
    ];
    assert_eq!(written, expected.iter().map(|p| root.join(p)).collect::<Vec<_>>());
    for path in &written {
        assert!(path.is_file(), "{}", path.display());
    }

    let go_mod = fs::read_to_string(root.join("examples/redis/go.mod")).unwrap();
    assert!(go_mod.starts_with("module github.com/testcontainers/testcontainers-go/examples/redis"));
    assert!(go_mod.contains("testcontainers-go v0.20.0"));

    let docs = fs::read_to_string(root.join("docs/examples/redis.md")).unwrap();
    assert_eq!(docs, "docs_example.md for Redis\n");

    let nav = MkdocsConfig::read(root).unwrap().examples_nav().unwrap();
    assert_eq!(
        nav,
        vec![
            "examples/index.md",
            "examples/nginx.md",
            "examples/redis.md",
            "examples/toxiproxy.md"
        ]
    );

    let dependabot = DependabotConfig::read(root).unwrap();
    let dirs: Vec<&str> = dependabot
        .updates()
        .unwrap()
        .iter()
        .map(|u| u["directory"].as_str().unwrap())
        .collect();
    assert_eq!(
        dirs,
        vec![
            "/",
            "/modules/compose",
            "/examples/nginx",
            "/examples/redis",
            "/examples/toxiproxy"
        ]
    );
}

#[test]
fn test_generate_with_title() {
    let temp_dir = project();
    let root = temp_dir.path();
    let example = Example::new("mongodb", Some("MongoDB"), "mongo:6");

    run(root, &example).unwrap();

    let source = fs::read_to_string(root.join("examples/mongodb/mongodb.go")).unwrap();
    assert!(source.contains("// mongoDBContainer represents the MongoDB container"));
    assert!(source.contains("const image = \"mongo:6\""));
}

#[test]
fn test_rerun_is_idempotent() {
    let first = project();
    let second = project();
    let example = Example::new("redis", None, "redis:latest");

    run(first.path(), &example).unwrap();
    run(second.path(), &example).unwrap();
    assert!(!dir_diff::is_different(first.path(), second.path()).unwrap());

    run(first.path(), &example).unwrap();
    assert!(!dir_diff::is_different(first.path(), second.path()).unwrap());
}

#[test]
fn test_invalid_name_changes_nothing() {
    let temp_dir = project();
    let root = temp_dir.path();
    let example = Example::new("redis7", None, "redis:latest");

    let result = run(root, &example);

    assert!(matches!(result, Err(Error::ValidationError { field: "name", .. })));
    assert!(!root.join("examples/redis7").exists());
    assert!(!root.join("docs").exists());
    assert_eq!(fs::read_to_string(root.join("mkdocs.yml")).unwrap(), MKDOCS);
    assert_eq!(
        fs::read_to_string(root.join(".github/dependabot.yml")).unwrap(),
        DEPENDABOT
    );
}

#[test]
fn test_invalid_title_changes_nothing() {
    let temp_dir = project();
    let root = temp_dir.path();
    let example = Example::new("mongodb", Some("Mongo DB"), "mongo:6");

    let result = run(root, &example);

    assert!(matches!(result, Err(Error::ValidationError { field: "title", .. })));
    assert!(!root.join("examples/mongodb").exists());
}

#[test]
fn test_missing_template_stops_before_manifests() {
    let temp_dir = project();
    let root = temp_dir.path();
    fs::remove_file(root.join("examples/_template/go.mod.tmpl")).unwrap();
    let example = Example::new("redis", None, "redis:latest");

    let result = run(root, &example);

    assert!(matches!(result, Err(Error::IoError(_))));
    // files rendered before the failure stay on disk
    assert!(root.join("examples/redis/redis.go").is_file());
    assert!(!root.join("examples/redis/go.mod").exists());
    assert_eq!(fs::read_to_string(root.join("mkdocs.yml")).unwrap(), MKDOCS);
}

#[test]
fn test_broken_dependabot_keeps_docs_update() {
    let temp_dir = project();
    let root = temp_dir.path();
    fs::write(root.join(".github/dependabot.yml"), "version: 2\nupdates: []\n").unwrap();
    let example = Example::new("redis", None, "redis:latest");

    let result = run(root, &example);

    assert!(matches!(result, Err(Error::StructuralPrecondition(_))));
    let nav = MkdocsConfig::read(root).unwrap().examples_nav().unwrap();
    assert!(nav.contains(&"examples/redis.md".to_string()));
}

#[test]
fn test_next_steps() {
    let steps = next_steps(&Example::new("Redis", None, "redis:latest"));
    assert_eq!(steps.len(), 3);
    assert!(steps[0].contains("go to redis directory"));
}
