use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub project: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");

        let project = make_fixture_project(tmp.path());

        Self {
            _tmp: tmp,
            home,
            project,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("doctags");
        cmd.env("HOME", &self.home);
        cmd
    }

    /// Run a subcommand with `--json` against the fixture project root and
    /// return the parsed envelope.
    pub fn run_json(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .args(args)
            .arg(self.project.to_str().expect("project path utf8"))
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn write_doc(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.project.join("docs").join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create doc parent");
        }
        fs::write(&path, content).expect("write doc");
        path
    }
}

fn make_fixture_project(base: &Path) -> PathBuf {
    let project = base.join("project");
    let docs = project.join("docs");

    fs::create_dir_all(project.join(".doctags")).expect("create .doctags");
    fs::create_dir_all(docs.join("guides")).expect("create docs tree");

    fs::write(
        project.join(".doctags/config.toml"),
        r#"path = "docs"
taxonomy = "docs/taxonomy.md"
excluded_patterns = ["README", "taxonomy"]
"#,
    )
    .expect("write project config");

    fs::write(
        docs.join("taxonomy.md"),
        "# Taxonomy\n\n- `:api` for interface documents\n- `:security` for threat and hardening notes\n- `:architecture` for design records\n",
    )
    .expect("write taxonomy");

    fs::write(
        docs.join("api.md"),
        "# API\n\n[:api]\n\nDecided in [ADR-00042].\n",
    )
    .expect("write api doc");

    fs::write(
        docs.join("guides/api-security.md"),
        "# Securing the API\n\n[:api :security]\n\nCovers REQ-AUTH-001 and RunNotes-2025-01-15-Feature.\n",
    )
    .expect("write security doc");

    fs::write(docs.join("README.md"), "[:ignored] index of this folder\n")
        .expect("write excluded readme");

    project
}

/// Build a minimal standalone project with the given taxonomy declarations
/// and documents, for tests that need a different shape than the fixture.
pub fn make_project(base: &Path, taxonomy: &[&str], docs: &[(&str, &str)]) -> PathBuf {
    let project = base.join("alt-project");
    fs::create_dir_all(project.join(".doctags")).expect("create .doctags");
    fs::create_dir_all(project.join("docs")).expect("create docs");

    fs::write(
        project.join(".doctags/config.toml"),
        "path = \"docs\"\ntaxonomy = \"docs/taxonomy.md\"\nexcluded_patterns = [\"taxonomy\"]\n",
    )
    .expect("write config");

    let decls: Vec<String> = taxonomy.iter().map(|t| format!("- `:{}`", t)).collect();
    fs::write(
        project.join("docs/taxonomy.md"),
        format!("# Taxonomy\n\n{}\n", decls.join("\n")),
    )
    .expect("write taxonomy");

    for (name, content) in docs {
        fs::write(project.join("docs").join(name), content).expect("write doc");
    }

    project
}
