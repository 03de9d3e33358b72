#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub fixture_catalog: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");

        let fixture_catalog = make_fixture_catalog(tmp.path());

        Self {
            _tmp: tmp,
            home,
            fixture_catalog,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("ribawheels");
        cmd.env("HOME", &self.home)
            .env_remove("RIBAWHEELS_LOG")
            .env_remove("RUST_LOG");
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn run_json_fixture(&self, args: &[&str]) -> Value {
        let mut cmd = self.cmd();
        let out = cmd
            .arg("--json")
            .arg("--catalog")
            .arg(self.fixture_catalog.to_str().expect("catalog path utf8"))
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn write_config(&self, body: &str) -> PathBuf {
        let dir = self.home.join(".config/ribawheels");
        fs::create_dir_all(&dir).expect("create config dir");
        let path = dir.join("config.toml");
        fs::write(&path, body).expect("write config");
        path
    }
}

fn make_fixture_catalog(base: &Path) -> PathBuf {
    let path = base.join("fixture-catalog.json");
    let catalog = serde_json::json!({
        "name": "fixture-lot",
        "vehicles": [
            {
                "key": "civic",
                "make": "Honda",
                "name": "Honda Civic",
                "description": "Reliable daily driver.",
                "features": ["Manual gearbox", "Cloth seats"],
                "price": "$18,500",
                "images": ["lot/civic1.jpg", "lot/civic2.jpg", "lot/civic3.jpg"]
            }
        ],
        "validators": [
            {
                "id": "inspector",
                "name": "Lot Inspector",
                "status": "Online",
                "stars": 5,
                "validations": 3,
                "success_rate": "100%",
                "image": "lot/inspector.png"
            }
        ]
    });
    fs::write(
        &path,
        serde_json::to_string_pretty(&catalog).expect("serialize catalog"),
    )
    .expect("write catalog");
    path
}
