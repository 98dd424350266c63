#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const FIXTURE_CSV: &str = "\
id,message,crime_type,toxicity_label,matched_keywords
1,i will find you,Criminal Threat,Threat-High,\"\"\"kill,hurt\"\"\"
2,send the code,Account Hacking - Minor,Fraud-Low,\"\"\"password,otp\"\"\"
3,good morning,Unrelated,None,none
4,claim your prize,Scam,Fraud,\"\"\"scam,refund\"\"\"
5,verify now,Financial Fraud,None,\"\"\"scam\"\"\"
6,you look awful,Online Harassment,Harassment,\"\"\"bewakoof, ugly\"\"\"
7,so dumb,Mild Toxicity,Mild,\"\"\"ugly,जाहिल\"\"\"
8,buy now,Spam,Low,\"\"\"buy now\"\"\"
";

pub struct TestEnv {
    _tmp: TempDir,
    pub root: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let root = tmp.path().to_path_buf();
        Self { _tmp: tmp, root }
    }

    /// Environment with the fixture dataset at the default input location.
    pub fn with_fixture() -> Self {
        let env = Self::new();
        env.write("data/cybershieldx_dataset.csv", FIXTURE_CSV);
        env
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.root.join(rel)
    }

    pub fn write(&self, rel: &str, body: &str) -> PathBuf {
        let p = self.path(rel);
        if let Some(parent) = p.parent() {
            fs::create_dir_all(parent).expect("create fixture dir");
        }
        fs::write(&p, body).expect("write fixture");
        p
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("incident-keywords");
        cmd.current_dir(&self.root).env_remove("RUST_LOG");
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn read_json(&self, rel: &str) -> Value {
        read_json(&self.path(rel))
    }
}

pub fn read_json(path: &Path) -> Value {
    let raw = fs::read_to_string(path).expect("read json file");
    serde_json::from_str(&raw).expect("valid json file")
}

pub fn strings(v: &Value) -> Vec<String> {
    v.as_array()
        .expect("json array")
        .iter()
        .map(|s| s.as_str().expect("json string").to_string())
        .collect()
}
