use assert_cmd::Command;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rstest::fixture;
use std::fs;
use std::path::PathBuf;
use std::process::Output;
use tempfile::TempDir;
use wordiff::{EditRun, EditType};

const WORDS: &[&str] = &["the", "a", "cat", "sat", "on", "mat", "dog", "ran"];
const SEPARATORS: &[&str] = &[" ", " ", " ", "\n", "\t", "  "];

pub struct CommandHelper {
    dir: TempDir,
}

#[fixture]
pub fn helper() -> CommandHelper {
    CommandHelper::new()
}

impl CommandHelper {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        CommandHelper {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn write_file(&self, name: &str, contents: &[u8]) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).unwrap();

        path
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn wordiff_cmd(&self, argv: &[&str]) -> Output {
        Command::cargo_bin(env!("CARGO_PKG_NAME"))
            .unwrap()
            .args(argv)
            .current_dir(self.dir.path())
            .env_remove("RUST_LOG")
            .output()
            .unwrap()
    }
}

/// A short random document drawn from a small vocabulary, so that pairs of
/// documents share plenty of words.
pub fn random_document(rng: &mut StdRng) -> String {
    let len = rng.gen_range(0..12);
    let mut document = String::new();

    for i in 0..len {
        document.push_str(WORDS.choose(rng).unwrap());
        if i + 1 < len || rng.gen_bool(0.3) {
            document.push_str(SEPARATORS.choose(rng).unwrap());
        }
    }

    document
}

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub fn rebuild(runs: &[EditRun], keep: fn(EditType) -> bool) -> String {
    runs.iter()
        .filter(|run| keep(run.tag))
        .map(|run| run.text.as_str())
        .collect()
}
