use std::path::PathBuf;
use std::process::{Command, Output};
use std::sync::OnceLock;

static DISTIL_BIN: OnceLock<PathBuf> = OnceLock::new();

pub(crate) fn fixture_arg(name: &str) -> String {
	distil_testkit::fixture_path(name).to_string_lossy().into_owned()
}

pub(crate) fn run_distil(args: &[&str]) -> Output {
	Command::new(distil_bin()).args(args).output().expect("distil command executes")
}

pub(crate) fn run_distil_json(args: &[&str]) -> serde_json::Value {
	let output = run_distil(args);
	assert!(
		output.status.success(),
		"distil command failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	serde_json::from_slice(&output.stdout).expect("stdout should be valid json")
}

fn distil_bin() -> &'static PathBuf {
	DISTIL_BIN.get_or_init(resolve_distil_bin)
}

fn resolve_distil_bin() -> PathBuf {
	if let Some(path) = option_env!("CARGO_BIN_EXE_distil") {
		return PathBuf::from(path);
	}

	let manifest_dir = distil_testkit::workspace_root();
	let mut bin = distil_testkit::target_dir().join("debug");
	bin.push(if cfg!(windows) { "distil.exe" } else { "distil" });

	let status = Command::new("cargo")
		.current_dir(&manifest_dir)
		.args(["build", "--quiet", "--bin", "distil"])
		.status()
		.expect("cargo build executes");
	assert!(status.success(), "failed to build distil binary at {}", bin.display());

	bin
}
