//! Shared fixtures: a scripted toolchain and on-disk project builders.

use cobble_toolchain::{CheckRequest, CompileRequest, LinkRequest, ToolOutcome, Toolchain, ToolchainError};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tempfile::TempDir;

/// A toolchain that records every invocation and writes deterministic
/// artifact bytes instead of running real tools. Units listed in
/// `fail_units` produce a compile error outcome.
#[derive(Default)]
pub struct FakeToolchain {
    pub compiled: Mutex<Vec<PathBuf>>,
    pub checked: Mutex<Vec<PathBuf>>,
    pub links: AtomicUsize,
    pub fail_units: Mutex<HashSet<PathBuf>>,
    pub no_object_units: Mutex<HashSet<PathBuf>>,
}

impl FakeToolchain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a unit so its next compilations fail.
    pub fn fail_unit(&self, unit: &str) {
        self.fail_units.lock().unwrap().insert(PathBuf::from(unit));
    }

    /// Marks a unit so its compilations exit cleanly without writing the
    /// object file.
    pub fn drop_object(&self, unit: &str) {
        self.no_object_units
            .lock()
            .unwrap()
            .insert(PathBuf::from(unit));
    }

    /// Clears all scripted failures.
    pub fn heal(&self) {
        self.fail_units.lock().unwrap().clear();
        self.no_object_units.lock().unwrap().clear();
    }

    /// Units compiled so far, in sorted order.
    pub fn compiled_units(&self) -> Vec<PathBuf> {
        let mut units = self.compiled.lock().unwrap().clone();
        units.sort();
        units
    }

    /// Forgets recorded invocations, keeping scripted failures.
    pub fn reset_log(&self) {
        self.compiled.lock().unwrap().clear();
        self.checked.lock().unwrap().clear();
    }

    pub fn link_count(&self) -> usize {
        self.links.load(Ordering::SeqCst)
    }
}

impl Toolchain for FakeToolchain {
    fn compile(&self, request: &CompileRequest<'_>) -> Result<ToolOutcome, ToolchainError> {
        self.compiled
            .lock()
            .unwrap()
            .push(request.source.to_path_buf());

        if self.fail_units.lock().unwrap().contains(request.source) {
            let stderr = format!(
                "{}:1:1: error: scripted failure\n",
                request.source.display()
            );
            return Ok(ToolOutcome::from_output(false, &stderr));
        }
        if self.no_object_units.lock().unwrap().contains(request.source) {
            return Ok(ToolOutcome::success());
        }

        let object = request.project_root.join(request.object);
        fs::create_dir_all(object.parent().unwrap()).unwrap();
        fs::write(object, b"fake-object").unwrap();
        Ok(ToolOutcome::success())
    }

    fn check(&self, request: &CheckRequest<'_>) -> Result<ToolOutcome, ToolchainError> {
        self.checked
            .lock()
            .unwrap()
            .push(request.source.to_path_buf());

        if self.fail_units.lock().unwrap().contains(request.source) {
            let stderr = format!(
                "{}:2:5: error: scripted failure\n",
                request.source.display()
            );
            return Ok(ToolOutcome::from_output(false, &stderr));
        }
        Ok(ToolOutcome::success())
    }

    fn link(&self, request: &LinkRequest<'_>) -> Result<ToolOutcome, ToolchainError> {
        self.links.fetch_add(1, Ordering::SeqCst);
        let output = request.project_root.join(request.output);
        fs::create_dir_all(output.parent().unwrap()).unwrap();
        fs::write(output, b"fake-artifact").unwrap();
        Ok(ToolOutcome::success())
    }
}

/// Writes a project tree into a fresh temp directory.
pub fn project(manifest: &str, files: &[(&str, &str)]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("cobble.toml"), manifest).unwrap();
    for (path, content) in files {
        let full = tmp.path().join(path);
        fs::create_dir_all(full.parent().unwrap()).unwrap();
        fs::write(full, content).unwrap();
    }
    tmp
}

/// Overwrites one file in an existing project tree.
pub fn rewrite(root: &Path, path: &str, content: &str) {
    fs::write(root.join(path), content).unwrap();
}

/// The classic two-unit project: `main.c` and `helper.c`, both including
/// `helper.h`.
pub fn two_unit_project() -> TempDir {
    project(
        "[project]\nname = \"demo\"\n",
        &[
            ("src/main.c", "#include \"helper.h\"\nint main(void) { return helper(); }\n"),
            ("src/helper.c", "#include \"helper.h\"\nint helper(void) { return 0; }\n"),
            ("src/helper.h", "int helper(void);\n"),
        ],
    )
}
