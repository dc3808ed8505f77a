//! The production toolchain driving gcc/g++ and ar.

use crate::driver::{CheckRequest, CompileRequest, LinkRequest, ToolOutcome, Toolchain};
use crate::error::ToolchainError;
use cobble_config::{BuildOptionsSet, Language, TargetKind};
use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

/// The system compiler toolchain: gcc for C, g++ for C++, ar for archives.
#[derive(Debug, Clone, Default)]
pub struct SystemToolchain {
    /// Print each command line to stderr before running it.
    pub verbose: bool,
}

impl SystemToolchain {
    /// Creates a system toolchain.
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    fn compiler(language: Language) -> &'static str {
        match language {
            Language::C => "gcc",
            Language::Cpp => "g++",
        }
    }

    fn run(&self, tool: &str, args: &[OsString], cwd: &Path) -> Result<ToolOutcome, ToolchainError> {
        if self.verbose {
            let rendered: Vec<String> = args
                .iter()
                .map(|a| a.to_string_lossy().into_owned())
                .collect();
            eprintln!("   {} {}", tool, rendered.join(" "));
        }

        let output = Command::new(tool)
            .args(args)
            .current_dir(cwd)
            .output()
            .map_err(|e| ToolchainError::Spawn {
                tool: tool.to_string(),
                source: e,
            })?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        Ok(ToolOutcome::from_output(output.status.success(), &stderr))
    }
}

/// Appends `-D`, flag, and `-I` arguments from an option set.
fn push_option_args(args: &mut Vec<OsString>, options: &BuildOptionsSet) {
    for flag in &options.flags {
        args.push(flag.into());
    }
    for (name, value) in &options.defines {
        if value.is_empty() {
            args.push(format!("-D{name}").into());
        } else {
            args.push(format!("-D{name}={value}").into());
        }
    }
    for dir in &options.include_dirs {
        args.push("-I".into());
        args.push(dir.into());
    }
}

/// Builds the argument list for one compile invocation.
fn compile_args(request: &CompileRequest<'_>) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec!["-c".into(), request.source.into()];
    args.push("-o".into());
    args.push(request.object.into());
    if request.pic {
        args.push("-fPIC".into());
    }
    push_option_args(&mut args, request.options);
    args
}

/// Builds the argument list for one syntax-only check.
fn check_args(request: &CheckRequest<'_>) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec!["-fsyntax-only".into(), request.source.into()];
    push_option_args(&mut args, request.options);
    args
}

/// Builds the argument list for one link or archive invocation.
///
/// Static libraries go through `ar rcs`; the other kinds through the
/// compiler driver so the language runtime is linked in.
fn link_args(request: &LinkRequest<'_>) -> Vec<OsString> {
    match request.kind {
        TargetKind::StaticLibrary => {
            let mut args: Vec<OsString> = vec!["rcs".into(), request.output.into()];
            args.extend(request.objects.iter().map(|o| o.into()));
            args
        }
        TargetKind::Executable | TargetKind::SharedLibrary => {
            let mut args: Vec<OsString> = Vec::new();
            if request.kind == TargetKind::SharedLibrary {
                args.push("-shared".into());
            }
            args.extend(request.objects.iter().map(|o| o.into()));
            args.push("-o".into());
            args.push(request.output.into());
            for dir in request.lib_dirs {
                args.push("-L".into());
                args.push(dir.into());
            }
            for lib in request.libs {
                args.push(format!("-l{lib}").into());
            }
            args
        }
    }
}

impl Toolchain for SystemToolchain {
    fn compile(&self, request: &CompileRequest<'_>) -> Result<ToolOutcome, ToolchainError> {
        let args = compile_args(request);
        self.run(Self::compiler(request.language), &args, request.project_root)
    }

    fn check(&self, request: &CheckRequest<'_>) -> Result<ToolOutcome, ToolchainError> {
        let args = check_args(request);
        self.run(Self::compiler(request.language), &args, request.project_root)
    }

    fn link(&self, request: &LinkRequest<'_>) -> Result<ToolOutcome, ToolchainError> {
        let tool = match request.kind {
            TargetKind::StaticLibrary => "ar",
            _ => Self::compiler(request.language),
        };
        let args = link_args(request);
        self.run(tool, &args, request.project_root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cobble_config::Profile;
    use std::collections::BTreeMap;
    use std::path::PathBuf;

    fn options() -> BuildOptionsSet {
        let mut defines = BTreeMap::new();
        defines.insert("VERSION".to_string(), "2".to_string());
        defines.insert("TRACE".to_string(), String::new());
        BuildOptionsSet {
            profile: Profile::Debug,
            flags: vec!["-O0".to_string(), "-g".to_string(), "-Wall".to_string()],
            defines,
            include_dirs: vec!["include".to_string()],
        }
    }

    fn rendered(args: &[OsString]) -> Vec<String> {
        args.iter().map(|a| a.to_string_lossy().into_owned()).collect()
    }

    #[test]
    fn compiler_selection_by_language() {
        assert_eq!(SystemToolchain::compiler(Language::C), "gcc");
        assert_eq!(SystemToolchain::compiler(Language::Cpp), "g++");
    }

    #[test]
    fn compile_args_shape() {
        let options = options();
        let request = CompileRequest {
            project_root: Path::new("/p"),
            source: Path::new("src/main.c"),
            object: Path::new("target/debug/obj/main-12345678.o"),
            language: Language::C,
            options: &options,
            pic: false,
        };
        let args = rendered(&compile_args(&request));
        assert_eq!(args[0], "-c");
        assert_eq!(args[1], "src/main.c");
        assert_eq!(args[2], "-o");
        assert_eq!(args[3], "target/debug/obj/main-12345678.o");
        assert!(args.contains(&"-Wall".to_string()));
        assert!(args.contains(&"-DVERSION=2".to_string()));
        assert!(args.contains(&"-DTRACE".to_string()));
        assert!(!args.contains(&"-fPIC".to_string()));
        let i_pos = args.iter().position(|a| a == "-I").unwrap();
        assert_eq!(args[i_pos + 1], "include");
    }

    #[test]
    fn pic_flag_for_shared_targets() {
        let options = options();
        let request = CompileRequest {
            project_root: Path::new("/p"),
            source: Path::new("src/lib.c"),
            object: Path::new("lib.o"),
            language: Language::C,
            options: &options,
            pic: true,
        };
        let args = rendered(&compile_args(&request));
        assert!(args.contains(&"-fPIC".to_string()));
    }

    #[test]
    fn check_args_use_fsyntax_only() {
        let options = options();
        let request = CheckRequest {
            project_root: Path::new("/p"),
            source: Path::new("src/main.c"),
            language: Language::C,
            options: &options,
        };
        let args = rendered(&check_args(&request));
        assert_eq!(args[0], "-fsyntax-only");
        assert_eq!(args[1], "src/main.c");
        assert!(!args.contains(&"-o".to_string()));
    }

    #[test]
    fn link_executable_args() {
        let objects = vec![PathBuf::from("a.o"), PathBuf::from("b.o")];
        let libs = vec!["m".to_string()];
        let lib_dirs = vec!["/opt/lib".to_string()];
        let request = LinkRequest {
            project_root: Path::new("/p"),
            objects: &objects,
            output: Path::new("target/debug/app"),
            kind: TargetKind::Executable,
            language: Language::C,
            libs: &libs,
            lib_dirs: &lib_dirs,
        };
        let args = rendered(&link_args(&request));
        assert_eq!(args[0], "a.o");
        assert_eq!(args[1], "b.o");
        assert!(args.contains(&"-lm".to_string()));
        let l_pos = args.iter().position(|a| a == "-L").unwrap();
        assert_eq!(args[l_pos + 1], "/opt/lib");
        assert!(!args.contains(&"-shared".to_string()));
    }

    #[test]
    fn link_static_library_uses_ar_syntax() {
        let objects = vec![PathBuf::from("a.o")];
        let request = LinkRequest {
            project_root: Path::new("/p"),
            objects: &objects,
            output: Path::new("target/debug/libx.a"),
            kind: TargetKind::StaticLibrary,
            language: Language::C,
            libs: &[],
            lib_dirs: &[],
        };
        let args = rendered(&link_args(&request));
        assert_eq!(args[0], "rcs");
        assert_eq!(args[1], "target/debug/libx.a");
        assert_eq!(args[2], "a.o");
    }

    #[test]
    fn link_shared_library_args() {
        let objects = vec![PathBuf::from("a.o")];
        let request = LinkRequest {
            project_root: Path::new("/p"),
            objects: &objects,
            output: Path::new("target/debug/libx.so"),
            kind: TargetKind::SharedLibrary,
            language: Language::Cpp,
            libs: &[],
            lib_dirs: &[],
        };
        let args = rendered(&link_args(&request));
        assert_eq!(args[0], "-shared");
        assert!(args.contains(&"-o".to_string()));
    }

    #[test]
    fn spawn_failure_is_an_error() {
        let toolchain = SystemToolchain::new(false);
        let result = toolchain.run(
            "cobble-no-such-tool-xyz",
            &["--version".into()],
            Path::new("."),
        );
        assert!(matches!(result, Err(ToolchainError::Spawn { .. })));
    }
}
