//! `cobble info` — print a summary of the manifest and source tree.

use crate::project::load_project;
use crate::GlobalArgs;
use cobble_config::{Language, TargetKind};
use cobble_scan::{scan_project, SourceKind};

/// Runs the `cobble info` command.
pub fn run(_global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let (root, config) = load_project()?;

    let kind = match config.project.kind {
        TargetKind::Executable => "executable",
        TargetKind::StaticLibrary => "static library",
        TargetKind::SharedLibrary => "shared library",
    };
    let language = match config.project.language {
        Language::C => "C",
        Language::Cpp => "C++",
    };

    println!("project:   {} v{}", config.project.name, config.project.version);
    println!("kind:      {kind}");
    println!("language:  {language}");
    println!("sources:   {}", config.sources.dirs.join(", "));
    println!("includes:  {}", config.includes.dirs.join(", "));

    if !config.build.flags.is_empty() {
        println!("flags:     {}", config.build.flags.join(" "));
    }
    if !config.build.defines.is_empty() {
        let defines: Vec<String> = config
            .build
            .defines
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect();
        println!("defines:   {}", defines.join(" "));
    }
    if !config.build.libs.is_empty() {
        println!("libs:      {}", config.build.libs.join(", "));
    }

    let scan = scan_project(&root, &config)?;
    let files = scan.files();
    let units = files
        .iter()
        .filter(|f| f.kind == SourceKind::TranslationUnit)
        .count();
    let headers = files.iter().filter(|f| f.kind == SourceKind::Header).count();
    println!("files:     {units} translation unit(s), {headers} header(s)");

    Ok(0)
}
