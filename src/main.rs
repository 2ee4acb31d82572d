//!
//! solpup
//! Pretty Useful Pup, for Solidity. Checks the naming conventions of a Foundry
//! project: constants and immutables in upper snake case, internal and private
//! functions with a leading underscore, structured test names, and scripts with
//! a single `run` entrypoint.
//!
//!  # Configuration
//!
//! Lints are read from `solpup.ron`, found in the project root or one of its
//! ancestors, or from the file given with `--config`. Without either, the
//! built-in conventions are used. `solpup generate-config` writes those out as a
//! starting point.
//!
//!  # Layout
//!
//! The `src`, `test` and `script` directories are read from `foundry.toml`.
//! Files under `test` ending in `.t.sol` are tests, files under `script` ending in
//! `.s.sol` are scripts; everything else in those directories is a helper.
//!

#![warn(rust_2018_idioms, unused_lifetimes)]

mod cli;

use ansi_term::Colour::{Blue, Cyan, Green, Red, Yellow};
use ansi_term::Style;
use anyhow::{Context, Result};
use clap::Parser;
use cli::{SolpupCli, SolpupCommand};
use solpup_common::project_context::ProjectContext;
use solpup_common::workspace::CONFIG_FILE;
use solpup_lint_config::LintBuilder;
use solpup_lint_impl::{ConfigSource, Project, builtin_lints, load_lints};
use std::error::Error;
use std::fmt;
use std::io::{self, IsTerminal};
use std::path::Path;
use std::process::{Command, ExitStatus, exit};

/// Simple error type that wraps a command exit code
#[derive(Debug)]
struct CommandExitStatus(i32);

impl fmt::Display for CommandExitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Command failed with exit code: {}", self.0)
    }
}

impl Error for CommandExitStatus {}

fn show_ascii_puppy() {
    println!("{}", Cyan.paint(r#"
     / \__
    (    @\___
    /         O
   /   (_____/
  /_____/   U
"#));
}

// Paints `text` only when writing to a terminal
fn paint(style: Style, text: &str, color: bool) -> String {
    if color {
        style.paint(text).to_string()
    } else {
        text.to_string()
    }
}

pub fn main() {
    let cli = SolpupCli::parse();

    if let Err(e) = run(&cli) {
        if let Some(status) = e.downcast_ref::<CommandExitStatus>() {
            exit(status.0);
        }
        eprintln!(
            "{}: {e:#}",
            paint(Red.bold(), "error", io::stderr().is_terminal())
        );
        exit(1);
    }
}

fn run(cli: &SolpupCli) -> Result<()> {
    match cli.command() {
        SolpupCommand::Check { no_fmt } => {
            process_check(&cli.root, cli.config.as_deref(), !no_fmt)
        }
        SolpupCommand::PrintContracts { json } => {
            process_print_contracts(&cli.root, cli.config.as_deref(), json)
        }
        SolpupCommand::GenerateConfig { force } => process_generate_config(&cli.root, force),
        SolpupCommand::Fmt { check } => process_fmt(&cli.root, check),
    }
}

fn announce_config_source(source: &ConfigSource) {
    if *source == ConfigSource::BuiltIn {
        eprintln!(
            "{}: no {CONFIG_FILE} found, using the built-in conventions. Run `solpup generate-config` to customise them.",
            paint(Blue.bold(), "note", io::stderr().is_terminal())
        );
    }
}

/// Runs the naming checks, then the formatting check. The command fails if
/// either of them does.
fn process_check(root: &Path, config: Option<&Path>, fmt: bool) -> Result<()> {
    let names_ok = check_conventions(root, config)?;
    let fmt_ok = !fmt || check_formatting(root)?;

    if names_ok && fmt_ok {
        Ok(())
    } else {
        Err(CommandExitStatus(1).into())
    }
}

fn check_conventions(root: &Path, config: Option<&Path>) -> Result<bool> {
    let (lints, source) = load_lints(root, config)?;
    announce_config_source(&source);

    let project = Project::load(root)?;
    let report = project.check(lints);

    let color = io::stdout().is_terminal();
    for result in &report.results {
        if color {
            println!("{}", result.render());
        } else {
            println!("{result}");
        }
    }

    if report.has_errors() {
        println!("{}", report.summary());
        eprintln!(
            "{}: Convention checks failed, see details above",
            paint(Red.bold(), "error", io::stderr().is_terminal())
        );
        return Ok(false);
    }

    println!("{}", paint(Green.normal(), &report.summary(), color));
    Ok(true)
}

fn check_formatting(root: &Path) -> Result<bool> {
    match forge_fmt(root, true)? {
        None => {
            eprintln!(
                "{}: `forge` was not found on your PATH, skipping the formatting check",
                paint(Yellow.bold(), "warning", io::stderr().is_terminal())
            );
            Ok(true)
        }
        Some(status) if status.success() => Ok(true),
        Some(_) => {
            eprintln!(
                "{}: Formatting check failed, run `solpup fmt` to fix",
                paint(Red.bold(), "error", io::stderr().is_terminal())
            );
            Ok(false)
        }
    }
}

fn process_print_contracts(root: &Path, config: Option<&Path>, json: bool) -> Result<()> {
    let (lints, source) = load_lints(root, config)?;
    let project = Project::load(root)?;
    let context = project.project_context(lints);

    if json {
        println!("{}", context.to_json()?);
    } else {
        announce_config_source(&source);
        print!("{}", contracts_text(&context, io::stdout().is_terminal()));
    }
    Ok(())
}

/// Renders the contracts of a project, grouped by file
fn contracts_text(context: &ProjectContext, color: bool) -> String {
    let mut out = format!(
        "{} in {}\n",
        paint(Style::new().bold(), "Contracts", color),
        context.project_root
    );

    if context.contracts.is_empty() {
        out.push_str("\n  no contracts found\n");
        return out;
    }

    let mut current_file: Option<&str> = None;
    for contract in &context.contracts {
        if current_file != Some(contract.file.as_str()) {
            out.push_str(&format!(
                "\n{} ({})\n",
                paint(Blue.bold(), &contract.file, color),
                contract.file_kind
            ));
            current_file = Some(&contract.file);
        }

        out.push_str(&format!(
            "  {} {}\n",
            contract.kind,
            paint(Green.normal(), &contract.name, color)
        ));
        if !contract.functions.is_empty() {
            out.push_str(&format!("    functions: {}\n", contract.functions.join(", ")));
        }
        let lints = if contract.applicable_lints.is_empty() {
            paint(Style::new().dimmed(), "none", color)
        } else {
            paint(Yellow.normal(), &contract.applicable_lints.join(", "), color)
        };
        out.push_str(&format!("    lints: {lints}\n"));
    }
    out
}

fn process_generate_config(root: &Path, force: bool) -> Result<()> {
    let path = root.join(CONFIG_FILE);
    if path.exists() && !force {
        eprintln!(
            "{}: {} already exists",
            paint(Red.bold(), "error", io::stderr().is_terminal()),
            path.display()
        );
        eprintln!("Pass --force if you want to regenerate the configuration.");
        return Err(CommandExitStatus(1).into());
    }

    let contexts = match Project::load(root) {
        Ok(project) => vec![project.project_context(builtin_lints())],
        Err(e) => {
            eprintln!(
                "{}: {e:#}",
                paint(Yellow.bold(), "warning", io::stderr().is_terminal())
            );
            eprintln!("Generating every built-in convention instead.");
            vec![]
        }
    };

    let builder = LintBuilder::generate_from_contexts(&contexts);
    builder
        .write_to_file(&path)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    let color = io::stdout().is_terminal();
    if color {
        show_ascii_puppy();
    }
    println!(
        "Created {} with {} lints",
        paint(Green.normal(), &path.display().to_string(), color),
        builder.lints.len()
    );
    Ok(())
}

fn process_fmt(root: &Path, check: bool) -> Result<()> {
    match forge_fmt(root, check)? {
        None => {
            eprintln!(
                "{}: `forge` was not found on your PATH. Install Foundry to use `solpup fmt`.",
                paint(Red.bold(), "error", io::stderr().is_terminal())
            );
            Err(CommandExitStatus(1).into())
        }
        Some(status) if status.success() => Ok(()),
        Some(status) => Err(CommandExitStatus(status.code().unwrap_or(-1)).into()),
    }
}

// Runs `forge fmt` in the project root. `None` when forge isn't installed.
fn forge_fmt(root: &Path, check: bool) -> Result<Option<ExitStatus>> {
    let Ok(forge) = which::which("forge") else {
        return Ok(None);
    };

    let mut cmd = Command::new(forge);
    cmd.arg("fmt").current_dir(root);
    if check {
        cmd.arg("--check");
    }

    let status = cmd.status().context("could not run forge fmt")?;
    Ok(Some(status))
}

#[cfg(test)]
mod tests {
    use super::*;
    use solpup_common::file_kind::FileKind;
    use solpup_common::project_context::ContractInfo;
    use std::fs;
    use tempfile::TempDir;

    /// Tests for the CommandExitStatus error type
    mod error_tests {
        use super::*;

        #[test]
        fn test_command_exit_status_display() {
            let status = CommandExitStatus(42);
            assert_eq!(format!("{}", status), "Command failed with exit code: 42");

            let error: &dyn Error = &status;
            assert_eq!(error.to_string(), "Command failed with exit code: 42");
        }

        #[test]
        fn test_command_exit_status_survives_anyhow() {
            let error: anyhow::Error = CommandExitStatus(3).into();
            let status = error.downcast_ref::<CommandExitStatus>().unwrap();
            assert_eq!(status.0, 3);
        }
    }

    mod display_tests {
        use super::*;

        fn context() -> ProjectContext {
            ProjectContext::with_data(
                "test_project",
                vec![
                    ContractInfo {
                        name: "Counter".to_string(),
                        kind: "contract".to_string(),
                        file: "src/Counter.sol".to_string(),
                        file_kind: FileKind::Src,
                        functions: vec!["setNumber".to_string(), "increment".to_string()],
                        applicable_lints: vec!["constant_naming".to_string()],
                    },
                    ContractInfo {
                        name: "ICounter".to_string(),
                        kind: "interface".to_string(),
                        file: "src/Counter.sol".to_string(),
                        file_kind: FileKind::Src,
                        functions: vec![],
                        applicable_lints: vec![],
                    },
                ],
            )
        }

        #[test]
        fn test_contracts_text() {
            let text = contracts_text(&context(), false);
            assert_eq!(
                text,
                "Contracts in test_project\n\
                 \n\
                 src/Counter.sol (src)\n  \
                 contract Counter\n    \
                 functions: setNumber, increment\n    \
                 lints: constant_naming\n  \
                 interface ICounter\n    \
                 lints: none\n"
            );
        }

        #[test]
        fn test_contracts_text_empty() {
            let text = contracts_text(&ProjectContext::with_data("empty", vec![]), false);
            assert!(text.contains("no contracts found"));
        }

        #[test]
        fn test_paint() {
            assert_eq!(paint(Red.bold(), "error", false), "error");
            assert!(paint(Red.bold(), "error", true).contains("\u{1b}["));
        }

        #[test]
        fn test_show_ascii_puppy() {
            // Prints to stdout; just make sure it doesn't panic
            show_ascii_puppy();
        }
    }

    mod check_tests {
        use super::*;

        fn project(files: &[(&str, &str)]) -> TempDir {
            let temp_dir = TempDir::new().unwrap();
            for (path, content) in files {
                let path = temp_dir.path().join(path);
                fs::create_dir_all(path.parent().unwrap()).unwrap();
                fs::write(path, content).unwrap();
            }
            temp_dir
        }

        #[test]
        fn test_check_without_formatting() {
            let clean = project(&[(
                "src/Clean.sol",
                "contract Clean {\n    uint256 constant LIMIT = 1;\n}\n",
            )]);
            process_check(clean.path(), None, false).unwrap();

            let dirty = project(&[(
                "src/Dirty.sol",
                "contract Dirty {\n    uint256 constant limit = 1;\n}\n",
            )]);
            let err = process_check(dirty.path(), None, false).unwrap_err();
            assert_eq!(err.downcast_ref::<CommandExitStatus>().unwrap().0, 1);
        }

        #[test]
        fn test_check_reports_broken_config() {
            let temp_dir = project(&[("solpup.ron", "(lints: [Nope])")]);
            let err = process_check(temp_dir.path(), None, false).unwrap_err();
            assert!(err.downcast_ref::<CommandExitStatus>().is_none());
            assert!(format!("{err:#}").contains("solpup.ron"));
        }
    }

    mod generate_config_tests {
        use super::*;

        #[test]
        fn test_generate_config_writes_defaults() {
            let temp_dir = TempDir::new().unwrap();
            process_generate_config(temp_dir.path(), false).unwrap();

            let builder = LintBuilder::read_from_file(temp_dir.path().join(CONFIG_FILE)).unwrap();
            let names: Vec<&str> = builder.lints.iter().map(|l| l.name()).collect();
            assert_eq!(
                names,
                vec![
                    "constant_naming",
                    "internal_function_naming",
                    "test_naming",
                    "script_entrypoint"
                ]
            );
        }

        #[test]
        fn test_generate_config_follows_the_project() {
            let temp_dir = TempDir::new().unwrap();
            fs::create_dir_all(temp_dir.path().join("src")).unwrap();
            fs::write(
                temp_dir.path().join("src/Token.sol"),
                "contract Token {\n    function _mint() internal {}\n}\n",
            )
            .unwrap();

            process_generate_config(temp_dir.path(), false).unwrap();

            let builder = LintBuilder::read_from_file(temp_dir.path().join(CONFIG_FILE)).unwrap();
            let names: Vec<&str> = builder.lints.iter().map(|l| l.name()).collect();
            assert_eq!(names, vec!["constant_naming", "internal_function_naming"]);
        }

        #[test]
        fn test_generate_config_with_unparseable_sources() {
            let temp_dir = TempDir::new().unwrap();
            fs::create_dir_all(temp_dir.path().join("src")).unwrap();
            fs::write(temp_dir.path().join("src/Broken.sol"), "contract Broken {").unwrap();

            process_generate_config(temp_dir.path(), false).unwrap();

            let builder = LintBuilder::read_from_file(temp_dir.path().join(CONFIG_FILE)).unwrap();
            assert_eq!(builder.lints.len(), 4);
        }

        #[test]
        fn test_generate_config_refuses_to_overwrite() {
            let temp_dir = TempDir::new().unwrap();
            let path = temp_dir.path().join(CONFIG_FILE);
            fs::write(&path, "(lints: [])").unwrap();

            let err = process_generate_config(temp_dir.path(), false).unwrap_err();
            assert_eq!(err.downcast_ref::<CommandExitStatus>().unwrap().0, 1);
            assert_eq!(fs::read_to_string(&path).unwrap(), "(lints: [])");

            process_generate_config(temp_dir.path(), true).unwrap();
            assert!(fs::read_to_string(&path).unwrap().contains("constant_naming"));
        }
    }
}
