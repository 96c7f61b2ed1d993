//! Startup regeneration of the specification document.
//!
//! Runs an external generator (`swag` by default) as
//! `<program> init -d <search_dir> -o <output_dir> [args...]`, inheriting
//! this process's stdout and stderr. Every failure is logged and swallowed:
//! the endpoint serves whatever document exists afterwards.

use std::{
    path::PathBuf,
    process::{Command, ExitStatus, Stdio},
};

use tracing::{info, warn};

use crate::config::GeneratorConfig;

type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("generator `{program}` not found on PATH: {source}")]
    NotInstalled {
        program: String,
        source: which::Error,
    },
    #[error("failed to spawn generator: {0}")]
    Spawn(#[from] std::io::Error),
    #[error("generator exited with {0}")]
    Failed(ExitStatus),
}

fn locate(program: &str) -> Result<PathBuf> {
    which::which(program).map_err(|source| Error::NotInstalled {
        program: program.to_string(),
        source,
    })
}

fn command(executable: PathBuf, config: &GeneratorConfig) -> Command {
    let mut command = Command::new(executable);
    command
        .arg("init")
        .arg("-d")
        .arg(&config.search_dir)
        .arg("-o")
        .arg(&config.output_dir)
        .args(&config.args)
        .stdin(Stdio::null())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());
    command
}

/// Runs the generator to completion. Blocks the calling thread.
pub fn run(config: &GeneratorConfig) -> Result<()> {
    let executable = locate(&config.program)?;

    if !config.args.is_empty() {
        info!("Using custom generator args: {:?}", config.args);
    }

    let status = command(executable, config).status()?;
    if !status.success() {
        return Err(Error::Failed(status));
    }

    Ok(())
}

/// Runs the generator, logging the outcome instead of returning it.
pub fn refresh(config: &GeneratorConfig) {
    info!("Auto-generating API documentation with `{}`...", config.program);

    match run(config) {
        Ok(()) => info!("API documentation generated successfully"),
        Err(Error::NotInstalled { program, .. }) => {
            warn!("`{program}` command not found, skipping auto-generation. Install it and make sure it is on PATH");
            warn!("未找到 `{program}` 命令, 跳过文档生成. 请安装并确认其位于 PATH 中");
        }
        Err(e) => warn!("Failed to generate API documentation: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_program() {
        let config = GeneratorConfig {
            program: "docs-ui-generator-that-does-not-exist".to_string(),
            ..GeneratorConfig::default()
        };

        assert!(matches!(run(&config), Err(Error::NotInstalled { .. })));
        refresh(&config);
    }

    #[test]
    fn builds_arguments() {
        let config = GeneratorConfig {
            search_dir: PathBuf::from("./api"),
            output_dir: PathBuf::from("./out"),
            args: vec!["--parseDependency".to_string(), "--parseInternal".to_string()],
            ..GeneratorConfig::default()
        };

        let command = command(PathBuf::from("/usr/bin/swag"), &config);
        let args: Vec<_> = command.get_args().map(|arg| arg.to_string_lossy()).collect();

        assert_eq!(command.get_program(), "/usr/bin/swag");
        assert_eq!(
            args,
            [
                "init",
                "-d",
                "./api",
                "-o",
                "./out",
                "--parseDependency",
                "--parseInternal"
            ]
        );
    }

    #[cfg(unix)]
    fn script(dir: &std::path::Path, name: &str, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = dir.join(name);
        std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        let mut perms = std::fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&path, perms).unwrap();
        path
    }

    #[cfg(unix)]
    #[test]
    fn runs_generator() {
        let dir = tempfile::tempdir().unwrap();
        let record = dir.path().join("args.txt");
        let program = script(
            dir.path(),
            "fake-swag",
            &format!("echo \"$@\" > '{}'", record.display()),
        );

        let config = GeneratorConfig {
            enabled: true,
            program: program.to_string_lossy().into_owned(),
            args: vec!["--quiet".to_string()],
            ..GeneratorConfig::default()
        };

        run(&config).unwrap();
        assert_eq!(
            std::fs::read_to_string(record).unwrap().trim(),
            "init -d . -o ./docs --quiet"
        );
    }

    #[cfg(unix)]
    #[test]
    fn failing_generator() {
        let dir = tempfile::tempdir().unwrap();
        let program = script(dir.path(), "broken-swag", "exit 3");

        let config = GeneratorConfig {
            program: program.to_string_lossy().into_owned(),
            ..GeneratorConfig::default()
        };

        match run(&config) {
            Err(Error::Failed(status)) => assert_eq!(status.code(), Some(3)),
            other => panic!("unexpected result: {other:?}"),
        }
        refresh(&config);
    }
}
