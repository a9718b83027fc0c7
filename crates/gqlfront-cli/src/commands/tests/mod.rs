
use crate::Cli;
use crate::commands::CommandEnum;
use clap::Parser;
use std::path::Path;
use std::path::PathBuf;

/// A scratch directory under the system temp dir, removed on drop.
pub(super) struct ScratchDir(PathBuf);

impl ScratchDir {
    pub fn new(name: &str) -> Self {
        let path = std::env::temp_dir().join(format!(
            "gqlfront-cli-{name}-{}",
            std::process::id(),
        ));
        let _ = std::fs::remove_dir_all(&path);
        std::fs::create_dir_all(&path).unwrap();
        Self(path)
    }

    /// Writes `contents` to `relative_path`, creating parent directories.
    pub fn write(&self, relative_path: &str, contents: &str) -> PathBuf {
        let path = self.0.join(relative_path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, contents).unwrap();
        path
    }

    pub fn path(&self) -> &Path {
        &self.0
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.0);
    }
}

/// Parses `args` the way `main` does and splits off the subcommand.
pub(super) fn parse_cli<I, T>(args: I) -> (CommandEnum, Cli)
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let mut cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => panic!("failed to parse arguments:\n{err}"),
    };
    let command = cli.cmd.take().unwrap();
    (command, cli)
}
