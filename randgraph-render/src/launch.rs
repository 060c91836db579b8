//! Opening files with the host's default application.

use std::{
    env,
    ffi::OsString,
    path::Path,
    process::{Command, Stdio},
};

use tracing::{debug, instrument};

use crate::error::LaunchError;

/// Opens a file for the user to look at.
pub trait Launcher {
    /// Asks the environment to open `path`.
    ///
    /// # Errors
    /// Returns [`LaunchError`] when the file cannot be handed off.
    fn open(&self, path: &Path) -> Result<(), LaunchError>;
}

/// Program and arguments that open a file on a given platform.
///
/// # Examples
/// ```
/// use std::path::Path;
/// use randgraph_render::LaunchCommand;
///
/// let command = LaunchCommand::for_platform("macos", Path::new("graph.html"))
///     .expect("macOS is supported");
/// assert_eq!(command.program(), "open");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LaunchCommand {
    program: &'static str,
    args: Vec<OsString>,
}

impl LaunchCommand {
    /// Selects the default-application command for `os`, using the names
    /// reported by `std::env::consts::OS`.
    ///
    /// # Errors
    /// Returns [`LaunchError::UnsupportedPlatform`] for any platform other
    /// than Linux, Windows or macOS.
    pub fn for_platform(os: &str, path: &Path) -> Result<Self, LaunchError> {
        let target = path.as_os_str().to_owned();
        let (program, args) = match os {
            "linux" => ("xdg-open", vec![target]),
            "windows" => (
                "rundll32",
                vec![OsString::from("url.dll,FileProtocolHandler"), target],
            ),
            "macos" => ("open", vec![target]),
            other => {
                return Err(LaunchError::UnsupportedPlatform {
                    os: other.to_owned(),
                });
            }
        };
        Ok(Self { program, args })
    }

    /// Returns the program to run.
    #[must_use]
    pub const fn program(&self) -> &'static str {
        self.program
    }

    /// Returns the arguments passed to the program.
    #[must_use]
    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// Starts the command without waiting for it to finish.
    ///
    /// # Errors
    /// Returns [`LaunchError::Spawn`] if the process cannot be started.
    pub fn spawn(&self) -> Result<(), LaunchError> {
        Command::new(self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(drop)
            .map_err(|source| LaunchError::Spawn {
                program: self.program,
                source,
            })
    }
}

/// Opens files with the operating system's default application.
#[derive(Clone, Copy, Debug)]
pub struct SystemLauncher {
    os: &'static str,
}

impl Default for SystemLauncher {
    fn default() -> Self {
        Self { os: env::consts::OS }
    }
}

impl SystemLauncher {
    /// Creates a launcher for the platform this binary was built for.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Launcher for SystemLauncher {
    #[instrument(name = "launch.open", err, skip(self), fields(os = self.os))]
    fn open(&self, path: &Path) -> Result<(), LaunchError> {
        let command = LaunchCommand::for_platform(self.os, path)?;
        debug!(program = command.program(), "starting default application");
        command.spawn()
    }
}
