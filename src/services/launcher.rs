//! Starting game executables.

use std::path::Path;
use std::process::{Command, Stdio};

use log::{debug, info};

use crate::error::LaunchError;

/// Low-level process creation.
pub trait Spawner {
    fn spawn(&self, path: &Path) -> std::io::Result<()>;
}

/// Spawns a detached child whose working directory is the executable's
/// folder.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemSpawner;

impl Spawner for SystemSpawner {
    fn spawn(&self, path: &Path) -> std::io::Result<()> {
        let mut command = Command::new(path);
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            command.current_dir(dir);
        }
        let child = command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        debug!("Spawned pid {}", child.id());
        // Dropping the handle leaves the child running on its own.
        Ok(())
    }
}

/// Anything that can start a game by path.
pub trait GameLauncher {
    fn launch(&self, path: &Path) -> Result<(), LaunchError>;
}

/// Checks the path exists, then hands it to a [`Spawner`].
#[derive(Debug, Clone, Default)]
pub struct ProcessLauncher<S = SystemSpawner> {
    spawner: S,
}

impl ProcessLauncher<SystemSpawner> {
    pub fn system() -> Self {
        Self {
            spawner: SystemSpawner,
        }
    }
}

impl<S: Spawner> ProcessLauncher<S> {
    pub fn new(spawner: S) -> Self {
        Self { spawner }
    }

    pub fn spawner(&self) -> &S {
        &self.spawner
    }
}

impl<S: Spawner> GameLauncher for ProcessLauncher<S> {
    fn launch(&self, path: &Path) -> Result<(), LaunchError> {
        if !path.exists() {
            return Err(LaunchError::NotFound(path.to_path_buf()));
        }
        self.spawner
            .spawn(path)
            .map_err(|e| LaunchError::Spawn {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        info!("Launched {}", path.display());
        Ok(())
    }
}
