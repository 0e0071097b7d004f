//! Process launching through the spawner seam.

use std::cell::RefCell;
use std::io;
use std::path::{Path, PathBuf};

use enlaut::error::LaunchError;
use enlaut::services::{GameLauncher, ProcessLauncher, Spawner};
use tempfile::NamedTempFile;

/// Records every path it is asked to spawn.
#[derive(Default)]
struct RecordingSpawner {
    calls: RefCell<Vec<PathBuf>>,
    fail: bool,
}

impl Spawner for RecordingSpawner {
    fn spawn(&self, path: &Path) -> io::Result<()> {
        self.calls.borrow_mut().push(path.to_path_buf());
        if self.fail {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "access denied"))
        } else {
            Ok(())
        }
    }
}

#[test]
fn missing_file_is_not_found_and_never_spawned() {
    let launcher = ProcessLauncher::new(RecordingSpawner::default());
    let err = launcher.launch(Path::new("/nonexistent/path")).unwrap_err();
    assert!(matches!(err, LaunchError::NotFound(ref p) if p == Path::new("/nonexistent/path")));
    assert!(launcher.spawner().calls.borrow().is_empty());
}

#[test]
fn existing_file_is_handed_to_spawner() {
    let exe = NamedTempFile::new().unwrap();
    let launcher = ProcessLauncher::new(RecordingSpawner::default());
    launcher.launch(exe.path()).unwrap();
    assert_eq!(*launcher.spawner().calls.borrow(), vec![exe.path().to_path_buf()]);
}

#[test]
fn spawn_failure_carries_message() {
    let exe = NamedTempFile::new().unwrap();
    let launcher = ProcessLauncher::new(RecordingSpawner {
        fail: true,
        ..Default::default()
    });
    match launcher.launch(exe.path()) {
        Err(LaunchError::Spawn { path, message }) => {
            assert_eq!(path, exe.path());
            assert!(message.contains("access denied"));
        }
        other => panic!("expected spawn error, got {:?}", other),
    }
}

#[test]
fn not_found_message_names_the_path() {
    let err = LaunchError::NotFound(PathBuf::from("/games/missing.exe"));
    assert!(err.to_string().contains("missing.exe"));
}
