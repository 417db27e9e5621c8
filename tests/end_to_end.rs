//! End-to-end scenarios: hand-written files, command-line overlays, the
//! home-directory fallback and store serialization.

mod common;

use std::fs;

use anyhow::{Result, ensure};
use inifile::{IniFile, IniOption};

use common::utf8_path;

#[test]
fn reads_a_hand_written_file_into_an_empty_store() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = utf8_path(&dir)?.join("options.ini");
    fs::write(&path, "# window width\nwdw_xsize = 800\n")?;

    let mut store = IniFile::new();
    store.read_from(&path, false)?;
    ensure!(store.value("WDW_XSIZE") == Some("800"));
    ensure!(store.get("wdw_xsize").and_then(IniOption::description) == Some("window width"));

    store.apply_command_line(["--wdw_xsize=1024", "--unknown=1"]);
    ensure!(store.value("wdw_xsize") == Some("1024"));
    ensure!(!store.contains("unknown"));
    Ok(())
}

#[test]
fn strict_reads_leave_hand_edited_noise_behind() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = utf8_path(&dir)?.join("options.ini");
    fs::write(
        &path,
        "# window width\nwdw_xsize = 1024\n\na = b = c\nnot a pair\nunknown = 1\n",
    )?;

    let mut store = IniFile::new();
    store.add_option("wdw_xsize", Some("800"), None)?;
    store.add_option("a", Some("kept"), None)?;
    store.read_from(&path, true)?;

    ensure!(store.value("wdw_xsize") == Some("1024"));
    ensure!(store.value("a") == Some("kept"), "a malformed line must not update");
    ensure!(!store.contains("unknown"));
    ensure!(store.len() == 2);
    Ok(())
}

#[cfg(unix)]
mod home_fallback {
    use super::*;

    use serial_test::serial;

    /// Restores `HOME` to its prior value on drop.
    struct HomeGuard {
        original: Option<std::ffi::OsString>,
    }

    fn set_home(path: &std::path::Path) -> HomeGuard {
        let original = std::env::var_os("HOME");
        // SAFETY: `#[serial]` keeps tests that mutate the environment from
        // running concurrently.
        unsafe { std::env::set_var("HOME", path) };
        HomeGuard { original }
    }

    impl Drop for HomeGuard {
        fn drop(&mut self) {
            match self.original.take() {
                // SAFETY: see `set_home`.
                Some(value) => unsafe { std::env::set_var("HOME", value) },
                None => unsafe { std::env::remove_var("HOME") },
            }
        }
    }

    #[test]
    #[serial]
    fn relative_paths_fall_back_to_the_home_directory() -> Result<()> {
        let home = tempfile::tempdir()?;
        fs::write(home.path().join("fallback_options.ini"), "speed = 9600\n")?;
        let _guard = set_home(home.path());

        let mut store = IniFile::with_option("speed", None, None)?;
        store.read_from("fallback_options.ini", true)?;
        ensure!(store.value("speed") == Some("9600"));
        let remembered = store
            .path()
            .is_some_and(|p| p.as_str().ends_with("fallback_options.ini"));
        ensure!(remembered, "the resolved fallback path must be remembered");
        Ok(())
    }
}

mod relative_reads {
    use super::*;

    use serial_test::serial;

    /// Restores the working directory on drop.
    struct CwdGuard {
        original: std::path::PathBuf,
    }

    fn set_cwd(path: &std::path::Path) -> Result<CwdGuard> {
        let original = std::env::current_dir()?;
        std::env::set_current_dir(path)?;
        Ok(CwdGuard { original })
    }

    impl Drop for CwdGuard {
        fn drop(&mut self) {
            if std::env::set_current_dir(&self.original).is_err() {
                // The original directory is gone; nothing left to restore.
            }
        }
    }

    #[test]
    #[serial]
    fn a_relative_read_remembers_an_absolute_default_path() -> Result<()> {
        let dir = tempfile::tempdir()?;
        fs::write(dir.path().join("options.ini"), "speed = 9600\n")?;
        let _guard = set_cwd(dir.path())?;

        let mut store = IniFile::with_option("speed", None, None)?;
        store.read_from("options.ini", true)?;
        ensure!(store.value("speed") == Some("9600"));

        let path = store
            .path()
            .ok_or_else(|| anyhow::anyhow!("no default path remembered"))?;
        ensure!(path.is_absolute(), "remembered path must be absolute, got '{path}'");
        ensure!(path.as_str().ends_with("options.ini"));
        Ok(())
    }
}

#[test]
fn stores_serialize_as_opaque_objects() -> Result<()> {
    let mut store = IniFile::with_option("wdw_xsize", Some("800"), Some("window width"))?;
    store.set_path("/tmp/options.ini");

    let json = serde_json::to_string(&store)?;
    let restored: IniFile = serde_json::from_str(&json)?;
    ensure!(restored.value("wdw_xsize") == Some("800"));
    ensure!(
        restored.get("wdw_xsize").and_then(IniOption::description) == Some("window width")
    );
    ensure!(restored.path().map(camino::Utf8Path::as_str) == Some("/tmp/options.ini"));
    Ok(())
}
