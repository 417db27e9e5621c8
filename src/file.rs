//! Reading and writing the ini-style text file.
//!
//! The format is line oriented. An option is written as three lines: a `#`
//! comment carrying the description (a bare `#` when there is none), the
//! `name = value` pair, and a blank separator line. When reading, a comment
//! becomes the description of the option on the line immediately following
//! it; a blank or malformed line in between discards it.

use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use tracing::debug;

use crate::{IniFile, IniFileError, IniOption, IniResult};

impl IniFile {
    /// Read the default ini file over the store.
    ///
    /// Equivalent to [`IniFile::read_with`] with
    /// `option_must_pre_exist = true`.
    ///
    /// # Errors
    ///
    /// Returns [`IniFileError::NoDefaultPath`] when no default path is set,
    /// and otherwise any error [`IniFile::read_from`] can return.
    pub fn read(&mut self) -> IniResult<()> {
        self.read_with(true)
    }

    /// Read the default ini file over the store, choosing whether lines with
    /// unknown keys register new options.
    ///
    /// Equivalent to [`IniFile::read_from`] with the stored default path.
    ///
    /// # Errors
    ///
    /// Returns [`IniFileError::NoDefaultPath`] when no default path is set,
    /// and otherwise any error [`IniFile::read_from`] can return.
    pub fn read_with(&mut self, option_must_pre_exist: bool) -> IniResult<()> {
        let path = self
            .path()
            .ok_or(IniFileError::NoDefaultPath)?
            .to_path_buf();
        self.read_from(path, option_must_pre_exist)
    }

    /// Read an ini file over the store, merging its `name = value` lines
    /// into the registered options.
    ///
    /// If `path` does not exist and is relative, it is retried under the
    /// user's home directory before the read fails; an absolute path that
    /// does not exist is reported as missing straight away. The resolved
    /// path, made absolute, becomes the store's default path for later
    /// parameterless calls, so they keep targeting the same file if the
    /// working directory changes.
    ///
    /// Lines whose key matches a registered option update that option's
    /// value, and its description when a `#` comment immediately precedes
    /// the line. With `option_must_pre_exist` set, lines with unknown keys
    /// are ignored; otherwise they register new options. Malformed lines
    /// (no `=`, a second `=` in the value, an empty key) are skipped
    /// silently.
    ///
    /// # Errors
    ///
    /// Returns [`IniFileError::NotFound`] when the file cannot be located
    /// and [`IniFileError::Io`] when reading it fails.
    pub fn read_from(
        &mut self,
        path: impl AsRef<Utf8Path>,
        option_must_pre_exist: bool,
    ) -> IniResult<()> {
        let resolved = resolve_existing(path.as_ref())?;
        let data = fs::read_to_string(&resolved).map_err(|source| IniFileError::Io {
            path: resolved.clone(),
            source,
        })?;
        self.set_path(resolved);
        self.merge_lines(&data, option_must_pre_exist);
        Ok(())
    }

    /// Write all options to the default path.
    ///
    /// # Errors
    ///
    /// Returns [`IniFileError::NoDefaultPath`] when no default path is set,
    /// and otherwise any error [`IniFile::write_to`] can return.
    pub fn write(&self) -> IniResult<()> {
        let path = self.path().ok_or(IniFileError::NoDefaultPath)?;
        self.write_to(path)
    }

    /// Write all options to the default path, swallowing every failure.
    ///
    /// This is the best-effort persistence entry point: an unset default
    /// path or an I/O failure leaves the store untouched and is only logged.
    pub fn write_best_effort(&self) {
        if let Err(error) = self.write() {
            debug!(%error, "best-effort ini file write failed");
        }
    }

    /// Write all options to `path`, overwriting an existing file.
    ///
    /// Options are written in insertion order, each as a description
    /// comment, a `name = value` line and a blank line. An absent
    /// description is written as a bare `#`, which reads back as an empty
    /// description; an absent value is written as empty text.
    ///
    /// # Errors
    ///
    /// Returns [`IniFileError::Io`] when writing fails.
    pub fn write_to(&self, path: impl AsRef<Utf8Path>) -> IniResult<()> {
        let path = path.as_ref();
        let mut out = String::new();
        for option in self.iter() {
            match option.description() {
                Some(description) if !description.is_empty() => {
                    out.push_str("# ");
                    out.push_str(description);
                }
                _ => out.push('#'),
            }
            out.push('\n');
            out.push_str(option.name());
            out.push_str(" = ");
            out.push_str(option.value().unwrap_or_default());
            out.push_str("\n\n");
        }
        fs::write(path, out).map_err(|source| IniFileError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Merge ini-formatted text into the store, line by line, carrying a
    /// single-line description lookback.
    fn merge_lines(&mut self, data: &str, option_must_pre_exist: bool) {
        let mut pending_description: Option<String> = None;
        for raw in data.lines() {
            let line = raw.replace('\t', " ");
            let line = line.trim();
            if line.is_empty() {
                // A description never survives a blank line.
                pending_description = None;
                continue;
            }
            if let Some(comment) = line.strip_prefix('#') {
                pending_description = Some(comment.trim().to_owned());
                continue;
            }
            self.merge_option_line(line, pending_description.take(), option_must_pre_exist);
        }
    }

    fn merge_option_line(
        &mut self,
        line: &str,
        description: Option<String>,
        option_must_pre_exist: bool,
    ) {
        let Some((name, value)) = line.split_once('=') else {
            debug!(line, "skipping ini line without '='");
            return;
        };
        if value.contains('=') {
            debug!(line, "skipping ini line with a second '='");
            return;
        }
        let name = name.trim();
        if name.is_empty() {
            debug!(line, "skipping ini line with an empty option name");
            return;
        }
        let value = value.trim();
        if let Some(existing) = self.get_mut(name) {
            existing.set_value(Some(value.to_owned()));
            // Keep the previous description unless a comment preceded this line.
            if description.is_some() {
                existing.set_description(description);
            }
        } else if option_must_pre_exist {
            debug!(name, "ignoring unknown ini option");
        } else if let Ok(option) = IniOption::with_description(name, Some(value), description.as_deref())
        {
            self.add(option);
        }
    }
}

/// Resolve `path` to an existing file, retrying a relative path under the
/// user's home directory. The returned path is absolute, so it stays valid
/// as a remembered default path when the working directory changes.
///
/// The fallback deliberately applies to relative paths only: re-rooting an
/// absolute path under the home directory would not match what a caller
/// asked for.
fn resolve_existing(path: &Utf8Path) -> IniResult<Utf8PathBuf> {
    if path.exists() {
        return absolutize(path.to_path_buf());
    }
    if path.is_relative() {
        let fallback = dirs::home_dir()
            .and_then(|home| Utf8PathBuf::from_path_buf(home).ok())
            .map(|home| home.join(path))
            .filter(|candidate| candidate.exists());
        if let Some(found) = fallback {
            return Ok(found);
        }
    }
    Err(IniFileError::NotFound {
        path: path.to_path_buf(),
    })
}

/// Anchor a relative path to the current working directory.
fn absolutize(path: Utf8PathBuf) -> IniResult<Utf8PathBuf> {
    if path.is_absolute() {
        return Ok(path);
    }
    let cwd = std::env::current_dir().map_err(|source| IniFileError::Io {
        path: path.clone(),
        source,
    })?;
    match Utf8PathBuf::from_path_buf(cwd) {
        Ok(cwd) => Ok(cwd.join(path)),
        Err(cwd) => Err(IniFileError::Io {
            source: std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("current directory is not utf-8: {}", cwd.display()),
            ),
            path,
        }),
    }
}
