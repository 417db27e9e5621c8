//! Command-line overlay for existing options.

use tracing::debug;

use crate::IniFile;

impl IniFile {
    /// Overlay `-name=value` or `--name=value` arguments onto registered
    /// options.
    ///
    /// Each argument is trimmed and must start with `-` or `--` followed by
    /// `name=value` with no surrounding spaces. Names are matched
    /// case-insensitively and the value is taken verbatim, without further
    /// trimming. Arguments that do not fit the shape, and names that are not
    /// registered, are skipped; the overlay never creates options.
    ///
    /// ```rust
    /// use inifile::IniFile;
    ///
    /// # fn main() -> inifile::IniResult<()> {
    /// let mut ini = IniFile::with_option("wdw_xsize", Some("800"), None)?;
    /// ini.apply_command_line(["--wdw_xsize=1024", "--unknown=1"]);
    /// assert_eq!(ini.value("wdw_xsize"), Some("1024"));
    /// assert!(!ini.contains("unknown"));
    /// # Ok(())
    /// # }
    /// ```
    pub fn apply_command_line<I, S>(&mut self, args: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for arg in args {
            let arg = arg.as_ref().trim();
            let Some(stripped) = arg.strip_prefix("--").or_else(|| arg.strip_prefix('-')) else {
                continue;
            };
            let Some((name, value)) = stripped.split_once('=') else {
                debug!(arg, "skipping command-line argument without '='");
                continue;
            };
            if let Some(option) = self.get_mut(name) {
                option.set_value(Some(value.to_owned()));
            } else {
                debug!(name, "ignoring unknown command-line option");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use anyhow::{Result, ensure};

    fn populated() -> Result<IniFile> {
        let mut store = IniFile::new();
        store.add_option("wdw_xsize", Some("800"), None)?;
        store.add_option("language", Some("de"), None)?;
        Ok(store)
    }

    #[test]
    fn overwrites_existing_options_only() -> Result<()> {
        let mut store = populated()?;
        store.apply_command_line(["--wdw_xsize=1024", "--unknown=1"]);
        ensure!(store.value("wdw_xsize") == Some("1024"));
        ensure!(!store.contains("unknown"));
        ensure!(store.len() == 2);
        Ok(())
    }

    #[test]
    fn accepts_single_and_double_dashes() -> Result<()> {
        let mut store = populated()?;
        store.apply_command_line(["-wdw_xsize=640", "--language=fr"]);
        ensure!(store.value("wdw_xsize") == Some("640"));
        ensure!(store.value("language") == Some("fr"));
        Ok(())
    }

    #[test]
    fn ignores_arguments_without_a_dash_or_pair() -> Result<()> {
        let mut store = populated()?;
        store.apply_command_line(["wdw_xsize=1024", "--language", "-", ""]);
        ensure!(store.value("wdw_xsize") == Some("800"));
        ensure!(store.value("language") == Some("de"));
        Ok(())
    }

    #[test]
    fn values_are_taken_verbatim() -> Result<()> {
        let mut store = populated()?;
        // The argument as a whole is trimmed, but the value side is not.
        store.apply_command_line(["  --language= fr"]);
        ensure!(store.value("language") == Some(" fr"));
        Ok(())
    }

    #[test]
    fn names_fold_for_matching() -> Result<()> {
        let mut store = populated()?;
        store.apply_command_line(["--LANGUAGE=es"]);
        ensure!(store.value("language") == Some("es"));
        Ok(())
    }
}
