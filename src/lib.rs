//! An ordered, case-insensitive option store that round-trips an ini-style
//! text file.
//!
//! The file format is line oriented: `name = value` pairs with `#`-prefixed
//! comment lines. A comment on the line immediately preceding an option line
//! (no blank line between them) becomes that option's description and is
//! written back out the same way. Neither a name nor a value may contain an
//! equals sign; lines that break the format are tolerated and skipped.
//!
//! Typical use: construct an [`IniFile`], pre-register the options the
//! application understands together with their defaults and descriptions,
//! read the ini file over them, optionally overlay `-name=value` command-line
//! arguments, and write the store back out when the application exits.
//!
//! ```rust
//! use inifile::IniFile;
//!
//! # fn main() -> inifile::IniResult<()> {
//! let mut ini = IniFile::new();
//! ini.add_option("wdw_xsize", Some("800"), Some("window width"))?;
//!
//! // Names are matched case-insensitively.
//! assert_eq!(ini.value("WDW_XSIZE"), Some("800"));
//! assert_eq!(ini.int_value("wdw_xsize", 640), 800);
//! # Ok(())
//! # }
//! ```

mod cmdline;
mod error;
mod file;
mod option;
mod store;

pub use error::{IniFileError, IniResult};
pub use option::IniOption;
pub use store::IniFile;
