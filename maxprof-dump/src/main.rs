//! Print the contents of a maxp record.
//!
//! The input is either a file holding just the table bytes, or a whole font
//! along with the `--offset` of the table (as listed in its table directory).
//! Set `RUST_LOG=debug` for more detail.

use std::path::Path;

use maxprof::{dump_table, FontData, MaxProfile};

fn main() -> Result<(), Error> {
    env_logger::init();
    let args = flags::Args::from_env().map_err(Error::new)?;
    let bytes = std::fs::read(&args.input)
        .map_err(|e| Error(format!("failed to read '{}': {e}", args.input.display())))?;

    let profile = decode_at(&bytes, args.offset)?;
    log::info!(
        "read maxp version {} from '{}'",
        profile.version,
        args.input.display()
    );

    if args.json {
        let json = serde_json::to_string_pretty(&profile).map_err(Error::new)?;
        println!("{json}");
    } else {
        print!("{}", profile.describe());
    }

    if let Some(path) = &args.output {
        write_profile(&profile, path)?;
    }
    Ok(())
}

/// Decode the record, either from the whole input or from the 32 bytes at `offset`.
fn decode_at(bytes: &[u8], offset: Option<usize>) -> Result<MaxProfile, Error> {
    let data = FontData::new(bytes);
    let table = match offset {
        None => data,
        Some(offset) => data.slice_len(offset, MaxProfile::len()).ok_or_else(|| {
            Error(format!(
                "no room for a maxp table at offset {offset} in {} bytes",
                data.len()
            ))
        })?,
    };
    MaxProfile::decode(table.as_bytes()).map_err(Error::new)
}

fn write_profile(profile: &MaxProfile, path: &Path) -> Result<(), Error> {
    let bytes = dump_table(profile);
    std::fs::write(path, &bytes)
        .map_err(|e| Error(format!("failed to write '{}': {e}", path.display())))?;
    log::info!("wrote {} bytes to '{}'", bytes.len(), path.display());
    Ok(())
}

#[derive(Debug, Clone)]
struct Error(String);

impl Error {
    fn new(t: impl std::fmt::Display) -> Self {
        Self(t.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for Error {}

mod flags {
    use std::path::PathBuf;

    xflags::xflags! {
        /// Print the fields of a maxp record
        cmd args {
            /// A file holding the table, or a font when used with --offset
            required input: PathBuf
            /// Byte offset of the table within the input
            optional -o, --offset offset: usize
            /// Print the record as json
            optional -j, --json
            /// Write the re-encoded record to this path
            optional -w, --output output: PathBuf
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_input_must_be_the_table() {
        let bytes = MaxProfile::default().encode();
        assert_eq!(decode_at(&bytes, None).unwrap(), MaxProfile::default());

        let err = decode_at(&bytes[..31], None).unwrap_err();
        assert_eq!(err.to_string(), "Bad size for maxp table (31 bytes)");
    }

    #[test]
    fn offset_into_font() {
        let mut profile = MaxProfile::default();
        profile.num_glyphs = 42;
        let mut font = vec![0u8; 8];
        font.extend_from_slice(&profile.encode());
        font.extend_from_slice(&[0xFF; 8]);

        assert_eq!(decode_at(&font, Some(8)).unwrap(), profile);
        assert!(decode_at(&font, Some(20)).is_err());
        assert!(decode_at(&font, Some(usize::MAX)).is_err());
    }
}
