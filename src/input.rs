//! Where the text handed to the parser comes from.

use crate::clipboard::read_clipboard;
use crate::{TreesketchError, templates};
use content_inspector::ContentType;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
#[cfg(feature = "logging")]
use tracing;

/// A source of tree text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
    Clipboard,
    /// A built-in template, by name.
    Template(String),
}

/// Reads the text of `source`, with a leading BOM removed and line endings normalized to `\n`.
///
/// # Errors
///
/// I/O failures, binary file or stdin content, clipboard failures and unknown template names.
pub fn read_input(source: &InputSource) -> Result<String, TreesketchError> {
    #[cfg(feature = "logging")]
    tracing::debug!("Reading input from {:?}", source);
    let text = match source {
        InputSource::Stdin => {
            let origin = Path::new("<stdin>");
            let mut bytes = Vec::new();
            io::stdin()
                .lock()
                .read_to_end(&mut bytes)
                .map_err(|e| TreesketchError::io(origin, e))?;
            decode(&bytes, origin)?
        }
        InputSource::File(path) => {
            let bytes = fs::read(path).map_err(|e| TreesketchError::io(path, e))?;
            decode(&bytes, path)?
        }
        InputSource::Clipboard => read_clipboard()?,
        InputSource::Template(name) => templates::require(name)?.to_string(),
    };
    Ok(clean_text(&text))
}

/// Decodes UTF-8 or BOM-marked UTF-16 text; anything binary is rejected.
pub(crate) fn decode(bytes: &[u8], origin: &Path) -> Result<String, TreesketchError> {
    match content_inspector::inspect(bytes) {
        ContentType::BINARY => Err(TreesketchError::BinaryInput(origin.to_path_buf())),
        ContentType::UTF_16LE => Ok(decode_utf16(&bytes[2..], u16::from_le_bytes)),
        ContentType::UTF_16BE => Ok(decode_utf16(&bytes[2..], u16::from_be_bytes)),
        _ => Ok(String::from_utf8_lossy(bytes).into_owned()),
    }
}

fn decode_utf16(bytes: &[u8], unit: fn([u8; 2]) -> u16) -> String {
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| unit([pair[0], pair[1]]))
        .collect();
    String::from_utf16_lossy(&units)
}

fn clean_text(text: &str) -> String {
    text.strip_prefix('\u{feff}')
        .unwrap_or(text)
        .replace("\r\n", "\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bom_and_crlf_are_cleaned() {
        assert_eq!(clean_text("\u{feff}a/\r\nb.txt\r\n"), "a/\nb.txt\n");
    }

    #[test]
    fn utf16_is_decoded() {
        let mut bytes = vec![0xFF, 0xFE];
        for unit in "├── a".encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        assert_eq!(decode(&bytes, Path::new("t")).unwrap(), "├── a");
    }

    #[test]
    fn binary_is_rejected() {
        let err = decode(&[0x7F, b'E', b'L', b'F', 0, 0, 1], Path::new("a.out")).unwrap_err();
        assert!(matches!(err, TreesketchError::BinaryInput(p) if p == Path::new("a.out")));
    }

    #[test]
    fn templates_are_a_source() {
        let text = read_input(&InputSource::Template("react-vite".into())).unwrap();
        assert!(text.starts_with("my-app/"));
        assert!(matches!(
            read_input(&InputSource::Template("nope".into())),
            Err(TreesketchError::UnknownTemplate(_))
        ));
    }
}
