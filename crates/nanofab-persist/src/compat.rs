use crate::error::PersistError;
use crate::format::{SnapshotHeader, FORMAT_VERSION, MAGIC};

/// Validate a snapshot header and return any compatibility warnings.
///
/// Unknown flag bits produce a warning, not an error.
pub fn validate_header(header: &SnapshotHeader) -> Result<Vec<String>, PersistError> {
    if header.magic != MAGIC {
        return Err(PersistError::InvalidMagic);
    }

    if header.version != FORMAT_VERSION {
        return Err(PersistError::UnsupportedVersion(header.version));
    }

    let mut warnings = Vec::new();

    let known = crate::format::FLAG_HAS_MASK | crate::format::FLAG_COMPLETED;
    if header.flags & !known != 0 {
        warnings.push(format!(
            "Snapshot carries unknown flags {:#06x}; they will be ignored.",
            header.flags & !known
        ));
    }

    Ok(warnings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_header(flags: u16) -> SnapshotHeader {
        SnapshotHeader {
            magic: MAGIC,
            version: FORMAT_VERSION,
            flags,
            payload_len: 0,
            _reserved: 0,
        }
    }

    #[test]
    fn test_valid_header_no_warnings() {
        let warnings = validate_header(&test_header(0x0003)).expect("should succeed");
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_unknown_flags_warn() {
        let warnings = validate_header(&test_header(0x8001)).expect("should succeed");
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("unknown flags"));
    }

    #[test]
    fn test_invalid_magic_rejected() {
        let mut header = test_header(0);
        header.magic = *b"NOPE";
        let result = validate_header(&header);
        assert!(matches!(result, Err(PersistError::InvalidMagic)));
    }

    #[test]
    fn test_unsupported_version_rejected() {
        let mut header = test_header(0);
        header.version = 99;
        let result = validate_header(&header);
        assert!(matches!(result, Err(PersistError::UnsupportedVersion(99))));
    }
}
