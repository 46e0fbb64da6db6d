use std::fmt;
use crate::error::{NameError, NameErrorSource};
use super::reader::FontReader;

/// Size of the fixed part of the offset table preceding the table directory
const HEADER_SIZE: usize = 12;
/// Size of one table directory entry
const TABLE_RECORD_SIZE: usize = 16;

/// The sfnt version tags accepted at the start of a font file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signature {
    /// `0x00010000`
    TrueType,
    /// `OTTO`, CFF outlines
    OpenTypeCff,
    /// `true`, legacy Apple TrueType
    AppleTrueType,
    /// `typ1`, legacy PostScript wrapped in sfnt
    PostScript,
}

impl Signature {
    pub fn from_bytes(bytes: [u8; 4]) -> Option<Self> {
        match &bytes {
            [0x00, 0x01, 0x00, 0x00] => Some(Signature::TrueType),
            b"OTTO" => Some(Signature::OpenTypeCff),
            b"true" => Some(Signature::AppleTrueType),
            b"typ1" => Some(Signature::PostScript),
            _ => None,
        }
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Signature::TrueType => write!(f, "TrueType"),
            Signature::OpenTypeCff => write!(f, "OpenType (CFF)"),
            Signature::AppleTrueType => write!(f, "Apple TrueType"),
            Signature::PostScript => write!(f, "PostScript (typ1)"),
        }
    }
}

/// Check only the magic bytes at the start of a buffer
pub fn has_font_signature(data: &[u8]) -> bool {
    FontReader::new(data)
        .read_tag(0)
        .and_then(Signature::from_bytes)
        .is_some()
}

/// The offset table at the start of an sfnt file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SfntHeader {
    pub signature: Signature,
    pub num_tables: u16,
}

impl SfntHeader {
    pub fn parse(reader: &FontReader<'_>) -> Result<Self, NameError> {
        let magic = reader.read_tag(0).ok_or(NameError::UnrecognizedFormat)?;
        let signature = Signature::from_bytes(magic).ok_or(NameError::UnrecognizedFormat)?;
        let num_tables = reader
            .read_u16(4)
            .ok_or(NameError::Truncated(NameErrorSource::SfntHeader))?;

        Ok(Self { signature, num_tables })
    }

    /// Walk the table directory and return the first entry carrying `tag`.
    pub fn find_table(
        &self,
        reader: &FontReader<'_>,
        tag: &[u8; 4],
    ) -> Result<Option<TableRecord>, NameError> {
        for index in 0..self.num_tables as usize {
            let record = TableRecord::parse(reader, HEADER_SIZE + index * TABLE_RECORD_SIZE)?;
            if &record.tag == tag {
                return Ok(Some(record));
            }
        }
        Ok(None)
    }
}

/// One entry of the table directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableRecord {
    pub tag: [u8; 4],
    pub offset: u32,
    pub length: u32,
}

impl TableRecord {
    pub fn parse(reader: &FontReader<'_>, base: usize) -> Result<Self, NameError> {
        let truncated = NameError::Truncated(NameErrorSource::TableDirectory);

        // 4..8 checksum, 12..16 length (reads as 0 when cut off)
        let tag = reader.read_tag(base).ok_or(truncated)?;
        let offset = reader.read_u32(base + 8).ok_or(truncated)?;
        let length = reader.read_u32(base + 12).unwrap_or(0);

        Ok(Self { tag, offset, length })
    }

    pub fn tag_str(&self) -> String {
        String::from_utf8_lossy(&self.tag).into_owned()
    }
}
