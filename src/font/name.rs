//! Family name extraction from the sfnt `name` table
//!
//! Reads nothing but the offset table, the table directory and the `name`
//! table itself, so it works on any TrueType/OpenType buffer without a font
//! rendering library. All reads are bounds-checked; malformed input yields
//! `None` rather than a panic.

use log::{debug, trace};
use crate::error::{NameError, NameErrorSource};
use super::encoding::decode_for_platform;
use super::reader::FontReader;
use super::sfnt::SfntHeader;

pub const NAME_TAG: &[u8; 4] = b"name";

pub const PLATFORM_MACINTOSH: u16 = 1;
pub const PLATFORM_WINDOWS: u16 = 3;

/// Windows language ID for US English
pub const LANGUAGE_EN_US: u16 = 0x0409;
/// Unspecified on Windows, English on Macintosh
pub const LANGUAGE_DEFAULT: u16 = 0;

pub mod name_id {
    pub const FAMILY: u16 = 1;
    pub const FULL_NAME: u16 = 4;
}

const NAME_HEADER_SIZE: usize = 6;
const NAME_RECORD_SIZE: usize = 12;

/// Return the best human-readable family name stored in a font buffer.
///
/// Prefers the English family name (name ID 1) and falls back to the full
/// font name (name ID 4). Never panics; any malformed structure gives `None`.
pub fn extract_family_name(data: &[u8]) -> Option<String> {
    match try_extract_family_name(data) {
        Ok(name) => Some(name),
        Err(err) => {
            debug!("No family name extracted: {}", err);
            None
        }
    }
}

/// Like [`extract_family_name`], but reports why nothing was found.
pub fn try_extract_family_name(data: &[u8]) -> Result<String, NameError> {
    let reader = FontReader::new(data);
    let header = SfntHeader::parse(&reader)?;
    let entry = header
        .find_table(&reader, NAME_TAG)?
        .ok_or(NameError::MissingTable)?;
    trace!(
        "{} font: found {} table at offset {} ({} bytes)",
        header.signature,
        entry.tag_str(),
        entry.offset,
        entry.length
    );
    let table = NameTable::parse(reader, entry.offset as usize)?;

    let mut family = None;
    let mut full_name = None;

    for record in table.records() {
        let record = record?;
        if !record.is_english() {
            continue;
        }

        let slot = match record.name_id {
            name_id::FAMILY => &mut family,
            name_id::FULL_NAME => &mut full_name,
            _ => continue,
        };

        match table.decode(&record) {
            Some(name) => *slot = Some(name),
            None => trace!(
                "Skipping undecodable name record (platform {}, name ID {})",
                record.platform_id,
                record.name_id
            ),
        }
    }

    family
        .filter(|name| !name.is_empty())
        .or_else(|| full_name.filter(|name| !name.is_empty()))
        .ok_or(NameError::NoCandidate)
}

/// Corresponds to the `name` table header
/// <https://learn.microsoft.com/en-us/typography/opentype/spec/name>
#[derive(Clone, Copy)]
pub struct NameTable<'a> {
    reader: FontReader<'a>,
    offset: usize,
    pub format: u16,
    pub count: u16,
    pub storage_offset: u16,
}

impl<'a> NameTable<'a> {
    pub fn parse(reader: FontReader<'a>, offset: usize) -> Result<Self, NameError> {
        let truncated = NameError::Truncated(NameErrorSource::NameTable);

        let format = reader.read_u16(offset).ok_or(truncated)?;
        let count = reader.read_u16(offset.checked_add(2).ok_or(truncated)?).ok_or(truncated)?;
        let storage_offset = reader
            .read_u16(offset.checked_add(4).ok_or(truncated)?)
            .ok_or(truncated)?;

        if format > 1 {
            debug!("Unexpected name table format {}", format);
        }

        Ok(Self {
            reader,
            offset,
            format,
            count,
            storage_offset,
        })
    }

    /// Records in table order. Stops being useful at the first truncated one.
    pub fn records(&self) -> impl Iterator<Item = Result<NameRecord, NameError>> + 'a {
        let reader = self.reader;
        let first = self.offset.checked_add(NAME_HEADER_SIZE);

        (0..self.count as usize).map(move |index| {
            first
                .and_then(|base| base.checked_add(index * NAME_RECORD_SIZE))
                .and_then(|base| NameRecord::parse(&reader, base))
                .ok_or(NameError::Truncated(NameErrorSource::NameRecord))
        })
    }

    /// Raw string bytes for a record, if they lie inside the buffer
    pub fn string_bytes(&self, record: &NameRecord) -> Option<&'a [u8]> {
        let start = self
            .offset
            .checked_add(self.storage_offset as usize)?
            .checked_add(record.offset as usize)?;
        self.reader.slice(start, record.length as usize)
    }

    pub fn decode(&self, record: &NameRecord) -> Option<String> {
        decode_for_platform(record.platform_id, self.string_bytes(record)?)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameRecord {
    pub platform_id: u16,
    pub encoding_id: u16,
    pub language_id: u16,
    pub name_id: u16,
    pub length: u16,
    pub offset: u16,
}

impl NameRecord {
    pub fn parse(reader: &FontReader<'_>, base: usize) -> Option<Self> {
        let field = |index: usize| reader.read_u16(base.checked_add(index * 2)?);

        Some(Self {
            platform_id: field(0)?,
            encoding_id: field(1)?,
            language_id: field(2)?,
            name_id: field(3)?,
            length: field(4)?,
            offset: field(5)?,
        })
    }

    // Language 0 is "unspecified" on Windows but "English" on Macintosh; both
    // are accepted regardless of platform.
    pub fn is_english(&self) -> bool {
        self.language_id == LANGUAGE_EN_US || self.language_id == LANGUAGE_DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::test_support::{FontBuilder, Record};

    #[test]
    fn short_or_unknown_buffers_are_absent() {
        assert_eq!(extract_family_name(b""), None);
        assert_eq!(extract_family_name(b"\x00\x01\x00"), None);
        assert_eq!(extract_family_name(b"GIF89a........"), None);
        assert_eq!(
            try_extract_family_name(b"wOFF\x00\x01\x00\x00"),
            Err(NameError::UnrecognizedFormat)
        );
    }

    #[test]
    fn windows_family_name() {
        let font = FontBuilder::new()
            .record(Record::windows(name_id::FAMILY, "Bartex"))
            .build();

        assert_eq!(extract_family_name(&font).as_deref(), Some("Bartex"));
    }

    #[test]
    fn falls_back_to_full_name() {
        let font = FontBuilder::new()
            .record(Record::windows(2, "Regular"))
            .record(Record::windows(name_id::FULL_NAME, "Bartex Regular"))
            .build();

        assert_eq!(extract_family_name(&font).as_deref(), Some("Bartex Regular"));
    }

    #[test]
    fn empty_family_name_uses_full_name() {
        let font = FontBuilder::new()
            .record(Record::windows(name_id::FAMILY, ""))
            .record(Record::windows(name_id::FULL_NAME, "Bartex Bold"))
            .build();

        assert_eq!(extract_family_name(&font).as_deref(), Some("Bartex Bold"));
    }

    #[test]
    fn missing_name_table() {
        let font = FontBuilder::new()
            .table_tag(*b"post")
            .record(Record::windows(name_id::FAMILY, "Bartex"))
            .build();

        assert_eq!(try_extract_family_name(&font), Err(NameError::MissingTable));
        assert_eq!(extract_family_name(&font), None);
    }

    #[test]
    fn name_table_found_after_other_tables() {
        let font = FontBuilder::new()
            .leading_tables(3)
            .record(Record::windows(name_id::FAMILY, "Bartex"))
            .build();

        assert_eq!(extract_family_name(&font).as_deref(), Some("Bartex"));
    }

    #[test]
    fn last_matching_record_wins() {
        let font = FontBuilder::new()
            .record(Record::mac(name_id::FAMILY, b"Mac Family"))
            .record(Record::windows(name_id::FAMILY, "Win Family"))
            .build();

        assert_eq!(extract_family_name(&font).as_deref(), Some("Win Family"));
    }

    #[test]
    fn undecodable_record_keeps_previous_candidate() {
        let font = FontBuilder::new()
            .record(Record::windows(name_id::FAMILY, "Bartex"))
            .record(Record::raw(PLATFORM_WINDOWS, LANGUAGE_EN_US, name_id::FAMILY, &[0xD8, 0x00]))
            .build();

        assert_eq!(extract_family_name(&font).as_deref(), Some("Bartex"));
    }

    #[test]
    fn filters_languages_and_platforms() {
        let font = FontBuilder::new()
            .record(Record::raw(PLATFORM_WINDOWS, 0x0407, name_id::FAMILY, &utf16("Deutsch")))
            .record(Record::raw(0, LANGUAGE_DEFAULT, name_id::FAMILY, &utf16("Unicode")))
            .record(Record::windows(name_id::FULL_NAME, "Bartex Regular"))
            .build();

        assert_eq!(extract_family_name(&font).as_deref(), Some("Bartex Regular"));
    }

    #[test]
    fn mac_roman_family_name() {
        let font = FontBuilder::new()
            .signature(*b"true")
            .record(Record::mac(name_id::FAMILY, b"Caf\x8E"))
            .build();

        assert_eq!(extract_family_name(&font).as_deref(), Some("Café"));
    }

    #[test]
    fn odd_length_windows_string_falls_back_to_utf8() {
        let font = FontBuilder::new()
            .record(Record::raw(PLATFORM_WINDOWS, LANGUAGE_EN_US, name_id::FAMILY, b"Bar"))
            .build();

        assert_eq!(extract_family_name(&font).as_deref(), Some("Bar"));
    }

    #[test]
    fn string_offset_past_end_is_skipped() {
        let font = FontBuilder::new()
            .record(Record::windows(name_id::FAMILY, "Bartex").offset_override(0xFFF0))
            .build();

        assert_eq!(try_extract_family_name(&font), Err(NameError::NoCandidate));
        assert_eq!(extract_family_name(&font), None);
    }

    #[test]
    fn bad_candidate_does_not_hide_good_fallback() {
        let font = FontBuilder::new()
            .record(Record::windows(name_id::FAMILY, "Bartex").offset_override(0xFFF0))
            .record(Record::windows(name_id::FULL_NAME, "Bartex Regular"))
            .build();

        assert_eq!(extract_family_name(&font).as_deref(), Some("Bartex Regular"));
    }

    #[test]
    fn truncated_records_are_absent() {
        let mut font = FontBuilder::new()
            .record(Record::windows(name_id::FAMILY, "Bartex"))
            .build();
        let table = FontBuilder::name_table_offset(1);
        // claim far more records than the buffer holds
        font[table + 2..table + 4].copy_from_slice(&500u16.to_be_bytes());

        assert_eq!(
            try_extract_family_name(&font),
            Err(NameError::Truncated(NameErrorSource::NameRecord))
        );
    }

    #[test]
    fn table_offset_past_end_is_absent() {
        let mut font = FontBuilder::new()
            .record(Record::windows(name_id::FAMILY, "Bartex"))
            .build();
        // directory entry offset field
        font[20..24].copy_from_slice(&u32::MAX.to_be_bytes());

        assert_eq!(
            try_extract_family_name(&font),
            Err(NameError::Truncated(NameErrorSource::NameTable))
        );
    }

    #[test]
    fn repeated_extraction_is_stable() {
        let font = FontBuilder::new()
            .signature(*b"OTTO")
            .record(Record::windows(name_id::FAMILY, "Bartex"))
            .build();
        let before = font.clone();

        let first = extract_family_name(&font);
        let second = extract_family_name(&font);

        assert_eq!(first, second);
        assert_eq!(font, before);
    }

    fn utf16(text: &str) -> Vec<u8> {
        text.encode_utf16().flat_map(u16::to_be_bytes).collect()
    }
}
