//! Builds minimal sfnt buffers holding only a `name` table

use super::name::{LANGUAGE_DEFAULT, LANGUAGE_EN_US, PLATFORM_MACINTOSH, PLATFORM_WINDOWS};

pub struct Record {
    platform_id: u16,
    language_id: u16,
    name_id: u16,
    bytes: Vec<u8>,
    offset_override: Option<u16>,
}

impl Record {
    pub fn windows(name_id: u16, text: &str) -> Self {
        let bytes = text.encode_utf16().flat_map(u16::to_be_bytes).collect::<Vec<u8>>();
        Self::raw(PLATFORM_WINDOWS, LANGUAGE_EN_US, name_id, &bytes)
    }

    pub fn mac(name_id: u16, bytes: &[u8]) -> Self {
        Self::raw(PLATFORM_MACINTOSH, LANGUAGE_DEFAULT, name_id, bytes)
    }

    pub fn raw(platform_id: u16, language_id: u16, name_id: u16, bytes: &[u8]) -> Self {
        Self {
            platform_id,
            language_id,
            name_id,
            bytes: bytes.to_vec(),
            offset_override: None,
        }
    }

    pub fn offset_override(mut self, offset: u16) -> Self {
        self.offset_override = Some(offset);
        self
    }
}

pub struct FontBuilder {
    signature: [u8; 4],
    table_tag: [u8; 4],
    leading_tables: usize,
    records: Vec<Record>,
}

impl FontBuilder {
    pub fn new() -> Self {
        Self {
            signature: [0x00, 0x01, 0x00, 0x00],
            table_tag: *b"name",
            leading_tables: 0,
            records: Vec::new(),
        }
    }

    pub fn signature(mut self, signature: [u8; 4]) -> Self {
        self.signature = signature;
        self
    }

    /// Tag used for the directory entry pointing at the name data
    pub fn table_tag(mut self, tag: [u8; 4]) -> Self {
        self.table_tag = tag;
        self
    }

    /// Empty directory entries placed before the name entry
    pub fn leading_tables(mut self, count: usize) -> Self {
        self.leading_tables = count;
        self
    }

    pub fn record(mut self, record: Record) -> Self {
        self.records.push(record);
        self
    }

    /// Where `build` places the name table for a directory of `num_tables`
    pub fn name_table_offset(num_tables: usize) -> usize {
        12 + num_tables * 16
    }

    pub fn build(self) -> Vec<u8> {
        const FILLER_TAGS: [&[u8; 4]; 4] = [b"OS/2", b"cmap", b"head", b"hhea"];

        let num_tables = self.leading_tables + 1;
        let table_offset = Self::name_table_offset(num_tables);

        let mut storage = Vec::new();
        let mut record_bytes = Vec::new();
        for record in &self.records {
            let offset = record.offset_override.unwrap_or(storage.len() as u16);
            for value in [
                record.platform_id,
                if record.platform_id == PLATFORM_WINDOWS { 1 } else { 0 },
                record.language_id,
                record.name_id,
                record.bytes.len() as u16,
                offset,
            ] {
                record_bytes.extend_from_slice(&value.to_be_bytes());
            }
            storage.extend_from_slice(&record.bytes);
        }

        let mut table = Vec::new();
        table.extend_from_slice(&0u16.to_be_bytes());
        table.extend_from_slice(&(self.records.len() as u16).to_be_bytes());
        table.extend_from_slice(&((6 + record_bytes.len()) as u16).to_be_bytes());
        table.extend_from_slice(&record_bytes);
        table.extend_from_slice(&storage);

        let mut data = self.signature.to_vec();
        data.extend_from_slice(&(num_tables as u16).to_be_bytes());
        data.extend_from_slice(&[0; 6]);
        for index in 0..self.leading_tables {
            data.extend_from_slice(FILLER_TAGS[index % FILLER_TAGS.len()]);
            data.extend_from_slice(&[0; 12]);
        }
        data.extend_from_slice(&self.table_tag);
        data.extend_from_slice(&[0; 4]);
        data.extend_from_slice(&(table_offset as u32).to_be_bytes());
        data.extend_from_slice(&(table.len() as u32).to_be_bytes());
        data.extend_from_slice(&table);
        data
    }
}
