/// Bounds-checked big-endian view over an immutable font buffer.
///
/// Every accessor returns `None` instead of panicking when the requested
/// range does not lie entirely inside the buffer.
#[derive(Clone, Copy)]
pub struct FontReader<'a> {
    data: &'a [u8],
}

impl<'a> FontReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    /// Borrow `length` bytes starting at `offset`.
    pub fn slice(&self, offset: usize, length: usize) -> Option<&'a [u8]> {
        let end = offset.checked_add(length)?;
        self.data.get(offset..end)
    }

    pub fn read_array<const N: usize>(&self, offset: usize) -> Option<[u8; N]> {
        self.slice(offset, N)?.try_into().ok()
    }

    pub fn read_u16(&self, offset: usize) -> Option<u16> {
        self.read_array(offset).map(u16::from_be_bytes)
    }

    pub fn read_u32(&self, offset: usize) -> Option<u32> {
        self.read_array(offset).map(u32::from_be_bytes)
    }

    pub fn read_tag(&self, offset: usize) -> Option<[u8; 4]> {
        self.read_array(offset)
    }
}
