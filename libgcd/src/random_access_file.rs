use crate::error::*;

/// Interface to a fixed-size byte store that supports random access.
///
/// The image is assembled by placing each region at its absolute offset,
/// so everything that lays out the image goes through this trait
/// instead of appending to a stream.
pub trait RandomAccessFile {
    /// Writes bytes to position `pos` from `buf`. The lenth is determined by `buf.len()`.
    fn write(&self, pos: usize, buf: &[u8]) -> Result<(), Error>;

    /// Returns the length of this file.
    fn len(&self) -> usize;
}

/// Writes `len` copies of `value` starting at `pos`.
pub fn fill(f: &dyn RandomAccessFile, pos: usize, len: usize, value: u8) -> Result<(), Error> {
    f.write(pos, &vec![value; len])
}
