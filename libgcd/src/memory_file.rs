use crate::error::*;
use crate::random_access_file::*;
use std::cell::RefCell;

/// Implements `RandomAccessFile` as a simple Vec<u8>
pub struct MemoryFile {
    data: RefCell<Vec<u8>>,
}

impl MemoryFile {
    pub fn new(data: Vec<u8>) -> MemoryFile {
        MemoryFile {
            data: RefCell::new(data),
        }
    }

    /// Creates a zero-filled `MemoryFile` of length `len`.
    pub fn zeroed(len: usize) -> MemoryFile {
        MemoryFile::new(vec![0; len])
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.data.into_inner()
    }
}

impl RandomAccessFile for MemoryFile {
    fn write(&self, pos: usize, buf: &[u8]) -> Result<(), Error> {
        let mut data = self.data.borrow_mut();
        if pos + buf.len() > data.len() {
            return make_error(Error::OutOfBound);
        }
        data[pos..pos + buf.len()].copy_from_slice(buf);
        Ok(())
    }
    fn len(&self) -> usize {
        self.data.borrow().len()
    }
}

#[test]
fn test() {
    let file = MemoryFile::new(vec![9, 9, 9, 9, 9, 9, 9, 9, 9]);
    let buf = [1, 3, 5, 7];
    file.write(2, &buf).unwrap();
    file.write(4, &buf).unwrap();
    assert_eq!(file.len(), 9);
    assert!(file.write(7, &buf).is_err());
    assert!(MemoryFile::zeroed(0).write(0, &[]).is_ok());
    assert_eq!(file.into_inner(), vec![9, 9, 1, 3, 1, 3, 5, 7, 9]);
}
