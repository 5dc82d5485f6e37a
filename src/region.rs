use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// A region of bytes that can be loaded as a program image
pub trait Region {
  fn bytes(&self) -> &[u8];
}

/// A `Chunk` is a single headerless program image; every byte of it is copied
/// into memory starting at the program address
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Chunk {
  bytes: Vec<u8>,
}

impl Chunk {
  /// Read a whole image from any reader.
  pub fn read_from<R>(reader: &mut R) -> io::Result<Self>
  where
    R: Read,
  {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(Self { bytes })
  }

  /// Read a whole image from a file on disk.
  pub fn open<P>(path: P) -> io::Result<Self>
  where
    P: AsRef<Path>,
  {
    fs::read(path).map(|bytes| Self { bytes })
  }

  pub fn len(&self) -> usize {
    self.bytes.len()
  }

  pub fn is_empty(&self) -> bool {
    self.bytes.is_empty()
  }
}

impl From<Vec<u8>> for Chunk {
  fn from(bytes: Vec<u8>) -> Self {
    Self { bytes }
  }
}

impl From<&[u8]> for Chunk {
  fn from(bytes: &[u8]) -> Self {
    Self {
      bytes: bytes.to_vec(),
    }
  }
}

impl Region for Chunk {
  fn bytes(&self) -> &[u8] {
    &self.bytes
  }
}

impl Region for [u8] {
  fn bytes(&self) -> &[u8] {
    self
  }
}

impl<const N: usize> Region for [u8; N] {
  fn bytes(&self) -> &[u8] {
    self
  }
}
