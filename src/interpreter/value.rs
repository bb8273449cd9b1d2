use std::fmt;

/// An owned string value.
///
/// Every value produced while lexing or evaluating a program is a `Buffer`.
/// The bytes are owned outright: duplicating, concatenating or repeating a
/// buffer always allocates fresh storage, so two buffers never share bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Buffer {
    bytes: Vec<u8>,
}

impl Buffer {
    /// Copies `bytes` into a newly owned buffer.
    ///
    /// Zero-length input is allowed and produces an empty buffer.
    ///
    /// # Example
    /// ```
    /// use strcalc::interpreter::value::Buffer;
    ///
    /// let buf = Buffer::new(b"123");
    /// assert_eq!(buf.as_bytes(), b"123");
    /// assert_eq!(buf.len(), 3);
    /// ```
    #[must_use]
    pub fn new(bytes: &[u8]) -> Self {
        Self { bytes: bytes.to_vec() }
    }

    /// Returns an independent deep copy of `self`.
    #[must_use]
    pub fn duplicate(&self) -> Self {
        self.clone()
    }

    /// Returns a new buffer holding `self` followed by `other`.
    ///
    /// Neither operand is modified.
    ///
    /// # Example
    /// ```
    /// use strcalc::interpreter::value::Buffer;
    ///
    /// let joined = Buffer::new(b"12").concat(&Buffer::new(b"34"));
    /// assert_eq!(joined.as_bytes(), b"1234");
    /// ```
    #[must_use]
    pub fn concat(&self, other: &Self) -> Self {
        let mut bytes = Vec::with_capacity(self.len() + other.len());
        bytes.extend_from_slice(&self.bytes);
        bytes.extend_from_slice(&other.bytes);
        Self { bytes }
    }

    /// Returns a new buffer holding `count` copies of `self`, in order.
    ///
    /// A count of zero yields an empty buffer. No limit is applied here; the
    /// evaluator checks the resulting length before calling this.
    ///
    /// # Panics
    /// Panics if `self.len() * count` overflows `usize`.
    ///
    /// # Example
    /// ```
    /// use strcalc::interpreter::value::Buffer;
    ///
    /// assert_eq!(Buffer::new(b"12").repeat(3).as_bytes(), b"121212");
    /// assert!(Buffer::new(b"12").repeat(0).is_empty());
    /// ```
    #[must_use]
    pub fn repeat(&self, count: usize) -> Self {
        Self { bytes: self.bytes.repeat(count) }
    }

    /// Interprets the buffer as a base-10 unsigned integer.
    ///
    /// Digits are accumulated left to right as `acc * 10 + digit`. Arithmetic
    /// wraps on overflow, so values past `u64::MAX` are reduced modulo
    /// `2^64`. The result for bytes other than ASCII digits is meaningless but
    /// never panics; buffers produced by the lexer only ever hold digits.
    ///
    /// # Example
    /// ```
    /// use strcalc::interpreter::value::Buffer;
    ///
    /// assert_eq!(Buffer::new(b"0042").as_unsigned(), 42);
    /// assert_eq!(Buffer::new(b"").as_unsigned(), 0);
    /// ```
    #[must_use]
    pub fn as_unsigned(&self) -> u64 {
        self.bytes.iter().fold(0u64, |acc, &b| {
                              acc.wrapping_mul(10)
                                 .wrapping_add(u64::from(b.wrapping_sub(b'0')))
                          })
    }

    /// The raw bytes of the value.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consumes the buffer, returning its bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Number of bytes owned by the buffer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the buffer holds no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl From<Vec<u8>> for Buffer {
    fn from(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }
}

impl From<&str> for Buffer {
    fn from(s: &str) -> Self {
        Self::new(s.as_bytes())
    }
}

impl fmt::Display for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_buffers_do_not_alias() {
        let original = Buffer::from("12");
        let copy = original.duplicate();
        let joined = original.concat(&copy);
        drop(original);

        assert_eq!(copy.as_bytes(), b"12");
        assert_eq!(joined.as_bytes(), b"1212");
    }

    #[test]
    fn repeat_length_is_product() {
        let buf = Buffer::from("abc");
        assert_eq!(buf.repeat(4).len(), 12);
        assert_eq!(Buffer::default().repeat(1000).len(), 0);
    }

    #[test]
    fn as_unsigned_wraps_past_u64() {
        // u64::MAX + 1
        let buf = Buffer::from("18446744073709551616");
        assert_eq!(buf.as_unsigned(), 0);

        let buf = Buffer::from("18446744073709551615");
        assert_eq!(buf.as_unsigned(), u64::MAX);
    }
}
