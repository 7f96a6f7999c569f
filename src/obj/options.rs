/// Limits applied when reading a filter envelope off the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecOptions {
    /// Largest filter payload accepted, in bytes.
    pub max_payload_len: usize,
    /// Largest filter type name accepted, in bytes.
    pub max_name_len: usize,
}

impl CodecOptions {
    pub fn new() -> CodecOptions {
        CodecOptions {
            max_payload_len: 64 * 1024,
            max_name_len: 255,
        }
    }

    pub fn with_max_payload_len(mut self, max_payload_len: usize) -> CodecOptions {
        self.max_payload_len = max_payload_len;
        self
    }

    pub fn with_max_name_len(mut self, max_name_len: usize) -> CodecOptions {
        self.max_name_len = max_name_len;
        self
    }
}

impl Default for CodecOptions {
    fn default() -> Self {
        CodecOptions::new()
    }
}
