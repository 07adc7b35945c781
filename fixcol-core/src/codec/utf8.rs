use super::{EncodingId, TextDecoder, decode_with};
use crate::error::Result;
use std::io::Read;

pub struct Utf8Decoder;

impl TextDecoder for Utf8Decoder {
    fn id(&self) -> EncodingId {
        EncodingId::Utf8
    }

    fn decode(&self, src: &mut dyn Read) -> Result<String> {
        decode_with(encoding_rs::UTF_8, src)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_bom() {
        let bytes: &[u8] = b"\xEF\xBB\xBFabc";
        assert_eq!(Utf8Decoder.decode(&mut &bytes[..]).unwrap(), "abc");
    }

    #[test]
    fn replaces_malformed_bytes() {
        let bytes: &[u8] = b"a\xFFb";
        assert_eq!(Utf8Decoder.decode(&mut &bytes[..]).unwrap(), "a\u{FFFD}b");
    }
}
