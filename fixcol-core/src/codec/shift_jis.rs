use super::{EncodingId, TextDecoder, decode_with};
use crate::error::Result;
use std::io::Read;

pub struct ShiftJisDecoder;

impl TextDecoder for ShiftJisDecoder {
    fn id(&self) -> EncodingId {
        EncodingId::ShiftJis
    }

    fn decode(&self, src: &mut dyn Read) -> Result<String> {
        decode_with(encoding_rs::SHIFT_JIS, src)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_kana_and_ascii() {
        // "ｱｲ" (half-width) + "漢" + "AB"
        let bytes: &[u8] = &[0xB1, 0xB2, 0x8A, 0xBF, b'A', b'B'];
        let text = ShiftJisDecoder.decode(&mut &bytes[..]).unwrap();
        assert_eq!(text, "ｱｲ漢AB");
        assert_eq!(text.chars().count(), 5);
    }
}
