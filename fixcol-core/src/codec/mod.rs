use crate::error::Result;
use std::io::Read;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EncodingId {
    ShiftJis,
    Utf8,
}

impl EncodingId {
    /// `"shift-jis"` picks Shift-JIS; every other selector means UTF-8.
    pub fn from_selector(selector: &str) -> Self {
        if selector == "shift-jis" {
            EncodingId::ShiftJis
        } else {
            EncodingId::Utf8
        }
    }

    pub fn selector(self) -> &'static str {
        match self {
            EncodingId::ShiftJis => "shift-jis",
            EncodingId::Utf8 => "utf-8",
        }
    }
}

pub trait TextDecoder: Send + Sync {
    fn id(&self) -> EncodingId;
    /// Decode the whole stream. Malformed input is replaced, not rejected.
    fn decode(&self, src: &mut dyn Read) -> Result<String>;
}

pub fn decoder_for(id: EncodingId) -> Box<dyn TextDecoder> {
    match id {
        EncodingId::ShiftJis => Box::new(shift_jis::ShiftJisDecoder),
        EncodingId::Utf8 => Box::new(utf8::Utf8Decoder),
    }
}

fn decode_with(encoding: &'static encoding_rs::Encoding, src: &mut dyn Read) -> Result<String> {
    let mut bytes = Vec::new();
    src.read_to_end(&mut bytes)?;
    // BOM sniffing happens here and wins over `encoding`.
    let (text, used, had_errors) = encoding.decode(&bytes);
    if had_errors {
        tracing::warn!(
            encoding = used.name(),
            "source contained malformed sequences; replaced with U+FFFD"
        );
    }
    Ok(text.into_owned())
}

pub mod shift_jis;
pub mod utf8;
