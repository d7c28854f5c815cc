use crate::domain::model::Technique;
use crate::domain::ports::{PipelineContext, Stage};
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;
use regex::{Captures, Regex};
use std::sync::LazyLock;

static BASE64_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""([A-Za-z0-9+/]{4,}={0,2})"|'([A-Za-z0-9+/]{4,}={0,2})'"#).unwrap()
});
static HEX_ESCAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\x([0-9A-Fa-f]{2})").unwrap());
static SIMPLE_ESCAPE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"\\([ntr"'])"#).unwrap());

/// padding 可有可無，多餘的尾端 bit 直接丟掉
const LENIENT_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// 英數、常見標點與空白
fn is_printable(byte: u8) -> bool {
    matches!(byte, b' '..=b'~' | b'\t' | b'\n' | b'\r' | b'\x0b' | b'\x0c')
}

pub fn decode_base64_text(body: &str) -> Option<String> {
    // 有寫 padding 時總長度必須是 4 的倍數，例如 "aGVsbA=" 不算
    if body.contains('=') && body.len() % 4 != 0 {
        tracing::trace!("Not base64 '{}': padded length {}", body, body.len());
        return None;
    }

    let bytes = match LENIENT_BASE64.decode(body) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::trace!("Not base64 '{}': {}", body, e);
            return None;
        }
    };

    if !bytes.iter().copied().all(is_printable) {
        return None;
    }
    String::from_utf8(bytes).ok()
}

pub struct Base64Stage;

impl Stage for Base64Stage {
    fn name(&self) -> &'static str {
        "base64"
    }

    fn apply(&self, text: String, context: &mut PipelineContext<'_>) -> String {
        let mut decoded = 0usize;
        let rewritten = BASE64_LITERAL.replace_all(&text, |caps: &Captures<'_>| {
            let body = caps.get(1).or_else(|| caps.get(2)).map_or("", |m| m.as_str());
            match decode_base64_text(body) {
                Some(plain) => {
                    decoded += 1;
                    format!("\"{}\"", plain)
                }
                None => caps[0].to_string(),
            }
        });
        let rewritten = rewritten.into_owned();

        if decoded > 0 {
            tracing::debug!("Decoded {} base64 literals", decoded);
        }
        for _ in 0..decoded {
            context.record(Technique::Base64Decoding);
        }
        rewritten
    }
}

pub struct HexStage;

impl Stage for HexStage {
    fn name(&self) -> &'static str {
        "hex"
    }

    fn apply(&self, text: String, context: &mut PipelineContext<'_>) -> String {
        let mut decoded = 0usize;
        let rewritten = HEX_ESCAPE.replace_all(&text, |caps: &Captures<'_>| {
            match u8::from_str_radix(&caps[1], 16) {
                Ok(byte) if is_printable(byte) => {
                    decoded += 1;
                    char::from(byte).to_string()
                }
                _ => caps[0].to_string(),
            }
        });
        let rewritten = rewritten.into_owned();

        for _ in 0..decoded {
            context.record(Technique::HexDecoding);
        }
        rewritten
    }
}

/// `\n` `\t` `\r` `\"` `\'` 轉成實際字元，不記錄標籤
pub struct EscapeStage;

impl Stage for EscapeStage {
    fn name(&self) -> &'static str {
        "escapes"
    }

    fn apply(&self, text: String, _context: &mut PipelineContext<'_>) -> String {
        SIMPLE_ESCAPE
            .replace_all(&text, |caps: &Captures<'_>| match &caps[1] {
                "n" => "\n",
                "t" => "\t",
                "r" => "\r",
                "\"" => "\"",
                _ => "'",
            })
            .into_owned()
    }
}
