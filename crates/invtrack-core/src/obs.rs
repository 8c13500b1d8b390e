//! Raw per-step observation bundle.
//!
//! An environment emits one [`Observation`] per step: a positional list of
//! channels, two of which matter here — the inventory text channel (one
//! fixed-width, null-padded byte buffer per slot) and the inventory
//! object-class channel (one small integer code per slot). Which positions
//! those channels occupy is environment-specific and supplied to the
//! tracker at construction time.

/// Conventional width of one inventory text buffer (NLE `inv_strs`).
pub const INV_STR_WIDTH: usize = 80;

/// A single observation channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObsChannel {
    /// Fixed-width, null-padded item description buffers, one per slot.
    Text(Vec<Vec<u8>>),
    /// Object-class codes, one per slot.
    Codes(Vec<i16>),
}

/// One step's observation bundle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Observation {
    channels: Vec<ObsChannel>,
}

impl Observation {
    pub fn new(channels: Vec<ObsChannel>) -> Self {
        Observation { channels }
    }

    /// The text channel at `index`, or `None` if the index is out of range
    /// or the channel holds a different kind of data.
    pub fn text(&self, index: usize) -> Option<&[Vec<u8>]> {
        match self.channels.get(index) {
            Some(ObsChannel::Text(rows)) => Some(rows),
            _ => None,
        }
    }

    /// The code channel at `index`, or `None` on mismatch.
    pub fn codes(&self, index: usize) -> Option<&[i16]> {
        match self.channels.get(index) {
            Some(ObsChannel::Codes(codes)) => Some(codes),
            _ => None,
        }
    }
}

/// Decode one slot's text buffer: truncate at the first NUL, decode as
/// UTF-8 dropping undecodable bytes, trim surrounding whitespace.
///
/// Invalid bytes are skipped rather than replaced, so a replacement
/// character in the output can only come from one validly encoded in the
/// input.
pub fn decode_slot(raw: &[u8]) -> String {
    let end = raw.iter().position(|&b| b == 0).unwrap_or(raw.len());
    let mut rest = &raw[..end];
    let mut decoded = String::with_capacity(rest.len());
    loop {
        match std::str::from_utf8(rest) {
            Ok(valid) => {
                decoded.push_str(valid);
                break;
            }
            Err(err) => {
                let (valid, invalid) = rest.split_at(err.valid_up_to());
                decoded.push_str(std::str::from_utf8(valid).unwrap_or_default());
                // error_len() is None for a sequence cut off at the end of
                // the buffer; nothing decodable remains.
                let skip = err.error_len().unwrap_or(invalid.len());
                rest = &invalid[skip..];
            }
        }
    }
    decoded.trim().to_string()
}
