//! Copy results to the system clipboard through the terminal (OSC 52).

use std::io::{self, Write};
use thiserror::Error;

const OSC52_PREFIX: &str = "\x1b]52;c;";
const OSC52_SUFFIX: &str = "\x07";

const TMUX_PREFIX: &str = "\x1bPtmux;\x1b\x1b]52;c;";
const TMUX_SUFFIX: &str = "\x07\x1b\\";

// A result line is a few dozen bytes; anything near this is a bug upstream.
pub const OSC52_MAX_BYTES: usize = 4 * 1024;

const BASE64_TABLE: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard text too large ({bytes} bytes, limit {limit})", limit = OSC52_MAX_BYTES)]
    TooLarge { bytes: usize },
    #[error("failed to write clipboard sequence: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Osc52Env {
    pub is_tmux: bool,
}

impl Osc52Env {
    pub fn detect() -> Self {
        Self {
            is_tmux: std::env::var_os("TMUX").is_some(),
        }
    }
}

pub fn build_sequence(text: &str, env: Osc52Env) -> Result<String, ClipboardError> {
    let bytes = text.as_bytes();
    if bytes.len() > OSC52_MAX_BYTES {
        return Err(ClipboardError::TooLarge { bytes: bytes.len() });
    }

    let (prefix, suffix) = if env.is_tmux {
        (TMUX_PREFIX, TMUX_SUFFIX)
    } else {
        (OSC52_PREFIX, OSC52_SUFFIX)
    };
    Ok(format!("{prefix}{}{suffix}", base64_encode(bytes)))
}

pub fn write_sequence<W: Write>(mut w: W, text: &str, env: Osc52Env) -> Result<(), ClipboardError> {
    let seq = build_sequence(text, env)?;
    w.write_all(seq.as_bytes())?;
    w.flush()?;
    Ok(())
}

pub fn copy_to_clipboard(text: &str) -> Result<(), ClipboardError> {
    write_sequence(io::stdout(), text, Osc52Env::detect())
}

fn base64_encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len().div_ceil(3) * 4);
    for chunk in bytes.chunks(3) {
        let n = chunk
            .iter()
            .enumerate()
            .fold(0u32, |acc, (i, b)| acc | (u32::from(*b) << (16 - 8 * i)));
        for i in 0..4 {
            if i <= chunk.len() {
                let idx = (n >> (18 - 6 * i)) & 0x3f;
                out.push(char::from(BASE64_TABLE[idx as usize]));
            } else {
                out.push('=');
            }
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/tui/osc52.rs"]
mod tests;
