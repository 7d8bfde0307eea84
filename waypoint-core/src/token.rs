use rand::RngCore;
use rand::rngs::OsRng;
use std::fmt::Write;

/// Render `byte_len` bytes from the OS RNG as lowercase hex.
pub fn random_hex(byte_len: usize) -> String {
    let mut buf = vec![0u8; byte_len];
    OsRng.fill_bytes(&mut buf);

    buf.iter()
        .fold(String::with_capacity(byte_len * 2), |mut out, b| {
            let _ = write!(out, "{b:02x}");
            out
        })
}
