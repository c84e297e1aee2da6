/// Format a byte count as a human-readable size string (e.g., "512 bytes", "1 KB").
///
/// Uses exact integer division: values that aren't clean multiples of KB
/// are shown in bytes.
pub fn format_bytes(bytes: u64) -> String {
    if bytes >= 1024 && bytes.is_multiple_of(1024) {
        format!("{} KB", bytes / 1024)
    } else {
        format!("{} bytes", bytes)
    }
}

/// Format a 32-bit code the way it is shown everywhere: `0x` + 8 upper hex digits.
pub fn format_code(code: u32) -> String {
    format!("0x{:08X}", code)
}

/// Read a fixed-length ASCII string from a byte slice.
///
/// Non-printable bytes are replaced with spaces, then the result is trimmed.
/// SPD text fields are padded with 0x00, 0x20 or 0xFF rather than
/// null-terminated, so the whole slice is processed.
pub fn read_ascii_fixed(buf: &[u8]) -> String {
    let s: String = buf
        .iter()
        .map(|&b| {
            if (0x20..0x7F).contains(&b) {
                b as char
            } else {
                ' '
            }
        })
        .collect();
    s.trim().to_string()
}
