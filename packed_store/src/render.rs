//! Binary text rendering of a store's buffer.

/// Renders `bytes` as a bit string split into groups of `group` bits.
///
/// Every complete group is followed by a single space; a trailing partial
/// group is emitted as-is. A `group` of zero disables grouping.
pub(crate) fn binary_groups(bytes: &[u8], group: usize) -> String {
    let bits: String = bytes.iter().map(|b| format!("{b:08b}")).collect();
    if group == 0 {
        return bits;
    }

    let mut out = String::with_capacity(bits.len() + bits.len() / group);
    for (i, bit) in bits.chars().enumerate() {
        out.push(bit);
        if (i + 1) % group == 0 {
            out.push(' ');
        }
    }
    out
}

/// `<header bytes, 8 bits each> ": " <data bits, grouped by element width>`
pub(crate) fn render(header: &[u8], data: &[u8], data_bit_width: usize) -> String {
    let mut out = binary_groups(header, 8);
    out.push_str(": ");
    out.push_str(&binary_groups(data, data_bit_width));
    out
}
