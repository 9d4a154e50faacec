//! # Shared Utility Functions
//!
//! Display helpers used by the web app and its tests.
//!
//! ## Address Formatting
//!
//! - [`format_address`] - Keep the first N and last M characters, join with `...`
//! - [`truncate_address`] - [`format_address`] with the header layout (6 + 4)
//!
//! ## Chain Ids
//!
//! - [`parse_chain_id`] - Parse the hex quantity returned by `eth_chainId`
//! - [`chain_id_hex`] - Format a chain id as an EIP-1193 hex quantity
//!
//! ```rust
//! use shared::utils::truncate_address;
//!
//! let address = "0x52908400098527886E0F7030069857D2E4169EE7";
//! assert_eq!(truncate_address(address), "0x5290...9EE7");
//! ```

/// Characters kept at the start of a truncated address (`0x` plus four hex digits).
pub const ADDRESS_PREFIX_LEN: usize = 6;

/// Characters kept at the end of a truncated address.
pub const ADDRESS_SUFFIX_LEN: usize = 4;

/// Format a wallet address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// If the address is not longer than `prefix_len + suffix_len`, it is returned as-is.
/// Counting is done in characters, so non-ASCII input never splits a code point.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "0x52908400098527886E0F7030069857D2E4169EE7";
/// assert_eq!(format_address(addr, 6, 4), "0x5290...9EE7");
/// assert_eq!(format_address(addr, 4, 4), "0x52...9EE7");
/// assert_eq!(format_address("0xabc", 6, 4), "0xabc");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let char_count = address.chars().count();

    if char_count <= prefix_len + suffix_len {
        return address.to_string();
    }

    let prefix: String = address.chars().take(prefix_len).collect();
    let suffix: String = address.chars().skip(char_count - suffix_len).collect();

    format!("{}...{}", prefix, suffix)
}

/// Format a wallet address the way the header shows it: first 6, last 4.
///
/// ```rust
/// use shared::utils::truncate_address;
///
/// assert_eq!(
///     truncate_address("0xAbC0000000000000000000000000000000001234"),
///     "0xAbC0...1234"
/// );
/// ```
pub fn truncate_address(address: &str) -> String {
    format_address(address, ADDRESS_PREFIX_LEN, ADDRESS_SUFFIX_LEN)
}

/// Parse an EIP-1193 hex quantity (`"0xaa36a7"`) into a chain id.
///
/// Returns `None` when the prefix is missing or the digits are not hex.
pub fn parse_chain_id(value: &str) -> Option<u64> {
    let digits = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))?;
    if digits.is_empty() {
        return None;
    }
    u64::from_str_radix(digits, 16).ok()
}

/// Format a chain id as an EIP-1193 hex quantity (lowercase, no leading zeros).
pub fn chain_id_hex(chain_id: u64) -> String {
    format!("{:#x}", chain_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDR: &str = "0x52908400098527886E0F7030069857D2E4169EE7";

    #[test]
    fn test_format_address() {
        assert_eq!(format_address(ADDR, 6, 4), "0x5290...9EE7");
        assert_eq!(format_address(ADDR, 2, 2), "0x...E7");
    }

    #[test]
    fn test_format_address_short() {
        assert_eq!(format_address("0x12345678", 6, 4), "0x12345678");
        assert_eq!(format_address("abc", 6, 4), "abc");
        assert_eq!(format_address("", 6, 4), "");
    }

    #[test]
    fn test_format_address_length_boundary() {
        // 10 chars fits 6 + 4 exactly, 11 does not
        assert_eq!(format_address("0x12345678", 6, 4), "0x12345678");
        assert_eq!(format_address("0x123456789", 6, 4), "0x1234...6789");
    }

    #[test]
    fn test_format_address_multibyte() {
        let text = "ααααααββββββγγγγ";
        assert_eq!(format_address(text, 6, 4), "αααααα...γγγγ");
    }

    #[test]
    fn test_truncate_address() {
        let display = truncate_address(ADDR);
        assert_eq!(display, "0x5290...9EE7");
        assert!(display.starts_with(&ADDR[..6]));
        assert!(display.ends_with(&ADDR[ADDR.len() - 4..]));
    }

    #[test]
    fn test_parse_chain_id() {
        assert_eq!(parse_chain_id("0xaa36a7"), Some(11_155_111));
        assert_eq!(parse_chain_id("0x1"), Some(1));
        assert_eq!(parse_chain_id("0XAA36A7"), Some(11_155_111));
        assert_eq!(parse_chain_id("aa36a7"), None);
        assert_eq!(parse_chain_id("0x"), None);
        assert_eq!(parse_chain_id("0xzz"), None);
    }

    #[test]
    fn test_chain_id_hex() {
        assert_eq!(chain_id_hex(11_155_111), "0xaa36a7");
        assert_eq!(chain_id_hex(1), "0x1");
        assert_eq!(parse_chain_id(&chain_id_hex(31_337)), Some(31_337));
    }
}
