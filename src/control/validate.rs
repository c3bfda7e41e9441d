//! Backend address validation
//!
//! The same "host:port" check guards the /set operation and the initial
//! list given at startup. /add deliberately bypasses it; see
//! [`crate::control::handlers`].

use anyhow::bail;

/// True when `addr` is "host:port": a non-empty host with no colon, one
/// colon, then one or more ASCII digits. No whitespace, no scheme,
/// case-sensitive.
pub fn is_valid_backend(addr: &str) -> bool {
    let Some((host, port)) = addr.split_once(':') else {
        return false;
    };

    !host.is_empty()
        && !port.is_empty()
        && port.bytes().all(|b| b.is_ascii_digit())
        && !addr.chars().any(char::is_whitespace)
}

/// Parse a comma-separated backend list, trimming whitespace around each
/// entry.
///
/// All-or-nothing: one invalid entry rejects the whole list, which is
/// what gives /set its atomicity. An empty input is one empty entry and
/// therefore invalid.
pub fn parse_backend_list(raw: &str) -> anyhow::Result<Vec<String>> {
    let mut backends = Vec::new();

    for entry in raw.split(',') {
        let entry = entry.trim();
        if !is_valid_backend(entry) {
            bail!("'{entry}' is not a valid network address");
        }
        backends.push(entry.to_string());
    }

    Ok(backends)
}
