use regex::Regex;
use std::sync::LazyLock;

static OPEN_PORT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)/open").expect("open port pattern"));

/// Collect every number written directly before `/open` in greppable nmap
/// output, in file order and with duplicates, as a comma separated port list.
/// Returns an empty string when nothing matches.
pub fn extract_open_ports(text: &str) -> String {
    OPEN_PORT
        .captures_iter(text)
        .map(|cap| cap[1].to_string())
        .collect::<Vec<_>>()
        .join(",")
}

pub fn open_port_count(ports: &str) -> usize {
    if ports.is_empty() {
        0
    } else {
        ports.split(',').count()
    }
}
