/// Relative "time since" labels for tab rows

/// Unit suffixes and their length in seconds, largest first
const UNITS: [(&str, u64); 5] = [
    ("wk", 604_800),
    ("d", 86_400),
    ("h", 3_600),
    ("m", 60),
    ("s", 1),
];

/// How many non-zero units are shown before truncating with `+`
const SHOWN_UNITS: usize = 2;

/// Format a duration as its two largest non-zero units.
///
/// Examples:
/// - 65 → `1m 5s`
/// - 90125 → `1d 1h+` (minutes and seconds dropped)
/// - 0 → `0s`
pub fn format_elapsed(seconds: u64) -> String {
    if seconds == 0 {
        return "0s".to_string();
    }

    let mut remaining = seconds;
    let parts: Vec<String> = UNITS
        .iter()
        .filter_map(|(suffix, size)| {
            let counted = remaining / size;
            remaining %= size;
            (counted > 0).then(|| format!("{}{}", counted, suffix))
        })
        .collect();

    let mut text = parts
        .iter()
        .take(SHOWN_UNITS)
        .cloned()
        .collect::<Vec<_>>()
        .join(" ");
    if parts.len() > SHOWN_UNITS {
        text.push('+');
    }
    text
}

/// Whole seconds between two millisecond timestamps, rounded to nearest.
/// Timestamps in the future count as zero.
pub fn seconds_since(now_ms: f64, then_ms: f64) -> u64 {
    let seconds = ((now_ms - then_ms) / 1000.0).round();
    if seconds.is_finite() && seconds > 0.0 {
        seconds as u64
    } else {
        0
    }
}
