//! # Token Id Argument Parsing

/// Parse token ids from command line arguments.
///
/// The arguments are joined by spaces; a single surrounding `[` `]` pair is
/// stripped; the rest is split on runs of commas and whitespace.
///
/// Each piece becomes:
/// * `Some(id)` if it is a number with a non-negative integer value that
///   fits in a `u64` (`4`, `4.0`, `1e3`);
/// * `None` if it is some other number (`-1`, `4.5`, `1e30`, `Infinity`),
///   which decodes as `<UNK>`;
/// * nothing at all if it is not a number.
///
/// Accepts `2 4 5 3`, `"2,4,5,3"`, and `"[2, 4, 5, 3]"` alike.
pub fn parse_ids<S: AsRef<str>>(args: &[S]) -> Vec<Option<u64>> {
    let joined = args
        .iter()
        .map(|s| s.as_ref())
        .collect::<Vec<&str>>()
        .join(" ");

    let mut body = joined.trim();
    if let Some(rest) = body.strip_prefix('[') {
        body = rest.trim_start();
    }
    if let Some(rest) = body.strip_suffix(']') {
        body = rest.trim_end();
    }

    body.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|piece| !piece.is_empty())
        .filter_map(parse_id)
        .collect()
}

fn parse_id(piece: &str) -> Option<Option<u64>> {
    if let Ok(id) = piece.parse::<u64>() {
        return Some(Some(id));
    }
    match piece.parse::<f64>() {
        Ok(x) if x.fract() == 0.0 && x >= 0.0 && x < u64::MAX as f64 => Some(Some(x as u64)),
        Ok(x) if !x.is_nan() => Some(None),
        _ => {
            log::debug!("ignoring unparseable id: {piece:?}");
            None
        }
    }
}
