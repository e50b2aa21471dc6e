//! Best-effort extraction of roll results from chat message text.

use log::debug;

/// Marker preceding the numeric result in a roll message.
pub const RESULT_MARKER: &str = "Result: ";

/// Returns true if the message mentions the roll type.
///
/// Single-die notation like `1d20` is covered as well, since it contains the
/// bare token.
fn mentions_roll_type(content: &str, roll_type: &str) -> bool {
    content.contains(roll_type)
}

/// Parse the first word after [`RESULT_MARKER`] as an integer.
fn parse_result(content: &str) -> Option<i64> {
    let (_, after) = content.split_once(RESULT_MARKER)?;
    let word = after.split_whitespace().next()?;
    match word.parse() {
        Ok(value) => Some(value),
        Err(e) => {
            debug!("Skipping unparseable result '{word}': {e}");
            None
        }
    }
}

/// Collect the results of every message that mentions `roll_type`.
///
/// Messages without the token, without the marker, or with a non-numeric
/// result are skipped. Output order follows input order.
pub fn extract_results<S: AsRef<str>>(messages: &[S], roll_type: &str) -> Vec<i64> {
    messages
        .iter()
        .map(AsRef::as_ref)
        .filter(|content| mentions_roll_type(content, roll_type))
        .filter_map(|content| {
            let result = parse_result(content);
            match result {
                Some(value) => debug!("Found result {value} in message: {content}"),
                None => debug!("No result found in message: {content}"),
            }
            result
        })
        .collect()
}
