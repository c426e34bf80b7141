use crate::error::SumError;

/// Parses whitespace-separated integers, e.g. the contents of stdin.
pub fn parse_numbers(text: &str) -> Result<Vec<i64>, SumError> {
    text.split_whitespace()
        .map(|token| {
            token.parse::<i64>().map_err(|_| SumError::Parse {
                token: token.to_string(),
            })
        })
        .collect()
}
