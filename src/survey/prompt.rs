//! Interactive and scripted answer collection.

use super::{display_text, Response, ITEMS, ITEM_COUNT, SCALE_DEFAULT, SCALE_MAX, SCALE_MIN};
use std::io::{BufRead, Write};

/// Walk the respondent through all items on the given reader/writer pair
/// (stdin/stdout in the binary; in-memory buffers in tests). Empty input takes
/// the mid-scale default; unparsable or out-of-bounds input re-prompts.
pub fn collect_interactive(
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> std::io::Result<Response> {
    let mut answers = Vec::with_capacity(ITEM_COUNT);
    for (idx, item) in ITEMS.iter().enumerate() {
        loop {
            write!(
                output,
                "[{:2}/{}] {} ({}-{}, enter = {}): ",
                idx + 1,
                ITEM_COUNT,
                display_text(item),
                SCALE_MIN,
                SCALE_MAX,
                SCALE_DEFAULT
            )?;
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                // EOF: take the default for this and all remaining items
                answers.resize(ITEM_COUNT, SCALE_DEFAULT);
                return Ok(Response::new(answers));
            }
            let trimmed = line.trim();
            if trimmed.is_empty() {
                answers.push(SCALE_DEFAULT);
                break;
            }
            match trimmed.parse::<u8>() {
                Ok(v) if (SCALE_MIN..=SCALE_MAX).contains(&v) => {
                    answers.push(v);
                    break;
                }
                _ => {
                    writeln!(output, "please answer with a value {}-{}", SCALE_MIN, SCALE_MAX)?;
                }
            }
        }
    }
    Ok(Response::new(answers))
}

/// Parse a comma-separated answer list (`--answers 5,0,3,...`) into a response.
/// Requires exactly one in-bounds value per item.
pub fn parse_answer_list(raw: &str) -> Result<Response, String> {
    let mut answers = Vec::with_capacity(ITEM_COUNT);
    for (idx, part) in raw.split(',').enumerate() {
        let v: u8 = part
            .trim()
            .parse()
            .map_err(|_| format!("answer {}: '{}' is not a number", idx + 1, part.trim()))?;
        if !(SCALE_MIN..=SCALE_MAX).contains(&v) {
            return Err(format!(
                "answer {}: {} is outside {}-{}",
                idx + 1,
                v,
                SCALE_MIN,
                SCALE_MAX
            ));
        }
        answers.push(v);
    }
    if answers.len() != ITEM_COUNT {
        return Err(format!(
            "expected {} answers, got {}",
            ITEM_COUNT,
            answers.len()
        ));
    }
    Ok(Response::new(answers))
}
