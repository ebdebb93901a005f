use std::io::{BufRead, Write};

use anyhow::Result;
use tip_core::TipCalculator;
use tracing::debug;

use crate::input;

/// Computes one tip from raw field text, applying the default policy
/// (unparsable amount → 0, absent/unparsable percent → 15), and returns
/// the formatted string for the caller to render verbatim.
pub fn compute_once(
    calculator: &TipCalculator,
    amount_raw: &str,
    percent_raw: Option<&str>,
    round_up: bool,
) -> String {
    let amount = input::bill_amount_or_default(amount_raw);
    let percent = input::tip_percent_or_default(percent_raw);
    debug!(%amount, %percent, round_up, "computing tip");
    calculator.compute(amount, percent, round_up)
}

/// Interactive prompt loop: reads amount, percentage, and round-up
/// answer, prints the tip and the bill-plus-tip total, and repeats.
///
/// Each iteration is a full recomputation from the submitted text;
/// nothing carries over between rounds. `q` (or end of input) at the
/// amount prompt exits.
pub fn run_interactive<R: BufRead, W: Write>(
    calculator: &TipCalculator,
    mut reader: R,
    mut writer: W,
) -> Result<()> {
    loop {
        let Some(amount_raw) = prompt_line(&mut reader, &mut writer, "Bill amount: ")? else {
            break;
        };
        if matches!(amount_raw.trim(), "q" | "quit" | "exit") {
            break;
        }

        let percent_raw = prompt_line(&mut reader, &mut writer, "Tip percentage [15]: ")?;
        let round_raw = prompt_line(&mut reader, &mut writer, "Round up? [y/N]: ")?;

        let amount = input::bill_amount_or_default(&amount_raw);
        let percent = input::tip_percent_or_default(percent_raw.as_deref());
        let round_up = round_raw.is_some_and(|answer| is_affirmative(&answer));

        let breakdown = calculator.breakdown(amount, percent, round_up);
        let format = calculator.format();
        writeln!(writer, "Tip: {}", format.format(breakdown.tip))?;
        writeln!(writer, "Total: {}", format.format(breakdown.total))?;
        writeln!(writer)?;
    }
    Ok(())
}

/// Writes a prompt and reads one line. Returns `None` at end of input.
fn prompt_line<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    prompt: &str,
) -> Result<Option<String>> {
    write!(writer, "{prompt}")?;
    writer.flush()?;

    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
}

fn is_affirmative(answer: &str) -> bool {
    matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes" | "true" | "1"
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tip_core::{CurrencyFormat, TipCalculator};

    use super::*;

    fn usd() -> TipCalculator {
        TipCalculator::new(CurrencyFormat::en_us())
    }

    #[test]
    fn compute_once_formats_tip() {
        let result = compute_once(&usd(), "10.00", Some("20"), false);

        assert_eq!(result, "$2.00");
    }

    #[test]
    fn compute_once_defaults_junk_amount_to_zero() {
        let result = compute_once(&usd(), "lunch", Some("20"), false);

        assert_eq!(result, "$0.00");
    }

    #[test]
    fn compute_once_defaults_absent_percent_to_fifteen() {
        let result = compute_once(&usd(), "100.00", None, false);

        assert_eq!(result, "$15.00");
    }

    #[test]
    fn interactive_loop_computes_and_quits() {
        let calculator = usd();
        let input = b"51\n15\ny\nq\n" as &[u8];
        let mut output = Vec::new();

        run_interactive(&calculator, input, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Tip: $8.00"), "unexpected output: {text}");
        assert!(text.contains("Total: $59.00"), "unexpected output: {text}");
    }

    #[test]
    fn interactive_loop_recomputes_each_round() {
        let calculator = usd();
        let input = b"10\n20\nn\n10\n20\nn\n" as &[u8];
        let mut output = Vec::new();

        run_interactive(&calculator, input, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.matches("Tip: $2.00").count(), 2);
    }

    #[test]
    fn interactive_loop_stops_at_end_of_input() {
        let calculator = usd();
        let mut output = Vec::new();

        run_interactive(&calculator, b"" as &[u8], &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert_eq!(text, "Bill amount: ");
    }
}
