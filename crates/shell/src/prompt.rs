//! Line-oriented prompting over any reader/writer pair.

use std::io::{BufRead, Write};

use thiserror::Error;

use stockroom_inventory::ItemCategory;

/// Input ended before a value could be read.
#[derive(Debug, Error)]
#[error("input closed")]
pub struct InputClosed;

/// Reads answers from `input` and writes questions to `output`.
///
/// Numeric readers keep asking until the answer parses; they only fail on IO
/// errors or [`InputClosed`].
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print `text` followed by a newline.
    pub fn say(&mut self, text: impl AsRef<str>) -> anyhow::Result<()> {
        writeln!(self.output, "{}", text.as_ref())?;
        Ok(())
    }

    /// Ask `question` and return the answer without its line ending.
    pub fn read_text(&mut self, question: &str) -> anyhow::Result<String> {
        self.say(question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InputClosed.into());
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Ask until the answer is a whole number.
    pub fn read_int(&mut self, question: &str) -> anyhow::Result<i64> {
        loop {
            let answer = self.read_text(question)?;
            match answer.trim().parse() {
                Ok(value) => return Ok(value),
                Err(_) => self.say("Input a valid whole number.")?,
            }
        }
    }

    /// Ask until the answer is a finite number.
    pub fn read_float(&mut self, question: &str) -> anyhow::Result<f64> {
        loop {
            let answer = self.read_text(question)?;
            match answer.trim().parse::<f64>() {
                Ok(value) if value.is_finite() => return Ok(value),
                _ => self.say("Input a valid number.")?,
            }
        }
    }

    /// Ask until the answer is a number in `1..=max`.
    pub fn read_choice(&mut self, question: &str, max: usize) -> anyhow::Result<usize> {
        loop {
            let answer = self.read_text(question)?;
            match answer.trim().parse::<usize>() {
                Ok(choice) if (1..=max).contains(&choice) => return Ok(choice),
                _ => self.say(format!("Please enter a number between 1 and {max}."))?,
            }
        }
    }

    /// Ask until the answer selects a category by its ordinal.
    pub fn read_category(&mut self) -> anyhow::Result<ItemCategory> {
        let mut question = String::from("Choose a category:");
        for category in ItemCategory::ALL {
            question.push_str(&format!("\n{}. {}", category.ordinal(), category));
        }

        loop {
            let ordinal = self.read_int(&question)?;
            match ItemCategory::from_ordinal(ordinal) {
                Ok(category) => return Ok(category),
                Err(err) => self.say(err.reason())?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompt(input: &str) -> Prompt<Cursor<Vec<u8>>, Vec<u8>> {
        Prompt::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(prompt: Prompt<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(prompt.into_output()).unwrap()
    }

    #[test]
    fn read_text_strips_line_ending() {
        let mut p = prompt("hello world\r\n");
        assert_eq!(p.read_text("Say something").unwrap(), "hello world");
        assert_eq!(output(p), "Say something\n");
    }

    #[test]
    fn read_text_reports_closed_input() {
        let mut p = prompt("");
        let err = p.read_text("Anything?").unwrap_err();
        assert!(err.is::<InputClosed>());
    }

    #[test]
    fn read_int_reprompts_until_valid() {
        let mut p = prompt("ten\n4.5\n -7 \n");
        assert_eq!(p.read_int("Amount").unwrap(), -7);
        assert_eq!(output(p).matches("Input a valid whole number.").count(), 2);
    }

    #[test]
    fn read_float_rejects_non_finite() {
        let mut p = prompt("inf\nNaN\n2.5\n");
        assert_eq!(p.read_float("Weight").unwrap(), 2.5);
    }

    #[test]
    fn read_choice_enforces_range() {
        let mut p = prompt("0\n8\n3\n");
        assert_eq!(p.read_choice("Pick", 7).unwrap(), 3);
        assert_eq!(
            output(p).matches("Please enter a number between 1 and 7.").count(),
            2
        );
    }

    #[test]
    fn read_category_uses_ordinals() {
        let mut p = prompt("9\n1\n");
        assert_eq!(p.read_category().unwrap(), ItemCategory::FloorLaminate);
        let out = output(p);
        assert!(out.contains("3. DOORS"));
        assert!(out.contains("Please enter a number between 1 and 4."));
    }
}
