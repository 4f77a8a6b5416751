use agronomy::SoilType;
use std::io::{self, BufRead, Write};

pub const SOIL_PROMPT: &str = "Enter soil type (sand / loamy / clay): ";

/// Asks the operator for the soil type and normalizes the answer.
pub fn prompt_soil_type<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> io::Result<SoilType> {
    write!(output, "{}", SOIL_PROMPT)?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    Ok(SoilType::from_input(&answer))
}
