use std::io::{self, Write};

use anyhow::{bail, Result};
use orgperf_engine::InstructionWord;
use tracing::warn;

#[derive(clap::Args)]
pub struct ClassifyCmd {
    /// Instruction words, 32 characters of `0`/`1` each.
    #[clap(required = true)]
    words: Vec<String>,
}

impl ClassifyCmd {
    pub fn run(&self) -> Result<()> {
        let mut out = io::stdout().lock();
        let mut invalid = 0;

        for text in &self.words {
            match text.parse::<InstructionWord>() {
                Ok(word) => {
                    let format = word
                        .format()
                        .map_or_else(|| "-".to_string(), |format| format.to_string());
                    writeln!(out, "{word}  opcode={:07b}  format={format}", word.opcode())?;
                }
                Err(e) => {
                    warn!(word = %text, "{e}");
                    writeln!(out, "{text}  invalid: {e}")?;
                    invalid += 1;
                }
            }
        }

        if invalid > 0 {
            bail!("{invalid} of {} words are not valid instruction words", self.words.len());
        }
        Ok(())
    }
}
