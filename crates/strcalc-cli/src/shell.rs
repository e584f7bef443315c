use std::io::{self, BufRead, Write};
use strcalc_core::{ConfigHandle, EvalError, Evaluation, Evaluator};

const BANNER: &str = "--- String Calculator Console ---";
const PROMPT: &str = "> ";

/// Turns the two-character sequence `\n` typed at a prompt into a line feed,
/// so headers like `//;\n1;2` can be entered on one line.
pub fn unescape(line: &str) -> String {
    line.replace("\\n", "\n")
}

/// Formats one evaluation outcome the way the shell prints it.
pub fn render(result: &Result<Evaluation, EvalError>) -> String {
    match result {
        Ok(evaluation) => evaluation.to_string(),
        Err(e @ EvalError::NegativeValues(_)) => format!("Argument error: {}", e),
        Err(e) => format!("Unexpected error: {}", e),
    }
}

/// Read-eval-print loop over any line source.
pub struct Shell<'a> {
    evaluator: Evaluator,
    settings: &'a ConfigHandle,
}

impl<'a> Shell<'a> {
    pub fn new(settings: &'a ConfigHandle) -> Self {
        Self {
            evaluator: Evaluator::new(),
            settings,
        }
    }

    /// Evaluates a single raw line against the current settings snapshot.
    pub fn eval_line(&self, line: &str) -> Result<Evaluation, EvalError> {
        self.evaluator
            .evaluate_traced_with(&unescape(line), self.settings)
    }

    /// Runs until `input` reaches end of file.
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, output: &mut W) -> io::Result<()> {
        writeln!(output, "{}", BANNER)?;
        writeln!(output, "Enter the string of numbers (or press Ctrl+D to exit):")?;

        let mut line = String::new();
        loop {
            write!(output, "{}", PROMPT)?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                break;
            }
            let trimmed = line.trim_end_matches(['\n', '\r']);

            let result = self.eval_line(trimmed);
            writeln!(output, "{}", render(&result))?;
        }
        writeln!(output)?;
        Ok(())
    }
}
