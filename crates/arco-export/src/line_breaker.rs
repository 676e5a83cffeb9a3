//! Word wrapping for free-form LP lines.

/// Accumulates tokens into lines of at most `max_line_size` characters.
///
/// Tokens are never split: a token longer than the limit gets a line of its
/// own. Continuation lines start with a single space.
#[derive(Debug, Clone)]
pub struct LineBreaker {
    max_line_size: usize,
    line_size: usize,
    output: String,
}

impl LineBreaker {
    pub fn new(max_line_size: usize) -> Self {
        Self {
            max_line_size,
            line_size: 0,
            output: String::new(),
        }
    }

    /// Append `token`, breaking the line first if it would overflow.
    pub fn append(&mut self, token: &str) {
        let token_size = token.chars().count();
        if self.line_size > 0 && self.line_size + token_size > self.max_line_size {
            self.output.push_str("\n ");
            self.line_size = token_size;
        } else {
            self.line_size += token_size;
        }
        self.output.push_str(token);
    }

    /// Whether `token` fits on the current line without a break.
    ///
    /// Does not record anything; the caller decides where the token goes.
    pub fn would_fit(&self, token: &str) -> bool {
        self.line_size + token.chars().count() < self.max_line_size
    }

    /// Reserve `size` characters written by the caller outside the breaker.
    pub fn consume(&mut self, size: usize) {
        self.line_size += size;
    }

    /// Characters on the current line.
    pub fn line_size(&self) -> usize {
        self.line_size
    }

    pub fn result(&self) -> &str {
        &self.output
    }

    pub fn into_result(self) -> String {
        self.output
    }
}
