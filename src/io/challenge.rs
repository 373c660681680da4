//! Arithmetic human-verification challenge guarding submissions
//!
//! The expected answer lives in the [`ChallengeGate`] owned by one session,
//! so concurrent sessions never observe each other's questions.

use std::io::{BufRead, Write};

use log::{info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::io::configuration::{
    CHALLENGE_OPERAND_MAX, CHALLENGE_OPERAND_MIN, MAX_CHALLENGE_ATTEMPTS,
};
use crate::io::error::{Result, SwapError, invalid_parameter};

/// One issued question and the answer that unlocks it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Challenge {
    question: String,
    expected: String,
}

impl Challenge {
    /// Human readable question, e.g. `"3 + 4"`
    pub fn question(&self) -> &str {
        &self.question
    }

    /// Answer expected for [`Self::question`]
    pub fn expected(&self) -> &str {
        &self.expected
    }
}

/// Supplies answers to challenge questions
pub trait Responder {
    /// Ask `question` and return the raw answer
    ///
    /// # Errors
    ///
    /// Returns an error if no answer can be obtained
    fn respond(&mut self, question: &str) -> Result<String>;
}

impl<F> Responder for F
where
    F: FnMut(&str) -> String,
{
    fn respond(&mut self, question: &str) -> Result<String> {
        Ok(self(question))
    }
}

/// Prompts on a writer and reads one line per answer
pub struct TerminalResponder<R, W> {
    input: R,
    prompt: W,
}

impl<R: BufRead, W: Write> TerminalResponder<R, W> {
    /// Create a responder reading answers from `input` and prompting on `prompt`
    pub const fn new(input: R, prompt: W) -> Self {
        Self { input, prompt }
    }
}

impl<R: BufRead, W: Write> Responder for TerminalResponder<R, W> {
    fn respond(&mut self, question: &str) -> Result<String> {
        write!(self.prompt, "Verification: what is {question}? ")?;
        self.prompt.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(invalid_parameter(
                "challenge answer",
                &"<end of input>",
                &"input closed before an answer was given",
            ));
        }
        Ok(line)
    }
}

/// Issues and checks arithmetic challenges for one session
pub struct ChallengeGate {
    rng: StdRng,
    max_attempts: usize,
}

impl ChallengeGate {
    /// Create a gate, seeded for reproducible questions or from the OS otherwise
    pub fn new(seed: Option<u64>) -> Self {
        let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        Self {
            rng,
            max_attempts: MAX_CHALLENGE_ATTEMPTS,
        }
    }

    /// Override how many challenges [`Self::pass`] issues before giving up
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidParameter`] if `max_attempts` is zero
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Result<Self> {
        if max_attempts == 0 {
            return Err(invalid_parameter(
                "max_attempts",
                &max_attempts,
                &"at least one challenge must be issued",
            ));
        }
        self.max_attempts = max_attempts;
        Ok(self)
    }

    /// Generate a new addition question
    pub fn issue(&mut self) -> Challenge {
        let a = self
            .rng
            .random_range(CHALLENGE_OPERAND_MIN..=CHALLENGE_OPERAND_MAX);
        let b = self
            .rng
            .random_range(CHALLENGE_OPERAND_MIN..=CHALLENGE_OPERAND_MAX);
        Challenge {
            question: format!("{a} + {b}"),
            expected: (a + b).to_string(),
        }
    }

    /// Compare an answer with the expected one, ignoring surrounding whitespace
    pub fn verify(user_answer: &str, expected: &str) -> bool {
        user_answer.trim() == expected.trim()
    }

    /// Keep issuing fresh challenges until `responder` answers one correctly
    ///
    /// Returns the number of challenges issued.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::ChallengeMismatch`] once the attempt limit is
    /// exhausted, or the responder's own error
    pub fn pass<R: Responder + ?Sized>(&mut self, responder: &mut R) -> Result<usize> {
        for attempt in 1..=self.max_attempts {
            let challenge = self.issue();
            let answer = responder.respond(challenge.question())?;

            if Self::verify(&answer, challenge.expected()) {
                info!("Verification passed on attempt {attempt}");
                return Ok(attempt);
            }

            warn!(
                "Wrong answer to '{}' (attempt {attempt}/{}), issuing a new challenge",
                challenge.question(),
                self.max_attempts
            );
        }

        Err(SwapError::ChallengeMismatch {
            attempts: self.max_attempts,
        })
    }
}
