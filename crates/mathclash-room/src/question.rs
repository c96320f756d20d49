//! Arithmetic challenge generation.

use rand::Rng;

use crate::clock::now_millis;

/// One arithmetic challenge, immutable once generated.
#[derive(Debug, Clone)]
pub struct Question {
    /// 1-based position within the match's sequence.
    pub number: u32,
    /// Human-readable form, e.g. `"17 - 4"`.
    pub prompt: String,
    pub answer: i64,
    /// Epoch milliseconds at generation time.
    pub created_at: u64,
}

impl Question {
    pub fn is_correct(&self, candidate: i64) -> bool {
        candidate == self.answer
    }
}

/// Generates `count` questions numbered `1..=count`.
///
/// Consecutive questions are drawn independently; duplicate prompts
/// within a sequence are acceptable.
pub fn generate_questions(count: usize) -> Vec<Question> {
    (1..=count as u32).map(generate_question).collect()
}

/// Draws one question: operands uniform in 1..=20, operator uniform in
/// `{+, -, *}`. Subtraction puts the larger operand first so the answer
/// is never negative.
fn generate_question(number: u32) -> Question {
    let mut rng = rand::rng();
    let a: i64 = rng.random_range(1..=20);
    let b: i64 = rng.random_range(1..=20);

    let (prompt, answer) = match rng.random_range(0..3) {
        0 => (format!("{a} + {b}"), a + b),
        1 => {
            let (hi, lo) = (a.max(b), a.min(b));
            (format!("{hi} - {lo}"), hi - lo)
        }
        _ => (format!("{a} * {b}"), a * b),
    };

    Question {
        number,
        prompt,
        answer,
        created_at: now_millis(),
    }
}
