/// A named text rewrite applied to an owned buffer.
#[derive(Clone, Copy)]
pub struct RewriteStep {
    pub name: &'static str,
    pub apply: fn(String) -> String,
}

impl RewriteStep {
    pub const fn new(name: &'static str, apply: fn(String) -> String) -> Self {
        Self { name, apply }
    }
}

impl std::fmt::Debug for RewriteStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("RewriteStep").field(&self.name).finish()
    }
}

/// Runs `steps` in order, each one consuming the previous output.
pub fn run_steps(steps: &[RewriteStep], text: String) -> String {
    steps.iter().fold(text, |acc, step| (step.apply)(acc))
}

/// Repeats `run_steps` until a pass leaves the text unchanged.
///
/// Later steps can join characters into something an earlier step rewrites.
/// Rounds are capped by the input length.
pub fn run_until_stable(steps: &[RewriteStep], text: String) -> String {
    let max_rounds = text.chars().count() + 2;
    let mut current = text;
    for _ in 0..max_rounds {
        let next = run_steps(steps, current.clone());
        if next == current {
            break;
        }
        current = next;
    }
    current
}
