use anyhow::Result;
use harness::{Arg, ArgKind, Challenge, Returns, Signature, Solver, Value};

/// Whether a phrase reads the same both ways, ignoring case and
/// non-alphanumeric characters.
pub struct ValidPalindrome;

impl Challenge for ValidPalindrome {
    fn solution(&self) -> Option<&dyn Solver> {
        Some(self)
    }
}

impl Solver for ValidPalindrome {
    fn signature(&self) -> Signature {
        Signature::new([ArgKind::Str], Returns::Value)
    }

    fn solve(&self, args: &mut [Arg]) -> Result<Option<Value>> {
        let filtered: Vec<char> = args[0]
            .as_str()?
            .chars()
            .filter(|ch| ch.is_alphanumeric())
            .flat_map(char::to_lowercase)
            .collect();
        let palindrome = filtered.iter().eq(filtered.iter().rev());
        Ok(Some(Value::Bool(palindrome)))
    }
}
