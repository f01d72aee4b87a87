use anyhow::Result;
use harness::{Arg, ArgKind, Challenge, Returns, Signature, Solver, Value};

/// Reverse a character array in place.
pub struct ReverseString;

impl Challenge for ReverseString {
    fn solution(&self) -> Option<&dyn Solver> {
        Some(self)
    }
}

impl Solver for ReverseString {
    fn signature(&self) -> Signature {
        Signature::new([ArgKind::Chars], Returns::Void)
    }

    fn solve(&self, args: &mut [Arg]) -> Result<Option<Value>> {
        let chars = args[0].as_chars_mut()?;
        let (mut left, mut right) = (0, chars.len().saturating_sub(1));
        while left < right {
            chars.swap(left, right);
            left += 1;
            right -= 1;
        }
        Ok(None)
    }
}
