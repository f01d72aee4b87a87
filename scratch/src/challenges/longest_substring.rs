use std::collections::HashMap;

use anyhow::Result;
use harness::{Arg, ArgKind, Challenge, Returns, Signature, Solver, Value};

/// Length of the longest substring without repeating characters.
pub struct LongestUniqueSubstring;

impl Challenge for LongestUniqueSubstring {
    fn solution(&self) -> Option<&dyn Solver> {
        Some(self)
    }
}

impl Solver for LongestUniqueSubstring {
    fn signature(&self) -> Signature {
        Signature::new([ArgKind::Str], Returns::Value)
    }

    fn solve(&self, args: &mut [Arg]) -> Result<Option<Value>> {
        let mut last_seen: HashMap<char, usize> = HashMap::new();
        let mut left = 0;
        let mut longest = 0;
        for (right, ch) in args[0].as_str()?.chars().enumerate() {
            if let Some(&previous) = last_seen.get(&ch) {
                left = left.max(previous + 1);
            }
            last_seen.insert(ch, right);
            longest = longest.max(right - left + 1);
        }
        Ok(Some(Value::Int(i64::try_from(longest)?)))
    }
}
