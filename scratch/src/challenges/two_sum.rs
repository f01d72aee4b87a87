use std::collections::HashMap;

use anyhow::Result;
use harness::{Arg, ArgKind, Challenge, Returns, Signature, Solver, Value};

/// Indices of the two numbers that add up to `target`, or `[]`.
pub struct TwoSum;

impl Challenge for TwoSum {
    fn solution(&self) -> Option<&dyn Solver> {
        Some(self)
    }
}

impl Solver for TwoSum {
    fn signature(&self) -> Signature {
        Signature::new([ArgKind::Ints, ArgKind::Int], Returns::Value)
    }

    fn solve(&self, args: &mut [Arg]) -> Result<Option<Value>> {
        let nums = args[0].as_ints()?;
        let target = args[1].as_int()?;

        let mut seen: HashMap<i64, i32> = HashMap::new();
        for (index, &num) in (0_i32..).zip(nums) {
            let complement = target - i64::from(num);
            if let Some(&first) = seen.get(&complement) {
                return Ok(Some(Value::Ints(vec![first, index])));
            }
            seen.insert(i64::from(num), index);
        }
        Ok(Some(Value::Ints(Vec::new())))
    }
}
