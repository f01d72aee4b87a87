use anyhow::{Result, bail};
use harness::{Arg, ArgKind, Challenge, Returns, Signature, Solver, Value};

/// Largest sum of a contiguous, non-empty subarray.
pub struct MaxSubarray;

impl Challenge for MaxSubarray {
    fn solution(&self) -> Option<&dyn Solver> {
        Some(self)
    }
}

impl Solver for MaxSubarray {
    fn signature(&self) -> Signature {
        Signature::new([ArgKind::Ints], Returns::Value)
    }

    fn solve(&self, args: &mut [Arg]) -> Result<Option<Value>> {
        let nums = args[0].as_ints()?;
        let Some((&first, rest)) = nums.split_first() else {
            bail!("nums must be non-empty");
        };
        let mut current = i64::from(first);
        let mut best = current;
        for &num in rest {
            let num = i64::from(num);
            current = num.max(current + num);
            best = best.max(current);
        }
        Ok(Some(Value::Int(best)))
    }
}
