use anyhow::Result;
use harness::{Arg, ArgKind, Challenge, Returns, Signature, Solver, Value};

/// Index of `target` in sorted `nums`, or `-1`.
pub struct BinarySearch;

impl Challenge for BinarySearch {
    fn solution(&self) -> Option<&dyn Solver> {
        Some(self)
    }
}

impl Solver for BinarySearch {
    fn signature(&self) -> Signature {
        Signature::new([ArgKind::Ints, ArgKind::Int], Returns::Value)
    }

    fn solve(&self, args: &mut [Arg]) -> Result<Option<Value>> {
        let nums = args[0].as_ints()?;
        let target = args[1].as_int()?;
        let index = match i32::try_from(target) {
            Ok(target) => nums
                .binary_search(&target)
                .ok()
                .and_then(|index| i64::try_from(index).ok())
                .unwrap_or(-1),
            Err(_) => -1,
        };
        Ok(Some(Value::Int(index)))
    }
}
