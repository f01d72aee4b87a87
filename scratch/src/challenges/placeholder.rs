use harness::{Challenge, Solver};

/// Generated scaffolding whose body never became a callable `solution`.
pub struct Placeholder;

impl Challenge for Placeholder {
    fn solution(&self) -> Option<&dyn Solver> {
        None
    }
}
