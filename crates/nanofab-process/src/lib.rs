pub mod engine;
pub mod passes;
pub mod step;

#[cfg(test)]
mod test_harness;

pub use engine::{ProcessEngine, SkipReason, StepOutcome, StepStatus};
pub use passes::deposit::DepositReport;
pub use step::ProcessStep;
