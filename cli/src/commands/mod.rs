mod classify;
mod compare;

pub use classify::ClassifyCmd;
pub use compare::CompareCmd;
