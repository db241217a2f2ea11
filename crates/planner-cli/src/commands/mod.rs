pub mod check;
pub mod next;
pub mod preview;
