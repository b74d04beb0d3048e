mod augmented;
pub use augmented::*;
