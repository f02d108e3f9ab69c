pub mod auto;

pub use auto::AutoMode;
