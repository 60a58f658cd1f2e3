pub mod calculation;
pub mod offer;
pub mod policy;
pub mod product;

pub use calculation::*;
pub use offer::*;
pub use policy::*;
pub use product::*;
