pub mod buckets;
pub mod dimension;
pub mod record;
pub mod selection;

pub use buckets::*;
pub use dimension::*;
pub use record::*;
pub use selection::*;
