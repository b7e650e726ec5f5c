pub mod interval;
pub mod simple_interval;
pub mod spatial;

pub use interval::{Interval, IntervalInt};
pub use simple_interval::SimpleInterval;
pub use spatial::{Interval2, Interval3, SimpleInterval2, SimpleInterval3};
