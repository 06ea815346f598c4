pub mod interest_area;

pub use interest_area::InterestArea;
