/// CSV export of the revenue curve and cash-flow projection.
pub mod export;
