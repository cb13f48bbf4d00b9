//! Module for core business logic services.
//!
//! Both services here are pure functions of rows already fetched by the
//! database layer: aggregating analytics events into chart series and
//! extracting filter options from application rows. Neither touches the
//! database or holds state.

pub mod data_aggregator;
pub mod filter_options;
