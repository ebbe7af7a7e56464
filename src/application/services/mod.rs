pub mod daily_aggregator;
pub mod toll_calculator;

pub use daily_aggregator::DailyAggregator;
pub use toll_calculator::TollCalculator;
