pub mod report;
pub mod type_chart;
