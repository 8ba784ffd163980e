// Feedback synthesis: per-answer scoring, notes and the aggregate report.

pub mod handlers;
pub mod report;
pub mod scoring;
