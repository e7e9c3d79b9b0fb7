//! Integration scenarios

mod feed_flow;
mod monitoring_flow;
mod registration_flow;
mod social_flow;
mod throttling_flow;
