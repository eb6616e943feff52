//! Kafka cluster module

mod api;
mod commands;
mod models;

pub use commands::run_kafka_cluster_command;
pub use models::KafkaCluster;
