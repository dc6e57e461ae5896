// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod ranking_service;
pub mod relationship_service;


pub use ranking_service::RankingService;
pub use relationship_service::RelationshipService;
