pub mod collection_cache;
pub mod dashboard_aggregator;
pub mod filter_engine;
pub mod recommendation_orchestrator;
pub mod request_sequence;
pub mod route_finder;


pub use collection_cache::CollectionCache;
pub use dashboard_aggregator::{DashboardAggregator, DashboardStats};
pub use filter_engine::FilterEngine;
pub use recommendation_orchestrator::{CandidateView, ConfiguratorContext, RecommendationOrchestrator};
pub use request_sequence::{Outcome, RequestSequence};
pub use route_finder::RouteFinder;
