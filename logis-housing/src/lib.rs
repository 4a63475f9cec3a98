//! Client for the housing occupancy API.
//!
//! Two endpoints are read once at startup: aggregated occupancy counts and the
//! detailed room list. Both are turned into [`Document`]s ready for indexing,
//! statistics first.
//!
//! [`Document`]: logis_core::Document

mod client;
mod config;
mod error;
mod mapper;
mod types;

pub use client::{HousingClient, ROOMS_PATH, STATISTICS_PATH};
pub use config::{HousingClientBuilder, DEFAULT_FETCH_TIMEOUT};
pub use error::HousingError;
pub use mapper::{
    room_document, statistics_document, OccupancyStatistics, AVAILABLE_STATE, MISSING_FIELD,
    NO_OCCUPANT, OCCUPIED_STATE, STATISTICS_DOCUMENT_ID,
};
pub use types::{ApiEnvelope, RoomRecord};
