//! Speaker Tracker MCP Server - a Model Context Protocol server for the SAPA
//! speaker database.
//!
//! The roster lives in a Notion database; this crate translates typed MCP tool
//! calls into Notion page operations and renders the results as text.
//!
//! # Architecture
//!
//! - **domain**: Closed-set selector enums and the speaker ID value object
//! - **models**: Speaker record shapes, search criteria, connection status
//! - **mapper**: Speaker <-> Notion property bag translation and filters
//! - **client**: HTTP client for the Notion API and its async wrapper
//! - **repositories**: Speaker storage abstraction over the client
//! - **tools**: Tool implementations and text formatting
//! - **server**: MCP protocol server
//! - **config**, **error**, **metrics**: Ambient support

pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod mapper;
pub mod metrics;
pub mod models;
pub mod repositories;
pub mod server;
pub mod tools;

pub use client::NotionClient;
pub use config::Config;
pub use domain::{ContactStatus, FieldSpecialty, Priority, SpeakerId};
pub use error::{ConfigError, ErrorKind, NotionApiError, ToolError};
pub use metrics::{HttpTimer, Metrics, MetricsSummary};
pub use models::{ConnectionStatus, NewSpeaker, Speaker, SpeakerFilter, SpeakerUpdate};
pub use server::SpeakerTrackerServer;
pub use tools::SpeakerTools;
