//! Service module for Modforge
//!
//! This module contains the mod service abstraction (the three external
//! AI endpoints: generation, chat update, porting) and the HTTP
//! implementation that talks to them.

pub mod base;
pub mod http;

pub use base::{
    ChatUpdateRequest, ChatUpdateResponse, GenerateRequest, GenerateResponse, ModService,
    PortRequest, PortResponse,
};
pub use http::HttpModService;
