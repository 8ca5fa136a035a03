//! Hello Turf Website Library
//!
//! This library provides the core functionality for the Hello Turf marketing
//! site: the quote submission pipeline (validation, request enrichment, email
//! notifications), the server-rendered pages, and the supporting HTTP layer.
//!
//! # Modules
//!
//! - `config`: Configuration management.
//! - `content`: Static service catalog and gallery content.
//! - `enrichment`: Request context enrichment (IP, user agent, geolocation).
//! - `errors`: Error handling types.
//! - `geo`: IP geolocation (local database with remote fallback).
//! - `handlers`: HTTP request handlers and shared state.
//! - `mailer`: Outbound mail API client.
//! - `models`: Core data models.
//! - `notifications`: Quote notification rendering and dispatch.
//! - `pages`: Server-rendered page handlers.
//! - `pipeline`: Quote submission orchestration.
//! - `sitemap`: XML sitemap generation.
//! - `user_agent`: Best-effort user-agent parsing.
//! - `validation`: Quote form validation rules.

pub mod config;
pub mod content;
pub mod enrichment;
pub mod errors;
pub mod geo;
pub mod handlers;
pub mod mailer;
pub mod models;
pub mod notifications;
pub mod pages;
pub mod pipeline;
pub mod sitemap;
pub mod user_agent;
pub mod validation;
