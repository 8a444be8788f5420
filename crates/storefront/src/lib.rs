//! Corner Shop Storefront library.
//!
//! The storefront's data layer: a catalog kept in sync with a remote
//! product API, and an in-memory shopping basket.
//!
//! # Modules
//!
//! - [`api`] - REST client for the product catalog API
//! - [`catalog`] - Listing, categories, search/sort/pagination, detail product
//! - [`basket`] - Basket items and totals
//! - [`state`] - The root [`AppState`](state::AppState) container
//! - [`routes`] - Path-to-view routing table
//! - [`config`] - Environment configuration
//! - [`error`] - Application error type

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod basket;
pub mod catalog;
pub mod config;
pub mod error;
pub mod routes;
pub mod state;
