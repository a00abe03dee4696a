// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests Module
//!
//! - `normalization` - address extraction, MAC casing, interface eligibility
//! - `derivation` - script mapping selection and stable host ordering

mod derivation;
mod normalization;
