//! Core domain models for the field-station inventory.
//!
//! This module defines the three value objects the crate is built around: a
//! [`vehicle::Vehicle`], a [`plant::Plant`] and an
//! [`optics::OpticalInstrument`]. The types are independent of one another;
//! each validates its attributes at construction and is immutable afterwards.

pub mod error;
pub mod optics;
pub mod plant;
pub mod vehicle;
