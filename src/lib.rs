//! Talent Scout - Conversational Candidate Intake
//!
//! This crate walks a job candidate through a fixed sequence of questions
//! (name, contact details, experience, position, location, tech stack),
//! validates each answer, and finishes by generating technical interview
//! questions for every declared technology through a language model.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
