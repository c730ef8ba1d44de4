//! Telegram bot for TITSA bus stop arrival times.
//!
//! A webhook server that answers: "when does the next guagua leave
//! from this stop?" Users send a message containing "parada <number>"
//! and get back a board of upcoming buses with waiting times.

pub mod answer;
pub mod domain;
pub mod encoding;
pub mod parser;
pub mod telegram;
pub mod titsa;
