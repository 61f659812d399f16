//! World Clock Display — interactive client for the world clock server.
//!
//! A [`controller::ClockController`] takes a country name, asks the server
//! for its current time, then keeps a clock running locally from the
//! resolved timezone. Session state is an explicit [`session::SessionState`]
//! value, and the one-second refresh is a [`ticker::ClockTicker`] that stops
//! when dropped.

pub mod client;
pub mod controller;
pub mod render;
pub mod session;
pub mod ticker;

#[cfg(test)]
mod testing;
