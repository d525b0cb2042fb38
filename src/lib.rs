//! tconv - Celsius / Fahrenheit / Kelvin converter
//!
//! Module layout:
//! - kernel: conversion engine plus the headless form model (state, action, store)
//! - core: frontend-neutral input events and commands
//! - services: key bindings and user settings
//! - cli: one-shot command line conversion
//! - app, tui: terminal frontend (feature `tui`)

pub mod cli;
pub mod core;
pub mod kernel;
pub mod services;

#[cfg(feature = "tui")]
pub mod app;
#[cfg(feature = "tui")]
pub mod tui;
