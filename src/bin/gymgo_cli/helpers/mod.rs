// ABOUTME: Re-exports helper modules for the gymgo CLI
// ABOUTME: Text rendering of view models

pub mod display;
