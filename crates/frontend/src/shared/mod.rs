pub mod browser;
pub mod fragments;
