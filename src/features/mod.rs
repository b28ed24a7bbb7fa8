pub mod locations;
pub mod pages;
