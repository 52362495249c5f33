pub mod domain;
pub mod dto;
pub mod factory;
pub mod repository;
pub mod schema;
