/// Application layer - use cases and data transfer objects
pub mod dto;
pub mod use_cases;
