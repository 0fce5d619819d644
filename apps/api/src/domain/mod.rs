// Domain layer module exports
// Following Hexagonal Architecture and DDD principles
// Domain is independent of HTTP concerns

pub mod repositories;
pub mod restaurant;
