// Domain layer module exports
// Domain is independent of infrastructure concerns

pub mod member;
pub mod repositories;
pub mod search;
pub mod team;
