/// Domain layer - dependency graph resolution
///
/// Pure domain objects (`domain`), decision rules (`policies`) and the
/// services that build a graph from them (`services`).
pub mod domain;
pub mod policies;
pub mod services;
