/// Ports - the traits the application core talks through
///
/// `inbound` holds the use case interface driven by the CLI; `outbound`
/// holds the interfaces the core drives (metadata, cache, renderer, console).
pub mod inbound;
pub mod outbound;
