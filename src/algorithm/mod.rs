/// Filter orchestration from decoded source to painted composition
pub mod executor;
/// Candidate rectangle generation through repeated random splitting
pub mod partition;
/// Overlap resolution turning candidates into a flat tiling
pub mod resolve;
