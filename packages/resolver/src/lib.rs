pub mod assemble;
pub mod resolver;
pub mod selector;
pub mod walker;

#[cfg(test)]
mod tests_resolution;

pub use assemble::{assemble, ResolvedAttribute};
pub use resolver::AttributeResolver;
pub use selector::{select_winner, Selection};
pub use walker::{resolve_candidates, AttributeCandidates, ResolveError, ResolveResult};
