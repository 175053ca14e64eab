pub mod catalog;
pub mod error;
pub mod graph;
pub mod loaders;

pub use catalog::TermCatalog;
pub use error::{OntologyError, Result};
pub use graph::{InMemoryOntology, OntologyBuilder, OntologyGraph, PHENOTYPIC_ABNORMALITY};
pub use loaders::{load_custom_dictionary, load_options};
