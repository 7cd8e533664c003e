pub mod logging;

// Lexical coverage: tokenization, lemmatization and target matching
pub mod coverage;
