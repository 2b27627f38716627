// Chunk: docs/chunks/treesitter_lexer - Lexer construction errors

use thiserror::Error;

/// Why a lexer could not be built.
#[derive(Debug, Error)]
pub enum SyntaxError {
    #[error("grammar is incompatible with the linked tree-sitter: {0}")]
    Language(#[from] tree_sitter::LanguageError),

    #[error("invalid highlight query: {0}")]
    Query(#[from] tree_sitter::QueryError),

    #[error("parser produced no tree")]
    Parse,
}
