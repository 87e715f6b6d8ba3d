//! User-facing texts for the category editor.

use crate::client::ClientError;

// TODO: confirm wording with product; this text talks about deleting while
// it is shown when loading a category fails.
pub const LOAD_FALLBACK: &str = "Erro ao excluir categoria";
pub const SUBMIT_FALLBACK: &str = "Erro ao carregar Categoria.";
pub const UPDATE_SUCCESS: &str = "Categoria atualizada com sucesso.";

/// Banner text for a failed load: the server's `error`, or the fallback.
pub fn load_error(err: &ClientError) -> String {
    err.body()
        .and_then(|body| body.error_message())
        .unwrap_or(LOAD_FALLBACK)
        .to_string()
}

/// Banner text for a failed save.
///
/// A list of field errors wins over the single `error` string.
pub fn submit_error(err: &ClientError) -> String {
    let Some(body) = err.body() else {
        return SUBMIT_FALLBACK.to_string();
    };

    if let Some(errors) = &body.errors {
        let joined = errors
            .iter()
            .map(|field| field.message.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        return format!("Dados inválidos: {joined}. Tente novamente.");
    }

    body.error_message().unwrap_or(SUBMIT_FALLBACK).to_string()
}
