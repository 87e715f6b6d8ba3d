#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Categories,
    /// `categoria_id` is the raw route parameter, parsed by the editor.
    EditCategory { categoria_id: Option<String> },
}

impl Route {
    #[cfg(test)]
    pub fn edit(categoria_id: impl Into<String>) -> Self {
        Self::EditCategory {
            categoria_id: Some(categoria_id.into()),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Self::Categories => "/categorias".to_string(),
            Self::EditCategory {
                categoria_id: Some(id),
            } => format!("/categorias/{id}/editar"),
            Self::EditCategory { categoria_id: None } => "/categorias/editar".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths() {
        assert_eq!(Route::Categories.path(), "/categorias");
        assert_eq!(Route::edit("5").path(), "/categorias/5/editar");
        assert_eq!(
            Route::EditCategory { categoria_id: None }.path(),
            "/categorias/editar"
        );
    }
}
