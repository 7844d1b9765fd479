//! Categories page rendering - Full page endpoint

use crate::{active_badge, or_default, tipo_badge, AppState};
use finweb_utils::escape_html;

pub async fn page_categories(
    state: axum::extract::State<AppState>,
) -> axum::response::Html<String> {
    let categories = or_default(state.client.categories().await, "/categorias/");

    let rows: String = if categories.is_empty() {
        "<tr><td colspan='5' class='text-center text-muted py-4'>Sin categorías registradas</td></tr>"
            .to_string()
    } else {
        categories
            .iter()
            .map(|category| {
                format!(
                    "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                    escape_html(category.nombre.as_deref().unwrap_or("-")),
                    tipo_badge(category.tipo.as_deref().unwrap_or("-")),
                    escape_html(category.naturaleza.as_deref().unwrap_or("-")),
                    escape_html(category.descripcion.as_deref().unwrap_or("-")),
                    active_badge(category.activo.unwrap_or(false)),
                )
            })
            .collect()
    };

    let inner_content = format!(
        r#"<div class='d-flex justify-content-between align-items-center mb-4'>
            <h2 class='fw-bold mb-0'>Categorías</h2>
            <span class='text-muted'>{} registros</span>
        </div>
        <div class='card'>
            <div class='table-responsive'>
                <table class='table table-hover align-middle mb-0'>
                    <thead><tr><th>Nombre</th><th>Tipo</th><th>Naturaleza</th><th>Descripción</th><th>Estado</th></tr></thead>
                    <tbody>{}</tbody>
                </table>
            </div>
        </div>"#,
        categories.len(),
        rows,
    );

    axum::response::Html(crate::page_response(
        "Categorías - FinanzApp",
        "/categorias",
        &inner_content,
    ))
}
