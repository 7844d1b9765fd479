//! Dashboard page rendering - Full page endpoint

use crate::{or_default, AppState};
use finweb_utils::escape_html;

/// Dashboard page
///
/// Issues the three downstream fetches independently; each one that fails
/// degrades to its empty default without affecting the others.
pub async fn page_dashboard(
    state: axum::extract::State<AppState>,
) -> axum::response::Html<String> {
    let (stats, movements, charts) = tokio::join!(
        state.client.dashboard_stats(),
        state.client.recent_movements(),
        state.client.dashboard_charts(),
    );

    let stats = or_default(stats, "/dashboard/stats/");
    let movements = or_default(movements, "/dashboard/movimientos/");
    let charts = or_default(charts, "/dashboard/graficos/");

    let currency = &state.config.currency;

    let monthly_rows: String = if charts.ingresos_egresos_meses.is_empty() {
        "<tr><td colspan='3' class='text-center text-muted py-4'>Sin datos disponibles</td></tr>"
            .to_string()
    } else {
        charts
            .ingresos_egresos_meses
            .iter()
            .map(|flow| {
                format!(
                    "<tr><td>{}</td><td class='text-end text-success'>{}</td><td class='text-end text-danger'>{}</td></tr>",
                    escape_html(flow.mes.as_deref().unwrap_or("-")),
                    currency.format(flow.ingresos.value()),
                    currency.format(flow.egresos.value()),
                )
            })
            .collect()
    };

    let max_spend = charts
        .gastos_por_categoria
        .iter()
        .map(|spend| spend.total.value())
        .fold(0.0_f64, f64::max);

    let category_bars: String = if charts.gastos_por_categoria.is_empty() {
        "<p class='text-center text-muted py-4 mb-0'>Sin datos disponibles</p>".to_string()
    } else {
        charts
            .gastos_por_categoria
            .iter()
            .map(|spend| {
                let total = spend.total.value();
                let width = if max_spend > 0.0 {
                    (total / max_spend * 100.0).round() as u32
                } else {
                    0
                };
                format!(
                    "<div class='mb-3'><div class='d-flex justify-content-between small mb-1'><span>{}</span><span>{}</span></div><div class='progress' style='height: 8px;'><div class='progress-bar bg-danger' style='width: {}%'></div></div></div>",
                    escape_html(spend.categoria_nombre.as_deref().unwrap_or("Sin categoría")),
                    currency.format(total),
                    width,
                )
            })
            .collect()
    };

    let movement_rows =
        crate::routes::movements::page::render_movement_rows(&movements, currency);

    let inner_content = format!(
        r#"<div class='mb-4'><h2 class='fw-bold'>Dashboard</h2></div>
        <div class='row g-3 mb-4'>
            <div class='col-md-3'><div class='card border-success h-100' data-bs-toggle='tooltip' title='Deudas pendientes a tu favor'><div class='card-body'><p class='text-success small mb-1'>Total por Cobrar</p><p class='fs-4 fw-bold mb-0' id='total_por_cobrar'>{}</p></div></div></div>
            <div class='col-md-3'><div class='card border-danger h-100' data-bs-toggle='tooltip' title='Deudas pendientes por pagar'><div class='card-body'><p class='text-danger small mb-1'>Total por Pagar</p><p class='fs-4 fw-bold mb-0' id='total_por_pagar'>{}</p></div></div></div>
            <div class='col-md-3'><div class='card border-primary h-100' data-bs-toggle='tooltip' title='Ingresos del mes en curso'><div class='card-body'><p class='text-primary small mb-1'>Ingresos del Mes</p><p class='fs-4 fw-bold mb-0' id='ingresos_mes'>{}</p></div></div></div>
            <div class='col-md-3'><div class='card border-warning h-100' data-bs-toggle='tooltip' title='Egresos del mes en curso'><div class='card-body'><p class='text-warning small mb-1'>Egresos del Mes</p><p class='fs-4 fw-bold mb-0' id='egresos_mes'>{}</p></div></div></div>
        </div>
        <div class='row g-3 mb-4'>
            <div class='col-md-3'><div class='card text-center h-100'><div class='card-body'><p class='text-muted small mb-1'>Deudores activos</p><p class='fs-5 fw-bold mb-0'>{}</p></div></div></div>
            <div class='col-md-3'><div class='card text-center h-100'><div class='card-body'><p class='text-muted small mb-1'>Acreedores activos</p><p class='fs-5 fw-bold mb-0'>{}</p></div></div></div>
            <div class='col-md-3'><div class='card text-center h-100'><div class='card-body'><p class='text-muted small mb-1'>Deudas vencidas</p><p class='fs-5 fw-bold text-danger mb-0'>{}</p></div></div></div>
            <div class='col-md-3'><div class='card text-center h-100'><div class='card-body'><p class='text-muted small mb-1'>Mis deudas vencidas</p><p class='fs-5 fw-bold text-danger mb-0'>{}</p></div></div></div>
        </div>
        <div class='card mb-4'>
            <div class='card-header bg-white'><h5 class='mb-0'>Movimientos Recientes</h5></div>
            <div class='table-responsive'>
                <table class='table table-hover align-middle mb-0'>
                    <thead><tr><th>Fecha</th><th>Tipo</th><th>Descripción</th><th>Categoría</th><th class='text-end'>Monto</th></tr></thead>
                    <tbody>{}</tbody>
                </table>
            </div>
        </div>
        <div class='row g-3'>
            <div class='col-lg-7'>
                <div class='card h-100'>
                    <div class='card-header bg-white'><h5 class='mb-0'>Ingresos vs Egresos (últimos meses)</h5></div>
                    <div class='table-responsive'>
                        <table class='table align-middle mb-0'>
                            <thead><tr><th>Mes</th><th class='text-end'>Ingresos</th><th class='text-end'>Egresos</th></tr></thead>
                            <tbody>{}</tbody>
                        </table>
                    </div>
                </div>
            </div>
            <div class='col-lg-5'>
                <div class='card h-100'>
                    <div class='card-header bg-white'><h5 class='mb-0'>Gastos por Categoría</h5></div>
                    <div class='card-body'>{}</div>
                </div>
            </div>
        </div>"#,
        currency.format(stats.total_por_cobrar.unwrap_or(0.0)),
        currency.format(stats.total_por_pagar.unwrap_or(0.0)),
        currency.format(stats.ingresos_mes.unwrap_or(0.0)),
        currency.format(stats.egresos_mes.unwrap_or(0.0)),
        stats.total_deudores.unwrap_or(0),
        stats.total_acreedores.unwrap_or(0),
        stats.deudas_vencidas.unwrap_or(0),
        stats.mis_deudas_vencidas.unwrap_or(0),
        movement_rows,
        monthly_rows,
        category_bars,
    );

    axum::response::Html(crate::page_response("Dashboard - FinanzApp", "/", &inner_content))
}
