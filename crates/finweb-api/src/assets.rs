//! Client runtime script
//!
//! Served as a single embedded asset. The refresh interval is substituted
//! from configuration when the script is requested.

use crate::AppState;
use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;

/// Client runtime: tooltip setup, currency formatting, periodic stats
/// refresh. Nothing is attached to the global namespace; the refresh loop
/// hands back a cancel function and is stopped on `pagehide`.
const APP_JS: &str = r##"// FinanzApp client runtime
(function () {
    'use strict';

    var REFRESH_INTERVAL_MS = __REFRESH_INTERVAL_MS__;
    var STAT_IDS = ['total_por_cobrar', 'total_por_pagar', 'ingresos_mes', 'egresos_mes'];

    var currency = new Intl.NumberFormat('es-CO', {
        style: 'currency',
        currency: 'COP'
    });

    function formatCurrency(amount) {
        return currency.format(amount || 0);
    }

    async function refreshStats() {
        try {
            var response = await fetch('/api/stats');
            var stats = await response.json();

            STAT_IDS.forEach(function (id) {
                var element = document.getElementById(id);
                if (element) {
                    element.textContent = formatCurrency(stats[id] || 0);
                }
            });
        } catch (error) {
            console.error('Error actualizando estadísticas:', error);
        }
    }

    function startStatsRefresh() {
        var timer = setInterval(refreshStats, REFRESH_INTERVAL_MS);
        return function stop() {
            clearInterval(timer);
        };
    }

    document.addEventListener('DOMContentLoaded', function () {
        var tooltipTriggers = document.querySelectorAll('[data-bs-toggle="tooltip"]');
        tooltipTriggers.forEach(function (el) {
            new bootstrap.Tooltip(el);
        });

        var stopStatsRefresh = startStatsRefresh();
        window.addEventListener('pagehide', stopStatsRefresh);
    });
})();
"##;

/// Serve the client runtime with the configured refresh interval.
pub async fn app_js(state: axum::extract::State<AppState>) -> impl IntoResponse {
    let interval_ms = state.config.refresh.interval_secs.saturating_mul(1000);
    let body = APP_JS.replace("__REFRESH_INTERVAL_MS__", &interval_ms.to_string());

    (
        [(CONTENT_TYPE, "application/javascript; charset=utf-8")],
        body,
    )
}
