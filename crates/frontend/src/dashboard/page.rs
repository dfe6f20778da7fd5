//! Landing page: shortcuts plus the monthly dispatch chart.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use super::chart::bar_heights;
use crate::domain::dispatch::api as dispatch_api;
use crate::shared::api::use_api;
use crate::shared::date_utils::{current_year_month, month_name};
use crate::shared::icons::icon;
use crate::system::auth::context::use_session;

const CHART_HEIGHT: f64 = 120.0;
const BAR_WIDTH: f64 = 16.0;
const BAR_GAP: f64 = 4.0;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session();
    let client = use_api();
    let monthly = RwSignal::new(Vec::<i64>::new());

    Effect::new(move |_| {
        spawn_local(async move {
            match dispatch_api::monthly(&client).await {
                Ok(counts) => monthly.set(counts),
                Err(error) => log::error!("monthly dispatches: {}", error),
            }
        });
    });

    let (_, month) = current_year_month();

    let shortcut = |href: &'static str, icon_name: &'static str, label: &'static str| {
        view! {
            <A href=href attr:class="card dashboard__shortcut">
                {icon(icon_name)}
                <span>{label}</span>
            </A>
        }
    };

    view! {
        <section class="page dashboard">
            <h1 class="page__title">
                {move || {
                    match session.user_name() {
                        Some(name) => format!("Hola, {}", name),
                        None => "Hola".to_string(),
                    }
                }}
            </h1>

            <div class="dashboard__shortcuts">
                {shortcut("/despachos/nuevo", "dispatches", "Nuevo despacho")}
                {shortcut("/notas-credito/nueva", "credit-notes", "Nueva nota de crédito")}
                {shortcut("/consumos/nuevo", "consumptions", "Registrar consumo")}
                {shortcut("/producciones/nueva", "productions", "Registrar producción")}
                {shortcut("/recepciones/nueva", "receipts", "Recibir pedido")}
            </div>

            <div class="card dashboard__chart">
                <h2>{format!("Despachos de {}", month_name(month))}</h2>
                {move || {
                    let counts = monthly.get();
                    if counts.is_empty() {
                        return view! { <p>"Sin datos este mes"</p> }.into_any();
                    }
                    let heights = bar_heights(&counts, CHART_HEIGHT);
                    let width = counts.len() as f64 * (BAR_WIDTH + BAR_GAP);
                    view! {
                        <svg
                            width=width.to_string()
                            height=(CHART_HEIGHT + 20.0).to_string()
                            role="img"
                            aria-label="Despachos por día"
                        >
                            {heights
                                .into_iter()
                                .enumerate()
                                .map(|(day, height)| {
                                    let x = day as f64 * (BAR_WIDTH + BAR_GAP);
                                    let y = CHART_HEIGHT - height;
                                    view! {
                                        <g>
                                            <rect
                                                x=x.to_string()
                                                y=y.to_string()
                                                width=BAR_WIDTH.to_string()
                                                height=height.to_string()
                                                fill="#4a7dbd"
                                            >
                                                <title>{format!("Día {}: {}", day + 1, counts[day])}</title>
                                            </rect>
                                            <text
                                                x=(x + BAR_WIDTH / 2.0).to_string()
                                                y=(CHART_HEIGHT + 14.0).to_string()
                                                text-anchor="middle"
                                                font-size="9"
                                            >
                                                {(day + 1).to_string()}
                                            </text>
                                        </g>
                                    }
                                })
                                .collect_view()}
                        </svg>
                    }
                    .into_any()
                }}
            </div>
        </section>
    }
}
