use futures::future::{AbortHandle, Abortable};
use leptos::html::Canvas;
use leptos::*;

use crate::{
    application::{ChartSession, LoadDailySeries},
    domain::{
        chart::{ChartLayout, LineChartProjector},
        logging::LogComponent,
        market_data::{ChartSeries, Symbol},
    },
    global_signals,
    infrastructure::{config::app_config, http::AlphaVantageClient, rendering::LineChartRenderer},
    log_debug, log_error, log_info,
    presentation::{LOADING_TEXT, PanelView, TooltipData},
};

global_signals! {
    session => session: ChartSession,
    in_flight => in_flight: Option<AbortHandle>,
}

/// Issue a request for `symbol`, or for the current query when `None`.
///
/// The previous fetch is aborted; its outcome could not be applied anyway
/// since the session only accepts the newest token.
fn start_fetch(symbol: Option<Symbol>) {
    let Some(pending) = session().try_update(|s| match symbol {
        Some(symbol) => s.begin_submit_for(symbol),
        None => s.begin_submit(),
    }) else {
        return;
    };

    let (handle, registration) = AbortHandle::new_pair();
    if let Some(previous) = in_flight().try_update(|slot| slot.replace(handle)).flatten() {
        previous.abort();
    }

    log_info!(
        LogComponent::Presentation("App"),
        "🔎 Request #{} for {}",
        pending.token.value(),
        pending.symbol
    );

    let use_case = LoadDailySeries::new(AlphaVantageClient::from_config(app_config()));
    spawn_local(async move {
        match Abortable::new(use_case.execute(&pending.symbol), registration).await {
            Ok(outcome) => {
                let applied = session()
                    .try_update(|s| s.complete(pending.token, outcome))
                    .unwrap_or(false);
                if !applied {
                    log_debug!(
                        LogComponent::Presentation("App"),
                        "Request #{} superseded",
                        pending.token.value()
                    );
                }
            }
            Err(_) => {
                log_debug!(
                    LogComponent::Presentation("App"),
                    "Request #{} aborted",
                    pending.token.value()
                );
            }
        }
    });
}

#[component]
pub fn App() -> impl IntoView {
    let session = session();

    // Initial load of the configured default symbol, once.
    create_effect(move |ran: Option<()>| {
        if ran.is_none() {
            start_fetch(Some(app_config().default_symbol.clone()));
        }
    });

    let panel = create_memo(move |_| session.with(|s| PanelView::from_state(s.state())));
    let query = move || session.with(|s| s.query().value().to_string());

    view! {
        <style>
            {r#"
            .stock-app {
                font-family: 'Courier New', monospace;
                background: linear-gradient(135deg, #0f0c29 0%, #302b63 50%, #24243e 100%);
                min-height: 100vh;
                padding: 32px 16px;
                color: #00fff7;
                display: flex;
                flex-direction: column;
                align-items: center;
                gap: 24px;
            }

            .title {
                font-size: 36px;
                font-weight: 800;
                text-align: center;
                color: #ff00aa;
                text-shadow: 0 0 8px #ff00aa, 0 0 16px #8a2be2;
                margin: 0;
            }

            .subtitle {
                color: #00fff7;
                text-shadow: 0 0 6px #00fff7;
                margin: 0;
            }

            .controls {
                width: 100%;
                max-width: 640px;
            }

            .controls label {
                display: block;
                font-weight: 700;
                margin-bottom: 8px;
                color: #39ff14;
                text-shadow: 0 0 6px #39ff14;
            }

            .controls-row {
                display: flex;
                gap: 16px;
            }

            .symbol-input {
                flex: 1;
                padding: 14px;
                border-radius: 6px;
                border: 2px solid #39ff14;
                background: #130a33;
                color: #39ff14;
                font-weight: 700;
                font-size: 18px;
                box-shadow: 0 0 10px #39ff14;
            }

            .fetch-btn {
                padding: 8px 16px;
                border: none;
                border-radius: 6px;
                background: #ff00aa;
                color: white;
                font-weight: 600;
                cursor: pointer;
                box-shadow: 0 0 6px #ff00aa, 0 0 12px #ff00aa;
            }

            .fetch-btn:hover {
                background: #ff33bb;
            }

            .loading {
                font-weight: 700;
                color: #00ffea;
                text-shadow: 0 0 6px #00ffea;
            }

            .error {
                font-weight: 700;
                color: #ff073a;
                text-shadow: 0 0 6px #ff073a;
            }

            .chart-panel {
                width: 100%;
                max-width: 1024px;
                padding: 32px;
                border-radius: 24px;
                background: rgba(0, 0, 0, 0.4);
                border: 2px solid #8a2be2;
                box-shadow: 0 0 16px #8a2be2;
                box-sizing: border-box;
            }

            .chart-panel h3 {
                text-align: center;
                margin-top: 0;
                color: #00fff7;
            }

            .chart-wrapper {
                position: relative;
            }

            .chart-wrapper canvas {
                width: 100%;
                cursor: crosshair;
            }

            .tooltip {
                position: absolute;
                pointer-events: none;
                padding: 8px 12px;
                border-radius: 10px;
                border: 1px solid #00fff7;
                background: rgba(0, 255, 247, 0.1);
                box-shadow: 0 0 10px #00fff7;
                backdrop-filter: blur(5px);
                white-space: nowrap;
            }

            .tooltip-date {
                font-weight: 700;
            }

            .volume {
                margin-top: 24px;
                text-align: center;
                font-weight: 600;
                color: #39ff14;
                text-shadow: 0 0 6px #39ff14;
            }
            "#}
        </style>
        <div class="stock-app">
            <h1 class="title">"Financial Data Visualization Tool"</h1>
            <p class="subtitle">{move || format!("{} - Last 30 Days", query())}</p>

            <div class="controls">
                <label for="symbol">"Stock Symbol"</label>
                <div class="controls-row">
                    <input
                        id="symbol"
                        type="text"
                        class="symbol-input"
                        placeholder="e.g., IBM, AAPL"
                        prop:value=query
                        on:input=move |ev| {
                            let raw = event_target_value(&ev);
                            session.update(|s| s.set_query(&raw));
                        }
                    />
                    <button class="fetch-btn" on:click=move |_| start_fetch(None)>
                        "Fetch Data"
                    </button>
                </div>
            </div>

            {move || match panel.get() {
                PanelView::Nothing => ().into_view(),
                PanelView::Loading => view! { <p class="loading">{LOADING_TEXT}</p> }.into_view(),
                PanelView::Error(message) => view! { <p class="error">{message}</p> }.into_view(),
                PanelView::Chart { series, latest_volume } => {
                    view! { <ChartPanel series=series latest_volume=latest_volume /> }.into_view()
                }
            }}
        </div>
    }
}

/// Line chart of one series, with hover tooltip and latest volume
#[component]
fn ChartPanel(series: ChartSeries, latest_volume: String) -> impl IntoView {
    let canvas_ref = create_node_ref::<Canvas>();
    let geometry = store_value(LineChartProjector::new(ChartLayout::default()).project(&series));
    let series = store_value(series);
    let hovered = create_rw_signal::<Option<usize>>(None);
    let pointer = create_rw_signal((0, 0));

    create_effect(move |_| {
        let active = hovered.get();
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        geometry.with_value(|geometry| {
            if let Err(e) = LineChartRenderer::new().render(&canvas, geometry, active) {
                log_error!(LogComponent::Presentation("ChartPanel"), "❌ Render failed: {:?}", e);
            }
        });
    });

    let on_mouse_move = move |ev: web_sys::MouseEvent| {
        let Some(canvas) = canvas_ref.get_untracked() else {
            return;
        };
        // Canvas is CSS-scaled; hit testing works in canvas pixels.
        let scale = match canvas.client_width() {
            0 => 1.0,
            client => canvas.width() as f64 / client as f64,
        };
        let index = geometry.with_value(|g| g.nearest_index(ev.offset_x() as f64 * scale));
        pointer.set((ev.offset_x(), ev.offset_y()));
        if hovered.get_untracked() != index {
            hovered.set(index);
        }
    };

    let tooltip = move || {
        hovered
            .get()
            .and_then(|index| series.with_value(|s| s.bars().get(index).map(TooltipData::new)))
    };

    view! {
        <div class="chart-panel">
            <h3>"Stock Prices"</h3>
            <div class="chart-wrapper">
                <canvas
                    node_ref=canvas_ref
                    on:mousemove=on_mouse_move
                    on:mouseleave=move |_| hovered.set(None)
                />
                {move || {
                    tooltip()
                        .map(|data| {
                            view! {
                                <div
                                    class="tooltip"
                                    style:left=move || format!("{}px", pointer.get().0 + 14)
                                    style:top=move || format!("{}px", pointer.get().1 + 14)
                                >
                                    <div class="tooltip-date">{data.date}</div>
                                    {data
                                        .lines
                                        .into_iter()
                                        .map(|(line, text)| {
                                            view! { <div style:color=line.color()>{text}</div> }
                                        })
                                        .collect_view()}
                                </div>
                            }
                        })
                }}
            </div>
            <p class="volume">"Latest Volume: " <b>{latest_volume}</b></p>
        </div>
    }
}
