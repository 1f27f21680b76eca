//! Overview dashboard.
//!
//! Renders the shared order statistics as stat cards. Consumes only the
//! bridge snapshot: the last persisted counts show immediately on mount,
//! live publishes from the orders view stream in afterwards.

use crate::shared::components::StatCard;
use crate::shared::stats_bridge::OrderStatsBridge;
use contracts::shared::indicators::{IndicatorStatus, ValueFormat};
use contracts::shared::order_stats::SpendingTrend;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn OverviewDashboard() -> impl IntoView {
    let bridge = use_context::<OrderStatsBridge>().expect("OrderStatsBridge not found");
    let stats = bridge.snapshot();

    let spending_change = Signal::derive(move || {
        let s = stats.get();
        if s.spending_percentage == 0.0 {
            return None;
        }
        let signed = match s.spending_trend {
            SpendingTrend::Up => s.spending_percentage,
            SpendingTrend::Down => -s.spending_percentage,
        };
        Some(signed)
    });

    let spending_status = Signal::derive(move || match stats.get().spending_trend {
        SpendingTrend::Up => IndicatorStatus::Good,
        SpendingTrend::Down => IndicatorStatus::Neutral,
    });

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{"Overview"}</h1>
                </div>
            </div>

            <div class="stat-card-grid">
                <StatCard
                    label="Orders".to_string()
                    icon_name="file-text".to_string()
                    value=Signal::derive(move || Some(stats.get().total as f64))
                    format=ValueFormat::Integer
                    status=Signal::derive(|| IndicatorStatus::Neutral)
                    change_percent=Signal::derive(|| None::<f64>)
                />
                <StatCard
                    label="Active".to_string()
                    icon_name="activity".to_string()
                    value=Signal::derive(move || Some(stats.get().active as f64))
                    format=ValueFormat::Integer
                    status=Signal::derive(move || {
                        if stats.get().active > 0 {
                            IndicatorStatus::Warning
                        } else {
                            IndicatorStatus::Neutral
                        }
                    })
                    change_percent=Signal::derive(|| None::<f64>)
                    subtitle=Signal::derive(|| Some("awaiting delivery".to_string()))
                />
                <StatCard
                    label="Completed".to_string()
                    icon_name="check".to_string()
                    value=Signal::derive(move || Some(stats.get().completed as f64))
                    format=ValueFormat::Integer
                    status=Signal::derive(|| IndicatorStatus::Good)
                    change_percent=Signal::derive(|| None::<f64>)
                />
                <StatCard
                    label="Total spending".to_string()
                    icon_name="cash".to_string()
                    value=Signal::derive(move || Some(stats.get().total_spending))
                    format=ValueFormat::Money { currency: "DZD".to_string() }
                    status=spending_status
                    change_percent=spending_change
                    subtitle=Signal::derive(|| Some("last 30 days vs previous".to_string()))
                />
            </div>
        </div>
    }
}
