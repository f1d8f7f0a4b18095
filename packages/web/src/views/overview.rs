use dioxus::prelude::*;
use ui::components::StatCard;
use ui::controllers::{DashboardController, StatsView};
use ui::use_portal;

/// Dashboard counters, reloaded on the configured interval.
#[component]
pub fn Overview() -> Element {
    let ctx = use_portal();
    let mut stats = use_signal(StatsView::default);

    use_effect(move || {
        let controller = DashboardController::new(ctx.clone());
        spawn(async move {
            loop {
                stats.set(controller.load_stats().await);
                let Some(interval) = controller.refresh_interval() else {
                    break;
                };
                ui::timer::sleep(interval).await;
            }
        });
    });

    let view = stats();

    rsx! {
        h2 { class: "page-title", "Overview" }
        div {
            class: "stats-grid",
            StatCard { title: "Total Products", value: view.total_products.clone() }
            StatCard { title: "Total Customers", value: view.total_customers.clone() }
            StatCard { title: "Total Sales", value: view.total_sales.clone() }
            StatCard { title: "Total Revenue", value: view.total_revenue.clone() }
        }
    }
}
