//! Dashboard "Orderan Saya" tab: order history with a status filter.

use leptos::prelude::*;

use crate::components::custom_select::CustomSelect;
use crate::state::catalog::format_rupiah;
use crate::state::orders::{ALL_STATUSES, Order, OrderStatus, OrdersState, filter_orders, status_filter_options};
use crate::state::select::OptionValue;

fn status_badge_class(status: OrderStatus) -> String {
    format!("order-status order-status--{}", status.slug())
}

#[component]
pub fn OrdersTab() -> impl IntoView {
    let orders = expect_context::<RwSignal<OrdersState>>();
    let filter = RwSignal::new(Some(OptionValue::from(ALL_STATUSES)));
    let on_filter = Callback::new(move |value: OptionValue| filter.set(Some(value)));

    let visible = move || {
        let state = orders.get();
        let wanted = filter.get().unwrap_or_else(|| OptionValue::from(ALL_STATUSES));
        filter_orders(&state.items, &wanted)
            .into_iter()
            .cloned()
            .collect::<Vec<_>>()
    };

    view! {
        <section class="orders-tab">
            <header class="orders-tab__header">
                <h3 class="orders-tab__title">"Orderan Saya"</h3>
                <CustomSelect
                    options=status_filter_options()
                    selected=filter
                    on_change=on_filter
                    button_class="orders-tab__filter"
                    absolute_position=true
                />
            </header>

            {move || {
                let list = visible();
                if list.is_empty() {
                    view! { <p class="orders-tab__empty">"Belum ada pesanan."</p> }.into_any()
                } else {
                    view! {
                        <ul class="orders-tab__list">
                            {list
                                .into_iter()
                                .map(|order| view! { <OrderRow order=order/> })
                                .collect::<Vec<_>>()}
                        </ul>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}

#[component]
fn OrderRow(order: Order) -> impl IntoView {
    let total = format_rupiah(order.total());
    let item_count: u32 = order.items.iter().map(|i| i.quantity).sum();

    view! {
        <li class="order-row">
            <div class="order-row__meta">
                <span class="order-row__id">{order.id}</span>
                <span class="order-row__date">{order.placed_on}</span>
            </div>
            <span class=status_badge_class(order.status)>{order.status.label()}</span>
            <span class="order-row__items">{format!("{item_count} item")}</span>
            <span class="order-row__total">{total}</span>
        </li>
    }
}
