//! Master-detail panel: selectable list on the left, nested content of the
//! selected item on the right.

use contracts::domain::common::{Identifier, ResourceItem};
use leptos::prelude::*;

use crate::shared::navigation::route::join_segment;
use crate::shared::navigation::{highlighted_row, is_router_navigation, DetailKey, SelectionState};

/// Renders `items` as links to `<base_href>/<id>` and the routed item's
/// content via `detail`.
///
/// `selected` must be derived from the URL. The nested region is rebuilt
/// from scratch whenever it changes, so nothing of a previously selected
/// item survives into the next one.
#[component]
pub fn ResourceListPanel<F>(
    /// Caption above the list, e.g. "study groups"
    #[prop(into)]
    label: String,
    items: Vec<ResourceItem>,
    /// Identifier selected by the current route
    #[prop(into)]
    selected: Signal<Option<Identifier>>,
    /// Path of this list; rows link to `<base_href>/<id>`
    #[prop(into)]
    base_href: String,
    /// Content for the selected identifier
    detail: F,
) -> impl IntoView
where
    F: Fn(Identifier) -> AnyView + Clone + Send + Sync + 'static,
{
    let selection = RwSignal::new(SelectionState::from_route(selected.get_untracked()));

    // Every navigation settles the local highlight back onto the route.
    Effect::new(move |_| {
        let routed = selected.get();
        selection.update(|s| s.settle(routed));
    });

    // Пересоздаётся только при смене id в маршруте
    let detail_key = Memo::new(move |_| selected.with(|id| DetailKey::of(id.as_ref())));

    let items = StoredValue::new(items);
    let highlighted = Memo::new(move |_| {
        selection.with(|s| items.with_value(|items| highlighted_row(items, s.highlighted())))
    });

    let rows = items.with_value(|items| {
        items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let href = join_segment(&base_href, &item.id);
                let id = item.id.clone();
                view! {
                    <a
                        href=href
                        class="resource-list__row"
                        class:resource-list__row--selected=move || highlighted.get() == Some(index)
                        on:click=move |ev: leptos::ev::MouseEvent| {
                            if is_router_navigation(
                                ev.button(),
                                ev.ctrl_key(),
                                ev.meta_key(),
                                ev.shift_key(),
                                ev.alt_key(),
                            ) {
                                selection.update(|s| s.click(id.clone()));
                            }
                        }
                    >
                        {item.name.clone()}
                    </a>
                }
            })
            .collect_view()
    });
    let is_empty = items.with_value(|items| items.is_empty());

    view! {
        <div class="resource-list">
            <div class="resource-list__master">
                <div class="resource-list__label">{label}</div>
                <nav class="resource-list__rows">
                    {rows}
                    <Show when=move || is_empty>
                        <div class="resource-list__empty">"no entries"</div>
                    </Show>
                </nav>
            </div>
            <div class="resource-list__detail">
                {move || detail_key.get().into_id().map(|id| detail(id))}
            </div>
        </div>
    }
}
