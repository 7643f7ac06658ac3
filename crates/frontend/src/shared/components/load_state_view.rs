use leptos::prelude::*;
use thaw::*;

use crate::shared::loader::{LoadState, Loader};

/// Spinner while `loader` is pending, an inline error when it failed,
/// `render` once data is there. A failure stays inside this region.
#[component]
pub fn LoadStateView<T, F, V>(loader: Loader<T>, render: F) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
    F: Fn(T) -> V + Send + Sync + 'static,
    V: IntoView + 'static,
{
    move || match loader.state() {
        LoadState::Idle | LoadState::Loading => view! {
            <Flex gap=FlexGap::Small style="align-items: center; padding: var(--spacing-lg);">
                <Spinner size=SpinnerSize::Small />
                <span>"Loading..."</span>
            </Flex>
        }
        .into_any(),
        LoadState::Failed(message) => view! {
            <div class="panel-error">
                <MessageBar intent=MessageBarIntent::Error>
                    <span>{message}</span>
                </MessageBar>
            </div>
        }
        .into_any(),
        LoadState::Loaded(data) => render(data).into_any(),
    }
}
