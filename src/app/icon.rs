use leptos::prelude::*;

use crate::icons::{Icon, Shape, VIEW_BOX};

/// Inline outline icon, drawn in the current text color.
#[component]
pub fn SvgIcon(icon: Icon, #[prop(optional)] size: Option<u32>) -> impl IntoView {
    let size = size.unwrap_or(20).to_string();
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox=VIEW_BOX
            width=size.clone()
            height=size
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {icon
                .shapes()
                .iter()
                .map(|shape| match *shape {
                    Shape::Path(d) => view! { <path d=d /> }.into_any(),
                    Shape::Circle { cx, cy, r } => view! { <circle cx=cx cy=cy r=r /> }.into_any(),
                    Shape::Rect { x, y, width, height, rx } => {
                        view! { <rect x=x y=y width=width height=height rx=rx /> }.into_any()
                    }
                })
                .collect_view()}
        </svg>
    }
}
